//! Startup orchestration.
//!
//! # Responsibilities
//! - Load settings from the environment
//! - Load the contract interface from its build artifact
//! - Construct the chain client and pick the sending account
//! - Bind the token contract
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and no transfer is attempted
//! - Steps run in order; nothing touches the network before settings and
//!   the artifact are known good

use std::path::Path;

use thiserror::Error;

use crate::blockchain::client::ChainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::loader::{load_config_with, ConfigError};
use crate::config::schema::Settings;
use crate::contract::{load_contract_interface, ArtifactError, InterfaceError};
use crate::distribution::executor::Distributor;
use crate::distribution::instruction::TransferPlan;

/// Fatal errors; any of these aborts the run before the first transfer.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("chain client error: {0}")]
    Client(#[from] BlockchainError),

    #[error("no accounts found")]
    NoAccounts,

    #[error("failed to bind token contract: {0}")]
    Interface(#[from] InterfaceError),
}

/// Bring up everything a distribution needs.
///
/// `lookup` resolves environment variables and `connect` builds the chain
/// client once settings are known.
pub async fn start<L, C, F>(
    lookup: L,
    artifact_path: &Path,
    plan: &TransferPlan,
    connect: F,
) -> Result<Distributor<C>, StartupError>
where
    L: Fn(&str) -> Option<String>,
    C: ChainClient,
    F: FnOnce(&Settings) -> BlockchainResult<C>,
{
    let settings = load_config_with(lookup)?;

    let interface = load_contract_interface(artifact_path)?;
    tracing::debug!(path = %interface.path().display(), "Contract interface loaded");

    let client = connect(&settings)?;

    let accounts = client.accounts().await?;
    let sender = *accounts.first().ok_or(StartupError::NoAccounts)?;
    tracing::info!(account = %sender, "Using account: {}", sender);

    let contract = client.contract(&interface, plan.contract)?;
    tracing::info!(contract = %contract.address(), "Connected to contract at: {}", contract.address());

    Ok(Distributor::new(client, contract, sender))
}
