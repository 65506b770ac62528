//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Expose the three capabilities a distribution needs: list signer
//!   accounts, bind a contract handle, send a transaction
//! - Delegate signing, nonce, gas and chain ID to alloy's fillers
//! - Wait for the receipt before reporting a send as done

use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use std::sync::Arc;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, TransferCall, TransferReceipt};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::Settings;
use crate::contract::{ContractHandle, ContractInterface, InterfaceError};

/// Narrow view of a chain the distribution runs against.
///
/// Implemented by [`RpcChainClient`] for real networks and by test doubles.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Accounts this client can sign for.
    async fn accounts(&self) -> BlockchainResult<Vec<Address>>;

    /// Bind an interface description to a deployed contract.
    fn contract(
        &self,
        interface: &ContractInterface,
        address: Address,
    ) -> Result<ContractHandle, InterfaceError> {
        ContractHandle::new(interface, address)
    }

    /// Sign and submit `call` from `from`, resolving once it is included.
    async fn send_transaction(
        &self,
        from: Address,
        call: &TransferCall,
    ) -> BlockchainResult<TransferReceipt>;
}

/// JSON-RPC client signing with a single local key.
#[derive(Clone)]
pub struct RpcChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    accounts: Vec<Address>,
    rpc_url: Url,
}

impl RpcChainClient {
    /// Build a client from resolved settings.
    ///
    /// No network request is made here; the provider connects lazily.
    pub fn from_settings(settings: &Settings) -> BlockchainResult<Self> {
        let wallet = Wallet::from_signing_key(&settings.signing_key)?;
        let accounts = vec![wallet.address()];

        let provider = ProviderBuilder::new()
            .wallet(wallet.into_network_wallet())
            .connect_http(settings.rpc_url.clone());

        tracing::info!(rpc_url = %redact_url(&settings.rpc_url), "Blockchain client initialized");

        Ok(Self {
            provider: Arc::new(provider),
            accounts,
            rpc_url: settings.rpc_url.clone(),
        })
    }
}

impl ChainClient for RpcChainClient {
    async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
        Ok(self.accounts.clone())
    }

    async fn send_transaction(
        &self,
        from: Address,
        call: &TransferCall,
    ) -> BlockchainResult<TransferReceipt> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(call.token)
            .with_input(call.input.clone());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| BlockchainError::Rpc(e.to_string()))?;

        tracing::debug!(tx_hash = %pending.tx_hash(), recipient = %call.recipient, "Transaction submitted");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| BlockchainError::Rpc(e.to_string()))?;

        if !receipt.status() {
            return Err(BlockchainError::Reverted(receipt.transaction_hash));
        }

        Ok(TransferReceipt {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}

/// Strip credentials and query strings; RPC URLs often embed API keys.
fn redact_url(url: &Url) -> String {
    match url.host_str() {
        Some(host) => format!("{}://{}", url.scheme(), host),
        None => url.scheme().to_string(),
    }
}

impl std::fmt::Debug for RpcChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcChainClient")
            .field("rpc_url", &redact_url(&self.rpc_url))
            .field("accounts", &self.accounts)
            .finish()
    }
}
