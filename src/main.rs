//! Token distributor
//!
//! Sends a fixed list of ERC-20 transfers from one account, one at a time.
//!
//! # Architecture Overview
//!
//! ```text
//!   .env / environment ──▶ config ──┐
//!                                   │
//!   build artifact (abi) ──▶ contract ──▶ lifecycle::start ──▶ Distributor
//!                                   │                              │
//!   --plan / built-in plan ─────────┘                              ▼
//!                                                  transfer #1 ─▶ receipt
//!                                                  transfer #2 ─▶ receipt
//!                                                  ...            (failures logged,
//!                                                                  run continues)
//! ```
//!
//! # Exit codes
//! - `0`: the run reached the end of the plan (even if transfers failed)
//! - `1`: a startup error aborted the run before any transfer
//! - `2`: `--strict` was given and at least one transfer failed

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use token_distributor::blockchain::RpcChainClient;
use token_distributor::config::schema::DEFAULT_ARTIFACT_PATH;
use token_distributor::config::{default_plan, load_plan};
use token_distributor::observability::logging;
use token_distributor::{start, DistributionReport, StartupError};

#[derive(Parser)]
#[command(name = "token-distributor")]
#[command(about = "Send a fixed set of ERC-20 token transfers", long_about = None)]
struct Cli {
    /// Compiled contract artifact containing the token ABI
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,

    /// TOML plan overriding the built-in contract and recipients
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Print the distribution report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Exit with status 2 when any transfer failed
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // A missing .env file is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    logging::init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match run(&cli).await {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => tracing::error!(error = %e, "Failed to serialize report"),
                }
            }
            if cli.strict && !report.all_sent() {
                return ExitCode::from(2);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Error during token transfers");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<DistributionReport, StartupError> {
    let plan = match &cli.plan {
        Some(path) => load_plan(path)?,
        None => default_plan()?,
    };

    tracing::info!(
        contract = %plan.contract,
        recipients = plan.instructions.len(),
        "Distribution plan loaded"
    );

    let distributor = start(
        |name| std::env::var(name).ok(),
        &cli.artifact,
        &plan,
        RpcChainClient::from_settings,
    )
    .await?;

    Ok(distributor.distribute(&plan.instructions).await)
}
