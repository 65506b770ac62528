//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key, RPC URL)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (ChainClient: accounts, contract handle, send + receipt)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or RPC credentials

pub mod client;
pub mod types;
pub mod wallet;

pub use client::{ChainClient, RpcChainClient};
pub use types::{BlockchainError, BlockchainResult, TransferCall, TransferReceipt};
pub use wallet::Wallet;
