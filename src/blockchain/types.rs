//! Chain-specific types and error definitions.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction was mined but reverted on-chain.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Call data could not be ABI-encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// An encoded `transfer(address,uint256)` call against a token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    /// Token contract the call is sent to.
    pub token: Address,
    /// Recipient encoded in the call.
    pub recipient: Address,
    /// Raw amount encoded in the call.
    pub amount: U256,
    /// Selector plus ABI-encoded arguments.
    pub input: Bytes,
}

/// Acknowledgment that a transaction was included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    /// The transaction hash.
    pub tx_hash: TxHash,
    /// Block the transaction was included in, when known.
    pub block_number: Option<u64>,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
}
