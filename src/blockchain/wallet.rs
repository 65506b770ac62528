//! Wallet management and transaction signing.
//!
//! # Security
//! - Private keys are loaded ONLY from the environment
//! - Keys are never logged or serialized
//! - Nonce and chain ID are filled in by the provider at send time

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::config::schema::SigningKey;

/// Local signing wallet backed by a single private key.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    pub fn from_private_key(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// Create a wallet from the configured signing key.
    pub fn from_signing_key(key: &SigningKey) -> BlockchainResult<Self> {
        Self::from_private_key(key.expose())
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Convert into the network wallet a provider signs with.
    pub fn into_network_wallet(self) -> EthereumWallet {
        EthereumWallet::from(self.signer)
    }
}
