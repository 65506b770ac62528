//! Token contract handle.
//!
//! Binds a parsed ABI to a deployed address and encodes `transfer` calls.

use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::json_abi::{Function, JsonAbi};
use alloy::primitives::{Address, U256};
use thiserror::Error;

use crate::blockchain::types::{BlockchainError, BlockchainResult, TransferCall};
use crate::contract::artifact::ContractInterface;

/// Signature every distributable token must expose.
pub const TRANSFER_SIGNATURE: &str = "transfer(address,uint256)";

/// Errors raised while binding an interface to a contract.
#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("contract artifact has no \"abi\" field")]
    MissingAbi,

    #[error("malformed ABI: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("ABI does not define transfer(address,uint256)")]
    MissingTransfer,
}

/// A token contract at a known address.
#[derive(Debug, Clone)]
pub struct ContractHandle {
    address: Address,
    transfer: Function,
}

impl ContractHandle {
    /// Bind `interface` to the contract deployed at `address`.
    pub fn new(interface: &ContractInterface, address: Address) -> Result<Self, InterfaceError> {
        let raw = interface.abi().ok_or(InterfaceError::MissingAbi)?;
        let abi: JsonAbi = serde_json::from_value(raw.clone())?;

        let transfer = abi
            .function("transfer")
            .and_then(|overloads| {
                overloads
                    .iter()
                    .find(|f| f.signature() == TRANSFER_SIGNATURE)
            })
            .cloned()
            .ok_or(InterfaceError::MissingTransfer)?;

        Ok(Self { address, transfer })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Encode `transfer(recipient, amount)` against this contract.
    pub fn transfer_call(&self, recipient: Address, amount: U256) -> BlockchainResult<TransferCall> {
        let input = self
            .transfer
            .abi_encode_input(&[DynSolValue::Address(recipient), DynSolValue::Uint(amount, 256)])
            .map_err(|e| BlockchainError::Encoding(e.to_string()))?;

        Ok(TransferCall {
            token: self.address,
            recipient,
            amount,
            input: input.into(),
        })
    }
}
