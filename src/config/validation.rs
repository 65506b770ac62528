//! Distribution plan validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Parse addresses and scale amounts to the token's smallest unit
//! - Reject empty plans and zero amounts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: DistributionPlan → Result<TransferPlan, Vec<ValidationError>>
//! - Runs before any chain client exists

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::DistributionPlan;
use crate::distribution::instruction::{TokenAmount, TransferInstruction, TransferPlan};

/// Largest decimal precision a `U256` amount can be scaled by.
pub const MAX_DECIMALS: u8 = 77;

/// A single semantic problem with a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid contract address '{0}'")]
    ContractAddress(String),

    #[error("decimals {0} exceeds maximum of {max}", max = MAX_DECIMALS)]
    Decimals(u8),

    #[error("plan has no recipients")]
    NoRecipients,

    #[error("recipient #{index}: invalid address '{address}'")]
    RecipientAddress { index: usize, address: String },

    #[error("recipient #{index}: invalid amount '{amount}': {reason}")]
    Amount {
        index: usize,
        amount: String,
        reason: String,
    },

    #[error("recipient #{index}: amount must be greater than zero")]
    ZeroAmount { index: usize },
}

/// Validate a plan and resolve it into typed transfer instructions.
pub fn validate_plan(plan: &DistributionPlan) -> Result<TransferPlan, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let contract = match plan.contract_address.trim().parse::<Address>() {
        Ok(addr) => Some(addr),
        Err(_) => {
            errors.push(ValidationError::ContractAddress(plan.contract_address.clone()));
            None
        }
    };

    if plan.decimals > MAX_DECIMALS {
        errors.push(ValidationError::Decimals(plan.decimals));
    }

    if plan.recipients.is_empty() {
        errors.push(ValidationError::NoRecipients);
    }

    let mut instructions = Vec::with_capacity(plan.recipients.len());
    for (index, entry) in plan.recipients.iter().enumerate() {
        let recipient = entry.address.trim().parse::<Address>().map_err(|_| {
            ValidationError::RecipientAddress {
                index,
                address: entry.address.clone(),
            }
        });

        let amount = if plan.decimals > MAX_DECIMALS {
            // Already reported above; scaling would only repeat it.
            None
        } else {
            match TokenAmount::parse(&entry.amount, plan.decimals) {
                Ok(amount) if amount.is_zero() => {
                    errors.push(ValidationError::ZeroAmount { index });
                    None
                }
                Ok(amount) => Some(amount),
                Err(e) => {
                    errors.push(ValidationError::Amount {
                        index,
                        amount: entry.amount.clone(),
                        reason: e.to_string(),
                    });
                    None
                }
            }
        };

        match (recipient, amount) {
            (Ok(recipient), Some(amount)) => {
                instructions.push(TransferInstruction::new(recipient, amount))
            }
            (Err(e), _) => errors.push(e),
            _ => {}
        }
    }

    match contract {
        Some(contract) if errors.is_empty() => Ok(TransferPlan {
            contract,
            instructions,
        }),
        _ => Err(errors),
    }
}
