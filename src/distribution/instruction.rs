//! Transfer instructions and token amounts.

use alloy::primitives::utils::{parse_units, ParseUnits, UnitsError};
use alloy::primitives::{Address, U256};
use serde::Serialize;

/// An amount of tokens, stored in the token's smallest unit.
///
/// Keeps the decimal precision it was scaled with so it can be shown back
/// in whole tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenAmount {
    raw: U256,
    decimals: u8,
}

impl TokenAmount {
    /// Wrap an amount that is already in the smallest unit.
    pub fn from_raw(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Scale a whole-token amount by `10^decimals`.
    ///
    /// Returns `None` on overflow.
    pub fn from_whole(whole: u64, decimals: u8) -> Option<Self> {
        let scale = U256::from(10u8).checked_pow(U256::from(decimals))?;
        let raw = U256::from(whole).checked_mul(scale)?;
        Some(Self { raw, decimals })
    }

    /// Parse a decimal string of whole tokens ("100000", "0.25").
    ///
    /// Negative amounts and amounts with more fractional digits than
    /// `decimals` are rejected.
    pub fn parse(amount: &str, decimals: u8) -> Result<Self, UnitsError> {
        let amount = amount.trim();
        if let Some((_, frac)) = amount.split_once('.') {
            if frac.trim_end_matches('0').len() > decimals as usize {
                return Err(UnitsError::InvalidUnit(format!(
                    "amount {amount} has more than {decimals} decimal places"
                )));
            }
        }

        match parse_units(amount, decimals)? {
            ParseUnits::U256(raw) => Ok(Self { raw, decimals }),
            ParseUnits::I256(_) => Err(UnitsError::InvalidUnit(format!(
                "negative amount {amount}"
            ))),
        }
    }

    /// Amount in the token's smallest unit, as submitted on the wire.
    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Whole-token representation with trailing fractional zeros removed.
    pub fn to_display(&self) -> String {
        // Past 77 decimals the scale exceeds U256, so the whole part is zero.
        let (whole, frac) = match U256::from(10u8).checked_pow(U256::from(self.decimals)) {
            Some(scale) => (self.raw / scale, self.raw % scale),
            None => (U256::ZERO, self.raw),
        };
        if frac.is_zero() {
            return whole.to_string();
        }
        let frac = format!("{:0>width$}", frac.to_string(), width = self.decimals as usize);
        format!("{}.{}", whole, frac.trim_end_matches('0'))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display())
    }
}

/// One intended token transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferInstruction {
    pub recipient: Address,
    pub amount: TokenAmount,
}

impl TransferInstruction {
    pub fn new(recipient: Address, amount: TokenAmount) -> Self {
        Self { recipient, amount }
    }
}

/// A validated plan, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    /// Token contract the transfers are sent through.
    pub contract: Address,

    /// Ordered instructions.
    pub instructions: Vec<TransferInstruction>,
}
