//! Per-transfer outcomes of a distribution run.

use alloy::primitives::Address;
use serde::Serialize;

use crate::blockchain::types::TransferReceipt;
use crate::distribution::instruction::TokenAmount;

/// Final state of one instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransferStatus {
    /// Included by the chain.
    Sent(TransferReceipt),
    /// Rejected, reverted, or never submitted.
    Failed { error: String },
}

/// Outcome of one instruction, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRecord {
    pub recipient: Address,
    pub amount: TokenAmount,
    /// Whole-token amount as logged.
    pub display_amount: String,
    #[serde(flatten)]
    pub status: TransferStatus,
}

impl TransferRecord {
    pub fn is_sent(&self) -> bool {
        matches!(self.status, TransferStatus::Sent(_))
    }
}

/// Everything a run attempted, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionReport {
    pub sender: Address,
    pub records: Vec<TransferRecord>,
}

impl DistributionReport {
    pub fn new(sender: Address) -> Self {
        Self {
            sender,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: TransferRecord) {
        self.records.push(record);
    }

    pub fn attempted(&self) -> usize {
        self.records.len()
    }

    pub fn sent_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_sent()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.attempted() - self.sent_count()
    }

    /// Records that did not make it on chain.
    pub fn failures(&self) -> impl Iterator<Item = &TransferRecord> {
        self.records.iter().filter(|r| !r.is_sent())
    }

    pub fn all_sent(&self) -> bool {
        self.failed_count() == 0
    }
}
