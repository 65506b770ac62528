//! Sequential transfer execution.
//!
//! # Design Decisions
//! - One transfer at a time: every send is signed by the same account, so a
//!   transfer is awaited to inclusion before the next one is built
//! - A failed transfer is logged and recorded, never retried, and does not
//!   stop the run

use alloy::primitives::Address;
use thiserror::Error;

use crate::blockchain::client::ChainClient;
use crate::blockchain::types::{BlockchainError, TransferReceipt};
use crate::contract::ContractHandle;
use crate::distribution::instruction::TransferInstruction;
use crate::distribution::report::{DistributionReport, TransferRecord, TransferStatus};
use crate::observability::metrics;

/// A single transfer that did not go through.
#[derive(Debug, Error)]
#[error("failed to transfer tokens to {recipient}: {source}")]
pub struct TransferError {
    pub recipient: Address,
    #[source]
    pub source: BlockchainError,
}

/// Runs transfer instructions against one token contract from one sender.
#[derive(Debug)]
pub struct Distributor<C> {
    client: C,
    contract: ContractHandle,
    sender: Address,
}

impl<C: ChainClient> Distributor<C> {
    pub fn new(client: C, contract: ContractHandle, sender: Address) -> Self {
        Self {
            client,
            contract,
            sender,
        }
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn contract(&self) -> &ContractHandle {
        &self.contract
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Execute every instruction in order and report each outcome.
    pub async fn distribute(&self, instructions: &[TransferInstruction]) -> DistributionReport {
        let mut report = DistributionReport::new(self.sender);

        for instruction in instructions {
            let display_amount = instruction.amount.to_display();

            let status = match self.transfer(instruction).await {
                Ok(receipt) => {
                    tracing::info!(
                        recipient = %instruction.recipient,
                        tx_hash = %receipt.tx_hash,
                        "Transferred {} tokens to {}",
                        display_amount,
                        instruction.recipient
                    );
                    metrics::record_transfer(true);
                    TransferStatus::Sent(receipt)
                }
                Err(e) => {
                    tracing::error!(
                        recipient = %e.recipient,
                        error = %e.source,
                        "Failed to transfer tokens to {}",
                        e.recipient
                    );
                    metrics::record_transfer(false);
                    TransferStatus::Failed {
                        error: e.source.to_string(),
                    }
                }
            };

            report.push(TransferRecord {
                recipient: instruction.recipient,
                amount: instruction.amount,
                display_amount,
                status,
            });
        }

        metrics::record_run(&report);
        tracing::info!(
            attempted = report.attempted(),
            sent = report.sent_count(),
            failed = report.failed_count(),
            "Distribution finished"
        );

        report
    }

    async fn transfer(
        &self,
        instruction: &TransferInstruction,
    ) -> Result<TransferReceipt, TransferError> {
        let wrap = |source| TransferError {
            recipient: instruction.recipient,
            source,
        };

        let call = self
            .contract
            .transfer_call(instruction.recipient, instruction.amount.raw())
            .map_err(wrap)?;

        self.client
            .send_transaction(self.sender, &call)
            .await
            .map_err(wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::{BlockchainResult, TransferCall};
    use crate::contract::ContractInterface;
    use crate::distribution::instruction::TokenAmount;
    use alloy::primitives::{TxHash, U256};
    use std::sync::Mutex;

    /// Fails every call whose recipient is in `reject`.
    struct ScriptedClient {
        reject: Vec<Address>,
        calls: Mutex<Vec<TransferCall>>,
    }

    impl ChainClient for ScriptedClient {
        async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
            Ok(vec![Address::repeat_byte(0xaa)])
        }

        async fn send_transaction(
            &self,
            _from: Address,
            call: &TransferCall,
        ) -> BlockchainResult<TransferReceipt> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call.clone());
            if self.reject.contains(&call.recipient) {
                return Err(BlockchainError::Rpc("execution reverted".to_string()));
            }
            Ok(TransferReceipt {
                tx_hash: TxHash::with_last_byte(calls.len() as u8),
                block_number: Some(calls.len() as u64),
                gas_used: 35_000,
            })
        }
    }

    fn handle() -> ContractHandle {
        let abi = serde_json::json!([{
            "type": "function",
            "name": "transfer",
            "stateMutability": "nonpayable",
            "inputs": [
                { "name": "to", "type": "address" },
                { "name": "value", "type": "uint256" }
            ],
            "outputs": [{ "name": "", "type": "bool" }]
        }]);
        ContractHandle::new(&ContractInterface::from_abi(abi), Address::repeat_byte(0x1d)).unwrap()
    }

    fn instruction(byte: u8, whole: u64) -> TransferInstruction {
        TransferInstruction::new(
            Address::repeat_byte(byte),
            TokenAmount::from_whole(whole, 18).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_run() {
        let client = ScriptedClient {
            reject: vec![Address::repeat_byte(2)],
            calls: Mutex::new(Vec::new()),
        };
        let distributor = Distributor::new(client, handle(), Address::repeat_byte(0xaa));

        let report = distributor
            .distribute(&[instruction(1, 10), instruction(2, 20), instruction(3, 30)])
            .await;

        assert_eq!(report.attempted(), 3);
        assert_eq!(report.sent_count(), 2);
        assert!(matches!(
            &report.records[1].status,
            TransferStatus::Failed { error } if error.contains("execution reverted")
        ));

        let calls = distributor.client().calls.lock().unwrap();
        let recipients: Vec<Address> = calls.iter().map(|c| c.recipient).collect();
        assert_eq!(
            recipients,
            vec![Address::repeat_byte(1), Address::repeat_byte(2), Address::repeat_byte(3)]
        );
        assert_eq!(calls[2].amount, U256::from(30u64) * U256::from(10u8).pow(U256::from(18u8)));
    }

    #[tokio::test]
    async fn test_empty_instructions() {
        let client = ScriptedClient {
            reject: Vec::new(),
            calls: Mutex::new(Vec::new()),
        };
        let distributor = Distributor::new(client, handle(), Address::repeat_byte(0xaa));
        let report = distributor.distribute(&[]).await;
        assert_eq!(report.attempted(), 0);
        assert!(report.all_sent());
    }

    #[test]
    fn test_transfer_error_display() {
        let err = TransferError {
            recipient: Address::ZERO,
            source: BlockchainError::Rpc("insufficient funds".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to transfer tokens to"));
        assert!(msg.contains("insufficient funds"));
    }
}
