//! Shared utilities for integration testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::{Address, TxHash};
use tempfile::NamedTempFile;
use token_distributor::blockchain::{
    BlockchainError, BlockchainResult, ChainClient, TransferCall, TransferReceipt,
};

pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// What the fake chain saw, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Accounts,
    SendStarted(Address),
    SendFinished(Address),
}

/// In-memory chain that records every call and fails on request.
#[derive(Clone, Default)]
pub struct FakeChain {
    pub accounts: Vec<Address>,
    pub reject: Vec<Address>,
    pub events: Arc<Mutex<Vec<Event>>>,
    pub calls: Arc<Mutex<Vec<(Address, TransferCall)>>>,
}

impl FakeChain {
    pub fn with_sender(sender: Address) -> Self {
        Self {
            accounts: vec![sender],
            ..Default::default()
        }
    }

    pub fn rejecting(mut self, recipient: Address) -> Self {
        self.reject.push(recipient);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(Address, TransferCall)> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl ChainClient for FakeChain {
    async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
        self.log(Event::Accounts);
        Ok(self.accounts.clone())
    }

    async fn send_transaction(
        &self,
        from: Address,
        call: &TransferCall,
    ) -> BlockchainResult<TransferReceipt> {
        self.log(Event::SendStarted(call.recipient));
        let nonce = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((from, call.clone()));
            calls.len()
        };

        // Give any concurrently issued send a chance to interleave.
        tokio::time::sleep(Duration::from_millis(5)).await;

        self.log(Event::SendFinished(call.recipient));
        if self.reject.contains(&call.recipient) {
            return Err(BlockchainError::Rpc(
                "execution reverted: ERC20: transfer amount exceeds balance".to_string(),
            ));
        }

        Ok(TransferReceipt {
            tx_hash: TxHash::with_last_byte(nonce as u8),
            block_number: Some(1_000 + nonce as u64),
            gas_used: 34_512,
        })
    }
}

/// Truffle-style artifact for an ERC-20 token.
pub fn token_artifact() -> NamedTempFile {
    write_artifact(
        r#"{
  "contractName": "TokenMintERC20Token",
  "abi": [
    {
      "inputs": [
        { "internalType": "address", "name": "recipient", "type": "address" },
        { "internalType": "uint256", "name": "amount", "type": "uint256" }
      ],
      "name": "transfer",
      "outputs": [{ "internalType": "bool", "name": "", "type": "bool" }],
      "stateMutability": "nonpayable",
      "type": "function"
    },
    {
      "inputs": [{ "internalType": "address", "name": "account", "type": "address" }],
      "name": "balanceOf",
      "outputs": [{ "internalType": "uint256", "name": "", "type": "uint256" }],
      "stateMutability": "view",
      "type": "function"
    }
  ],
  "bytecode": "0x"
}"#,
    )
}

pub fn write_artifact(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Environment with both required variables set.
pub fn full_env(name: &str) -> Option<String> {
    match name {
        "PRIVATE_KEY" => Some(TEST_PRIVATE_KEY.to_string()),
        "BSC_TESTNET_URL" => Some("http://localhost:8545".to_string()),
        _ => None,
    }
}

/// Log lines emitted while the returned guard is alive on this thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).lines().map(str::to_string).collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `tracing` output into a buffer for the current thread.
#[allow(dead_code)]
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    (tracing::subscriber::set_default(subscriber), logs)
}
