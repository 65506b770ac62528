//! ERC-20 token distribution over JSON-RPC.

pub mod blockchain;
pub mod config;
pub mod contract;
pub mod distribution;
pub mod lifecycle;
pub mod observability;

pub use blockchain::{ChainClient, RpcChainClient};
pub use distribution::{DistributionReport, Distributor, TransferPlan};
pub use lifecycle::{start, StartupError};
