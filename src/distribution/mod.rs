//! Token distribution.
//!
//! # Data Flow
//! ```text
//! TransferPlan (validated instructions)
//!     → executor.rs (encode, send, await receipt; one at a time)
//!     → report.rs (per-instruction outcome, in order)
//! ```

pub mod executor;
pub mod instruction;
pub mod report;

pub use executor::{Distributor, TransferError};
pub use instruction::{TokenAmount, TransferInstruction, TransferPlan};
pub use report::{DistributionReport, TransferRecord, TransferStatus};
