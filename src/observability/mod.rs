//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup, executor
//!     → logging.rs (structured log events)
//!     → metrics.rs (transfer counters, failure gauge)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (recipient, tx_hash, error)
//! - No metrics exporter is installed; an embedding process may add one

pub mod logging;
pub mod metrics;
