//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load settings → Load artifact → Build client → Pick account → Bind contract
//!
//! Run (distribution::executor):
//!     Transfer each instruction in order → Report
//! ```

pub mod startup;

pub use startup::{start, StartupError};
