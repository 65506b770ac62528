//! Token contract access.
//!
//! # Data Flow
//! ```text
//! build/contracts/<Token>.json
//!     → artifact.rs (read, parse, extract "abi")
//!     → handle.rs (bind ABI to address, encode transfer calls)
//!     → blockchain client (sign & send)
//! ```

pub mod artifact;
pub mod handle;

pub use artifact::{load_contract_interface, ArtifactError, ContractInterface};
pub use handle::{ContractHandle, InterfaceError};
