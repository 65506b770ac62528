//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (PRIVATE_KEY, BSC_TESTNET_URL)
//!     → Settings (immutable, secret redacted)
//!
//! built-in plan or --plan file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (addresses, amounts, decimals)
//!     → TransferPlan
//! ```
//!
//! # Design Decisions
//! - Both secrets are required; there are no defaults
//! - Empty values are treated the same as unset ones
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_plan, load_config, load_config_with, load_plan, ConfigError};
pub use schema::{DistributionPlan, RecipientConfig, Settings, SigningKey};
