//! Configuration loading from the environment and disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::schema::{
    DistributionPlan, Settings, SigningKey, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR,
};
use crate::config::validation::{validate_plan, ValidationError};
use crate::distribution::instruction::TransferPlan;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set (check the environment or .env file)")]
    MissingVar(&'static str),

    #[error("invalid RPC URL in {var}: {source}")]
    InvalidRpcUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read plan {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse plan {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("plan validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load settings from the process environment.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_with(|name| std::env::var(name).ok())
}

/// Load settings through an arbitrary variable lookup.
///
/// Empty values count as missing.
pub fn load_config_with<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |name: &'static str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar(name))
    };

    let signing_key = required(PRIVATE_KEY_ENV_VAR)?;
    let rpc_url = required(RPC_URL_ENV_VAR)?;

    let rpc_url = Url::parse(&rpc_url).map_err(|source| ConfigError::InvalidRpcUrl {
        var: RPC_URL_ENV_VAR,
        source,
    })?;

    Ok(Settings {
        signing_key: SigningKey::new(signing_key),
        rpc_url,
    })
}

/// Load and validate a distribution plan from a TOML file.
pub fn load_plan(path: &Path) -> Result<TransferPlan, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let plan: DistributionPlan = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_plan(&plan).map_err(ConfigError::Validation)
}

/// The built-in plan, validated the same way a file would be.
pub fn default_plan() -> Result<TransferPlan, ConfigError> {
    validate_plan(&DistributionPlan::default()).map_err(ConfigError::Validation)
}
