//! Build artifact loading.
//!
//! A compiled contract artifact is a JSON object whose `"abi"` field holds the
//! interface description. Nothing else in the artifact is used.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading a contract artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("contract ABI file not found at path: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read contract artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("contract artifact {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Interface description pulled out of an artifact.
#[derive(Debug, Clone)]
pub struct ContractInterface {
    path: PathBuf,
    abi: Option<Value>,
}

impl ContractInterface {
    /// Build an interface from an in-memory ABI value.
    pub fn from_abi(abi: Value) -> Self {
        Self {
            path: PathBuf::new(),
            abi: Some(abi),
        }
    }

    /// The raw `"abi"` value, if the artifact had one.
    pub fn abi(&self) -> Option<&Value> {
        self.abi.as_ref()
    }

    /// Resolved path the interface was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read the artifact at `path` and extract its `"abi"` field.
///
/// A missing `"abi"` is not an error here; it surfaces when a contract
/// handle is built from the interface.
pub fn load_contract_interface(path: &Path) -> Result<ContractInterface, ArtifactError> {
    let resolved = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    if !resolved.is_file() {
        return Err(ArtifactError::NotFound { path: resolved });
    }

    let content = fs::read(&resolved).map_err(|source| ArtifactError::Io {
        path: resolved.clone(),
        source,
    })?;
    let artifact: Value = serde_json::from_slice(&content).map_err(|source| ArtifactError::Parse {
        path: resolved.clone(),
        source,
    })?;

    let abi = artifact.get("abi").cloned();
    if abi.is_none() {
        tracing::warn!(path = %resolved.display(), "Contract artifact has no \"abi\" field");
    }

    Ok(ContractInterface {
        path: resolved,
        abi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_extracts_abi() {
        let file = artifact_file(r#"{"contractName":"Token","abi":[{"type":"fallback"}],"bytecode":"0x"}"#);
        let interface = load_contract_interface(file.path()).unwrap();
        assert!(interface.abi().unwrap().is_array());
        assert!(interface.path().is_absolute());
    }

    #[test]
    fn test_missing_file() {
        let err = load_contract_interface(Path::new("build/contracts/Nope.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
        assert!(err.to_string().contains("Nope.json"));
    }

    #[test]
    fn test_directory_is_not_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_contract_interface(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = artifact_file("{ \"abi\": [ ");
        let err = load_contract_interface(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"abi\": [\xff\xfe]}").unwrap();
        let err = load_contract_interface(file.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn test_missing_abi_field_is_deferred() {
        let file = artifact_file(r#"{"contractName":"Token"}"#);
        let interface = load_contract_interface(file.path()).unwrap();
        assert!(interface.abi().is_none());
    }
}
