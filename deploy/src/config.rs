//! Where the deployment script finds its contract artifacts

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DeployError;

pub const MARKETPLACE_WASM_VAR: &str = "STIKMAN_MARKETPLACE_WASM";
pub const DAO_WASM_VAR: &str = "STIKMAN_DAO_WASM";

pub const DEFAULT_MARKETPLACE_WASM: &str =
    "target/wasm32-unknown-unknown/release/fake_nft_marketplace.wasm";
pub const DEFAULT_DAO_WASM: &str = "target/wasm32-unknown-unknown/release/stikman_dao.wasm";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployConfig {
    pub marketplace_wasm: PathBuf,
    pub dao_wasm: PathBuf,
}

impl DeployConfig {
    /// Reads artifact paths from the environment, falling back to the
    /// release build locations
    pub fn from_env() -> Self {
        Self {
            marketplace_wasm: path_var(MARKETPLACE_WASM_VAR, DEFAULT_MARKETPLACE_WASM),
            dao_wasm: path_var(DAO_WASM_VAR, DEFAULT_DAO_WASM),
        }
    }
}

/// Path from `var`, or `default` when unset or empty
pub fn path_var(var: &str, default: &str) -> PathBuf {
    match env::var_os(var) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}

pub fn load_wasm(path: &Path) -> Result<Vec<u8>, DeployError> {
    fs::read(path).map_err(|source| DeployError::Artifact {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_var_falls_back_to_default() {
        let path = path_var("STIKMAN_TEST_UNSET_VARIABLE", DEFAULT_DAO_WASM);
        assert_eq!(path, PathBuf::from(DEFAULT_DAO_WASM));
    }

    #[test]
    fn test_missing_artifact_names_the_path() {
        let missing = Path::new("does/not/exist.wasm");
        let error = load_wasm(missing).unwrap_err();

        assert!(matches!(error, DeployError::Artifact { ref path, .. } if path == missing));
        assert!(error.to_string().contains("does/not/exist.wasm"));
    }
}
