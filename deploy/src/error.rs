use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("could not read wasm artifact {}: {source}", path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{contract} failed to instantiate: {reason}")]
    Instantiate {
        contract: &'static str,
        reason: String,
    },

    #[error("{contract} did not answer after deployment: {reason}")]
    Unconfirmed {
        contract: &'static str,
        reason: String,
    },

    #[error("seeding the DAO treasury failed: {reason}")]
    SeedTransfer { reason: String },

    #[error("DAO treasury holds {actual} after seeding, expected {expected}")]
    SeedMismatch { expected: i128, actual: i128 },
}
