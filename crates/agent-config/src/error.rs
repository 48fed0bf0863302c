use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that can occur while resolving an agent's endpoint. None of these
/// are recoverable: an agent can't be constructed without an endpoint.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read network config at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("network config at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("network config has no entry for the `{0}` network")]
    MissingNetwork(String),
}

impl ConfigError {
    /// Returns true if the descriptor was readable but didn't have the shape
    /// or keys that endpoint resolution needs.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ConfigError::NotFound { .. })
    }
}
