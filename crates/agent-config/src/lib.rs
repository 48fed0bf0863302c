//! Resolves the node endpoint that agents connect to from a truffle-style
//! network descriptor:
//!
//! ```json
//! { "networks": { "develop": { "host": "http://127.0.0.1", "port": "8545" } } }
//! ```
mod error;
mod transport;

use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use serde::Deserialize;
use tracing::debug;

pub use error::ConfigError;
pub use transport::TransportConfig;

/// The location of the network descriptor relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "agents/config.json";

/// The network that agents connect to.
pub const DEVELOP: &str = "develop";

/// A single entry in the descriptor's `networks` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    pub host: String,
    pub port: String,
}

/// The parsed network descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    pub networks: BTreeMap<String, Network>,
}

impl NetworkConfig {
    /// Loads the descriptor from `agents/config.json`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_path(DEFAULT_CONFIG_PATH)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(contents).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Gets the entry for a named network.
    pub fn network(&self, name: &str) -> Result<&Network, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::MissingNetwork(name.to_string()))
    }

    /// Resolves a network's endpoint as `<host>:<port>`. The values are
    /// joined verbatim, empty strings included.
    pub fn endpoint(&self, name: &str) -> Result<String, ConfigError> {
        let network = self.network(name)?;
        Ok(format!("{}:{}", network.host, network.port))
    }

    pub fn develop_endpoint(&self) -> Result<String, ConfigError> {
        self.endpoint(DEVELOP)
    }
}

impl FromStr for NetworkConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Path::new("<inline>"))
    }
}

/// Everything an agent needs to reach its node. This is built once at
/// startup and handed to every agent that's constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub endpoint: String,
    pub transport: TransportConfig,
}

impl AgentConfig {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport: TransportConfig::default(),
        }
    }

    /// Resolves the develop endpoint from `agents/config.json`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(NetworkConfig::load()?, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Resolves the develop endpoint from the descriptor at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        Self::resolve(NetworkConfig::from_path(path)?, path)
    }

    fn resolve(networks: NetworkConfig, path: &Path) -> Result<Self, ConfigError> {
        let endpoint = networks.develop_endpoint()?;
        debug!(path = %path.display(), %endpoint, "resolved agent endpoint");
        Ok(Self::new(endpoint))
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}
