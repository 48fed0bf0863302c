use std::io;

use ethers::providers::ProviderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A required agent hook wasn't overridden.
    #[error("`{0}` must be implemented by the concrete agent")]
    Unimplemented(&'static str),
    /// The node couldn't be reached or rejected the request. The provider's
    /// error is surfaced as-is.
    #[error(transparent)]
    Network(#[from] ProviderError),
    #[error("invalid node endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("couldn't build the http transport: {0}")]
    Transport(#[from] reqwest::Error),
    /// A blocking call was made from a thread that's already driving an
    /// async runtime.
    #[error("blocking calls can't be made from inside an async runtime")]
    BlockingInRuntime,
    #[error("couldn't start a runtime for a blocking call: {0}")]
    Runtime(#[from] io::Error),
}
