use std::time::Duration;

/// The knobs of the HTTP transport that agents use to talk to the node. The
/// defaults mirror what the underlying JSON-RPC client would do on its own,
/// with the addition of a request timeout so that a hung node can't block an
/// agent forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// The maximum amount of time a single request may take.
    pub timeout: Duration,
    /// The maximum amount of time spent establishing a connection.
    pub connect_timeout: Duration,
    /// How many times a rate limited request is retried.
    pub rate_limit_retries: u32,
    /// How many times a request that failed to reach the node is retried.
    pub timeout_retries: u32,
    /// The backoff before the first retry.
    pub initial_backoff: Duration,
    /// The compute unit budget used to pace retries against rate limited
    /// nodes.
    pub compute_units_per_second: u64,
    /// The polling interval for filters and pending transactions.
    pub interval: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            rate_limit_retries: 10,
            timeout_retries: 3,
            initial_backoff: Duration::from_millis(1000),
            compute_units_per_second: 330,
            interval: Duration::from_millis(7000),
        }
    }
}

impl TransportConfig {
    /// A transport that fails fast. Useful when the caller wants to handle
    /// connectivity problems itself.
    pub fn no_retries() -> Self {
        Self {
            rate_limit_retries: 0,
            timeout_retries: 0,
            ..Default::default()
        }
    }
}
