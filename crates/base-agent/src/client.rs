use std::sync::Arc;

use agent_config::AgentConfig;
use ethers::{
    providers::{
        Http, HttpRateLimitRetryPolicy, Middleware, Provider, RetryClient, RetryClientBuilder,
    },
    types::{Address, U256},
};

use tokio::runtime::{Builder, Handle};

use crate::error::{AgentError, Result};

type AgentProvider = Provider<Arc<RetryClient<Http>>>;

/// A JSON-RPC client bound to a single node endpoint. The client holds no
/// state beyond its transport, so it's cheap to rebuild.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: String,
    provider: AgentProvider,
}

impl RpcClient {
    /// Builds a provider stack for the configured endpoint. Every timeout and
    /// retry knob comes from the config's transport section rather than the
    /// library defaults.
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let url =
            reqwest::Url::parse(&config.endpoint).map_err(|e| AgentError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            })?;

        // Build the http transport with explicit timeouts.
        let transport = &config.transport;
        let http = reqwest::Client::builder()
            .timeout(transport.timeout)
            .connect_timeout(transport.connect_timeout)
            .build()?;
        let http = Http::new_with_client(url, http);

        // Wrap the transport in a retry layer that backs off on rate limits
        // and on requests that never made it to the node.
        let client = RetryClientBuilder::default()
            .rate_limit_retries(transport.rate_limit_retries)
            .timeout_retries(transport.timeout_retries)
            .initial_backoff(transport.initial_backoff)
            .compute_units_per_second(transport.compute_units_per_second)
            .build(http, Box::<HttpRateLimitRetryPolicy>::default());
        let provider = Provider::new(Arc::new(client)).interval(transport.interval);

        Ok(Self {
            endpoint: config.endpoint.clone(),
            provider,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn provider(&self) -> &AgentProvider {
        &self.provider
    }

    /// Gets an address's balance in wei at the latest block.
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        Ok(self.provider.get_balance(address, None).await?)
    }

    /// Gets an address's balance in wei at the latest block, blocking the
    /// calling thread until the node answers. This must not be called from
    /// inside an async runtime.
    pub fn get_balance_blocking(&self, address: Address) -> Result<U256> {
        if Handle::try_current().is_ok() {
            return Err(AgentError::BlockingInRuntime);
        }
        let rt = Builder::new_current_thread().enable_all().build()?;
        rt.block_on(self.get_balance(address))
    }
}
