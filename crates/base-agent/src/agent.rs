use agent_config::AgentConfig;
use async_trait::async_trait;
use ethers::types::{Address, U256};
use tracing::debug;

use crate::{
    account::Account,
    client::RpcClient,
    error::{AgentError, Result},
};

/// The state every agent carries: a freshly generated account and a client
/// for the node that the account lives on.
#[derive(Debug)]
pub struct BaseAgent {
    account: Account,
    client: RpcClient,
}

impl BaseAgent {
    /// Generates a new random account and then builds a client for the
    /// configured endpoint. Building the client doesn't touch the network.
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let account = Account::random();
        let client = RpcClient::new(config)?;
        Ok(Self { account, client })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

/// The interface implemented by concrete agents. Implementors wrap a
/// [`BaseAgent`] and supply their own behavior through `set_up`.
#[async_trait]
pub trait Agent: Sized + Send + Sync {
    /// The arguments passed through `spawn` to `set_up`.
    type Args: Send + 'static;

    fn from_base(base: BaseAgent) -> Self;

    fn base(&self) -> &BaseAgent;

    /// Agent specific initialization. This runs once the account and client
    /// exist, so implementations are free to use both.
    async fn set_up(&mut self, _args: Self::Args) -> Result<()> {
        Err(AgentError::Unimplemented("set_up"))
    }

    /// Constructs an agent. This generates the account, builds the client,
    /// and then hands `args` to `set_up` unchanged. Any failure aborts
    /// construction.
    async fn spawn(config: &AgentConfig, args: Self::Args) -> Result<Self> {
        let mut agent = Self::from_base(BaseAgent::new(config)?);
        agent.set_up(args).await?;
        debug!(
            address = ?agent.address(),
            endpoint = agent.client().endpoint(),
            "spawned agent"
        );
        Ok(agent)
    }

    fn account(&self) -> &Account {
        self.base().account()
    }

    fn client(&self) -> &RpcClient {
        self.base().client()
    }

    fn address(&self) -> Address {
        self.account().address()
    }

    /// Queries the node for the account's balance in wei. Every call goes to
    /// the node.
    async fn balance(&self) -> Result<U256> {
        self.client().get_balance(self.address()).await
    }

    /// Like `balance`, but blocks the calling thread for the round trip.
    fn balance_blocking(&self) -> Result<U256> {
        self.client().get_balance_blocking(self.address())
    }
}

/// The base agent has no behavior of its own, so spawning one directly always
/// fails. It accepts any JSON arguments.
impl Agent for BaseAgent {
    type Args = serde_json::Value;

    fn from_base(base: BaseAgent) -> Self {
        base
    }

    fn base(&self) -> &BaseAgent {
        self
    }
}
