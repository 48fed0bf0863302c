#[macro_use]
extern crate lazy_static;

use std::env;

use agent_config::{AgentConfig, NetworkConfig, TransportConfig};
use async_trait::async_trait;
use base_agent::{Agent, AgentError, BaseAgent};
use ethers::{
    providers::Middleware,
    types::U256,
    utils::{Anvil, AnvilInstance},
};
use eyre::Result;

lazy_static! {
    // The Ethereum URL the tests should connect to. If None, then the tests
    // will spawn an anvil node.
    static ref MAYBE_ETHEREUM_URL: Option<String> = env::var("AGENT_ETHEREUM_URL").ok();
}

/// A node for the agents to talk to, along with the config that points at it.
struct Node {
    config: AgentConfig,
    _maybe_anvil: Option<AnvilInstance>,
}

impl Node {
    fn new() -> Result<Self> {
        match MAYBE_ETHEREUM_URL.as_ref() {
            Some(url) => Ok(Self {
                config: AgentConfig::new(url.clone()),
                _maybe_anvil: None,
            }),
            None => Self::anvil(),
        }
    }

    /// Spawns an anvil node and resolves its endpoint through a develop
    /// network entry.
    fn anvil() -> Result<Self> {
        let anvil = Anvil::new().spawn();
        let descriptor = format!(
            r#"{{"networks":{{"develop":{{"host":"http://127.0.0.1","port":"{}"}}}}}}"#,
            anvil.port()
        );
        let endpoint = descriptor.parse::<NetworkConfig>()?.develop_endpoint()?;
        Ok(Self {
            config: AgentConfig::new(endpoint),
            _maybe_anvil: Some(anvil),
        })
    }
}

/// An agent whose set up does nothing.
struct Idle {
    base: BaseAgent,
}

#[async_trait]
impl Agent for Idle {
    type Args = ();

    fn from_base(base: BaseAgent) -> Self {
        Self { base }
    }

    fn base(&self) -> &BaseAgent {
        &self.base
    }

    async fn set_up(&mut self, _args: ()) -> base_agent::Result<()> {
        Ok(())
    }
}

// These need an anvil binary on the PATH or AGENT_ETHEREUM_URL to be set.
#[ignore]
#[tokio::test(flavor = "current_thread")]
async fn test_fresh_agent_has_zero_balance() -> Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let node = Node::new()?;
    let alice = Idle::spawn(&node.config, ()).await?;
    let bob = Idle::spawn(&node.config, ()).await?;

    assert_ne!(alice.address(), bob.address());
    assert_eq!(alice.balance().await?, U256::zero());
    assert_eq!(bob.balance().await?, U256::zero());

    Ok(())
}

#[ignore]
#[tokio::test(flavor = "current_thread")]
async fn test_balance_tracks_the_chain() -> Result<()> {
    let node = Node::anvil()?;
    let agent = Idle::spawn(&node.config, ()).await?;
    assert_eq!(agent.balance().await?, U256::zero());

    // Mint some ether to the agent. The next query sees it immediately.
    let amount = U256::exp10(18) * 5;
    agent
        .client()
        .provider()
        .request::<_, ()>("anvil_setBalance", (agent.address(), amount))
        .await?;
    assert_eq!(agent.balance().await?, amount);
    assert_eq!(
        agent.client().provider().get_balance(agent.address(), None).await?,
        amount
    );

    Ok(())
}

#[ignore]
#[tokio::test(flavor = "current_thread")]
async fn test_balance_fails_once_the_node_is_gone() -> Result<()> {
    let node = Node::anvil()?;
    let config = node.config.clone().with_transport(TransportConfig::no_retries());
    let agent = Idle::spawn(&config, ()).await?;
    assert_eq!(agent.balance().await?, U256::zero());

    // Shut the node down.
    drop(node);

    assert!(matches!(agent.balance().await, Err(AgentError::Network(_))));

    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_base_agent_cannot_be_spawned() -> Result<()> {
    let config = "{\"networks\":{\"develop\":{\"host\":\"http://127.0.0.1\",\"port\":\"8545\"}}}"
        .parse::<NetworkConfig>()?
        .develop_endpoint()
        .map(AgentConfig::new)?;
    let result = BaseAgent::spawn(&config, serde_json::Value::Null).await;
    assert!(matches!(result, Err(AgentError::Unimplemented(_))));
    Ok(())
}
