use agent_config::AgentConfig;
use async_trait::async_trait;
use base_agent::{Agent, BaseAgent};
use eyre::Result;
use tracing_subscriber::EnvFilter;

/// An agent that only knows its own name.
struct Named {
    base: BaseAgent,
    name: String,
}

#[async_trait]
impl Agent for Named {
    type Args = String;

    fn from_base(base: BaseAgent) -> Self {
        Self {
            base,
            name: String::new(),
        }
    }

    fn base(&self) -> &BaseAgent {
        &self.base
    }

    async fn set_up(&mut self, name: String) -> base_agent::Result<()> {
        self.name = name;
        Ok(())
    }
}

/// To run this example, start a local node (e.g. `anvil`) on the port listed
/// in `agents/config.json` and run from the repository root.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Resolve the endpoint once and share it with every agent.
    let config = AgentConfig::load()?;
    let agent = Named::spawn(&config, "alice".to_string()).await?;

    println!("agent    = {}", agent.name);
    println!("address  = {:?}", agent.address());
    println!("endpoint = {}", agent.client().endpoint());
    println!("balance  = {} wei", agent.balance().await?);

    Ok(())
}
