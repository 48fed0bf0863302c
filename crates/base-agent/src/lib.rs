//! Agents that each own a throwaway account and a JSON-RPC client for the
//! node described by the network config.
pub mod account;
pub mod agent;
pub mod client;
mod error;

pub use account::Account;
pub use agent::{Agent, BaseAgent};
pub use client::RpcClient;
pub use error::{AgentError, Result};
