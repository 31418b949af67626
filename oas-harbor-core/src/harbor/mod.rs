//! Harbor installed-agent contract.
//!
//! Harbor discovers an agent, renders its install script, asks it for the
//! commands to run for a task instruction, executes them inside the task
//! environment, and finally lets the agent enrich the run context.

pub mod agent;

pub use agent::HarborAgent;

use crate::command::BuildError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One command Harbor executes in the task environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecInput {
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_sec: Option<u64>,
}

/// Run metadata Harbor hands back after execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_output_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// Agent installed into, and run inside, a Harbor task environment
pub trait InstalledAgent {
    fn name(&self) -> &str;

    fn version(&self) -> Option<String>;

    /// Install script template rendered by Harbor before the first run
    fn install_agent_template_path(&self) -> PathBuf;

    fn create_run_agent_commands(&self, instruction: &str) -> Result<Vec<ExecInput>, BuildError>;

    /// Called after the commands finished. Harbor captures stdout itself.
    fn populate_context_post_run(&self, _context: &mut AgentContext) {}
}
