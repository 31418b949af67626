use super::{ExecInput, InstalledAgent};
use crate::command::{BuildError, CommandBuilder, Invocation};
use crate::config::api_keys::EnvSnapshot;
use crate::config::loader::AdapterConfig;
use crate::config::models::Preset;
use std::path::{Path, PathBuf};

/// Harbor adapter for the `oas` CLI in headless mode (`-p`)
#[derive(Debug, Clone)]
pub struct HarborAgent {
    config: AdapterConfig,
    model_name: Option<String>,
    env: EnvSnapshot,
    template_dir: PathBuf,
}

impl HarborAgent {
    pub fn new(config: AdapterConfig, model_name: Option<String>, env: EnvSnapshot) -> Self {
        Self {
            config,
            model_name,
            env,
            template_dir: PathBuf::new(),
        }
    }

    /// Adapter for a preset, reading credentials from the process environment
    pub fn from_preset(preset: Preset, model_name: Option<String>) -> Self {
        Self::from_process_env(AdapterConfig::for_preset(preset), model_name)
    }

    pub fn from_process_env(config: AdapterConfig, model_name: Option<String>) -> Self {
        Self::new(config, model_name, EnvSnapshot::from_process())
    }

    /// Directory holding the install script templates
    pub fn with_template_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.template_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Model passed by the harness, or the configured default
    pub fn model(&self) -> &str {
        self.model_name
            .as_deref()
            .unwrap_or(&self.config.agent.default_model)
    }

    pub fn build_invocation(&self, instruction: &str) -> Result<Invocation, BuildError> {
        CommandBuilder::new(&self.config, &self.env).build(self.model(), instruction, None)
    }
}

impl InstalledAgent for HarborAgent {
    fn name(&self) -> &str {
        &self.config.agent.name
    }

    fn version(&self) -> Option<String> {
        Some(self.config.agent.version.clone())
    }

    fn install_agent_template_path(&self) -> PathBuf {
        self.template_dir.join(&self.config.agent.install_template)
    }

    fn create_run_agent_commands(&self, instruction: &str) -> Result<Vec<ExecInput>, BuildError> {
        let invocation = self.build_invocation(instruction)?;
        Ok(vec![ExecInput {
            command: invocation.command,
            timeout_sec: Some(invocation.timeout_sec),
            ..Default::default()
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harbor::AgentContext;

    #[test]
    fn test_identity_per_preset() {
        let env = EnvSnapshot::new();
        let host = HarborAgent::new(AdapterConfig::for_preset(Preset::Host), None, env.clone());
        let local = HarborAgent::new(AdapterConfig::for_preset(Preset::Local), None, env)
            .with_template_dir("/opt/adapters");

        assert_eq!(host.name(), "open-agent-sdk");
        assert_eq!(host.version().as_deref(), Some("0.1.0-alpha.1"));
        assert_eq!(
            host.install_agent_template_path(),
            PathBuf::from("install-open-agent-sdk.sh.j2")
        );

        assert_eq!(local.name(), "open-agent-sdk-local");
        assert_eq!(local.version().as_deref(), Some("local-dev"));
        assert_eq!(
            local.install_agent_template_path(),
            PathBuf::from("/opt/adapters/install-open-agent-sdk-local.sh.j2")
        );
    }

    #[test]
    fn test_default_model_when_harness_passes_none() {
        let env = EnvSnapshot::new().with("GEMINI_API_KEY", "k");
        let agent = HarborAgent::new(AdapterConfig::default(), None, env);
        assert_eq!(agent.model(), "gemini-2.0-flash");

        let commands = agent.create_run_agent_commands("list files").unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].timeout_sec, Some(600));
        assert!(commands[0].command.contains("--model gemini-2.0-flash"));
    }

    #[test]
    fn test_sandbox_needs_no_host_credentials() {
        let agent = HarborAgent::new(
            AdapterConfig::for_preset(Preset::Sandbox),
            Some("claude-sonnet-4".to_string()),
            EnvSnapshot::new(),
        );
        let commands = agent.create_run_agent_commands("do it").unwrap();
        assert!(!commands[0].command.contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_eager_host_propagates_missing_credential() {
        let agent = HarborAgent::new(
            AdapterConfig::default(),
            Some("gpt-5".to_string()),
            EnvSnapshot::new(),
        );
        let err = agent.create_run_agent_commands("do it").unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_post_run_leaves_context_untouched() {
        let agent = HarborAgent::new(AdapterConfig::default(), None, EnvSnapshot::new());
        let mut context = AgentContext::default();
        agent.populate_context_post_run(&mut context);
        assert_eq!(context, AgentContext::default());
    }
}
