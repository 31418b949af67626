use crate::config::constants::{agents, config_files, defaults, env_vars};
use crate::config::core::{AgentConfig, CredentialsConfig};
use crate::config::models::{Preset, ResolutionMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure for oas-harbor
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdapterConfig {
    /// CLI location, flags and harness-facing identity
    #[serde(default)]
    pub agent: AgentConfig,

    /// Credential variable names and resolution mode
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl AdapterConfig {
    /// Default configuration for a deployment preset
    pub fn for_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Overwrite the preset-owned fields, leaving everything else untouched
    pub fn apply_preset(&mut self, preset: Preset) {
        let workspace = Some(defaults::WORKING_DIR.to_string());
        match preset {
            Preset::Host => {
                self.set_identity(agents::NAME, agents::VERSION, agents::INSTALL_TEMPLATE);
                self.agent.working_dir = workspace;
                self.credentials.mode = ResolutionMode::Eager;
                self.credentials.minimax_token_env = env_vars::ANTHROPIC_AUTH_TOKEN.to_string();
            }
            Preset::Local => {
                self.set_identity(
                    agents::LOCAL_NAME,
                    agents::LOCAL_VERSION,
                    agents::LOCAL_INSTALL_TEMPLATE,
                );
                self.agent.working_dir = None;
                self.credentials.mode = ResolutionMode::Eager;
                self.credentials.minimax_token_env = env_vars::ANTHROPIC_AUTH_TOKEN.to_string();
            }
            Preset::Sandbox => {
                self.set_identity(agents::NAME, agents::VERSION, agents::INSTALL_TEMPLATE);
                self.agent.working_dir = workspace;
                self.credentials.mode = ResolutionMode::Deferred;
                self.credentials.minimax_token_env = env_vars::ANTHROPIC_API_KEY.to_string();
            }
        }
    }

    fn set_identity(&mut self, name: &str, version: &str, template: &str) {
        self.agent.name = name.to_string();
        self.agent.version = version.to_string();
        self.agent.install_template = template.to_string();
    }

    /// Write the default configuration to `output`
    pub fn create_sample_config<P: AsRef<Path>>(output: P, force: bool) -> Result<bool> {
        let output = output.as_ref();
        if output.exists() && !force {
            return Ok(false);
        }

        let config_content = toml::to_string_pretty(&AdapterConfig::default())
            .context("Failed to serialize default configuration")?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(true)
    }
}

/// Configuration manager for locating and loading `oas-harbor.toml`
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AdapterConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Search `workspace`, then `workspace/.oas-harbor`, then the home
    /// directory. Falls back to defaults when no file exists.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(config_files::FILE_NAME),
            workspace
                .join(config_files::DIR_NAME)
                .join(config_files::FILE_NAME),
        ];
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(
                home_dir
                    .join(config_files::DIR_NAME)
                    .join(config_files::FILE_NAME),
            );
        }

        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        debug!(workspace = %workspace.display(), "no config file found, using defaults");
        Ok(Self {
            config: AdapterConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AdapterConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config file");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Take ownership of the loaded configuration
    pub fn into_config(self) -> AdapterConfig {
        self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_where_expected() {
        let host = AdapterConfig::for_preset(Preset::Host);
        let local = AdapterConfig::for_preset(Preset::Local);
        let sandbox = AdapterConfig::for_preset(Preset::Sandbox);

        assert_eq!(host, AdapterConfig::default());

        assert_eq!(local.agent.name, "open-agent-sdk-local");
        assert_eq!(local.agent.version, "local-dev");
        assert_eq!(local.agent.working_dir, None);
        assert_eq!(local.credentials.mode, ResolutionMode::Eager);

        assert_eq!(sandbox.agent.name, "open-agent-sdk");
        assert_eq!(sandbox.credentials.mode, ResolutionMode::Deferred);
        assert_eq!(sandbox.credentials.minimax_token_env, "ANTHROPIC_API_KEY");
        assert_eq!(sandbox.agent.working_dir.as_deref(), Some("/workspace"));
    }

    #[test]
    fn test_presets_survive_toml_round_trip() {
        for preset in [Preset::Host, Preset::Local, Preset::Sandbox] {
            let config = AdapterConfig::for_preset(preset);
            let text = toml::to_string_pretty(&config).unwrap();
            let parsed: AdapterConfig = toml::from_str(&text).unwrap();
            assert_eq!(parsed, config, "preset {preset}");
        }
    }

    #[test]
    fn test_empty_working_dir_means_no_cwd() {
        let config: AdapterConfig = toml::from_str(
            r#"
[agent]
working_dir = ""
"#,
        )
        .unwrap();
        assert_eq!(config.agent.working_dir, None);

        let config: AdapterConfig = toml::from_str("[agent]\ntimeout_sec = 60\n").unwrap();
        assert_eq!(config.agent.working_dir.as_deref(), Some("/workspace"));
    }

    #[test]
    fn test_apply_preset_keeps_unrelated_fields() {
        let mut config = AdapterConfig::default();
        config.agent.cli_command = "oas-nightly".to_string();
        config.agent.timeout_sec = 30;
        config.apply_preset(Preset::Sandbox);

        assert_eq!(config.agent.cli_command, "oas-nightly");
        assert_eq!(config.agent.timeout_sec, 30);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AdapterConfig = toml::from_str(
            r#"
[credentials]
mode = "deferred"
"#,
        )
        .unwrap();

        assert_eq!(config.credentials.mode, ResolutionMode::Deferred);
        assert_eq!(config.credentials.gemini_env, "GEMINI_API_KEY");
        assert_eq!(config.agent.timeout_sec, 600);
        assert_eq!(config.agent.cli_command, "oas");
    }
}
