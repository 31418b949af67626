use crate::config::constants::{agents, defaults};
use serde::{Deserialize, Serialize};

/// How the `oas` CLI is located and invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AgentConfig {
    /// Agent name reported to the harness
    #[serde(default = "default_name")]
    pub name: String,

    /// Agent version reported to the harness
    #[serde(default = "default_version")]
    pub version: String,

    /// File name of the install script template, next to the adapter
    #[serde(default = "default_install_template")]
    pub install_template: String,

    /// Executable name looked up on `PATH`
    #[serde(default = "default_cli_command")]
    pub cli_command: String,

    /// Directory prepended to `PATH`. Expanded by the target shell inside
    /// double quotes, so it may reference variables such as `$HOME`.
    #[serde(default = "default_install_dir")]
    pub install_dir: String,

    /// Model used when the harness does not pass one
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Value of `--output-format`
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Execution timeout handed to the harness
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    /// Fixed working directory passed as `--cwd`. An empty string in the
    /// file means no flag; a missing key means `/workspace`.
    #[serde(default = "default_working_dir", with = "empty_as_none")]
    pub working_dir: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            install_template: default_install_template(),
            cli_command: default_cli_command(),
            install_dir: default_install_dir(),
            default_model: default_model(),
            output_format: default_output_format(),
            timeout_sec: default_timeout_sec(),
            working_dir: default_working_dir(),
        }
    }
}

fn default_name() -> String {
    agents::NAME.to_string()
}
fn default_version() -> String {
    agents::VERSION.to_string()
}
fn default_install_template() -> String {
    agents::INSTALL_TEMPLATE.to_string()
}
fn default_cli_command() -> String {
    defaults::CLI_COMMAND.to_string()
}
fn default_install_dir() -> String {
    defaults::INSTALL_DIR.to_string()
}
fn default_model() -> String {
    crate::config::constants::models::DEFAULT_MODEL.to_string()
}
fn default_output_format() -> String {
    defaults::OUTPUT_FORMAT.to_string()
}
fn default_timeout_sec() -> u64 {
    defaults::TIMEOUT_SEC
}
fn default_working_dir() -> Option<String> {
    Some(defaults::WORKING_DIR.to_string())
}

/// `Option<String>` stored as a plain string, with `""` standing for `None`
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok((!value.is_empty()).then_some(value))
    }
}
