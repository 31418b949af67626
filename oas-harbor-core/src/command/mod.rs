//! Builds the shell command line that runs the `oas` CLI for one task.

pub mod heredoc;

use crate::config::api_keys::{CredentialError, CredentialRequirement, CredentialResolver, EnvSnapshot};
use crate::config::constants::{cli_flags, defaults};
use crate::config::loader::AdapterConfig;
use crate::config::models::{ProviderClass, ResolutionMode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("Instruction contains a NUL byte, which cannot be passed as a shell argument")]
    NulInInstruction,
    #[error("Working directory is not valid UTF-8: {}", .0.display())]
    NonUtf8Cwd(PathBuf),
}

/// A fully assembled run of the `oas` CLI, ready for the harness to execute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Shell command line, executed with `sh -c` (or `bash -lc`) by the harness
    pub command: String,
    pub model: String,
    pub provider: ProviderClass,
    pub mode: ResolutionMode,
    /// Names of the variables exported inline (eager mode only)
    pub exported_vars: Vec<String>,
    /// Value of `--cwd`, when one was passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    pub output_format: String,
    pub timeout_sec: u64,
    pub heredoc_delimiter: String,
}

/// Assembles [`Invocation`]s from an [`AdapterConfig`] and an environment snapshot
#[derive(Debug, Clone, Copy)]
pub struct CommandBuilder<'a> {
    config: &'a AdapterConfig,
    env: &'a EnvSnapshot,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(config: &'a AdapterConfig, env: &'a EnvSnapshot) -> Self {
        Self { config, env }
    }

    /// Build the invocation for `model` and `instruction`.
    ///
    /// An explicit `cwd` takes precedence over the configured working
    /// directory and must be valid UTF-8. Credentials are resolved first, so a
    /// missing variable fails before anything is assembled.
    pub fn build(
        &self,
        model: &str,
        instruction: &str,
        cwd: Option<&Path>,
    ) -> Result<Invocation, BuildError> {
        let credentials = CredentialResolver::new(&self.config.credentials).resolve(model, self.env)?;

        if instruction.contains('\0') {
            return Err(BuildError::NulInInstruction);
        }

        let agent = &self.config.agent;
        let cwd = match cwd {
            Some(path) => Some(
                path.to_str()
                    .ok_or_else(|| BuildError::NonUtf8Cwd(path.to_path_buf()))?
                    .to_string(),
            ),
            None => agent.working_dir.clone(),
        };
        let delimiter = heredoc::choose_delimiter(instruction, defaults::HEREDOC_DELIMITER);

        let mut segments = vec![format!("export PATH=\"{}:$PATH\"", agent.install_dir)];
        for (name, value) in credentials.exports() {
            segments.push(format!("export {name}={}", shell_words::quote(value)));
        }
        segments.push(heredoc::assign_heredoc(
            defaults::PROMPT_VAR,
            instruction,
            &delimiter,
        ));
        segments.push(self.cli_line(model, &credentials, cwd.as_deref()));

        let command = segments.join(" && ");
        debug!(
            model,
            provider = %credentials.provider,
            mode = %credentials.mode,
            cwd = cwd.as_deref().unwrap_or("-"),
            delimiter = %delimiter,
            "built oas invocation"
        );

        Ok(Invocation {
            command,
            model: model.to_string(),
            provider: credentials.provider,
            mode: credentials.mode,
            exported_vars: credentials
                .exports()
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect(),
            cwd,
            output_format: agent.output_format.clone(),
            timeout_sec: agent.timeout_sec,
            heredoc_delimiter: delimiter,
        })
    }

    fn cli_line(&self, model: &str, credentials: &CredentialRequirement, cwd: Option<&str>) -> String {
        let agent = &self.config.agent;
        let mut parts: Vec<Cow<'_, str>> = vec![shell_words::quote(&agent.cli_command)];

        if credentials.provider.is_minimax() {
            parts.push(cli_flags::PROVIDER.into());
            parts.push(cli_flags::ANTHROPIC_PROVIDER.into());
            parts.push(cli_flags::BASE_URL.into());
            parts.push(self.base_url_arg(credentials));
        }

        parts.push(cli_flags::PROMPT.into());
        parts.push(format!("\"${}\"", defaults::PROMPT_VAR).into());
        parts.push(cli_flags::MODEL.into());
        parts.push(shell_words::quote(model));
        parts.push(cli_flags::OUTPUT_FORMAT.into());
        parts.push(shell_words::quote(&agent.output_format));

        if let Some(cwd) = cwd {
            parts.push(cli_flags::CWD.into());
            parts.push(shell_words::quote(cwd));
        }

        parts.join(" ")
    }

    /// Resolved URL in eager mode, a reference to the variable otherwise
    fn base_url_arg(&self, credentials: &CredentialRequirement) -> Cow<'static, str> {
        match credentials.base_url() {
            Some(url) => Cow::Owned(shell_words::quote(url).into_owned()),
            None => {
                let var = credentials
                    .base_url_var
                    .as_deref()
                    .unwrap_or(&self.config.credentials.minimax_base_url_env);
                Cow::Owned(format!("\"${var}\""))
            }
        }
    }
}
