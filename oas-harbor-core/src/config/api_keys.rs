//! Credential resolution for the `oas` CLI.
//!
//! Each model family authenticates through a fixed set of environment
//! variables. The resolver maps a model identifier to that set and, in eager
//! mode, reads the values from an explicit [`EnvSnapshot`] instead of the
//! process environment, so callers decide where values come from.

use crate::config::core::CredentialsConfig;
use crate::config::models::{ProviderClass, ResolutionMode};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Credential errors surfaced before any command is built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("{provider} model requires {variable} environment variable")]
    Missing {
        variable: String,
        provider: &'static str,
    },
}

/// Immutable view of environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment. Entries that are not valid
    /// UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of `name` when set to something other than the empty string
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One required variable, with its value once resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialVar {
    pub name: String,
    #[serde(skip)]
    pub value: Option<String>,
    /// Whether the value should be masked when displayed
    pub secret: bool,
}

impl CredentialVar {
    /// Value with all but the last four characters masked
    pub fn masked_value(&self) -> Option<String> {
        let value = self.value.as_deref()?;
        if !self.secret {
            return Some(value.to_string());
        }
        let count = value.chars().count();
        if count <= 8 {
            return Some("****".to_string());
        }
        let tail: String = value.chars().skip(count - 4).collect();
        Some(format!("****{tail}"))
    }
}

/// Credentials a model needs, in the order they are checked and exported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRequirement {
    /// Class detected from the model name (may be `Unknown`)
    pub provider: ProviderClass,
    pub mode: ResolutionMode,
    pub variables: Vec<CredentialVar>,
    /// Variable holding the MiniMax base URL, when one is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url_var: Option<String>,
}

impl CredentialRequirement {
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.value.as_deref())
    }

    /// Resolved base URL (eager mode, MiniMax only)
    pub fn base_url(&self) -> Option<&str> {
        self.base_url_var.as_deref().and_then(|name| self.value(name))
    }

    /// Name/value pairs to export inline. Empty in deferred mode.
    pub fn exports(&self) -> Vec<(&str, &str)> {
        self.variables
            .iter()
            .filter_map(|v| v.value.as_deref().map(|value| (v.name.as_str(), value)))
            .collect()
    }
}

/// Maps model identifiers to credential requirements
#[derive(Debug, Clone, Copy)]
pub struct CredentialResolver<'a> {
    config: &'a CredentialsConfig,
}

impl<'a> CredentialResolver<'a> {
    pub fn new(config: &'a CredentialsConfig) -> Self {
        Self { config }
    }

    /// Variable names required for `model`, without touching any environment
    pub fn required_env_var_names(&self, model: &str) -> (ProviderClass, Vec<&'a str>) {
        let provider = ProviderClass::classify(model);
        let names = match provider.effective() {
            ProviderClass::MiniMax => vec![
                self.config.minimax_token_env.as_str(),
                self.config.minimax_base_url_env.as_str(),
            ],
            ProviderClass::Claude => vec![self.config.anthropic_env.as_str()],
            ProviderClass::OpenAI => vec![self.config.openai_env.as_str()],
            ProviderClass::Gemini | ProviderClass::Unknown => {
                vec![self.config.gemini_env.as_str()]
            }
        };
        (provider, names)
    }

    /// Resolve the credentials for `model` according to the configured mode.
    ///
    /// Deferred mode never fails. Eager mode fails on the first variable that
    /// is unset or empty in `env`, in requirement order.
    pub fn resolve(
        &self,
        model: &str,
        env: &EnvSnapshot,
    ) -> Result<CredentialRequirement, CredentialError> {
        let (provider, names) = self.required_env_var_names(model);
        if provider == ProviderClass::Unknown {
            warn!(
                model,
                fallback = %provider.effective(),
                "unrecognized model name, using Gemini credentials"
            );
        }

        let base_url_var = provider
            .is_minimax()
            .then(|| self.config.minimax_base_url_env.clone());

        let mut variables = Vec::with_capacity(names.len());
        for name in names {
            let value = match self.config.mode {
                ResolutionMode::Deferred => None,
                ResolutionMode::Eager => {
                    let value = env.non_empty(name).ok_or_else(|| CredentialError::Missing {
                        variable: name.to_string(),
                        provider: provider.display_name(),
                    })?;
                    Some(value.to_string())
                }
            };
            variables.push(CredentialVar {
                name: name.to_string(),
                value,
                secret: base_url_var.as_deref() != Some(name),
            });
        }

        debug!(
            model,
            %provider,
            mode = %self.config.mode,
            vars = ?variables.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
            "resolved credentials"
        );

        Ok(CredentialRequirement {
            provider,
            mode: self.config.mode,
            variables,
            base_url_var,
        })
    }
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is fine; a malformed one is reported and skipped.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded environment variables from .env");
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            warn!(error = %e, "failed to load .env file");
        }
    }
}
