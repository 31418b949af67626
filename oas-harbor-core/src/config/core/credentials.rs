use crate::config::constants::env_vars;
use crate::config::models::ResolutionMode;
use serde::{Deserialize, Serialize};

/// Which environment variables carry credentials, and when they are read
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialsConfig {
    /// Eager reads values now, deferred only names them
    #[serde(default)]
    pub mode: ResolutionMode,

    #[serde(default = "default_gemini_env")]
    pub gemini_env: String,

    #[serde(default = "default_anthropic_env")]
    pub anthropic_env: String,

    #[serde(default = "default_openai_env")]
    pub openai_env: String,

    /// Token variable for MiniMax. `ANTHROPIC_AUTH_TOKEN` on hosts that export
    /// bearer tokens, `ANTHROPIC_API_KEY` where the harness injects an API key.
    #[serde(default = "default_minimax_token_env")]
    pub minimax_token_env: String,

    /// Base URL variable of the Anthropic-compatible MiniMax endpoint
    #[serde(default = "default_minimax_base_url_env")]
    pub minimax_base_url_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::default(),
            gemini_env: default_gemini_env(),
            anthropic_env: default_anthropic_env(),
            openai_env: default_openai_env(),
            minimax_token_env: default_minimax_token_env(),
            minimax_base_url_env: default_minimax_base_url_env(),
        }
    }
}

fn default_gemini_env() -> String {
    env_vars::GEMINI_API_KEY.to_string()
}
fn default_anthropic_env() -> String {
    env_vars::ANTHROPIC_API_KEY.to_string()
}
fn default_openai_env() -> String {
    env_vars::OPENAI_API_KEY.to_string()
}
fn default_minimax_token_env() -> String {
    env_vars::ANTHROPIC_AUTH_TOKEN.to_string()
}
fn default_minimax_base_url_env() -> String {
    env_vars::ANTHROPIC_BASE_URL.to_string()
}
