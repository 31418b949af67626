//! Model classification and adapter flavours
//!
//! A model identifier is an opaque string chosen by the harness operator. The
//! only thing the adapter needs from it is which backend family it belongs to,
//! since that decides the credentials and the extra CLI flags.

use crate::config::constants::models;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend family of a model identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderClass {
    /// MiniMax models served through an Anthropic-compatible endpoint
    MiniMax,
    /// Google Gemini models
    Gemini,
    /// Anthropic Claude models
    Claude,
    /// OpenAI GPT models
    OpenAI,
    /// Anything else. Resolves exactly like [`ProviderClass::Gemini`].
    Unknown,
}

impl ProviderClass {
    /// Classify a model identifier by case-insensitive prefix. First match wins.
    pub fn classify(model: &str) -> Self {
        let lower = model.to_lowercase();
        let matches = |prefixes: &[&str]| prefixes.iter().any(|p| lower.starts_with(p));

        if matches(models::MINIMAX_PREFIXES) {
            ProviderClass::MiniMax
        } else if matches(models::GEMINI_PREFIXES) {
            ProviderClass::Gemini
        } else if matches(models::CLAUDE_PREFIXES) {
            ProviderClass::Claude
        } else if matches(models::OPENAI_PREFIXES) {
            ProviderClass::OpenAI
        } else {
            ProviderClass::Unknown
        }
    }

    pub fn is_minimax(&self) -> bool {
        matches!(self, ProviderClass::MiniMax)
    }

    /// The class whose credentials are actually used
    pub fn effective(&self) -> Self {
        match self {
            ProviderClass::Unknown => ProviderClass::Gemini,
            other => *other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderClass::MiniMax => "MiniMax",
            ProviderClass::Gemini => "Gemini",
            ProviderClass::Claude => "Claude",
            ProviderClass::OpenAI => "OpenAI",
            ProviderClass::Unknown => "Unknown (Gemini fallback)",
        }
    }
}

impl fmt::Display for ProviderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderClass::MiniMax => write!(f, "minimax"),
            ProviderClass::Gemini => write!(f, "gemini"),
            ProviderClass::Claude => write!(f, "claude"),
            ProviderClass::OpenAI => write!(f, "openai"),
            ProviderClass::Unknown => write!(f, "unknown"),
        }
    }
}

/// How credential values reach the `oas` process
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Read values from the calling environment now and export them inline
    #[default]
    Eager,
    /// Only name the variables; the harness injects them into the sandbox
    Deferred,
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionMode::Eager => write!(f, "eager"),
            ResolutionMode::Deferred => write!(f, "deferred"),
        }
    }
}

/// Named adapter configurations matching the deployment topologies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Host shares its environment; runs in `/workspace`
    #[default]
    Host,
    /// Local development install from source; no fixed working directory
    Local,
    /// Isolated container with harness-injected environment
    Sandbox,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Host => write!(f, "host"),
            Preset::Local => write!(f, "local"),
            Preset::Sandbox => write!(f, "sandbox"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid preset: {0} (expected host, local or sandbox)")]
pub struct PresetParseError(pub String);

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "host" => Ok(Preset::Host),
            "local" => Ok(Preset::Local),
            "sandbox" => Ok(Preset::Sandbox),
            _ => Err(PresetParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(ProviderClass::classify("MiniMax-M2.5"), ProviderClass::MiniMax);
        assert_eq!(ProviderClass::classify("minimax-text-01"), ProviderClass::MiniMax);
        assert_eq!(ProviderClass::classify("gemini-2.0-flash"), ProviderClass::Gemini);
        assert_eq!(ProviderClass::classify("google/gemma"), ProviderClass::Gemini);
        assert_eq!(ProviderClass::classify("Claude-Sonnet-4"), ProviderClass::Claude);
        assert_eq!(ProviderClass::classify("gpt-4o"), ProviderClass::OpenAI);
        assert_eq!(ProviderClass::classify("OpenAI/o3"), ProviderClass::OpenAI);
    }

    #[test]
    fn test_classify_is_prefix_only() {
        // "claude" appears, but not as a prefix
        assert_eq!(
            ProviderClass::classify("my-claude-finetune"),
            ProviderClass::Unknown
        );
        assert_eq!(ProviderClass::classify(""), ProviderClass::Unknown);
    }

    #[test]
    fn test_unknown_falls_back_to_gemini() {
        let class = ProviderClass::classify("gemin-2.0-flash");
        assert_eq!(class, ProviderClass::Unknown);
        assert_eq!(class.effective(), ProviderClass::Gemini);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Sandbox".parse::<Preset>(), Ok(Preset::Sandbox));
        assert!("docker".parse::<Preset>().is_err());
    }
}
