//! # oas-harbor-core - Harbor adapter for the `oas` CLI
//!
//! `oas-harbor-core` lets the Harbor benchmark harness run the `oas` coding
//! agent as a subprocess. Given a model name and a task instruction it builds
//! one shell command line that puts the CLI on `PATH`, makes the right
//! credentials available, and invokes `oas -p <instruction>` with the flags
//! the model's backend needs.
//!
//! ## Highlights
//!
//! - **Credential resolution**: model names are classified by prefix
//!   (MiniMax, Gemini, Claude, OpenAI, with Gemini as fallback) and mapped to
//!   the environment variables that backend requires. Values are read from an
//!   explicit [`EnvSnapshot`] (eager mode) or left to the harness (deferred
//!   mode).
//! - **Safe instruction embedding**: the instruction travels through a
//!   quoted heredoc, so quotes, `$`, backticks and trailing newlines reach the
//!   CLI unchanged.
//! - **Configuration-first**: CLI location, timeout, working directory and
//!   variable names come from `oas-harbor.toml`, with defaults in
//!   `config::constants`.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use oas_harbor_core::{AdapterConfig, CommandBuilder, EnvSnapshot};
//!
//! let config = AdapterConfig::default();
//! let env = EnvSnapshot::from_process();
//! let invocation = CommandBuilder::new(&config, &env)
//!     .build("gemini-2.0-flash", "Fix the failing test", None)?;
//! println!("{}", invocation.command);
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod harbor;

// Re-exports for convenience
pub use cli::args::{BuildArgs, Cli, Commands};
pub use command::{BuildError, CommandBuilder, Invocation};
pub use config::{
    AdapterConfig, ConfigManager, CredentialError, CredentialRequirement, CredentialResolver,
    EnvSnapshot, Preset, ProviderClass, ResolutionMode,
};
pub use harbor::{AgentContext, ExecInput, HarborAgent, InstalledAgent};
