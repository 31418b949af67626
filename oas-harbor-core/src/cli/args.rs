//! CLI argument parsing and configuration

use crate::config::constants::defaults;
use crate::config::models::{Preset, ResolutionMode};
use clap::{Args, ColorChoice, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Main CLI structure for oas-harbor
#[derive(Parser, Debug)]
#[command(
    name = "oas-harbor",
    version,
    about = "Build Harbor run commands for the oas coding agent CLI\n\nQuick Start:\n  export GEMINI_API_KEY=\"your_key\"\n  oas-harbor command --model gemini-2.0-flash --instruction \"fix the failing test\"",
    color = ColorChoice::Auto
)]
pub struct Cli {
    /// **Configuration file path**
    ///
    /// Default locations: ./oas-harbor.toml, ./.oas-harbor/oas-harbor.toml,
    /// ~/.oas-harbor/oas-harbor.toml
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Deployment preset (host, local, sandbox), overriding the config file
    #[arg(long, global = true, value_enum)]
    pub preset: Option<Preset>,

    /// Credential resolution mode (eager, deferred), applied after the preset
    #[arg(long, global = true, value_enum)]
    pub mode: Option<ResolutionMode>,

    /// Log level (error, warn, info, debug, trace). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shell command that runs oas for a task
    Command(BuildArgs),

    /// Print the full invocation (command, timeout, exported variables) as JSON
    Invocation(BuildArgs),

    /// Show which credentials a model needs
    Credentials {
        /// Model identifier, e.g. MiniMax-M2.5
        #[arg(long)]
        model: Option<String>,
    },

    /// Write a default oas-harbor.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Destination path
        #[arg(long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Inputs of a single build
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Model identifier; defaults to the configured default model
    #[arg(long)]
    pub model: Option<String>,

    /// Working directory passed as --cwd, overriding the configured one
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub cwd: Option<PathBuf>,

    /// Task instruction text
    #[arg(long, conflicts_with = "instruction_file")]
    pub instruction: Option<String>,

    /// Read the task instruction from a file. Stdin is used when neither
    /// --instruction nor --instruction-file is given.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub instruction_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::parse_from([
            "oas-harbor",
            "command",
            "--model",
            "MiniMax-M2.5",
            "--instruction",
            "hi",
            "--preset",
            "sandbox",
            "--mode",
            "eager",
        ]);
        assert_eq!(cli.preset, Some(Preset::Sandbox));
        assert_eq!(cli.mode, Some(ResolutionMode::Eager));
        match cli.command {
            Commands::Command(args) => {
                assert_eq!(args.model.as_deref(), Some("MiniMax-M2.5"));
                assert_eq!(args.instruction.as_deref(), Some("hi"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_instruction_sources_conflict() {
        let result = Cli::try_parse_from([
            "oas-harbor",
            "command",
            "--instruction",
            "a",
            "--instruction-file",
            "b.txt",
        ]);
        assert!(result.is_err());
    }
}
