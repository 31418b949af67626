mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use oas_harbor_core::config::api_keys::load_dotenv;
use oas_harbor_core::{AdapterConfig, Cli, Commands, ConfigManager, EnvSnapshot, ResolutionMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level);

    let config = load_config(&args)?;

    match args.command {
        Commands::Command(build) => {
            let env = snapshot_env(&config);
            cli::handle_command_command(&config, &env, &build)
        }
        Commands::Invocation(build) => {
            let env = snapshot_env(&config);
            cli::handle_invocation_command(&config, &env, &build)
        }
        Commands::Credentials { model } => {
            let env = snapshot_env(&config);
            cli::handle_credentials_command(&config, &env, model.as_deref())
        }
        Commands::Init { force, output } => cli::handle_init_command(output.as_deref(), force),
    }
}

/// Logs go to stderr so stdout carries only the command or JSON output
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(Term::stderr().features().colors_supported())
        .with_target(false)
        .init();
}

fn load_config(args: &Cli) -> Result<AdapterConfig> {
    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path),
        None => ConfigManager::load(),
    }
    .context("failed to load configuration")?;

    if let Some(path) = manager.config_path() {
        tracing::info!(path = %path.display(), "using config file");
    }

    let mut config = manager.into_config();
    if let Some(preset) = args.preset {
        config.apply_preset(preset);
    }
    if let Some(mode) = args.mode {
        config.credentials.mode = mode;
    }
    Ok(config)
}

/// Deferred mode never reads values, so only eager mode looks at `.env`
fn snapshot_env(config: &AdapterConfig) -> EnvSnapshot {
    if config.credentials.mode == ResolutionMode::Eager {
        load_dotenv();
    }
    EnvSnapshot::from_process()
}
