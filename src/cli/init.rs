use anyhow::{Context, Result};
use console::style;
use oas_harbor_core::AdapterConfig;
use oas_harbor_core::config::constants::config_files;
use std::path::{Path, PathBuf};

/// Handle the init command
pub fn handle_init_command(output: Option<&Path>, force: bool) -> Result<()> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(config_files::FILE_NAME));

    let written = AdapterConfig::create_sample_config(&output, force)
        .context("failed to initialize configuration file")?;

    if written {
        println!(
            "{} {}",
            style("Wrote").green().bold(),
            output.display()
        );
    } else {
        println!(
            "{} {} already exists (use --force to overwrite)",
            style("Skipped").yellow().bold(),
            output.display()
        );
    }
    Ok(())
}
