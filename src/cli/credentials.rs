use anyhow::{Context, Result};
use console::style;
use oas_harbor_core::{AdapterConfig, CredentialResolver, EnvSnapshot, ProviderClass};

/// Show the provider class and credential variables for a model
pub fn handle_credentials_command(
    config: &AdapterConfig,
    env: &EnvSnapshot,
    model: Option<&str>,
) -> Result<()> {
    let model = model.unwrap_or(&config.agent.default_model);
    let requirement = CredentialResolver::new(&config.credentials)
        .resolve(model, env)
        .with_context(|| format!("failed to resolve credentials for model '{model}'"))?;

    println!("{} {}", style("Model:").bold(), model);
    println!(
        "{} {}",
        style("Provider:").bold(),
        requirement.provider.display_name()
    );
    println!("{} {}", style("Mode:").bold(), requirement.mode);

    if requirement.provider == ProviderClass::Unknown {
        println!(
            "{}",
            style("Unrecognized model name; Gemini credentials will be used").yellow()
        );
    }

    println!("{}", style("Variables:").bold());
    for var in &requirement.variables {
        match var.masked_value() {
            Some(value) => println!("  {} = {}", style(&var.name).cyan(), value),
            None => println!(
                "  {} {}",
                style(&var.name).cyan(),
                style("(injected by the harness)").dim()
            ),
        }
    }
    Ok(())
}
