use anyhow::{Context, Result};
use oas_harbor_core::{AdapterConfig, BuildArgs, CommandBuilder, EnvSnapshot, Invocation};
use std::io::Read;

/// Print the shell command for a task
pub fn handle_command_command(
    config: &AdapterConfig,
    env: &EnvSnapshot,
    args: &BuildArgs,
) -> Result<()> {
    let invocation = build_invocation(config, env, args)?;
    println!("{}", invocation.command);
    Ok(())
}

/// Print the invocation as pretty JSON
pub fn handle_invocation_command(
    config: &AdapterConfig,
    env: &EnvSnapshot,
    args: &BuildArgs,
) -> Result<()> {
    let invocation = build_invocation(config, env, args)?;
    let json = serde_json::to_string_pretty(&invocation)
        .context("failed to serialize invocation")?;
    println!("{json}");
    Ok(())
}

fn build_invocation(
    config: &AdapterConfig,
    env: &EnvSnapshot,
    args: &BuildArgs,
) -> Result<Invocation> {
    let instruction = read_instruction(args)?;
    let model = args
        .model
        .as_deref()
        .unwrap_or(&config.agent.default_model);

    let invocation = CommandBuilder::new(config, env)
        .build(model, &instruction, args.cwd.as_deref())
        .with_context(|| format!("failed to build oas command for model '{model}'"))?;
    Ok(invocation)
}

fn read_instruction(args: &BuildArgs) -> Result<String> {
    if let Some(text) = &args.instruction {
        return Ok(text.clone());
    }
    if let Some(path) = &args.instruction_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read instruction file: {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read instruction from stdin")?;
    Ok(buffer)
}
