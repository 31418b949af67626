use oas_harbor_core::config::constants::config_files;
use oas_harbor_core::{AdapterConfig, ConfigManager, ResolutionMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_workspace_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::write(
        temp_dir.path().join(config_files::FILE_NAME),
        r#"
[agent]
cli_command = "oas-canary"
timeout_sec = 900

[credentials]
mode = "deferred"
minimax_token_env = "ANTHROPIC_API_KEY"
"#,
    )
    .expect("Failed to write config");

    let manager = ConfigManager::load_from_workspace(temp_dir.path()).expect("load failed");
    let config = manager.config();

    assert_eq!(
        manager.config_path(),
        Some(temp_dir.path().join(config_files::FILE_NAME).as_path())
    );
    assert_eq!(config.agent.cli_command, "oas-canary");
    assert_eq!(config.agent.timeout_sec, 900);
    assert_eq!(config.agent.output_format, "json");
    assert_eq!(config.credentials.mode, ResolutionMode::Deferred);
    assert_eq!(config.credentials.minimax_token_env, "ANTHROPIC_API_KEY");
}

#[test]
fn test_load_from_dot_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dot_dir = temp_dir.path().join(config_files::DIR_NAME);
    fs::create_dir_all(&dot_dir).expect("Failed to create dot dir");
    fs::write(
        dot_dir.join(config_files::FILE_NAME),
        "[agent]\ndefault_model = \"claude-sonnet-4\"\n",
    )
    .expect("Failed to write config");

    let manager = ConfigManager::load_from_workspace(temp_dir.path()).expect("load failed");
    assert_eq!(manager.config().agent.default_model, "claude-sonnet-4");
}

#[test]
fn test_invalid_file_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[agent\ncli_command = ").expect("Failed to write config");

    let err = ConfigManager::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.toml"));
}

#[test]
fn test_sample_config_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("nested").join(config_files::FILE_NAME);

    assert!(AdapterConfig::create_sample_config(&path, false).expect("write failed"));
    assert!(!AdapterConfig::create_sample_config(&path, false).expect("second write failed"));

    let loaded = ConfigManager::load_from_file(&path).expect("load failed");
    assert_eq!(loaded.config(), &AdapterConfig::default());

    assert!(AdapterConfig::create_sample_config(&path, true).expect("forced write failed"));
}
