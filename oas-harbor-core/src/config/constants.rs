/// Model identifiers and the prefixes used to classify them
pub mod models {
    /// Model used when the harness does not pass one
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

    // Classification prefixes, matched case-insensitively in this order
    pub const MINIMAX_PREFIXES: &[&str] = &["minimax"];
    pub const GEMINI_PREFIXES: &[&str] = &["gemini", "google"];
    pub const CLAUDE_PREFIXES: &[&str] = &["claude"];
    pub const OPENAI_PREFIXES: &[&str] = &["gpt", "openai"];
}

/// Credential environment variable names
pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const ANTHROPIC_AUTH_TOKEN: &str = "ANTHROPIC_AUTH_TOKEN";
    pub const ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";
}

/// Flags understood by the `oas` CLI
pub mod cli_flags {
    pub const PROMPT: &str = "-p";
    pub const MODEL: &str = "--model";
    pub const OUTPUT_FORMAT: &str = "--output-format";
    pub const CWD: &str = "--cwd";
    pub const PROVIDER: &str = "--provider";
    pub const BASE_URL: &str = "--base-url";

    /// Provider name passed for Anthropic-compatible endpoints (MiniMax)
    pub const ANTHROPIC_PROVIDER: &str = "anthropic";
}

pub mod defaults {
    pub const CLI_COMMAND: &str = "oas";
    /// Expanded by the target shell, so `$HOME` refers to the sandbox user
    pub const INSTALL_DIR: &str = "$HOME/.bun/bin";
    pub const OUTPUT_FORMAT: &str = "json";
    pub const TIMEOUT_SEC: u64 = 600;
    pub const WORKING_DIR: &str = "/workspace";
    pub const HEREDOC_DELIMITER: &str = "OAS_INSTRUCTION_EOF";
    pub const PROMPT_VAR: &str = "OAS_PROMPT";
    pub const LOG_LEVEL: &str = "warn";
}

/// Identity reported to the harness for each adapter flavour
pub mod agents {
    pub const NAME: &str = "open-agent-sdk";
    pub const VERSION: &str = "0.1.0-alpha.1";
    pub const INSTALL_TEMPLATE: &str = "install-open-agent-sdk.sh.j2";

    pub const LOCAL_NAME: &str = "open-agent-sdk-local";
    pub const LOCAL_VERSION: &str = "local-dev";
    pub const LOCAL_INSTALL_TEMPLATE: &str = "install-open-agent-sdk-local.sh.j2";
}

/// Config file discovery
pub mod config_files {
    pub const FILE_NAME: &str = "oas-harbor.toml";
    pub const DIR_NAME: &str = ".oas-harbor";
}
