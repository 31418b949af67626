//! oas-harbor configuration module
//!
//! Loads `oas-harbor.toml`, holds the compiled-in defaults, and resolves the
//! credentials a model needs.

pub mod api_keys;
pub mod constants;
pub mod core;
pub mod loader;
pub mod models;

pub use api_keys::{
    CredentialError, CredentialRequirement, CredentialResolver, CredentialVar, EnvSnapshot,
};
pub use core::{AgentConfig, CredentialsConfig};
pub use loader::{AdapterConfig, ConfigManager};
pub use models::{Preset, ProviderClass, ResolutionMode};
