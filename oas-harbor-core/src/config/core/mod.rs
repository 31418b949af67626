pub mod agent;
pub mod credentials;

pub use agent::AgentConfig;
pub use credentials::CredentialsConfig;
