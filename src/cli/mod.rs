//! Subcommand handlers for the oas-harbor binary

mod build;
mod credentials;
mod init;

pub use build::{handle_command_command, handle_invocation_command};
pub use credentials::handle_credentials_command;
pub use init::handle_init_command;
