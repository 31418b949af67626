//! Command-line interface module
//!
//! This module handles all CLI argument parsing and command definitions.

pub mod args;

pub use args::*;
