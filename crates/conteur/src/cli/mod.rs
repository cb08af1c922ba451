//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the conteur binary.

mod commands;
mod generate;
mod providers;
mod serve;

pub use commands::{Cli, Commands, GenerateArgs, ServeArgs};
pub use generate::run_generate;
pub use providers::list_providers;
pub use serve::run_serve;
