//! CLI module for shelfbench
//!
//! Provides command-line interface for:
//! - serve: Seed the store and run the HTTP server
//! - seed: One-shot seed run that reports what it created

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{boot, run, run_command, seed, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
