//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfbench serve [--config <path>] [--port <port>] [--no-seed]
//! - shelfbench seed [--config <path>] [--authors <n>] [--books <n>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfbench - timed bookstore endpoints for comparing query access patterns
#[derive(Parser, Debug)]
#[command(name = "shelfbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the store (unless populated) and serve the lesson endpoints
    Serve {
        /// Path to a JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,
    },

    /// Generate mock data into a fresh store and report what was created
    Seed {
        /// Path to a JSON configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the number of authors
        #[arg(long)]
        authors: Option<usize>,

        /// Override the number of books
        #[arg(long)]
        books: Option<usize>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
