//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--port <n>]
//! - bookshelf list [key=value ...]
//! - bookshelf get <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bookshelf - a small HTTP API over an in-memory book catalog
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply if it does not exist
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,

        /// Port to bind to, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one listing query against the seed catalog and print the page
    List {
        /// Query parameters as key=value, e.g. genre=Fantasia sortBy=year
        params: Vec<String>,
    },

    /// Look up one book by id and print it
    Get {
        /// Book identifier
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
