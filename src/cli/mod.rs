//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Boot the store and serve the books API over HTTP
//! - list: One-shot listing query
//! - get: One-shot lookup by id

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{get, list, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json_to;
