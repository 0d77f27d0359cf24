//! CLI command implementations
//!
//! `serve` boots the HTTP server; `list` and `get` run the same handler the
//! server uses, once, over the seed catalog.

use std::io::Write;
use std::path::Path;

use crate::catalog::{BookRepository, InMemoryBookStore};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::rest_api::{BookHandler, CatalogHandler, ErrorResponse, ListQuery};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json_to;

/// Parse CLI arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::List { params } => list(&params),
        Command::Get { id } => get(&id),
    }
}

/// Resolve the server configuration: file (or defaults), then `--port`
pub fn load_config(config_path: &Path, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::load_or_default(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;
    Ok(config)
}

/// Boot the store and serve HTTP until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = load_config(config_path, port)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("path", config_path.display().to_string().as_str()),
            ("addr", config.socket_addr().as_str()),
        ],
    );

    let store = InMemoryBookStore::seeded();
    let count = store
        .list_all()
        .map_err(|e| CliError::boot_failed(e.to_string()))?
        .len();
    log_event_with_fields(Event::CatalogSeeded, &[("books", count.to_string().as_str())]);

    let server = HttpServer::with_repository(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        log_event_with_fields(Event::ServerFailed, &[("error", e.to_string().as_str())]);
        CliError::boot_failed(format!("HTTP server failed: {}", e))
    })
}

/// Print one listing page for `params` (`key=value` pairs)
pub fn list(params: &[String]) -> CliResult<()> {
    let handler = CatalogHandler::new(InMemoryBookStore::seeded());
    let mut stdout = std::io::stdout().lock();
    list_to(&handler, params, &mut stdout)
}

/// Print one book, or an error object and fail with a not-found error
pub fn get(id: &str) -> CliResult<()> {
    let handler = CatalogHandler::new(InMemoryBookStore::seeded());
    let mut stdout = std::io::stdout().lock();
    get_to(&handler, id, &mut stdout)
}

fn get_to<H: BookHandler, W: Write>(handler: &H, id: &str, out: &mut W) -> CliResult<()> {
    match handler.get(id) {
        Ok(book) => write_json_to(out, &book),
        Err(err) => {
            write_json_to(out, &ErrorResponse::from(err.clone()))?;
            Err(err.into())
        }
    }
}

fn list_to<H: BookHandler, W: Write>(handler: &H, params: &[String], out: &mut W) -> CliResult<()> {
    let query = ListQuery::from_pairs(params.iter().map(String::as_str));
    let page = handler.list(&query)?;
    write_json_to(out, &page)
}
