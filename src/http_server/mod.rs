//! # HTTP Server Module
//!
//! Serves the books API over HTTP.
//!
//! # Endpoints
//!
//! - `GET /books` - Filtered, sorted, paginated listing
//! - `GET /books/:id` - Single book, 404 when absent
//! - `GET /health` - Health check
//! - `GET /metrics` - Request counters

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;
