//! bookshelf - a small, deterministic HTTP API over an in-memory book catalog
//!
//! Listing runs a fixed pipeline over a snapshot of the store:
//! filter, then sort, then paginate.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
