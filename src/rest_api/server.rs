//! # Books HTTP Routes
//!
//! Axum routes for `/books` and `/books/:id`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::catalog::BookRecord;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

use super::errors::{RestError, RestResult};
use super::handler::BookHandler;
use super::parser::ListQuery;
use super::response::ListResponse;

/// Books API state
pub struct RestServer<H: BookHandler> {
    handler: Arc<H>,
    metrics: Arc<MetricsRegistry>,
}

impl<H: BookHandler + 'static> RestServer<H> {
    pub fn new(handler: H, metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            handler: Arc::new(handler),
            metrics,
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/books", get(list_handler::<H>))
            .route("/books/:id", get(get_handler::<H>))
            .with_state(state)
    }
}

/// Shared state type
type ServerState<H> = Arc<RestServer<H>>;

/// Log store failures before they become a 500
fn observe_failure<T>(result: RestResult<T>, route: &str) -> RestResult<T> {
    if let Err(RestError::Repository(ref err)) = result {
        log_event_with_fields(
            Event::RequestFailed,
            &[("route", route), ("error", err.to_string().as_str())],
        );
    }
    result
}

/// List books handler
async fn list_handler<H: BookHandler + 'static>(
    State(server): State<ServerState<H>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<BookRecord>>, RestError> {
    let params = ListQuery::parse(&query);
    let page = observe_failure(server.handler.list(&params), "/books")?;

    server.metrics.record_list(page.data.len());
    log_event_with_fields(
        Event::BooksListed,
        &[
            ("total", page.total.to_string().as_str()),
            ("page", page.page.to_string().as_str()),
            ("returned", page.data.len().to_string().as_str()),
        ],
    );

    Ok(Json(page))
}

/// Get single book handler
async fn get_handler<H: BookHandler + 'static>(
    State(server): State<ServerState<H>>,
    Path(id): Path<String>,
) -> Result<Json<BookRecord>, RestError> {
    match observe_failure(server.handler.get(&id), "/books/:id") {
        Ok(book) => {
            server.metrics.record_lookup(true);
            log_event_with_fields(Event::BookFound, &[("id", id.as_str())]);
            Ok(Json(book))
        }
        Err(err) => {
            if matches!(err, RestError::BookNotFound(_)) {
                server.metrics.record_lookup(false);
                log_event_with_fields(Event::BookNotFound, &[("id", id.as_str())]);
            }
            Err(err)
        }
    }
}
