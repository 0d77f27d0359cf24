//! # HTTP Server
//!
//! Combines the books routes and the observability routes into one Axum
//! server.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::{BookRepository, InMemoryBookStore};
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::rest_api::{CatalogHandler, RestServer};

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;

/// HTTP server for the books API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server over the seed catalog with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Server over the seed catalog
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_repository(config, InMemoryBookStore::seeded())
    }

    /// Server over any repository
    pub fn with_repository<R: BookRepository + 'static>(config: HttpServerConfig, repo: R) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = Self::build_router(&config, repo, metrics);
        Self { config, router }
    }

    fn build_router<R: BookRepository + 'static>(
        config: &HttpServerConfig,
        repo: R,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let books = RestServer::new(CatalogHandler::new(repo), Arc::clone(&metrics));

        Router::new()
            .merge(observability_routes(metrics))
            .merge(books.router())
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if config.cors_origins.is_empty() {
            layer.allow_origin(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local = listener.local_addr()?;

        log_event_with_fields(
            Event::ServerListening,
            &[("addr", local.to_string().as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::with_config(HttpServerConfig::with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
