//! Application startup and lifecycle management.

use crate::config::QuotingConfig;
use crate::handlers::{catalog, estimates, quotes};
use crate::services::{get_metrics, init_metrics, Catalog, QuoteService};
use axum::{
    extract::State, http::StatusCode, middleware, response::IntoResponse, routing::get,
    routing::post, Json, Router,
};
use serde_json::json;
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::request_id_middleware;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: QuotingConfig,
    pub quotes: Arc<QuoteService>,
}

/// Health check endpoint for Docker/K8s liveness probes.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": state.config.service_name,
            "version": state.config.service_version,
            "tax_policy": state.quotes.calculator().tax_policy().name()
        })),
    )
}

/// Readiness check endpoint for K8s readiness probes.
///
/// Ready once the catalog is loaded and holds at least one item.
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.quotes.catalog().items().next().is_some() {
        tracing::debug!("Readiness check passed");
        StatusCode::OK
    } else {
        tracing::warn!("Readiness check failed - catalog is empty");
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Metrics endpoint for Prometheus scraping.
async fn metrics_handler() -> impl IntoResponse {
    let metrics = get_metrics();
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        metrics,
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .route("/v1/catalog/items", get(catalog::list_items))
        .route("/v1/catalog/packages", get(catalog::list_packages))
        .route("/v1/quotes", post(quotes::create_quote))
        .route("/v1/quotes/quick", post(quotes::quick_quote))
        .route("/v1/quotes/compare", post(quotes::compare))
        .route("/v1/estimates", post(estimates::estimate))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Load the catalog, wire the pricing services and bind the listener.
    pub async fn build(config: QuotingConfig) -> Result<Self, AppError> {
        init_metrics();

        let catalog = Catalog::load(config.catalog_path.as_deref()).map_err(|e| {
            tracing::error!(error = %e, "Failed to load catalog");
            AppError::from(e)
        })?;
        let quotes = Arc::new(QuoteService::new(
            Arc::new(catalog),
            config.pricing_settings(),
        ));

        let state = AppState {
            config: config.clone(),
            quotes,
        };

        let http_addr = config.common.bind_addr()?;
        let http_listener = TcpListener::bind(http_addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %http_addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!(http_port = http_port, "Quoting service listener bound");

        Ok(Self {
            http_port,
            http_listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn quote_service(&self) -> Arc<QuoteService> {
        self.state.quotes.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(
            service = %self.state.config.service_name,
            version = %self.state.config.service_version,
            http_port = self.http_port,
            "Service ready to accept connections"
        );

        let router = build_router(self.state);

        axum::serve(self.http_listener, router).await.map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            std::io::Error::other(format!("HTTP server error: {}", e))
        })
    }
}
