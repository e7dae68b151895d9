//! HTTP front end.
//!
//! Every request to `/` or `/api/menus` runs a fresh aggregation, the way
//! the page has always behaved: menus change daily and nothing is cached.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | HTML page with every source |
//! | `GET /api/menus` | the same board as JSON |
//! | `GET /health` | `ok` |

use std::sync::Arc;

use axum::{Json, Router};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::aggregator::{AggregateOptions, aggregate_today};
use crate::clock::Clock;
use crate::config::SourceRegistry;
use crate::fetcher::Fetcher;
use crate::models::MenuBoard;
use crate::outputs::html;

/// Everything a request needs to run an aggregation.
pub struct AppState<F> {
    pub registry: SourceRegistry,
    pub fetcher: F,
    pub clock: Arc<dyn Clock>,
    pub options: AggregateOptions,
}

impl<F: Fetcher> AppState<F> {
    async fn board(&self) -> MenuBoard {
        aggregate_today(&self.registry, &self.fetcher, self.clock.as_ref(), &self.options).await
    }
}

/// Build the router with all routes and request tracing.
pub fn router<F: Fetcher + 'static>(state: Arc<AppState<F>>) -> Router {
    Router::new()
        .route("/", get(index::<F>))
        .route("/api/menus", get(menus::<F>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(level = "info", skip_all)]
async fn index<F: Fetcher>(State(state): State<Arc<AppState<F>>>) -> Html<String> {
    Html(html::render_board(&state.board().await))
}

#[instrument(level = "info", skip_all)]
async fn menus<F: Fetcher>(State(state): State<Arc<AppState<F>>>) -> Json<MenuBoard> {
    Json(state.board().await)
}

async fn health() -> impl IntoResponse {
    "ok"
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve<F: Fetcher + 'static>(
    state: Arc<AppState<F>>,
    addr: &str,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, sources = state.registry.len(), "Starting server");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
