// Web dashboard — Axum-based read-only dashboard backend.
//
// The dashboard page is a single embedded HTML file (no build step); all
// /api/* routes serve JSON except /api/export, which streams the CSV
// download. Every request recomputes the view from the immutable store, so
// handlers are pure reads and no locking is needed.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::FeatureStore;

pub mod handlers;

// Embedded at compile time — the dashboard has no frontend build step.
const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeatureStore>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(store: Arc<FeatureStore>, port: u16, bind: &str) -> Result<()> {
    let state = AppState { store };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Lodestar dashboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .route("/api/status", get(handlers::status::get_status))
        .route("/api/features", get(handlers::features::list_features))
        .route("/api/export", get(handlers::export::download_csv))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the embedded dashboard page.
async fn dashboard() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
