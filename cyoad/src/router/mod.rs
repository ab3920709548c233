use std::time::Instant;

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use cyoa_api::limits::MAX_MESSAGE_BYTES;

use crate::services::Services;

mod api;
pub mod render;
pub mod ui;
pub mod util;

pub fn router(services: Services) -> Router {
    Router::new()
        .route("/", get(ui::render_index))
        .route("/search", get(ui::render_search))
        .route("/api/search", get(api::handle_search))
        .route("/api/catalog", get(api::handle_catalog))
        .route("/api/stats", get(api::handle_stats))
        .route("/health/ready", get(health_ready))
        .route("/assets/{*path}", get(ui::serve_asset))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .layer(DefaultBodyLimit::max(MAX_MESSAGE_BYTES))
        .with_state(services)
}

async fn health_ready() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ready" }))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let resp = next.run(req).await;
    info!(
        code = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "{method} {path}"
    );
    resp
}
