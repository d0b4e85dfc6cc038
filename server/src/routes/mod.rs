//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The demo backend answers the two data endpoints the browser panels call,
//! a `/config.js` script carrying client settings, and a liveness probe. The
//! built client bundle is served from the static directory when present;
//! otherwise `/` answers with a small JSON heartbeat.

pub mod client_config;
pub mod cookies;
pub mod info;


use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/info", get(info::info))
        .route("/api/cookies", get(cookies::cookies))
        .route("/config.js", get(client_config::config_js))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let router = api_routes(state);

    let router = if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "serving client bundle");
        router.fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
    } else {
        tracing::warn!(dir = %static_dir.display(), "static dir missing; serving API only");
        router.route("/", get(root_status))
    };

    router.layer(TraceLayer::new_for_http())
}

async fn root_status() -> Json<Value> {
    Json(json!({ "message": "server is running" }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
