//! `GET /config.js`: runtime settings for the browser bundle.
//!
//! The page loads this script before the WASM module; the client reads
//! `window.INFRA_DEMO_CONFIG` and falls back to compiled defaults for any
//! missing field.

#[cfg(test)]
#[path = "client_config_test.rs"]
mod client_config_test;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::config::ClientSettings;
use crate::state::AppState;

pub(crate) fn render_config_script(settings: &ClientSettings) -> String {
    let json = serde_json::to_string(settings).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "client settings serialization failed");
        "{}".to_owned()
    });
    format!("window.INFRA_DEMO_CONFIG = {json};\n")
}

pub async fn config_js(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        render_config_script(&state.config.client),
    )
}
