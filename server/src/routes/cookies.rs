//! `GET /api/cookies`: echoes the request's cookies as a name → value map.
//!
//! Values are returned exactly as sent, in header order; the browser panel
//! does its own decoding.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use axum::http::{HeaderMap, header};
use axum::response::Json;
use axum_extra::extract::cookie::Cookie;
use serde_json::{Map, Value};

pub(crate) fn cookie_map(headers: &HeaderMap) -> Map<String, Value> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .map(|cookie| (cookie.name().to_owned(), Value::from(cookie.value())))
        .collect()
}

pub async fn cookies(headers: HeaderMap) -> Json<Map<String, Value>> {
    let map = cookie_map(&headers);
    tracing::debug!(count = map.len(), "cookies echoed");
    Json(map)
}
