use axum::http::HeaderValue;

use super::*;

fn headers_with(cookie_header: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(cookie_header).unwrap());
    headers
}

#[test]
fn no_cookies_yields_empty_map() {
    assert!(cookie_map(&HeaderMap::new()).is_empty());
}

#[test]
fn values_are_not_decoded() {
    let map = cookie_map(&headers_with("session=abc; greeting=hello%20world"));
    assert_eq!(map.len(), 2);
    assert_eq!(map["session"], "abc");
    assert_eq!(map["greeting"], "hello%20world");
}

#[test]
fn header_order_is_kept() {
    let map = cookie_map(&headers_with("zeta=1; alpha=2; mid=3"));
    let names: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn malformed_pairs_are_skipped() {
    let map = cookie_map(&headers_with("good=1; noequals; =empty"));
    assert_eq!(map.len(), 1);
    assert_eq!(map["good"], "1");
}

#[tokio::test]
async fn handler_wraps_map_in_json() {
    let Json(map) = cookies(headers_with("theme=dark")).await;
    assert_eq!(map["theme"], "dark");
}
