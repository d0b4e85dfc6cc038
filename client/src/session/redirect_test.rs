use super::*;
use crate::session::location::test_helpers::{FixedLocation, RecordingNavigator};

#[test]
fn build_login_url_encodes_current_page() {
    assert_eq!(
        build_login_url(LOGIN_PATH, "https://host/app/page?x=1"),
        "/auth/login?redirect_uri=https%3A%2F%2Fhost%2Fapp%2Fpage%3Fx%3D1"
    );
}

#[test]
fn build_login_url_is_deterministic() {
    let href = "https://host/app/page?x=1&y=a b#frag";
    assert_eq!(build_login_url(LOGIN_PATH, href), build_login_url(LOGIN_PATH, href));
}

#[test]
fn build_login_url_encodes_fragment_and_spaces() {
    assert_eq!(
        build_login_url("/auth/login", "https://h/p#a b"),
        "/auth/login?redirect_uri=https%3A%2F%2Fh%2Fp%23a%20b"
    );
}

#[test]
fn redirect_navigates_once_to_login_url() {
    let location = FixedLocation::parse("https://host/app/page?x=1").unwrap();
    let navigator = RecordingNavigator::default();
    let redirector = LoginRedirector::new(LOGIN_PATH, &location, &navigator);

    let url = redirector.redirect();

    assert_eq!(url, "/auth/login?redirect_uri=https%3A%2F%2Fhost%2Fapp%2Fpage%3Fx%3D1");
    assert_eq!(navigator.visited(), vec![url]);
}

#[test]
fn custom_login_path_is_respected() {
    let location = FixedLocation::parse("https://host/").unwrap();
    let redirector = LoginRedirector::new("/sso/start", location, RecordingNavigator::default());
    assert_eq!(redirector.login_url(), "/sso/start?redirect_uri=https%3A%2F%2Fhost%2F");
}
