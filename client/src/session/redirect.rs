//! Login redirect: sends the browser to the login endpoint with the current
//! page as the return target.
//!
//! The login endpoint lives outside the client application, so this is a
//! full-page navigation and never a router change.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use super::location::{CurrentLocation, Navigator};

/// Default login endpoint.
pub const LOGIN_PATH: &str = "/auth/login";

/// Build `<login_path>?redirect_uri=<percent-encoded current_href>`.
#[must_use]
pub fn build_login_url(login_path: &str, current_href: &str) -> String {
    format!("{login_path}?redirect_uri={}", urlencoding::encode(current_href))
}

/// Builds login URLs and performs the navigation.
pub struct LoginRedirector<L, N> {
    login_path: String,
    location: L,
    navigator: N,
}

impl<L: CurrentLocation, N: Navigator> LoginRedirector<L, N> {
    pub fn new(login_path: impl Into<String>, location: L, navigator: N) -> Self {
        Self { login_path: login_path.into(), location, navigator }
    }

    /// Login URL for the page as it is right now.
    #[must_use]
    pub fn login_url(&self) -> String {
        build_login_url(&self.login_path, &self.location.href())
    }

    /// Capture the current location and navigate to the login endpoint.
    pub fn redirect(&self) -> String {
        let url = self.login_url();
        log::info!("redirecting to login");
        self.navigator.navigate(&url);
        url
    }
}
