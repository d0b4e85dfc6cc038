//! Logical endpoints and deployment path-prefix resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same bundle is deployed both at the site root and under an arbitrary
//! sub-path (`/app/...`). API calls follow the sub-path; `/auth/*` calls are a
//! deployment-root concern and are never prefixed.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Logical endpoint of the authenticated user profile.
pub const USER_ENDPOINT: &str = "/api/user";
/// Logical endpoint of the application info panel.
pub const INFO_ENDPOINT: &str = "/api/info";
/// Logical endpoint of the request cookie panel.
pub const COOKIES_ENDPOINT: &str = "/api/cookies";

/// A request target before deployment prefixing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Application API path, prefixed with the first segment of the page path.
    Api(String),
    /// Deployment-root path, used verbatim.
    Root(String),
}

impl Endpoint {
    pub fn api(path: impl Into<String>) -> Self {
        Self::Api(path.into())
    }

    pub fn root(path: impl Into<String>) -> Self {
        Self::Root(path.into())
    }

    /// The logical path, without any deployment prefix.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Api(path) | Self::Root(path) => path,
        }
    }

    /// Resolve against the current page path (`window.location.pathname`).
    #[must_use]
    pub fn resolve(&self, pathname: &str) -> String {
        match self {
            Self::Api(path) => build_api_path(pathname, path),
            Self::Root(path) => normalize_path(path),
        }
    }
}

/// Prefix `endpoint` with `/<first segment of pathname>` when the page path has one.
#[must_use]
pub fn build_api_path(pathname: &str, endpoint: &str) -> String {
    let endpoint = normalize_path(endpoint);
    match first_segment(pathname) {
        Some(segment) => format!("/{segment}{endpoint}"),
        None => endpoint,
    }
}

fn first_segment(pathname: &str) -> Option<&str> {
    pathname.split('/').find(|segment| !segment.is_empty())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}
