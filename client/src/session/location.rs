//! Page location and navigation capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver, the HTTP client and the login redirector never touch
//! `window.location` directly; they receive these traits so the whole
//! session flow runs in native tests.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Read access to the current page URL.
pub trait CurrentLocation {
    /// Fully-qualified URL (`window.location.href`).
    fn href(&self) -> String;
    /// Path component (`window.location.pathname`).
    fn pathname(&self) -> String;
}

/// Full-page navigation.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

impl<L: CurrentLocation + ?Sized> CurrentLocation for &L {
    fn href(&self) -> String {
        (**self).href()
    }

    fn pathname(&self) -> String {
        (**self).pathname()
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, url: &str) {
        (**self).navigate(url);
    }
}

/// `window.location`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

#[cfg(feature = "csr")]
impl CurrentLocation for BrowserLocation {
    fn href(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default()
    }

    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }
}

/// Assigns `window.location.href`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("navigation to {url} skipped: no window");
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::warn!("navigation to {url} failed: {err:?}");
        }
    }
}
