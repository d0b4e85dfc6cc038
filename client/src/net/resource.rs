//! Generic fetch-then-decode used by the informational panels.
//!
//! ERROR HANDLING
//! ==============
//! A resource either loads or fails with a message. There is no refresh path
//! here: a 401 is reported like any other failed request.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use serde::de::DeserializeOwned;

use super::endpoint::{COOKIES_ENDPOINT, Endpoint, INFO_ENDPOINT};
use super::http::{HttpClient, HttpOutcome, RequestOptions, status_failed_message};
use crate::session::view::ValueMode;
use crate::state::resource::ResourceState;

/// Static description of one key/value panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSpec {
    pub title: &'static str,
    pub endpoint: &'static str,
    pub with_credentials: bool,
    pub key_header: &'static str,
    pub value_mode: ValueMode,
    pub empty_label: &'static str,
}

impl PanelSpec {
    #[must_use]
    pub fn info() -> Self {
        Self {
            title: "Call /api/info",
            endpoint: INFO_ENDPOINT,
            with_credentials: false,
            key_header: "Key",
            value_mode: ValueMode::Verbatim,
            empty_label: "No info available",
        }
    }

    #[must_use]
    pub fn cookies() -> Self {
        Self {
            title: "Call /api/cookies",
            endpoint: COOKIES_ENDPOINT,
            with_credentials: true,
            key_header: "Name",
            value_mode: ValueMode::PercentDecoded,
            empty_label: "No cookies present",
        }
    }

    #[must_use]
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions { with_credentials: self.with_credentials, decode_json: true }
    }
}

/// Fetch `endpoint` and decode its body as `T`.
pub async fn load_resource<C, T>(client: &C, endpoint: &Endpoint, options: RequestOptions) -> ResourceState<T>
where
    C: HttpClient + ?Sized,
    T: DeserializeOwned,
{
    match client.request(endpoint, options).await {
        HttpOutcome::Ok { body, .. } => match serde_json::from_value::<T>(body) {
            Ok(value) => ResourceState::Ready(value),
            Err(err) => ResourceState::Failed(format!("Failed to decode response: {err}")),
        },
        HttpOutcome::Unauthorized => ResourceState::Failed(status_failed_message(401)),
        HttpOutcome::TransportError { message } => ResourceState::Failed(message),
    }
}
