//! Request outcome model and the HTTP seam used by the session resolver and
//! the informational panels.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns `Err`. Every failure is folded into an
//! [`HttpOutcome`] so callers branch on one enum: 401 is the only status that
//! stays distinguishable, everything else becomes a `TransportError` message.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde_json::Value;

use super::endpoint::Endpoint;

/// Result of a single request.
#[derive(Clone, Debug, PartialEq)]
pub enum HttpOutcome {
    /// 2xx response. `body` is `Value::Null` when decoding was not requested.
    Ok { status: u16, body: Value },
    /// HTTP 401.
    Unauthorized,
    /// Network failure, timeout, undecodable body, or any other status.
    TransportError { message: String },
}

impl HttpOutcome {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError { message: message.into() }
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Per-request options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    /// Attach the browser's session cookie (`credentials: "include"`).
    pub with_credentials: bool,
    /// Decode a 2xx body as JSON; when false only the status matters.
    pub decode_json: bool,
}

impl RequestOptions {
    /// Cookie-bearing request whose JSON body is needed.
    #[must_use]
    pub const fn credentialed_json() -> Self {
        Self { with_credentials: true, decode_json: true }
    }

    /// Cookie-bearing request where only the status is inspected.
    #[must_use]
    pub const fn credentialed() -> Self {
        Self { with_credentials: true, decode_json: false }
    }

    /// Same-origin defaults with a JSON body.
    #[must_use]
    pub const fn json() -> Self {
        Self { with_credentials: false, decode_json: true }
    }
}

/// Client-side request failures that happen before a status is known.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build request: {0}")]
    Build(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Where in the request a failure surfaced.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RequestStage {
    Send,
    Body,
}

#[cfg(any(test, feature = "csr"))]
impl ClientError {
    /// An aborted signal means the request timer fired, whichever stage noticed.
    pub(crate) fn from_failure(stage: RequestStage, aborted: bool, detail: String) -> Self {
        if aborted {
            return Self::Timeout;
        }
        match stage {
            RequestStage::Send => Self::Network(detail),
            RequestStage::Body => Self::Body(detail),
        }
    }
}

impl From<ClientError> for HttpOutcome {
    fn from(err: ClientError) -> Self {
        Self::transport(err.to_string())
    }
}

/// Issues a request to a logical endpoint.
///
/// Implementations resolve the deployment prefix themselves (see
/// [`Endpoint::resolve`]) so callers only name logical endpoints.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn request(&self, endpoint: &Endpoint, options: RequestOptions) -> HttpOutcome;
}

#[async_trait::async_trait(?Send)]
impl<C: HttpClient + ?Sized> HttpClient for &C {
    async fn request(&self, endpoint: &Endpoint, options: RequestOptions) -> HttpOutcome {
        (**self).request(endpoint, options).await
    }
}

pub(crate) fn status_failed_message(status: u16) -> String {
    format!("Network response was not ok ({status})")
}

/// Map a received status and body text onto an outcome.
pub(crate) fn outcome_from_response(status: u16, body: Result<String, ClientError>, options: RequestOptions) -> HttpOutcome {
    if status == 401 {
        return HttpOutcome::Unauthorized;
    }
    if !(200..300).contains(&status) {
        return HttpOutcome::transport(status_failed_message(status));
    }
    if !options.decode_json {
        return HttpOutcome::Ok { status, body: Value::Null };
    }
    let text = match body {
        Ok(text) => text,
        Err(err) => return err.into(),
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(body) => HttpOutcome::Ok { status, body },
        Err(err) => HttpOutcome::transport(format!("Failed to decode response: {err}")),
    }
}
