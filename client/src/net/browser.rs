//! `gloo-net` implementation of [`HttpClient`].
//!
//! Every request, including reading its body, is bounded by an abort timer.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal, RequestCredentials};

use super::endpoint::Endpoint;
use super::http::{ClientError, HttpClient, HttpOutcome, RequestOptions, RequestStage, outcome_from_response};
use crate::session::location::CurrentLocation;

/// Browser fetch client resolving endpoints against `location`.
pub struct BrowserHttpClient<L> {
    location: L,
    timeout_ms: u32,
}

impl<L: CurrentLocation> BrowserHttpClient<L> {
    pub fn new(location: L, timeout_ms: u32) -> Self {
        Self { location, timeout_ms }
    }

    /// Send and, when needed, read the body while the abort timer is armed.
    async fn fetch(&self, url: &str, options: RequestOptions) -> Result<(u16, Result<String, ClientError>), ClientError> {
        let controller =
            AbortController::new().map_err(|_| ClientError::Build("failed to initialize request timeout".to_owned()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(self.timeout_ms, move || timeout_controller.abort());

        let response = build_request(url, options, &signal)?
            .send()
            .await
            .map_err(|err| failure(RequestStage::Send, &signal, &err))?;
        let status = response.status();
        let body = if options.decode_json && response.ok() {
            response.text().await.map_err(|err| failure(RequestStage::Body, &signal, &err))
        } else {
            Ok(String::new())
        };
        Ok((status, body))
    }
}

fn build_request(url: &str, options: RequestOptions, signal: &AbortSignal) -> Result<Request, ClientError> {
    let mut builder = Request::get(url).abort_signal(Some(signal));
    if options.with_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    builder.build().map_err(|err| ClientError::Build(err.to_string()))
}

fn failure(stage: RequestStage, signal: &AbortSignal, err: &gloo_net::Error) -> ClientError {
    ClientError::from_failure(stage, signal.aborted(), err.to_string())
}

#[async_trait::async_trait(?Send)]
impl<L: CurrentLocation> HttpClient for BrowserHttpClient<L> {
    async fn request(&self, endpoint: &Endpoint, options: RequestOptions) -> HttpOutcome {
        let url = endpoint.resolve(&self.location.pathname());
        let (status, body) = match self.fetch(&url, options).await {
            Ok(received) => received,
            Err(err) => {
                log::warn!("request to {url} failed: {err}");
                return err.into();
            }
        };
        if let Err(err) = &body {
            log::warn!("reading {url} failed: {err}");
        }
        log::debug!("GET {url} -> {status}");
        outcome_from_response(status, body, options)
    }
}
