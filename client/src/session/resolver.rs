//! Session resolution: probe the profile, refresh once on 401, retry once,
//! then settle.
//!
//! DESIGN
//! ======
//! The sequence is a three-phase machine:
//!
//! ```text
//! Probe   --Ok-------------> Authenticated
//!         --TransportError-> Failed
//!         --Unauthorized---> Refresh
//! Refresh --Ok-------------> Retry
//!         --otherwise------> NeedsLogin
//! Retry   --Ok-------------> Authenticated
//!         --otherwise------> NeedsLogin
//! ```
//!
//! [`Phase::advance`] is the only transition function. `Retry` can only
//! settle, so one refresh and one retry per cycle is the upper bound no matter
//! what the server answers. Requests are awaited one at a time; the retry is
//! never issued before the refresh outcome is known.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::net::endpoint::{Endpoint, USER_ENDPOINT};
use crate::net::http::{HttpClient, HttpOutcome, RequestOptions};
use crate::state::entries::Profile;
use crate::state::session::{SessionMachine, SessionState};

use super::sink::UiStateSink;

/// Default session refresh endpoint (deployment root).
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Endpoints the resolver talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEndpoints {
    pub user: Endpoint,
    pub refresh: Endpoint,
}

impl SessionEndpoints {
    pub fn new(refresh_path: impl Into<String>) -> Self {
        Self { user: Endpoint::api(USER_ENDPOINT), refresh: Endpoint::root(refresh_path) }
    }
}

impl Default for SessionEndpoints {
    fn default() -> Self {
        Self::new(REFRESH_PATH)
    }
}

/// Network step currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// First credentialed profile fetch.
    Probe,
    /// Silent refresh after a 401 probe.
    Refresh,
    /// Second and final profile fetch.
    Retry,
}

/// What to do after a phase's outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Next(Phase),
    Settle(SessionState),
}

impl Phase {
    fn endpoint(self, endpoints: &SessionEndpoints) -> &Endpoint {
        match self {
            Self::Probe | Self::Retry => &endpoints.user,
            Self::Refresh => &endpoints.refresh,
        }
    }

    fn options(self) -> RequestOptions {
        match self {
            Self::Probe | Self::Retry => RequestOptions::credentialed_json(),
            Self::Refresh => RequestOptions::credentialed(),
        }
    }

    /// Pure transition function.
    #[must_use]
    pub fn advance(self, outcome: HttpOutcome) -> Transition {
        match (self, outcome) {
            (Self::Probe, HttpOutcome::Ok { body, .. }) => match Profile::from_json(body) {
                Ok(profile) => Transition::Settle(SessionState::Authenticated { profile }),
                Err(err) => Transition::Settle(SessionState::Failed { message: format!("Invalid profile: {err}") }),
            },
            (Self::Probe, HttpOutcome::Unauthorized) => Transition::Next(Self::Refresh),
            (Self::Probe, HttpOutcome::TransportError { message }) => {
                Transition::Settle(SessionState::Failed { message })
            }
            (Self::Refresh, HttpOutcome::Ok { .. }) => Transition::Next(Self::Retry),
            (Self::Refresh, _) => Transition::Settle(SessionState::NeedsLogin),
            (Self::Retry, HttpOutcome::Ok { body, .. }) => match Profile::from_json(body) {
                Ok(profile) => Transition::Settle(SessionState::Authenticated { profile }),
                Err(_) => Transition::Settle(SessionState::NeedsLogin),
            },
            (Self::Retry, _) => Transition::Settle(SessionState::NeedsLogin),
        }
    }
}

/// Drives one resolution cycle against an [`HttpClient`].
pub struct SessionResolver<C> {
    client: C,
    endpoints: SessionEndpoints,
}

impl<C: HttpClient> SessionResolver<C> {
    pub fn new(client: C, endpoints: SessionEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Run probe -> refresh -> retry until a terminal state, publishing every
    /// transition to `sink`.
    ///
    /// Returns the terminal state, or `None` when the sink went away before
    /// the cycle finished; nothing is published after that point.
    pub async fn resolve<S: UiStateSink>(&self, sink: &S) -> Option<SessionState> {
        if !sink.is_live() {
            return None;
        }
        let mut machine = SessionMachine::new();
        if let Ok(state) = machine.begin() {
            sink.publish(state.clone());
        }

        let mut phase = Phase::Probe;
        loop {
            let outcome = self
                .client
                .request(phase.endpoint(&self.endpoints), phase.options())
                .await;
            if !sink.is_live() {
                log::debug!("session {phase:?} outcome discarded after teardown");
                return None;
            }
            match phase.advance(outcome) {
                Transition::Next(next) => {
                    log::debug!("session {phase:?} -> {next:?}");
                    phase = next;
                }
                Transition::Settle(terminal) => {
                    log::debug!("session {phase:?} settled as {}", terminal.label());
                    if let SessionState::Failed { message } = &terminal {
                        log::warn!("session resolution failed: {message}");
                    }
                    return match machine.settle(terminal) {
                        Ok(state) => {
                            sink.publish(state.clone());
                            Some(state.clone())
                        }
                        Err(err) => {
                            log::warn!("session transition rejected: {err}");
                            None
                        }
                    };
                }
            }
        }
    }
}
