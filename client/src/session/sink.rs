//! Destination of session state transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver publishes into a sink and asks it whether the hosting
//! component is still mounted. Once it is not, in-flight outcomes are dropped
//! and no further requests are issued.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Receives resolver transitions.
pub trait UiStateSink {
    /// Whether updates are still wanted.
    fn is_live(&self) -> bool;
    fn publish(&self, state: SessionState);
}

impl<S: UiStateSink + ?Sized> UiStateSink for &S {
    fn is_live(&self) -> bool {
        (**self).is_live()
    }

    fn publish(&self, state: SessionState) {
        (**self).publish(state);
    }
}

/// Liveness flag tied to a component's mounted lifetime.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink writing into a reactive signal, guarded by a [`Liveness`] flag.
#[derive(Clone)]
pub struct SignalSink {
    state: RwSignal<SessionState>,
    alive: Liveness,
}

impl SignalSink {
    #[must_use]
    pub fn new(state: RwSignal<SessionState>, alive: Liveness) -> Self {
        Self { state, alive }
    }
}

impl UiStateSink for SignalSink {
    fn is_live(&self) -> bool {
        self.alive.is_alive()
    }

    fn publish(&self, state: SessionState) {
        if self.is_live() {
            self.state.set(state);
        }
    }
}
