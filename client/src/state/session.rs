//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the session resolver, read by the session panel. Transitions
//! only move forward: `Idle -> Resolving -> terminal`, and a terminal state
//! is final for the lifetime of the component that owns it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::entries::Profile;

/// Where session resolution currently stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Resolving,
    Authenticated {
        profile: Profile,
    },
    NeedsLogin,
    Failed {
        message: String,
    },
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated { .. } | Self::NeedsLogin | Self::Failed { .. })
    }

    /// Short label used in log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Authenticated { .. } => "authenticated",
            Self::NeedsLogin => "needs-login",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Rejected state change.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot move from {from} to {to}")]
    Backwards { from: &'static str, to: &'static str },
    #[error("session already settled as {0}")]
    AlreadySettled(&'static str),
}

/// Monotonic holder of a [`SessionState`].
#[derive(Clone, Debug, Default)]
pub struct SessionMachine {
    state: SessionState,
}

impl SessionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// `Idle -> Resolving`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the machine is `Idle`.
    pub fn begin(&mut self) -> Result<&SessionState, TransitionError> {
        if self.state != SessionState::Idle {
            return Err(TransitionError::Backwards { from: self.state.label(), to: "resolving" });
        }
        self.state = SessionState::Resolving;
        Ok(&self.state)
    }

    /// `Resolving -> terminal`.
    ///
    /// # Errors
    ///
    /// Returns an error if the machine already settled, has not started, or
    /// `terminal` is not a terminal state.
    pub fn settle(&mut self, terminal: SessionState) -> Result<&SessionState, TransitionError> {
        if self.state.is_terminal() {
            return Err(TransitionError::AlreadySettled(self.state.label()));
        }
        if self.state != SessionState::Resolving || !terminal.is_terminal() {
            return Err(TransitionError::Backwards { from: self.state.label(), to: terminal.label() });
        }
        self.state = terminal;
        Ok(&self.state)
    }
}
