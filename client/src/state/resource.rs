//! Fetch-then-render state for the informational panels.

/// Lifecycle of a single fetched resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResourceState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> ResourceState<T> {
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
