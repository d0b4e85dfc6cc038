//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds immutable configuration; handlers are otherwise stateless.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;

    use super::*;
    use crate::config::ClientSettings;

    /// State whose namespace file and static dir do not exist.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ServerConfig {
            port: 0,
            static_dir: PathBuf::from("/nonexistent/infra-demo/static"),
            namespace_file: PathBuf::from("/nonexistent/infra-demo/namespace"),
            client: ClientSettings::default(),
        })
    }
}
