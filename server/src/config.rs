//! Server configuration from environment variables (after `.env` loading).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

/// Service-account namespace file mounted into every Kubernetes pod.
pub const K8S_NAMESPACE_FILE: &str = "/var/run/secrets/kubernetes.io/serviceaccount/namespace";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Values handed to the browser bundle through `/config.js`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ClientSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Built client bundle; served only when the directory exists.
    pub static_dir: PathBuf,
    pub namespace_file: PathBuf,
    pub client: ClientSettings,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// - `PORT` (default 8000)
    /// - `STATIC_DIR` (default `static`)
    /// - `K8S_NAMESPACE_FILE` (default the service-account path)
    /// - `CLIENT_LOGIN_PATH`, `CLIENT_REFRESH_PATH`, `CLIENT_REQUEST_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: env_parse("PORT")?.unwrap_or(DEFAULT_PORT),
            static_dir: env_string("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
            namespace_file: env_string("K8S_NAMESPACE_FILE").map_or_else(|| PathBuf::from(K8S_NAMESPACE_FILE), PathBuf::from),
            client: ClientSettings {
                login_path: env_string("CLIENT_LOGIN_PATH"),
                refresh_path: env_string("CLIENT_REFRESH_PATH"),
                request_timeout_ms: env_parse("CLIENT_REQUEST_TIMEOUT_MS")?,
            },
        })
    }
}

/// Trimmed value of `key`, `None` when unset or blank.
pub(crate) fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty())
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    env_string(key)
        .map(|value| value.parse::<T>().map_err(|_| ConfigError::Invalid { key, value }))
        .transpose()
}
