//! `GET /api/info`: deployment facts for the info panel.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use std::path::Path;

use axum::extract::State;
use axum::response::Json;
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::AppState;

/// Inputs of the info map, gathered separately so the map is testable.
#[derive(Debug, Default)]
pub(crate) struct InfoSource {
    /// `Some` when running in Kubernetes: the namespace file content, if readable.
    pub kubernetes: Option<Option<String>>,
    pub pod_name: Option<String>,
    pub now: String,
}

impl InfoSource {
    fn gather(namespace_file: &Path) -> Self {
        let kubernetes = namespace_file
            .exists()
            .then(|| std::fs::read_to_string(namespace_file).ok());
        let pod_name = std::env::var("POD_NAME").ok().or_else(|| std::env::var("HOSTNAME").ok());
        Self { kubernetes, pod_name, now: now_rfc3339() }
    }
}

/// Build the ordered info map.
pub(crate) fn build_info(source: InfoSource) -> Map<String, Value> {
    let mut info = Map::new();
    let in_kubernetes = source.kubernetes.is_some();
    info.insert("Running in Kubernetes".into(), Value::from(if in_kubernetes { "True" } else { "False" }));

    if let Some(namespace) = source.kubernetes {
        let namespace = namespace
            .map(|raw| raw.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "default".to_owned());
        info.insert("Namespace".into(), Value::from(namespace));
        info.insert("Pod name".into(), source.pod_name.map_or(Value::Null, Value::from));
    }

    info.insert("Now".into(), Value::from(source.now));
    info
}

fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&Rfc3339).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "timestamp formatting failed");
        now.unix_timestamp().to_string()
    })
}

pub async fn info(State(state): State<AppState>) -> Json<Map<String, Value>> {
    let source = InfoSource::gather(&state.config.namespace_file);
    if source.kubernetes.as_ref().is_some_and(Option::is_none) {
        tracing::warn!(path = %state.config.namespace_file.display(), "namespace file unreadable");
    }
    Json(build_info(source))
}
