//! Build-time configuration with an optional runtime override. The runtime
//! values are read from `window.INFRA_DEMO_CONFIG` (served by the backend as
//! `/config.js`) so one bundle can be pointed at a different auth proxy
//! without rebuilding. Values are public; never put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::session::redirect::LOGIN_PATH;
use crate::session::resolver::REFRESH_PATH;

/// Default request timeout (milliseconds) applied to every request.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub login_path: String,
    pub refresh_path: String,
    pub request_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_owned(),
            refresh_path: REFRESH_PATH.to_owned(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        let build = RuntimeConfig {
            login_path: option_env!("INFRA_DEMO_LOGIN_PATH").and_then(normalize_runtime_value),
            refresh_path: option_env!("INFRA_DEMO_REFRESH_PATH").and_then(normalize_runtime_value),
            request_timeout_ms: option_env!("INFRA_DEMO_REQUEST_TIMEOUT_MS").and_then(parse_timeout),
        };
        apply_runtime_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    login_path: Option<String>,
    refresh_path: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut ClientConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.login_path {
        config.login_path = value;
    }
    if let Some(value) = runtime.refresh_path {
        config.refresh_path = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("INFRA_DEMO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        login_path: read_runtime_value(&object, "login_path"),
        refresh_path: read_runtime_value(&object, "refresh_path"),
        request_timeout_ms: read_runtime_timeout(&object),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(feature = "csr")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(feature = "csr")]
fn read_runtime_timeout(object: &js_sys::Object) -> Option<u32> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str("request_timeout_ms")).ok()?;
    if let Some(number) = value.as_f64() {
        return timeout_from_f64(number);
    }
    parse_timeout(&value.as_string()?)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_timeout(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[cfg(any(test, feature = "csr"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timeout_from_f64(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 1.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
}
