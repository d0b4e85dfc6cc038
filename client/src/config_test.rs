use super::*;

#[test]
fn defaults_match_deployment_root_endpoints() {
    let config = ClientConfig::default();
    assert_eq!(config.login_path, "/auth/login");
    assert_eq!(config.refresh_path, "/auth/refresh");
    assert_eq!(config.request_timeout_ms, 10_000);
}

#[test]
fn normalize_runtime_value_trims_and_rejects_empty() {
    assert_eq!(normalize_runtime_value(""), None);
    assert_eq!(normalize_runtime_value("   "), None);
    assert_eq!(normalize_runtime_value("  /sso/login "), Some("/sso/login".to_string()));
}

#[test]
fn parse_timeout_rejects_zero_and_garbage() {
    assert_eq!(parse_timeout("2500"), Some(2500));
    assert_eq!(parse_timeout(" 15 "), Some(15));
    assert_eq!(parse_timeout("0"), None);
    assert_eq!(parse_timeout("-1"), None);
    assert_eq!(parse_timeout("soon"), None);
}

#[test]
fn timeout_from_f64_bounds() {
    assert_eq!(timeout_from_f64(3000.0), Some(3000));
    assert_eq!(timeout_from_f64(0.0), None);
    assert_eq!(timeout_from_f64(f64::NAN), None);
    assert_eq!(timeout_from_f64(1e12), None);
}

#[test]
fn apply_runtime_overrides_ignores_missing_values() {
    let mut config = ClientConfig::default();
    apply_runtime_overrides(&mut config, RuntimeConfig::default());
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn apply_runtime_overrides_overwrites_when_present() {
    let mut config = ClientConfig::default();
    let runtime = RuntimeConfig {
        login_path: normalize_runtime_value("/sso/login"),
        refresh_path: normalize_runtime_value("/sso/refresh"),
        request_timeout_ms: parse_timeout("2500"),
    };

    apply_runtime_overrides(&mut config, runtime);

    assert_eq!(config.login_path, "/sso/login");
    assert_eq!(config.refresh_path, "/sso/refresh");
    assert_eq!(config.request_timeout_ms, 2500);
}
