use super::*;

// =============================================================================
// env helpers — unique env var names avoid races with parallel tests.
// =============================================================================

#[test]
fn env_string_trims_and_drops_blank() {
    let key = "__TEST_ES_TRIM_311__";
    unsafe { std::env::set_var(key, "  /sso/login  ") };
    assert_eq!(env_string(key), Some("/sso/login".to_owned()));
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_string(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_string_unset_returns_none() {
    assert_eq!(env_string("__TEST_ES_SURELY_UNSET_XYZ_77__"), None);
}

#[test]
fn env_parse_reads_numbers() {
    let key = "__TEST_EP_NUM_412__";
    unsafe { std::env::set_var(key, "8080") };
    assert_eq!(env_parse::<u16>(key).unwrap(), Some(8080));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_unset_is_none() {
    assert_eq!(env_parse::<u16>("__TEST_EP_UNSET_413__").unwrap(), None);
}

#[test]
fn env_parse_rejects_garbage() {
    let key = "__TEST_EP_BAD_414__";
    unsafe { std::env::set_var(key, "eighty") };
    let err = env_parse::<u16>(key).unwrap_err();
    assert_eq!(err.to_string(), "invalid __TEST_EP_BAD_414__: \"eighty\"");
    unsafe { std::env::remove_var(key) };
}

#[test]
fn client_settings_skip_unset_fields() {
    let settings = ClientSettings { login_path: Some("/sso".to_owned()), ..ClientSettings::default() };
    assert_eq!(serde_json::to_string(&settings).unwrap(), r#"{"login_path":"/sso"}"#);
}
