use super::*;

#[test]
fn empty_settings_render_empty_object() {
    assert_eq!(render_config_script(&ClientSettings::default()), "window.INFRA_DEMO_CONFIG = {};\n");
}

#[test]
fn configured_settings_are_embedded() {
    let settings = ClientSettings {
        login_path: Some("/sso/login".to_owned()),
        refresh_path: Some("/sso/refresh".to_owned()),
        request_timeout_ms: Some(2500),
    };
    assert_eq!(
        render_config_script(&settings),
        "window.INFRA_DEMO_CONFIG = {\"login_path\":\"/sso/login\",\"refresh_path\":\"/sso/refresh\",\"request_timeout_ms\":2500};\n"
    );
}
