use super::*;
use crate::state::test_helpers::test_app_state;

fn keys(info: &Map<String, Value>) -> Vec<&str> {
    info.keys().map(String::as_str).collect()
}

#[test]
fn outside_kubernetes_reports_flag_and_time_only() {
    let info = build_info(InfoSource { kubernetes: None, pod_name: Some("ignored".into()), now: "t0".into() });
    assert_eq!(keys(&info), vec!["Running in Kubernetes", "Now"]);
    assert_eq!(info["Running in Kubernetes"], "False");
    assert_eq!(info["Now"], "t0");
}

#[test]
fn inside_kubernetes_reports_namespace_and_pod() {
    let info = build_info(InfoSource {
        kubernetes: Some(Some("demo-ns\n".into())),
        pod_name: Some("web-7d9f".into()),
        now: "t1".into(),
    });
    assert_eq!(keys(&info), vec!["Running in Kubernetes", "Namespace", "Pod name", "Now"]);
    assert_eq!(info["Running in Kubernetes"], "True");
    assert_eq!(info["Namespace"], "demo-ns");
    assert_eq!(info["Pod name"], "web-7d9f");
}

#[test]
fn unreadable_namespace_falls_back_to_default() {
    let info = build_info(InfoSource { kubernetes: Some(None), pod_name: None, now: "t2".into() });
    assert_eq!(info["Namespace"], "default");
    assert_eq!(info["Pod name"], Value::Null);
}

#[test]
fn gather_detects_namespace_file() {
    let dir = std::env::temp_dir().join(format!("infra-demo-info-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("namespace");
    std::fs::write(&file, "team-a").unwrap();

    let source = InfoSource::gather(&file);
    assert_eq!(source.kubernetes, Some(Some("team-a".to_owned())));
    assert!(!source.now.is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn handler_outside_kubernetes() {
    let Json(info) = info(State(test_app_state())).await;
    assert_eq!(info["Running in Kubernetes"], "False");
    assert!(info.get("Now").and_then(Value::as_str).is_some_and(|now| now.contains('T')));
}
