use super::test_helpers::{FixedLocation, RecordingNavigator};
use super::*;

#[test]
fn fixed_location_exposes_href_and_pathname() {
    let location = FixedLocation::parse("https://host/app/page?x=1").unwrap();
    assert_eq!(location.href(), "https://host/app/page?x=1");
    assert_eq!(location.pathname(), "/app/page");
}

#[test]
fn fixed_location_root_has_slash_pathname() {
    let location = FixedLocation::parse("https://host").unwrap();
    assert_eq!(location.pathname(), "/");
}

#[test]
fn fixed_location_rejects_relative_urls() {
    assert!(FixedLocation::parse("/app/page").is_err());
}

#[test]
fn recording_navigator_keeps_order() {
    let navigator = RecordingNavigator::default();
    navigator.navigate("/a");
    (&navigator).navigate("/b");
    assert_eq!(navigator.visited(), vec!["/a".to_owned(), "/b".to_owned()]);
}
