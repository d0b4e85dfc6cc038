use super::*;

#[test]
fn decodes_percent_escapes() {
    assert_eq!(safe_decode("a%20b"), "a b");
    assert_eq!(safe_decode("caf%C3%A9"), "café");
}

#[test]
fn lone_percent_is_shown_raw() {
    assert_eq!(safe_decode("%"), "%");
    assert_eq!(safe_decode("100%"), "100%");
}

#[test]
fn malformed_escape_keeps_whole_value_raw() {
    assert_eq!(safe_decode("a%zzb%20"), "a%zzb%20");
    assert_eq!(safe_decode("%4"), "%4");
}

#[test]
fn invalid_utf8_sequence_is_shown_raw() {
    assert_eq!(safe_decode("%E0%A4%A"), "%E0%A4%A");
    assert_eq!(safe_decode("%FF"), "%FF");
}

#[test]
fn plain_values_pass_through() {
    assert_eq!(safe_decode("session-abc.123"), "session-abc.123");
    assert_eq!(safe_decode("a+b"), "a+b");
    assert_eq!(safe_decode(""), "");
}
