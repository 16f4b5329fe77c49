//! Tests for validation policy configuration

use std::fs;

use tempfile::TempDir;
use wlgate::config::{DEFAULT_MARKER, Policy};

#[test]
fn default_marker_is_bad() {
    let policy = Policy::default();
    assert_eq!(policy.marker, DEFAULT_MARKER);
    assert_eq!(policy.marker, "bad");
}

#[test]
fn missing_file_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let policy = Policy::load_from(&temp.path().join(".wlgate.toml"));
    assert_eq!(policy.marker, DEFAULT_MARKER);
}

#[test]
fn marker_is_read_from_policy_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wlgate.toml");
    fs::write(
        &path,
        r#"[policy]
marker = "deny"
"#,
    )
    .unwrap();

    let policy = Policy::load_from(&path);
    assert_eq!(policy.marker, "deny");
}

#[test]
fn file_without_policy_section_uses_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wlgate.toml");
    fs::write(&path, "# nothing configured\n").unwrap();

    let policy = Policy::load_from(&path);
    assert_eq!(policy.marker, DEFAULT_MARKER);
}

#[test]
fn empty_policy_section_uses_default_marker() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wlgate.toml");
    fs::write(&path, "[policy]\n").unwrap();

    let policy = Policy::load_from(&path);
    assert_eq!(policy.marker, DEFAULT_MARKER);
}

#[test]
fn malformed_file_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".wlgate.toml");
    fs::write(&path, "not [ valid toml").unwrap();

    let policy = Policy::load_from(&path);
    assert_eq!(policy.marker, DEFAULT_MARKER);
}
