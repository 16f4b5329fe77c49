//! Tests for the Output module
//!
//! Output provides a structured validation report that can be rendered
//! as human-readable text, machine-parseable JSON, or a report file.

use std::fs;

use tempfile::TempDir;
use wlgate::core::models::Finding;
use wlgate::output::{OutputMode, ValidationReport};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn report_with_no_findings_passes() {
    let report = ValidationReport::new(2, vec![]);
    assert!(report.passed);
    assert_eq!(report.added_lines, 2);
    assert!(report.lines().is_empty());
}

#[test]
fn report_with_findings_fails() {
    let report = ValidationReport::new(1, vec![Finding::bad_data(1, "bad entry")]);
    assert!(!report.passed);
}

#[test]
fn report_serialization() {
    let report = ValidationReport::new(
        2,
        vec![Finding::bad_data(1, "bad entry"), Finding::unordered(2, "apple")],
    );

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"passed\":false"));
    assert!(json.contains("\"added_lines\":2"));
    assert!(json.contains("\"kind\":\"bad_data\""));
    assert!(json.contains("\"kind\":\"unordered\""));
    assert!(json.contains("\"generated_at\""));
}

#[test]
fn lines_render_in_finding_order() {
    let report = ValidationReport::new(
        2,
        vec![Finding::bad_data(1, "bad entry"), Finding::unordered(1, "apple")],
    );

    assert_eq!(
        report.lines(),
        vec![
            "Bad data at line 1: 'bad entry'",
            "Unordered line 1: Expected 'apple' to be next",
        ]
    );
}

#[test]
fn write_to_emits_one_line_per_finding() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.md");

    let report = ValidationReport::new(
        2,
        vec![Finding::bad_data(1, "bad entry"), Finding::unordered(1, "apple")],
    );
    report.write_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "Bad data at line 1: 'bad entry'\nUnordered line 1: Expected 'apple' to be next\n"
    );
}

#[test]
fn write_to_with_no_findings_writes_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.md");

    let report = ValidationReport::new(0, vec![]);
    report.write_to(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
