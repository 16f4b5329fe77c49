//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON, and written to a
//! report file when requested.

use std::fs;
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Finding;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating an updated whitelist against its baseline
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the gate passed (no findings)
    pub passed: bool,
    /// Number of lines unique to the updated whitelist
    pub added_lines: usize,
    /// Findings, bad-data first, then ordering violations
    pub findings: Vec<Finding>,
    /// When this report was produced (RFC3339)
    pub generated_at: String,
}

impl ValidationReport {
    /// Build a report from the validator's output
    #[must_use]
    pub fn new(added_lines: usize, findings: Vec<Finding>) -> Self {
        Self {
            passed: findings.is_empty(),
            added_lines,
            findings,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// The findings rendered as report lines, one per finding
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.added_lines == 0 {
            println!("No difference between whitelist files.");
            return;
        }

        println!("Validating {} added line(s)...\n", self.added_lines);

        if self.passed {
            println!("{}", "Whitelist changes look good.".green());
            return;
        }

        for line in self.lines() {
            println!("  {line}");
        }
        println!("\n{}: {} finding(s)", "FAILED".red(), self.findings.len());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Write the rendered finding lines to a report file
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let mut content = self.lines().join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(path, content)
    }
}
