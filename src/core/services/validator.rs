//! Validator service - diffs and validates whitelist changes
//!
//! This service contains the pure business logic for computing the lines
//! added by an updated whitelist and checking them against the banned-prefix
//! and ordering policies.

use std::collections::HashSet;

use crate::core::models::Finding;

/// Compute the lines present in `updated` but absent from `master`
///
/// Membership is exact (case-sensitive) string equality. Order follows
/// first appearance in `updated`, and duplicate updated lines absent from
/// master each keep their own entry.
#[must_use]
pub fn added_lines(master: &[String], updated: &[String]) -> Vec<String> {
    let baseline: HashSet<&str> = master.iter().map(String::as_str).collect();
    updated.iter().filter(|line| !baseline.contains(line.as_str())).cloned().collect()
}

/// Validate the lines added by an updated whitelist
///
/// This is pure business logic with no I/O.
///
/// # Arguments
///
/// * `master` - Baseline whitelist lines (empty means no baseline)
/// * `updated` - Candidate whitelist lines
/// * `marker` - Disallowed prefix token, matched case-insensitively
///
/// # Returns
///
/// All bad-data findings in position order, followed by all unordered
/// findings in position order. Empty when nothing was added or nothing
/// was flagged. Output depends only on the inputs.
#[must_use]
pub fn validate(master: &[String], updated: &[String], marker: &str) -> Vec<Finding> {
    check_added(&added_lines(master, updated), marker)
}

/// Run the banned-prefix and ordering checks over an added-lines sequence
///
/// Both checks see the full sequence independently; their findings are
/// concatenated, bad-data first.
#[must_use]
pub fn check_added(added: &[String], marker: &str) -> Vec<Finding> {
    if added.is_empty() {
        return Vec::new();
    }

    let marker = marker.to_lowercase();
    let mut findings = Vec::new();

    for (idx, line) in added.iter().enumerate() {
        if line.to_lowercase().starts_with(&marker) {
            findings.push(Finding::bad_data(idx + 1, line.clone()));
        }
    }

    // Stable sort: duplicates and case-insensitive ties keep first-seen order.
    let mut expected = added.to_vec();
    expected.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    for (idx, line) in added.iter().enumerate() {
        if *line != expected[idx] {
            findings.push(Finding::unordered(idx + 1, expected[idx].clone()));
        }
    }

    findings
}
