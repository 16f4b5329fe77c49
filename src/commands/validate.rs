//! Validate an updated whitelist against the approved baseline

use anyhow::Context;
use log::{debug, info};

use wlgate::config::Policy;
use wlgate::core::services::validator;
use wlgate::output::{OutputMode, ValidationReport};
use wlgate::whitelist;

use crate::cli::Cli;

/// Validate the updated whitelist and report findings
///
/// Returns whether the gate passed (no findings). Unreadable input files
/// and report-write failures are fatal and surface as errors.
pub fn validate(cli: &Cli, mode: OutputMode) -> anyhow::Result<bool> {
    let master = whitelist::read_optional(cli.base.as_deref())
        .context("error reading master whitelist file")?;
    let updated = whitelist::read_lines(&cli.updated)
        .context("error reading updated whitelist file")?;

    let policy = Policy::load();
    debug!("marker token: {:?}", policy.marker);

    let added = validator::added_lines(&master, &updated);
    if added.is_empty() {
        info!("No difference between whitelist files");
    }

    let findings = validator::check_added(&added, &policy.marker);
    let report = ValidationReport::new(added.len(), findings);

    if let Some(out) = &cli.out {
        report
            .write_to(out)
            .with_context(|| format!("failed to write report to {}", out.display()))?;
        debug!("wrote report to {}", out.display());
    } else {
        report.render(mode);
    }

    Ok(report.passed)
}
