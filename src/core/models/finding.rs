//! Finding model
//!
//! A finding is one validation result: an added whitelist line that
//! tripped a policy check. Positions are 1-based indexes into the
//! added-lines sequence, matching how reviewers read the report.

use serde::{Deserialize, Serialize};

/// Which policy check produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// The added line starts with the disallowed marker token
    BadData,
    /// The added line is out of case-insensitive sorted order
    Unordered,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadData => write!(f, "bad_data"),
            Self::Unordered => write!(f, "unordered"),
        }
    }
}

/// One validation result for an added whitelist line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Which check produced this finding
    pub kind: FindingKind,

    /// 1-based position within the added-lines sequence
    pub position: usize,

    /// The involved line (bad data) or the expected line (unordered)
    pub text: String,
}

impl Finding {
    /// Create a bad-data finding for the line at `position`
    #[must_use]
    pub fn bad_data(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::BadData,
            position,
            text: text.into(),
        }
    }

    /// Create an unordered finding; `text` is the line expected at `position`
    #[must_use]
    pub fn unordered(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Unordered,
            position,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FindingKind::BadData => {
                write!(f, "Bad data at line {}: '{}'", self.position, self.text)
            },
            FindingKind::Unordered => {
                write!(f, "Unordered line {}: Expected '{}' to be next", self.position, self.text)
            },
        }
    }
}
