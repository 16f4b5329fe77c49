//! Validation policy configuration
//!
//! The disallowed marker token is a policy value, not a hardcoded
//! literal. It defaults to [`DEFAULT_MARKER`] and can be overridden per
//! project through a `.wlgate.toml` file in the working directory:
//!
//! ```toml
//! [policy]
//! marker = "bad"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default disallowed prefix for added whitelist lines
pub const DEFAULT_MARKER: &str = "bad";

/// Name of the optional per-project policy file
pub const POLICY_FILE: &str = ".wlgate.toml";

/// Validation policy applied to added whitelist lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Disallowed prefix token, matched case-insensitively
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            marker: default_marker(),
        }
    }
}

/// On-disk layout of `.wlgate.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
struct PolicyFile {
    #[serde(default)]
    policy: Option<Policy>,
}

impl Policy {
    /// Load the policy from `.wlgate.toml` in the working directory,
    /// falling back to the default when the file is absent or malformed
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(POLICY_FILE))
    }

    /// Load the policy from a specific file path
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str::<PolicyFile>(&content).ok())
                .and_then(|file| file.policy)
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
