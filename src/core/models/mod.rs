//! Domain models for wlgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Finding`] - One validation result with position and content
//! - [`FindingKind`] - Which policy check produced the finding

mod finding;

pub use finding::{Finding, FindingKind};
