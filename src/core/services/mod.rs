//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`validator`] - Diff two whitelists and validate the added lines

pub mod validator;

pub use validator::{added_lines, check_added, validate};
