//! Core domain logic for wlgate
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Finding, FindingKind)
//! - `services/` - The diff-and-validate logic

pub mod models;
pub mod services;
