//! Utility modules for file operations and identifier derivation.
//!
//! # Modules
//!
//! - [`files`]: Index-file discovery and atomic file writes
//! - [`ids`]: Skill name derivation

pub mod files;
pub mod ids;
