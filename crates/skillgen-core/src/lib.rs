//! Skillgen Core: shared errors and utilities.
//!
//! This crate provides the foundational types used across all skillgen
//! crates. It has no internal skillgen dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`util`]: Name derivation, index-file discovery, atomic writes

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, ErrorKind, Result};

// Convenience re-exports from util
pub use util::files::{find_index_files, write_atomic};
pub use util::ids::derive_skill_name;
