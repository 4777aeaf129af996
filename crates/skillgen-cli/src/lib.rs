//! The `skillgen` command-line tool.
//!
//! Scans the category directories of a documentation tree for `index.md`
//! files, turns each one into a skill directory and, when collection
//! metadata is configured, writes the plugin catalog and per-collection
//! manifests.
//!
//! # Modules
//!
//! - [`cli`]: Command-line arguments
//! - [`config`]: TOML configuration and overrides
//! - [`logging`]: Subscriber setup
//! - [`pipeline`]: The generation run and its summary

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;

pub use cli::Cli;
pub use config::SkillgenConfig;
pub use pipeline::{Outcome, Pipeline, RunSummary};
