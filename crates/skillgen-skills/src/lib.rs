//! Skill extraction, rendering, and writing.
//!
//! This crate turns a parsed [`skillgen_content::Document`] into a
//! [`Skill`] and writes it to disk.
//!
//! # Modules
//!
//! - [`mapper`]: Heading synonym table and section lookup
//! - [`extractor`]: Document to skill extraction
//! - [`filter`]: Long code block replacement
//! - [`model`]: The skill output model
//! - [`render`]: The [`SkillRenderer`] seam and the markdown renderer
//! - [`writer`]: Writes a skill directory
//!
//! # Example
//!
//! ```rust
//! use skillgen_content::DocumentReader;
//! use skillgen_skills::SkillExtractor;
//!
//! let content = "---\ntitle: Fail Fast\n---\n\n## Why It Matters\n\nBad input spreads.\n";
//! let doc = DocumentReader::new()
//!     .parse("docs/patterns/fail-fast/index.md", content)
//!     .unwrap();
//!
//! let skill = SkillExtractor::default().extract(&doc).unwrap();
//! assert_eq!(skill.metadata.name, "fail-fast");
//! assert_eq!(skill.metadata.when_to_use, "Bad input spreads.");
//! ```

pub mod extractor;
pub mod filter;
pub mod mapper;
pub mod model;
pub mod render;
pub mod writer;

pub use extractor::{ExtractorConfig, SkillExtractor};
pub use mapper::{SectionMapper, SectionMappings, SkillField};
pub use model::{ExamplesDoc, ReferenceDoc, Script, Skill, SkillMetadata, Technique, TroubleshootingDoc};
pub use render::{MarkdownRenderer, SkillRenderer};
pub use writer::SkillWriter;
