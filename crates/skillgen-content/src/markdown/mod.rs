//! Markdown parsing and extraction utilities.
//!
//! - [`frontmatter`]: Split and type the leading YAML block
//! - [`sections`]: Build the two-level section tree and the introduction
//! - [`blocks`]: Independent scans for code blocks, mermaid diagrams,
//!   tables, and admonitions
//! - [`admonition`]: Rewrite `!!!` callouts as blockquotes
//! - [`helpers`]: First-paragraph extraction and truncation
//!
//! Each extractor makes one pass over the body and returns records tagged
//! with a zero-based sequence index, in document order.

pub mod admonition;
pub mod blocks;
pub mod frontmatter;
pub mod helpers;
pub mod sections;

// Re-export key functions
pub use admonition::convert_admonitions;
pub use blocks::{
    extract_admonitions, extract_code_blocks, extract_mermaid, extract_tables,
    language_extension, script_filename,
};
pub use frontmatter::split_front_matter;
pub use helpers::{extract_first_paragraph, is_bare_heading_marker, truncate_text};
pub use sections::{extract_introduction, parse_sections};
