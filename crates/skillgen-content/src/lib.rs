//! Markdown parsing, front matter splitting, and content extraction.
//!
//! This crate turns a documentation file into a [`Document`]: the typed
//! front matter, a two-level section tree, the introduction, and every
//! code block, mermaid diagram, table, and admonition found in the body.
//!
//! # Modules
//!
//! - [`document`]: The parsed document model
//! - [`markdown`]: Markdown parsing and extraction
//!   - [`markdown::frontmatter`]: Front matter splitting
//!   - [`markdown::sections`]: Section tree and introduction
//!   - [`markdown::blocks`]: Code blocks, diagrams, tables, admonitions
//!   - [`markdown::admonition`]: Admonition to blockquote conversion
//!   - [`markdown::helpers`]: Paragraph and truncation helpers
//! - [`reader`]: Assembles a [`Document`] from a file
//!
//! # Example
//!
//! ```rust
//! use skillgen_content::DocumentReader;
//!
//! let content = "---\ntitle: Fail Fast\n---\n\n# Fail Fast\n\nStop early.\n\n## When to Use\n\nAlways.\n";
//! let doc = DocumentReader::new().parse("docs/patterns/fail-fast/index.md", content).unwrap();
//!
//! assert_eq!(doc.front_matter.title, "Fail Fast");
//! assert_eq!(doc.introduction, "Stop early.");
//! assert_eq!(doc.sections[0].subsections[0].title, "When to Use");
//! ```

pub mod document;
pub mod markdown;
pub mod reader;

pub use document::{Admonition, CodeBlock, Document, FrontMatter, MermaidDiagram, Section, Table};
pub use markdown::{
    convert_admonitions, extract_admonitions, extract_code_blocks, extract_first_paragraph,
    extract_introduction, extract_mermaid, extract_tables, parse_sections, script_filename,
    split_front_matter,
};
pub use reader::DocumentReader;
