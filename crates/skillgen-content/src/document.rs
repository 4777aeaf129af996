//! The parsed document model.
//!
//! Everything here is built once by the parsers in [`crate::markdown`] and
//! treated as immutable afterwards.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};

/// A parsed documentation file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Path the document was read from.
    pub path: PathBuf,
    /// Typed front matter plus the raw mapping.
    pub front_matter: FrontMatter,
    /// Text between the title heading and the next heading.
    pub introduction: String,
    /// Top-level sections, each owning its direct subsections.
    pub sections: Vec<Section>,
    /// Fenced code blocks in document order.
    pub code_blocks: Vec<CodeBlock>,
    /// Mermaid diagrams in document order.
    pub mermaid: Vec<MermaidDiagram>,
    /// Pipe tables in document order.
    pub tables: Vec<Table>,
    /// Admonition blocks in document order.
    pub admonitions: Vec<Admonition>,
    /// Body text after the front matter.
    pub raw_content: String,
}

impl Document {
    /// Number of newline characters in the body.
    pub fn line_count(&self) -> usize {
        self.raw_content.matches('\n').count()
    }
}

/// Front matter metadata from the top of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Document title.
    pub title: String,
    /// Short description (trimmed).
    pub description: String,
    /// Tags, first occurrence wins on duplicates.
    pub tags: Vec<String>,
    /// Publication date, when present and parseable.
    pub date: Option<NaiveDate>,
    /// Author names.
    pub authors: Vec<String>,
    /// Every key from the block, including the ones modeled above.
    pub raw: Mapping,
}

impl FrontMatter {
    /// Blog posts carry both a date and at least one author. They are not
    /// turned into skills.
    pub fn is_blog_post(&self) -> bool {
        self.date.is_some() && !self.authors.is_empty()
    }

    /// Get a raw field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Get a raw string field by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a raw string list field by key.
    ///
    /// Returns an empty vec if the field is missing or not a sequence.
    /// Non-string items are skipped.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A heading and the content under it.
///
/// Only one level of nesting is modeled: a top-level section holds its
/// direct children (level + 1), and those children hold none. Deeper
/// headings survive only as raw text inside their ancestor's content.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Heading text with inline markup stripped.
    pub title: String,
    /// Heading level, 1 for `#`.
    pub level: usize,
    /// Trimmed markdown up to the next heading at the same or shallower level.
    pub content: String,
    /// Content before the first direct subsection (equals `content` when
    /// there are no subsections).
    pub preamble: String,
    /// Direct subsections.
    pub subsections: Vec<Section>,
    /// Byte offset where the heading starts.
    pub heading_start: usize,
    /// Byte offset where the content starts (end of heading).
    pub content_start: usize,
    /// Byte offset where the content ends.
    pub content_end: usize,
}

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Zero-based position among the document's code blocks.
    pub index: usize,
    /// First word of the info string, if any.
    pub language: Option<String>,
    /// Trimmed block content.
    pub content: String,
    /// Script filename derived from language and index.
    pub filename: String,
}

/// A fenced code block tagged `mermaid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidDiagram {
    /// Zero-based position among the document's diagrams.
    pub index: usize,
    /// Generated title, `Diagram N`.
    pub title: String,
    /// Trimmed diagram source.
    pub content: String,
}

/// A pipe table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Zero-based position among the document's tables.
    pub index: usize,
    /// Cells of the first non-separator row.
    pub headers: Vec<String>,
    /// Remaining rows.
    pub rows: Vec<Vec<String>>,
}

/// A `!!! type "title"` callout block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admonition {
    /// Zero-based position among the document's admonitions.
    pub index: usize,
    /// Callout type (`note`, `tip`, `warning`, ...).
    pub kind: String,
    /// Quoted title.
    pub title: String,
    /// Content with the four-space indentation stripped.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(date: Option<&str>, authors: &[&str]) -> FrontMatter {
        FrontMatter {
            date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blog_post_needs_date_and_author() {
        assert!(front_matter(Some("2024-01-05"), &["A"]).is_blog_post());
        assert!(!front_matter(Some("2024-01-05"), &[]).is_blog_post());
        assert!(!front_matter(None, &["A"]).is_blog_post());
        assert!(!front_matter(None, &[]).is_blog_post());
    }

    #[test]
    fn test_line_count() {
        let doc = Document {
            path: PathBuf::from("x.md"),
            front_matter: FrontMatter::default(),
            introduction: String::new(),
            sections: vec![],
            code_blocks: vec![],
            mermaid: vec![],
            tables: vec![],
            admonitions: vec![],
            raw_content: "a\nb\nc\n".to_string(),
        };
        assert_eq!(doc.line_count(), 3);
    }
}
