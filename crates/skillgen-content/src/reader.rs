//! Document assembly.
//!
//! [`DocumentReader`] runs every parser in [`crate::markdown`] over one file
//! and collects the results into a [`Document`].

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use skillgen_core::{Error, Result};

use crate::document::Document;
use crate::markdown::{
    extract_admonitions, extract_code_blocks, extract_introduction, extract_mermaid,
    extract_tables, parse_sections, split_front_matter,
};

/// Reads documentation files into [`Document`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentReader;

impl DocumentReader {
    /// Creates a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the file at `path`.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing
    /// the document.
    pub fn read(&self, path: &Path) -> Result<Document> {
        let bytes = std::fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            log::warn!("replaced invalid UTF-8 path={}", path.display());
        }
        self.parse(path, &content)
    }

    /// Parse already-loaded content as if it was read from `path`.
    ///
    /// Fails only on malformed front matter; every extractor degrades to an
    /// empty result.
    pub fn parse(&self, path: impl Into<PathBuf>, content: &str) -> Result<Document> {
        let path = path.into();
        let (front_matter, body) = split_front_matter(content)?;

        let document = Document {
            introduction: extract_introduction(body),
            sections: parse_sections(body),
            code_blocks: extract_code_blocks(body),
            mermaid: extract_mermaid(body),
            tables: extract_tables(body),
            admonitions: extract_admonitions(body),
            raw_content: body.to_string(),
            front_matter,
            path,
        };

        log::debug!(
            "parsed document path={} sections={} code_blocks={} tables={}",
            document.path.display(),
            document.sections.len(),
            document.code_blocks.len(),
            document.tables.len()
        );

        Ok(document)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"---
title: Circuit Breaker
description: Stop calling a failing dependency
tags: [resilience]
---

# Circuit Breaker

Trip after repeated failures.

## When to Use

!!! tip "Rule of thumb"
    Remote calls only.

## Implementation

| State | Meaning |
|-------|---------|
| open  | reject  |

```go
breaker.Call(fn)
```

```mermaid
graph LR
```
"#;

    #[test]
    fn test_parse_assembles_everything() {
        let doc = DocumentReader::new()
            .parse("docs/patterns/circuit-breaker/index.md", SAMPLE)
            .unwrap();

        assert_eq!(doc.front_matter.title, "Circuit Breaker");
        assert_eq!(doc.front_matter.tags, vec!["resilience"]);
        assert_eq!(doc.introduction, "Trip after repeated failures.");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].subsections.len(), 2);
        assert_eq!(doc.code_blocks.len(), 2);
        assert_eq!(doc.mermaid.len(), 1);
        assert_eq!(doc.tables.len(), 1);
        assert_eq!(doc.admonitions[0].title, "Rule of thumb");
        assert!(doc.raw_content.starts_with("\n# Circuit Breaker"));
        assert!(!doc.raw_content.contains("description:"));
    }

    #[test]
    fn test_parse_malformed_front_matter_fails() {
        let err = DocumentReader::new()
            .parse("x.md", "---\ntitle: open\n\n# Body")
            .unwrap_err();
        assert!(err.is_per_document());
    }

    #[test]
    fn test_read_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.md");
        std::fs::write(&path, SAMPLE).unwrap();

        let doc = DocumentReader::new().read(&path).unwrap();
        assert_eq!(doc.path, path);
        assert_eq!(doc.front_matter.description, "Stop calling a failing dependency");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DocumentReader::new()
            .read(&dir.path().join("missing.md"))
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.md");
        std::fs::write(&path, b"---\ntitle: Caf\xe9\n---\n\nBody.\n").unwrap();

        let doc = DocumentReader::new().read(&path).unwrap();
        assert_eq!(doc.front_matter.title, "Caf\u{FFFD}");
        assert_eq!(doc.raw_content, "\nBody.\n");
    }
}
