//! YAML front matter splitting.
//!
//! Front matter is metadata at the start of a markdown file, delimited by
//! `---` lines:
//!
//! ```markdown
//! ---
//! title: Graceful Degradation
//! description: Keep serving when dependencies fail
//! tags:
//!   - resilience
//! ---
//!
//! # Graceful Degradation
//! ```
//!
//! # Usage
//!
//! ```rust
//! use skillgen_content::markdown::split_front_matter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let (fm, body) = split_front_matter(content).unwrap();
//!
//! assert_eq!(fm.title, "Test");
//! assert_eq!(body.trim(), "Body");
//! ```

use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};
use skillgen_core::{Error, Result};

use crate::document::FrontMatter;

/// Delimiter line around the front matter block.
pub const DELIMITER: &str = "---";

/// The one date format accepted for `date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Split front matter from the body of a document.
///
/// # Behavior
///
/// - Content not starting with a `---` line: empty front matter, body is
///   the full content
/// - Fewer than three lines, or no closing `---` line:
///   [`Error::MalformedFrontMatter`]
/// - Block that is not a YAML mapping: [`Error::FrontMatterYaml`] or
///   [`Error::MalformedFrontMatter`]
/// - An unparseable `date` is treated as absent
///
/// The body is everything after the closing delimiter line.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::split_front_matter;
///
/// let (fm, body) = split_front_matter("# Just Markdown").unwrap();
/// assert!(fm.title.is_empty());
/// assert_eq!(body, "# Just Markdown");
///
/// assert!(split_front_matter("---\ntitle: x\n").is_err());
/// ```
pub fn split_front_matter(content: &str) -> Result<(FrontMatter, &str)> {
    if !content.starts_with("---\n") && !content.starts_with("---\r\n") {
        return Ok((FrontMatter::default(), content));
    }

    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() < 3 {
        return Err(Error::malformed_front_matter("too few lines"));
    }

    let closing = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == DELIMITER)
        .map(|(i, _)| i)
        .ok_or_else(|| Error::malformed_front_matter("no closing delimiter found"))?;

    let yaml = lines[1..closing].join("\n");
    let raw = parse_mapping(&yaml)?;

    // Each line consumed its trailing '\n'
    let consumed: usize = lines[..=closing].iter().map(|l| l.len() + 1).sum();
    let body = content.get(consumed..).unwrap_or("");

    Ok((typed_front_matter(raw), body))
}

fn parse_mapping(yaml: &str) -> Result<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(Error::malformed_front_matter(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn typed_front_matter(raw: Mapping) -> FrontMatter {
    let mut fm = FrontMatter {
        raw,
        ..Default::default()
    };

    fm.title = fm.get_str("title").unwrap_or_default().to_string();
    fm.description = fm
        .get_str("description")
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    let mut tags: Vec<String> = Vec::new();
    for tag in fm.get_string_list("tags") {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    fm.tags = tags;

    fm.date = fm.get_str("date").and_then(|d| {
        NaiveDate::parse_from_str(d.trim(), DATE_FORMAT)
            .map_err(|e| log::debug!("ignoring unparseable front matter date {d:?}: {e}"))
            .ok()
    });
    fm.authors = fm.get_string_list("authors");

    fm
}

// ============================================================================
// Tests
// ============================================================================
