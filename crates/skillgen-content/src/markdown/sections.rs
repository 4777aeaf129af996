//! Section tree construction.
//!
//! Headings are collected in document order with `pulldown-cmark`, then
//! folded into a two-level tree:
//!
//! - A heading is **top-level** when no earlier heading is shallower.
//! - A heading is a **direct subsection** of a top-level section when its
//!   level is exactly one deeper and it falls inside the parent's span.
//! - Anything deeper is not modeled; its text stays inside the ancestor's
//!   content.
//!
//! A section's content runs from the end of its heading to the start of the
//! next heading at the same or shallower level.
//!
//! # Example
//!
//! ```rust
//! use skillgen_content::markdown::sections::parse_sections;
//!
//! let content = "## Setup\n\nInstall it.\n\n### Linux\n\napt install\n\n## Usage\n\nRun it.";
//! let sections = parse_sections(content);
//!
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].title, "Setup");
//! assert_eq!(sections[0].subsections[0].title, "Linux");
//! assert_eq!(sections[1].content, "Run it.");
//! ```

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::document::Section;
use crate::markdown::helpers::trim_trailing_headings;

/// A heading found in the flat scan.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeadingSpan {
    title: String,
    level: usize,
    /// Offset of the first byte of the heading.
    start: usize,
    /// Offset just past the heading.
    end: usize,
}

/// Collect headings in document order with their text, level, and span.
///
/// Inline markup (emphasis, links, code) contributes only its text.
fn collect_headings(markdown: &str) -> Vec<HeadingSpan> {
    let mut headings = Vec::new();
    let mut current: Option<HeadingSpan> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some(HeadingSpan {
                    title: String::new(),
                    level: heading_depth(level),
                    start: range.start,
                    end: range.end,
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut heading) = current.take() {
                    heading.title = heading.title.trim().to_string();
                    headings.push(heading);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.title.push(' ');
                }
            }
            _ => {}
        }
    }

    headings
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Offset where the content of heading `i` ends.
fn content_end(headings: &[HeadingSpan], i: usize, doc_len: usize) -> usize {
    let level = headings[i].level;
    headings[i + 1..]
        .iter()
        .find(|h| h.level <= level)
        .map(|h| h.start)
        .unwrap_or(doc_len)
}

/// Trimmed text of `markdown[start..end]`, without trailing heading markers.
fn slice_content(markdown: &str, start: usize, end: usize) -> String {
    let start = start.min(end);
    trim_trailing_headings(markdown[start..end].trim())
}

fn leaf_section(markdown: &str, headings: &[HeadingSpan], i: usize) -> Section {
    let heading = &headings[i];
    let end = content_end(headings, i, markdown.len());
    let content = slice_content(markdown, heading.end, end);

    Section {
        title: heading.title.clone(),
        level: heading.level,
        preamble: content.clone(),
        content,
        subsections: Vec::new(),
        heading_start: heading.start,
        content_start: heading.end,
        content_end: end,
    }
}

/// Parse markdown into top-level sections with their direct subsections.
pub fn parse_sections(markdown: &str) -> Vec<Section> {
    let headings = collect_headings(markdown);
    let mut sections = Vec::new();

    for (i, heading) in headings.iter().enumerate() {
        let is_top_level = headings[..i].iter().all(|h| h.level >= heading.level);
        if !is_top_level {
            continue;
        }

        let mut section = leaf_section(markdown, &headings, i);

        let children: Vec<usize> = (i + 1..headings.len())
            .take_while(|&j| headings[j].level > heading.level)
            .filter(|&j| headings[j].level == heading.level + 1)
            .collect();

        if let Some(&first) = children.first() {
            section.preamble = slice_content(markdown, heading.end, headings[first].start);
        }
        section.subsections = children
            .into_iter()
            .map(|j| leaf_section(markdown, &headings, j))
            .collect();

        sections.push(section);
    }

    sections
}

/// Extract the introduction: text between the first level-1 heading and the
/// next heading of any level.
///
/// Returns an empty string when the document has no level-1 heading.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::sections::extract_introduction;
///
/// let content = "# Title\n\nIntro text.\n\n## First\n\nBody.";
/// assert_eq!(extract_introduction(content), "Intro text.");
/// assert_eq!(extract_introduction("## No title\n\nBody."), "");
/// ```
pub fn extract_introduction(markdown: &str) -> String {
    let headings = collect_headings(markdown);

    let Some(title_pos) = headings.iter().position(|h| h.level == 1) else {
        return String::new();
    };

    let start = headings[title_pos].end;
    let end = headings
        .get(title_pos + 1)
        .map(|h| h.start)
        .unwrap_or(markdown.len());

    slice_content(markdown, start, end)
}

// ============================================================================
// Tests
// ============================================================================
