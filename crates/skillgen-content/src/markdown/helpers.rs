//! Content helper utilities.
//!
//! Small line-oriented helpers shared by the section builder, the
//! admonition converter, and the skill extractor.

/// Check whether a line is only heading markers (`#`, `##`, ...) with no text.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::helpers::is_bare_heading_marker;
///
/// assert!(is_bare_heading_marker("##"));
/// assert!(is_bare_heading_marker("  ### "));
/// assert!(!is_bare_heading_marker("## Title"));
/// assert!(!is_bare_heading_marker(""));
/// ```
pub fn is_bare_heading_marker(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c == '#')
}

/// Remove trailing blank lines and bare heading markers from content.
///
/// A content slice can end with the marker of the following heading when a
/// span boundary lands inside it; this strips that artifact.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::helpers::trim_trailing_headings;
///
/// assert_eq!(trim_trailing_headings("Text.\n\n##\n"), "Text.");
/// assert_eq!(trim_trailing_headings("Text.\n## Real"), "Text.\n## Real");
/// ```
pub fn trim_trailing_headings(content: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();

    while let Some(last) = lines.last() {
        if last.trim().is_empty() || is_bare_heading_marker(last) {
            lines.pop();
        } else {
            break;
        }
    }

    lines.join("\n")
}

/// Extract the first paragraph of markdown content, line by line.
///
/// Leading blank lines and heading lines are skipped; the paragraph ends at
/// the first blank line after text. Lines are joined with single spaces and
/// the result is truncated to `max_chars` (see [`truncate_text`]).
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::helpers::extract_first_paragraph;
///
/// let content = "### Retry\n\nRetry with\nbackoff.\n\nMore content.";
/// assert_eq!(extract_first_paragraph(content, 200), "Retry with backoff.");
/// ```
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> String {
    let mut paragraph = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }

        if trimmed.starts_with('#') {
            continue;
        }

        if !paragraph.is_empty() {
            paragraph.push(' ');
        }
        paragraph.push_str(trimmed);
    }

    truncate_text(&paragraph, max_chars)
}

/// Truncate text to at most `max_chars` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::helpers::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("abcdefghijkl", 10), "abcdefg...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    const ELLIPSIS: &str = "...";

    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

// ============================================================================
// Tests
// ============================================================================
