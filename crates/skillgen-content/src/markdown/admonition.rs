//! Admonition to blockquote conversion.
//!
//! MkDocs-style callouts do not render outside MkDocs:
//!
//! ```markdown
//! !!! tip "Helpful hint"
//!     Retry with backoff.
//! ```
//!
//! become standard blockquotes:
//!
//! ```markdown
//! > **Helpful hint**
//! >
//! > Retry with backoff.
//! ```
//!
//! The output never contains an admonition opener, so converting twice
//! yields the same text as converting once.

use crate::markdown::blocks::{ADMONITION_HEADER, ADMONITION_INDENT};
use crate::markdown::helpers::is_bare_heading_marker;

/// Quote marker prepended to converted lines.
const QUOTE: &str = ">";

/// Convert every `!!! type "title"` block into a blockquote.
///
/// Indented lines are quoted with the indentation stripped, blank lines
/// become a bare `>`. The first line that is neither blank nor indented
/// closes the block and is emitted after a blank separator, unless it is a
/// bare heading marker such as `##`, which is dropped.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::convert_admonitions;
///
/// let input = "!!! warning \"Careful\"\n    Check inputs.\nNext line";
/// let output = convert_admonitions(input);
///
/// assert_eq!(output, "> **Careful**\n>\n> Check inputs.\n\nNext line");
/// ```
pub fn convert_admonitions(content: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut block: Option<Vec<String>> = None;

    for line in content.split('\n') {
        if let Some(caps) = ADMONITION_HEADER.captures(line) {
            if let Some(pending) = block.take() {
                result.extend(pending);
                result.push(String::new());
            }
            block = Some(vec![format!("{QUOTE} **{}**", &caps[2]), QUOTE.to_string()]);
            continue;
        }

        let Some(lines) = block.as_mut() else {
            result.push(line.to_string());
            continue;
        };

        if let Some(rest) = line.strip_prefix(ADMONITION_INDENT) {
            lines.push(quote_line(rest));
        } else if line.trim().is_empty() {
            lines.push(QUOTE.to_string());
        } else {
            result.extend(block.take().unwrap_or_default());
            result.push(String::new());
            if !is_bare_heading_marker(line) {
                result.push(line.to_string());
            }
        }
    }

    if let Some(pending) = block {
        result.extend(pending);
    }

    result.join("\n")
}

fn quote_line(text: &str) -> String {
    if text.trim().is_empty() {
        QUOTE.to_string()
    } else {
        format!("{QUOTE} {text}")
    }
}

// ============================================================================
// Tests
// ============================================================================
