//! Long code block filtering for `SKILL.md` fields.
//!
//! `SKILL.md` should stay skimmable: fenced blocks longer than a limit are
//! swapped for a pointer to `examples.md`, where every block is kept in
//! full.

/// Replacement for a fenced block that is too long.
pub const EXAMPLES_PLACEHOLDER: &str =
    "\n*See [examples.md](examples.md) for detailed code examples.*\n";

/// Default maximum number of content lines kept inline.
pub const DEFAULT_MAX_CODE_LINES: usize = 10;

fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

/// Replace fenced blocks with more than `max_lines` content lines by
/// [`EXAMPLES_PLACEHOLDER`].
///
/// Fence lines are not counted. A fence left open at the end of the content
/// is kept verbatim. The result is trimmed.
///
/// # Example
///
/// ```rust
/// use skillgen_skills::filter::filter_long_code_blocks;
///
/// let short = "Intro\n\n```bash\necho hi\n```";
/// assert_eq!(filter_long_code_blocks(short, 10), short);
///
/// let long = format!("Intro\n\n```bash\n{}```", "echo hi\n".repeat(11));
/// assert!(filter_long_code_blocks(&long, 10).contains("examples.md"));
/// ```
pub fn filter_long_code_blocks(content: &str, max_lines: usize) -> String {
    let mut result = String::with_capacity(content.len());
    let mut block: Option<(&'static str, Vec<&str>)> = None;

    for line in content.split('\n') {
        match block.as_mut() {
            None => {
                if let Some(marker) = fence_marker(line) {
                    block = Some((marker, vec![line]));
                } else {
                    result.push_str(line);
                    result.push('\n');
                }
            }
            Some((marker, lines)) => {
                lines.push(line);
                if fence_marker(line) != Some(*marker) {
                    continue;
                }

                // Opening and closing fences are not content
                if lines.len() - 2 > max_lines {
                    result.push_str(EXAMPLES_PLACEHOLDER);
                } else {
                    for kept in lines.iter() {
                        result.push_str(kept);
                        result.push('\n');
                    }
                }
                block = None;
            }
        }
    }

    if let Some((_, lines)) = block {
        for kept in lines {
            result.push_str(kept);
            result.push('\n');
        }
    }

    result.trim().to_string()
}

// ============================================================================
// Tests
// ============================================================================
