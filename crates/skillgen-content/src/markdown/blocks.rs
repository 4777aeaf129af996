//! Content block extraction.
//!
//! Each extractor scans the body independently:
//!
//! - [`extract_code_blocks`]: every fenced code block
//! - [`extract_mermaid`]: fenced blocks tagged exactly `mermaid`
//! - [`extract_tables`]: contiguous runs of `| ... |` lines
//! - [`extract_admonitions`]: `!!! type "title"` blocks with indented bodies
//!
//! # Example
//!
//! ```rust
//! use skillgen_content::markdown::blocks::extract_code_blocks;
//!
//! let content = "```bash\necho hi\n```\n\n```\nplain\n```\n";
//! let blocks = extract_code_blocks(content);
//!
//! assert_eq!(blocks[0].filename, "example-1.sh");
//! assert_eq!(blocks[1].filename, "code-2.txt");
//! ```

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use regex::Regex;

use crate::document::{Admonition, CodeBlock, MermaidDiagram, Table};

/// Matches an admonition opener: `!!! type "title"`.
pub(crate) static ADMONITION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^!!!\s+(\w+)\s+"([^"]+)"\s*$"#).expect("Invalid admonition regex")
});

static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|.+\|\s*$").expect("Invalid table row regex"));

/// Indentation that marks admonition content.
pub(crate) const ADMONITION_INDENT: &str = "    ";

// ============================================================================
// Code blocks and diagrams
// ============================================================================

/// A fenced block as seen by the markdown parser.
struct FencedBlock {
    language: Option<String>,
    content: String,
}

fn fenced_blocks(markdown: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<FencedBlock> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                current = Some(FencedBlock {
                    language: info.split_whitespace().next().map(String::from),
                    content: String::new(),
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(mut block) = current.take() {
                    block.content = block.content.trim().to_string();
                    blocks.push(block);
                }
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.content.push_str(&text);
                }
            }
            _ => {}
        }
    }

    blocks
}

/// Extract every fenced code block in document order.
///
/// The first word of the info string is the language tag. Indented code
/// blocks are not included.
pub fn extract_code_blocks(markdown: &str) -> Vec<CodeBlock> {
    fenced_blocks(markdown)
        .into_iter()
        .enumerate()
        .map(|(index, block)| CodeBlock {
            index,
            filename: script_filename(block.language.as_deref(), index),
            language: block.language,
            content: block.content,
        })
        .collect()
}

/// Extract mermaid diagrams, titled `Diagram 1`, `Diagram 2`, ...
pub fn extract_mermaid(markdown: &str) -> Vec<MermaidDiagram> {
    fenced_blocks(markdown)
        .into_iter()
        .filter(|block| block.language.as_deref() == Some("mermaid"))
        .enumerate()
        .map(|(index, block)| MermaidDiagram {
            index,
            title: format!("Diagram {}", index + 1),
            content: block.content,
        })
        .collect()
}

/// Map a language tag to a script file extension.
///
/// Returns `None` for unrecognized languages.
pub fn language_extension(language: &str) -> Option<&'static str> {
    let ext = match language.to_lowercase().as_str() {
        "bash" | "sh" | "shell" | "zsh" => "sh",
        "yaml" | "yml" => "yaml",
        "go" | "golang" => "go",
        "javascript" | "js" => "js",
        "typescript" | "ts" => "ts",
        "python" | "py" => "py",
        "rust" | "rs" => "rs",
        "json" => "json",
        "xml" => "xml",
        "markdown" | "md" => "md",
        "dockerfile" => "Dockerfile",
        "makefile" => "Makefile",
        "toml" => "toml",
        "ini" => "ini",
        "sql" => "sql",
        "hcl" | "terraform" | "tf" => "tf",
        _ => return None,
    };
    Some(ext)
}

/// Derive the script filename for the code block at `index`.
///
/// Known languages give `example-N.<ext>`; unknown or missing languages
/// give `code-N.txt`. `N` is one-based.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::blocks::script_filename;
///
/// assert_eq!(script_filename(Some("go"), 0), "example-1.go");
/// assert_eq!(script_filename(Some("mermaid"), 2), "code-3.txt");
/// assert_eq!(script_filename(None, 4), "code-5.txt");
/// ```
pub fn script_filename(language: Option<&str>, index: usize) -> String {
    match language.and_then(language_extension) {
        Some(ext) => format!("example-{}.{ext}", index + 1),
        None => format!("code-{}.txt", index + 1),
    }
}

// ============================================================================
// Tables
// ============================================================================

fn is_table_separator(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t' | '\r'))
}

fn parse_table_row(line: &str) -> Vec<String> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Extract pipe tables with a line scan.
///
/// A run of `| ... |` lines forms one table. The first non-separator row is
/// the header; separator rows (dashes, pipes, alignment colons) are dropped.
pub fn extract_tables(markdown: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Option<Table> = None;

    for line in markdown.lines() {
        if !TABLE_ROW.is_match(line) {
            if let Some(table) = current.take() {
                tables.push(table);
            }
            continue;
        }

        let table = current.get_or_insert_with(|| Table {
            index: tables.len(),
            headers: Vec::new(),
            rows: Vec::new(),
        });

        if is_table_separator(line) {
            continue;
        }

        let cells = parse_table_row(line);
        if table.headers.is_empty() {
            table.headers = cells;
        } else {
            table.rows.push(cells);
        }
    }

    if let Some(table) = current {
        tables.push(table);
    }

    tables
}

// ============================================================================
// Admonitions
// ============================================================================

fn finish_admonition(mut admonition: Admonition, lines: Vec<&str>) -> Admonition {
    let mut lines = lines;
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    admonition.content = lines.join("\n");
    admonition
}

/// Extract `!!! type "title"` admonitions.
///
/// Lines indented by four spaces are content (indentation stripped). Blank
/// lines stay inside the block; the first non-blank, non-indented line ends
/// it.
///
/// # Example
///
/// ```rust
/// use skillgen_content::markdown::blocks::extract_admonitions;
///
/// let content = "!!! tip \"Hint\"\n    Use retries.\n\nAfter.";
/// let admonitions = extract_admonitions(content);
///
/// assert_eq!(admonitions[0].kind, "tip");
/// assert_eq!(admonitions[0].title, "Hint");
/// assert_eq!(admonitions[0].content, "Use retries.");
/// ```
pub fn extract_admonitions(markdown: &str) -> Vec<Admonition> {
    let mut admonitions = Vec::new();
    let mut current: Option<(Admonition, Vec<&str>)> = None;

    for line in markdown.lines() {
        if let Some(caps) = ADMONITION_HEADER.captures(line) {
            if let Some((admonition, lines)) = current.take() {
                admonitions.push(finish_admonition(admonition, lines));
            }
            let admonition = Admonition {
                index: admonitions.len(),
                kind: caps[1].to_string(),
                title: caps[2].to_string(),
                content: String::new(),
            };
            current = Some((admonition, Vec::new()));
            continue;
        }

        let Some((_, lines)) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix(ADMONITION_INDENT) {
            lines.push(rest);
        } else if line.trim().is_empty() {
            lines.push("");
        } else if let Some((admonition, lines)) = current.take() {
            admonitions.push(finish_admonition(admonition, lines));
        }
    }

    if let Some((admonition, lines)) = current {
        admonitions.push(finish_admonition(admonition, lines));
    }

    admonitions
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Code block tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_code_blocks_in_order() {
        let md = "# T\n\n```go\nfunc main() {}\n```\n\ntext\n\n```python title=\"x.py\"\nprint(1)\n```\n";
        let blocks = extract_code_blocks(md);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].index, 0);
        assert_eq!(blocks[0].language.as_deref(), Some("go"));
        assert_eq!(blocks[0].content, "func main() {}");
        assert_eq!(blocks[1].language.as_deref(), Some("python"));
        assert_eq!(blocks[1].filename, "example-2.py");
    }

    #[test]
    fn test_code_block_without_language() {
        let blocks = extract_code_blocks("```\nraw\n```\n");
        assert_eq!(blocks[0].language, None);
        assert_eq!(blocks[0].filename, "code-1.txt");
    }

    #[test]
    fn test_tilde_fence() {
        let blocks = extract_code_blocks("~~~yaml\nkey: value\n~~~\n");
        assert_eq!(blocks[0].filename, "example-1.yaml");
    }

    #[test]
    fn test_indented_code_not_extracted() {
        assert!(extract_code_blocks("Para\n\n    indented code\n").is_empty());
    }

    #[test]
    fn test_language_extension_table() {
        assert_eq!(language_extension("Bash"), Some("sh"));
        assert_eq!(language_extension("yml"), Some("yaml"));
        assert_eq!(language_extension("dockerfile"), Some("Dockerfile"));
        assert_eq!(language_extension("cobol"), None);
    }

    // ------------------------------------------------------------------------
    // Mermaid tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_mermaid_subset() {
        let md = "```mermaid\ngraph TD\n```\n\n```go\nx\n```\n\n```mermaid\nsequenceDiagram\n```\n\n```Mermaid\nno\n```\n";
        let diagrams = extract_mermaid(md);

        assert_eq!(diagrams.len(), 2);
        assert_eq!(diagrams[0].title, "Diagram 1");
        assert_eq!(diagrams[1].title, "Diagram 2");
        assert_eq!(diagrams[1].index, 1);
        assert_eq!(diagrams[1].content, "sequenceDiagram");
    }

    // ------------------------------------------------------------------------
    // Table tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_table_basic() {
        let md = "| Name | Value |\n|------|:-----:|\n| a | 1 |\n| b | 2 |\n\nAfter";
        let tables = extract_tables(md);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, vec!["Name", "Value"]);
        assert_eq!(tables[0].rows, vec![vec!["a", "1"], vec!["b", "2"]]);
    }

    #[test]
    fn test_multiple_tables() {
        let md = "| A |\n|---|\n| 1 |\ntext\n| B |\n| 2 |";
        let tables = extract_tables(md);

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].index, 1);
        assert_eq!(tables[1].headers, vec!["B"]);
        assert_eq!(tables[1].rows, vec![vec!["2"]]);
    }

    #[test]
    fn test_table_cell_with_dashes_is_data() {
        let md = "| Flag | Meaning |\n|---|---|\n| --force | overwrite |";
        let tables = extract_tables(md);
        assert_eq!(tables[0].rows[0], vec!["--force", "overwrite"]);
    }

    #[test]
    fn test_no_tables() {
        assert!(extract_tables("plain | text\nno pipes at edges").is_empty());
    }

    // ------------------------------------------------------------------------
    // Admonition tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_admonition_blank_line_inside() {
        let md = "!!! warning \"Careful\"\n    Line one.\n\n    Line two.\n\nOutside.";
        let admonitions = extract_admonitions(md);

        assert_eq!(admonitions.len(), 1);
        assert_eq!(admonitions[0].content, "Line one.\n\nLine two.");
    }

    #[test]
    fn test_consecutive_admonitions() {
        let md = "!!! note \"A\"\n    a\n!!! tip \"B\"\n    b\n";
        let admonitions = extract_admonitions(md);

        assert_eq!(admonitions.len(), 2);
        assert_eq!(admonitions[0].content, "a");
        assert_eq!(admonitions[1].index, 1);
        assert_eq!(admonitions[1].title, "B");
    }

    #[test]
    fn test_admonition_at_end_of_document() {
        let admonitions = extract_admonitions("text\n!!! info \"Last\"\n    tail");
        assert_eq!(admonitions[0].content, "tail");
    }

    #[test]
    fn test_admonition_requires_quoted_title() {
        assert!(extract_admonitions("!!! note\n    body\n").is_empty());
    }
}
