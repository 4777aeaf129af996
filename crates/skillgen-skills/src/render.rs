//! Skill document rendering.
//!
//! [`SkillRenderer`] is the seam between extraction and output: it turns a
//! [`Skill`] into the text of each of its documents. [`MarkdownRenderer`]
//! is the built-in implementation.

use std::fmt::Write;

use skillgen_content::{Table, extract_first_paragraph};
use skillgen_core::{Error, Result};

use crate::model::{EXAMPLES_FILE, REFERENCE_FILE, Skill, TROUBLESHOOTING_FILE};

/// Renders the documents of a skill.
///
/// Rendering a sub-document the skill does not have is an error.
pub trait SkillRenderer {
    /// Render `SKILL.md`.
    fn render_skill(&self, skill: &Skill) -> Result<String>;

    /// Render `examples.md`.
    fn render_examples(&self, skill: &Skill) -> Result<String>;

    /// Render `troubleshooting.md`.
    fn render_troubleshooting(&self, skill: &Skill) -> Result<String>;

    /// Render `reference.md`.
    fn render_reference(&self, skill: &Skill) -> Result<String>;
}

/// Plain markdown renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl SkillRenderer for MarkdownRenderer {
    fn render_skill(&self, skill: &Skill) -> Result<String> {
        let mut builder = MarkdownBuilder::new();
        builder
            .write_skill(skill)
            .map_err(|e| Error::render(format!("SKILL.md for {}: {e}", skill.metadata.name)))?;
        Ok(builder.finish())
    }

    fn render_examples(&self, skill: &Skill) -> Result<String> {
        if skill.examples.is_none() {
            return Err(Error::render(format!(
                "skill {} has no examples to render",
                skill.metadata.name
            )));
        }
        let mut builder = MarkdownBuilder::new();
        builder
            .write_examples(skill)
            .map_err(|e| Error::render(format!("{EXAMPLES_FILE}: {e}")))?;
        Ok(builder.finish())
    }

    fn render_troubleshooting(&self, skill: &Skill) -> Result<String> {
        let Some(doc) = &skill.troubleshooting else {
            return Err(Error::render(format!(
                "skill {} has no troubleshooting content to render",
                skill.metadata.name
            )));
        };
        let mut builder = MarkdownBuilder::new();
        builder
            .write_document(&format!("{} Troubleshooting", skill.metadata.title), &doc.content)
            .map_err(|e| Error::render(format!("{TROUBLESHOOTING_FILE}: {e}")))?;
        Ok(builder.finish())
    }

    fn render_reference(&self, skill: &Skill) -> Result<String> {
        if skill.reference.is_none() {
            return Err(Error::render(format!(
                "skill {} has no reference content to render",
                skill.metadata.name
            )));
        }
        let mut builder = MarkdownBuilder::new();
        builder
            .write_reference(skill)
            .map_err(|e| Error::render(format!("{REFERENCE_FILE}: {e}")))?;
        Ok(builder.finish())
    }
}

/// Accumulates one markdown document.
struct MarkdownBuilder {
    buffer: String,
}

impl MarkdownBuilder {
    fn new() -> Self {
        Self {
            buffer: String::with_capacity(4096),
        }
    }

    /// The document with exactly one trailing newline.
    fn finish(self) -> String {
        let mut text = self.buffer.trim_end().to_string();
        text.push('\n');
        text
    }

    fn write_skill(&mut self, skill: &Skill) -> std::fmt::Result {
        let meta = &skill.metadata;

        self.write_frontmatter(skill)?;
        writeln!(self.buffer, "# {}", meta.title)?;
        writeln!(self.buffer)?;
        if !meta.description.is_empty() {
            writeln!(self.buffer, "{}", meta.description)?;
            writeln!(self.buffer)?;
        }

        self.write_section("When to Use", &meta.when_to_use)?;
        self.write_section("Prerequisites", &meta.prerequisites)?;
        self.write_section("Implementation", &meta.implementation_steps)?;
        self.write_section("Key Principles", &meta.key_principles)?;
        self.write_section("When to Apply", &meta.when_to_apply)?;

        if !meta.techniques.is_empty() {
            writeln!(self.buffer, "## Techniques")?;
            writeln!(self.buffer)?;
            for technique in &meta.techniques {
                writeln!(self.buffer, "### {}", technique.name)?;
                writeln!(self.buffer)?;
                writeln!(self.buffer, "{}", technique.content)?;
                writeln!(self.buffer)?;
            }
        }

        self.write_section("Comparison", &meta.comparison)?;
        self.write_section("Anti-Patterns", &meta.anti_patterns)?;

        if !meta.related_patterns.is_empty() {
            writeln!(self.buffer, "## Related Patterns")?;
            writeln!(self.buffer)?;
            for pattern in &meta.related_patterns {
                writeln!(self.buffer, "- {pattern}")?;
            }
            writeln!(self.buffer)?;
        }

        self.write_section("References", &meta.references)?;
        self.write_resources(skill)?;

        if !meta.source_url.is_empty() {
            writeln!(self.buffer, "## Source")?;
            writeln!(self.buffer)?;
            writeln!(self.buffer, "[{}]({})", meta.title, meta.source_url)?;
        }
        Ok(())
    }

    fn write_frontmatter(&mut self, skill: &Skill) -> std::fmt::Result {
        let meta = &skill.metadata;
        let description = if !meta.description.is_empty() {
            meta.description.clone()
        } else {
            match extract_first_paragraph(&meta.when_to_use, 200) {
                p if p.is_empty() => meta.title.clone(),
                p => p,
            }
        };

        // A JSON string is a valid double-quoted YAML scalar
        let quoted = serde_json::to_string(&description).map_err(|_| std::fmt::Error)?;

        writeln!(self.buffer, "---")?;
        writeln!(self.buffer, "name: {}", meta.name)?;
        writeln!(self.buffer, "description: {quoted}")?;
        writeln!(self.buffer, "---")?;
        writeln!(self.buffer)?;
        Ok(())
    }

    fn write_section(&mut self, heading: &str, content: &str) -> std::fmt::Result {
        if content.is_empty() {
            return Ok(());
        }
        writeln!(self.buffer, "## {heading}")?;
        writeln!(self.buffer)?;
        writeln!(self.buffer, "{content}")?;
        writeln!(self.buffer)?;
        Ok(())
    }

    fn write_resources(&mut self, skill: &Skill) -> std::fmt::Result {
        let links = [
            (skill.examples.is_some(), "Examples", EXAMPLES_FILE),
            (skill.troubleshooting.is_some(), "Troubleshooting", TROUBLESHOOTING_FILE),
            (skill.reference.is_some(), "Reference", REFERENCE_FILE),
        ];
        if !links.iter().any(|(present, _, _)| *present) {
            return Ok(());
        }

        writeln!(self.buffer, "## Additional Resources")?;
        writeln!(self.buffer)?;
        for (_, label, file) in links.iter().filter(|(present, _, _)| *present) {
            writeln!(self.buffer, "- [{label}]({file})")?;
        }
        writeln!(self.buffer)?;
        Ok(())
    }

    fn write_examples(&mut self, skill: &Skill) -> std::fmt::Result {
        writeln!(self.buffer, "# {} Examples", skill.metadata.title)?;
        writeln!(self.buffer)?;

        let blocks = skill
            .examples
            .as_ref()
            .map(|e| e.code_blocks.as_slice())
            .unwrap_or_default();
        for block in blocks {
            writeln!(self.buffer, "## Example {}", block.index + 1)?;
            writeln!(self.buffer)?;
            self.write_fence(block.language.as_deref().unwrap_or(""), &block.content)?;
        }
        Ok(())
    }

    fn write_document(&mut self, title: &str, content: &str) -> std::fmt::Result {
        writeln!(self.buffer, "# {title}")?;
        writeln!(self.buffer)?;
        writeln!(self.buffer, "{content}")?;
        Ok(())
    }

    fn write_reference(&mut self, skill: &Skill) -> std::fmt::Result {
        let Some(reference) = &skill.reference else {
            return Ok(());
        };

        self.write_document(
            &format!("{} Reference", skill.metadata.title),
            reference.content.trim(),
        )?;
        writeln!(self.buffer)?;

        if !reference.tables.is_empty() {
            writeln!(self.buffer, "## Tables")?;
            writeln!(self.buffer)?;
            for table in &reference.tables {
                writeln!(self.buffer, "### Table {}", table.index + 1)?;
                writeln!(self.buffer)?;
                self.write_table(table)?;
                writeln!(self.buffer)?;
            }
        }

        if !reference.diagrams.is_empty() {
            writeln!(self.buffer, "## Diagrams")?;
            writeln!(self.buffer)?;
            for diagram in &reference.diagrams {
                writeln!(self.buffer, "### {}", diagram.title)?;
                writeln!(self.buffer)?;
                self.write_fence("mermaid", &diagram.content)?;
            }
        }
        Ok(())
    }

    fn write_fence(&mut self, language: &str, content: &str) -> std::fmt::Result {
        writeln!(self.buffer, "```{language}")?;
        writeln!(self.buffer, "{content}")?;
        writeln!(self.buffer, "```")?;
        writeln!(self.buffer)?;
        Ok(())
    }

    fn write_table(&mut self, table: &Table) -> std::fmt::Result {
        writeln!(self.buffer, "| {} |", table.headers.join(" | "))?;
        let separator = vec!["---"; table.headers.len().max(1)];
        writeln!(self.buffer, "| {} |", separator.join(" | "))?;
        for row in &table.rows {
            writeln!(self.buffer, "| {} |", row.join(" | "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
