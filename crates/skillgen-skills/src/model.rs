//! The skill output model.
//!
//! A [`Skill`] is everything needed to write one skill directory: the
//! metadata that drives `SKILL.md`, the optional sub-documents, and the
//! scripts extracted from code blocks.

use std::path::PathBuf;

use skillgen_content::{CodeBlock, MermaidDiagram, Table};

/// Main document of every skill.
pub const SKILL_FILE: &str = "SKILL.md";
/// Examples sub-document.
pub const EXAMPLES_FILE: &str = "examples.md";
/// Troubleshooting sub-document.
pub const TROUBLESHOOTING_FILE: &str = "troubleshooting.md";
/// Reference sub-document.
pub const REFERENCE_FILE: &str = "reference.md";
/// Directory holding extracted scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// A generated skill.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    /// Metadata and mapped content for `SKILL.md`.
    pub metadata: SkillMetadata,
    /// Present when the document has two or more code blocks.
    pub examples: Option<ExamplesDoc>,
    /// Present when a troubleshooting section has content.
    pub troubleshooting: Option<TroubleshootingDoc>,
    /// Present when the document body exceeds the line threshold.
    pub reference: Option<ReferenceDoc>,
    /// One script per code block.
    pub scripts: Vec<Script>,
}

impl Skill {
    /// Relative paths of every file this skill produces, in write order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skillgen_skills::model::{Script, Skill, SkillMetadata};
    ///
    /// let skill = Skill {
    ///     metadata: SkillMetadata::default(),
    ///     examples: None,
    ///     troubleshooting: None,
    ///     reference: None,
    ///     scripts: vec![Script::new("example-1.sh", Some("bash".into()), "echo hi")],
    /// };
    ///
    /// assert_eq!(skill.files(), vec!["SKILL.md", "scripts/example-1.sh"]);
    /// ```
    pub fn files(&self) -> Vec<String> {
        let mut files = vec![SKILL_FILE.to_string()];

        if self.examples.is_some() {
            files.push(EXAMPLES_FILE.to_string());
        }
        if self.troubleshooting.is_some() {
            files.push(TROUBLESHOOTING_FILE.to_string());
        }
        if self.reference.is_some() {
            files.push(REFERENCE_FILE.to_string());
        }

        files.extend(self.scripts.iter().map(|s| s.path.clone()));
        files
    }
}

/// Skill metadata and the content mapped from the source document.
///
/// Mapped text fields are empty when no matching section exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMetadata {
    /// Kebab-case name derived from the title.
    pub name: String,
    /// Display title from front matter.
    pub title: String,
    /// Description from front matter.
    pub description: String,
    /// Category directory (`patterns`, `enforce`, ...).
    pub category: String,
    /// Tags from front matter.
    pub tags: Vec<String>,
    pub when_to_use: String,
    pub prerequisites: String,
    pub implementation_steps: String,
    pub key_principles: String,
    pub when_to_apply: String,
    pub techniques: Vec<Technique>,
    pub comparison: String,
    pub anti_patterns: String,
    /// Names of related patterns, from bracketed link text.
    pub related_patterns: Vec<String>,
    pub references: String,
    /// Source document path.
    pub source_path: PathBuf,
    /// Published URL of the source document.
    pub source_url: String,
}

/// One technique, taken from a subsection of the techniques section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technique {
    pub name: String,
    /// First paragraph, at most 200 characters.
    pub description: String,
    /// Full converted content.
    pub content: String,
}

/// Content of `examples.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplesDoc {
    pub code_blocks: Vec<CodeBlock>,
}

/// Content of `troubleshooting.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingDoc {
    pub content: String,
}

/// Content of `reference.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDoc {
    /// The whole converted body.
    pub content: String,
    pub tables: Vec<Table>,
    pub diagrams: Vec<MermaidDiagram>,
}

/// A code block written to `scripts/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub filename: String,
    pub language: Option<String>,
    pub content: String,
    /// Path relative to the skill directory, `scripts/<filename>`.
    pub path: String,
}

impl Script {
    /// Creates a script stored under `scripts/<filename>`.
    pub fn new(
        filename: impl Into<String>,
        language: Option<String>,
        content: impl Into<String>,
    ) -> Self {
        let filename = filename.into();
        Self {
            path: format!("{SCRIPTS_DIR}/{filename}"),
            filename,
            language,
            content: content.into(),
        }
    }
}

impl From<&CodeBlock> for Script {
    fn from(block: &CodeBlock) -> Self {
        Script::new(
            block.filename.clone(),
            block.language.clone(),
            block.content.clone(),
        )
    }
}
