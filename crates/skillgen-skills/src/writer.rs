//! Skill directory writer.
//!
//! Layout under the output root:
//!
//! ```text
//! <output>/<category>/skills/<name>/
//! ├── SKILL.md
//! ├── examples.md          (optional)
//! ├── troubleshooting.md   (optional)
//! ├── reference.md         (optional)
//! └── scripts/
//!     └── example-1.sh
//! ```

use std::path::{Path, PathBuf};

use skillgen_core::{Result, write_atomic};

use crate::model::{
    EXAMPLES_FILE, REFERENCE_FILE, SCRIPTS_DIR, SKILL_FILE, Skill, TROUBLESHOOTING_FILE,
};
use crate::render::{MarkdownRenderer, SkillRenderer};

/// Directory between the category and the skill name.
pub const SKILLS_DIR: &str = "skills";

/// Writes rendered skills to disk.
#[derive(Debug, Clone, Default)]
pub struct SkillWriter<R = MarkdownRenderer> {
    renderer: R,
}

impl SkillWriter {
    /// Creates a writer using the built-in [`MarkdownRenderer`].
    pub fn markdown() -> Self {
        Self::new(MarkdownRenderer)
    }
}

impl<R: SkillRenderer> SkillWriter<R> {
    /// Creates a writer using `renderer`.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Directory a skill is written to.
    pub fn skill_dir(output_dir: &Path, skill: &Skill) -> PathBuf {
        output_dir
            .join(&skill.metadata.category)
            .join(SKILLS_DIR)
            .join(&skill.metadata.name)
    }

    /// Render and write every file of `skill`. Returns the skill directory.
    ///
    /// All documents are rendered before anything is written, so a render
    /// failure leaves the output untouched.
    pub fn write(&self, skill: &Skill, output_dir: &Path) -> Result<PathBuf> {
        let dir = Self::skill_dir(output_dir, skill);

        let mut files = vec![(dir.join(SKILL_FILE), self.renderer.render_skill(skill)?)];
        if skill.examples.is_some() {
            files.push((dir.join(EXAMPLES_FILE), self.renderer.render_examples(skill)?));
        }
        if skill.troubleshooting.is_some() {
            files.push((
                dir.join(TROUBLESHOOTING_FILE),
                self.renderer.render_troubleshooting(skill)?,
            ));
        }
        if skill.reference.is_some() {
            files.push((dir.join(REFERENCE_FILE), self.renderer.render_reference(skill)?));
        }

        for (path, content) in &files {
            write_atomic(path, content.as_bytes())?;
        }

        let scripts_dir = dir.join(SCRIPTS_DIR);
        for script in &skill.scripts {
            let mut content = script.content.clone();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            write_atomic(&scripts_dir.join(&script.filename), content.as_bytes())?;
        }

        log::debug!(
            "wrote skill dir={} documents={} scripts={}",
            dir.display(),
            files.len(),
            skill.scripts.len()
        );

        Ok(dir)
    }
}

// ============================================================================
// Tests
// ============================================================================
