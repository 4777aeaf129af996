//! The generation run.
//!
//! Every discovered document is read, extracted and written in turn. A
//! failure on one document is logged and counted, and the run moves on to
//! the next. The catalog phase runs last, and its failure is counted as a
//! single error without touching the skills already written.

use std::fmt;
use std::path::{Path, PathBuf};

use skillgen_catalog::{CatalogGenerator, CatalogMetadata, VersionTable, write_catalog};
use skillgen_content::DocumentReader;
use skillgen_core::{Result, find_index_files};
use skillgen_skills::{SectionMappings, SkillExtractor, SkillWriter};

use crate::config::{CatalogConfig, SkillgenConfig};

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Categories that were scanned.
    pub categories: Vec<String>,
    /// Documents turned into skills.
    pub processed: usize,
    /// Blog posts left out.
    pub skipped: usize,
    /// Documents that failed, plus one for a failed catalog phase.
    pub errors: usize,
    /// Output directory.
    pub output: PathBuf,
    /// Manifests written by the catalog phase, when it ran.
    pub manifests: Option<usize>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Skill generation complete")?;
        writeln!(f, "  Categories: {}", self.categories.join(", "))?;
        writeln!(f, "  Processed:  {}", self.processed)?;
        writeln!(f, "  Skipped:    {}", self.skipped)?;
        writeln!(f, "  Errors:     {}", self.errors)?;
        if let Some(manifests) = self.manifests {
            writeln!(f, "  Manifests:  {manifests}")?;
        }
        write!(f, "  Output:     {}", self.output.display())
    }
}

/// What happened to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A skill was written to this directory.
    Written(PathBuf),
    /// The document is a blog post.
    Skipped,
}

/// Drives a run from a [`SkillgenConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: SkillgenConfig,
    reader: DocumentReader,
    extractor: SkillExtractor,
    writer: SkillWriter,
}

impl Pipeline {
    /// Creates a pipeline using the default section synonym table.
    pub fn new(config: SkillgenConfig) -> Self {
        let extractor = SkillExtractor::new(config.extractor_config(), SectionMappings::default());
        Self {
            config,
            reader: DocumentReader::new(),
            extractor,
            writer: SkillWriter::markdown(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SkillgenConfig {
        &self.config
    }

    /// Process every document, then generate the catalog if configured.
    ///
    /// # Errors
    ///
    /// Returns an error only when discovery fails.
    pub fn run(&self) -> Result<RunSummary> {
        let categories = &self.config.extraction.categories;
        let files = find_index_files(&self.config.source, categories)?;
        tracing::info!(
            source = %self.config.source.display(),
            count = files.len(),
            "discovered documentation files"
        );

        let mut summary = RunSummary {
            categories: categories.clone(),
            output: self.config.output.clone(),
            ..Default::default()
        };

        for path in &files {
            match self.process(path) {
                Ok(Outcome::Written(_)) => summary.processed += 1,
                Ok(Outcome::Skipped) => summary.skipped += 1,
                Err(e) if e.is_per_document() => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to process document");
                    summary.errors += 1;
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "failed to read or write document");
                    summary.errors += 1;
                }
            }
        }

        if let Some(metadata) = &self.config.catalog.metadata {
            match self.generate_catalog(metadata, &self.config.catalog) {
                Ok(count) => summary.manifests = Some(count),
                Err(e) => {
                    tracing::warn!(error = %e, "catalog generation failed");
                    summary.errors += 1;
                }
            }
        } else {
            tracing::info!("no collection metadata configured, skipping catalog");
        }

        Ok(summary)
    }

    /// Read, extract and write a single document.
    pub fn process(&self, path: &Path) -> Result<Outcome> {
        let doc = self.reader.read(path)?;
        if doc.front_matter.is_blog_post() {
            tracing::debug!(path = %path.display(), "skipping blog post");
            return Ok(Outcome::Skipped);
        }

        let skill = self.extractor.extract(&doc)?;
        let dir = self.writer.write(&skill, &self.config.output)?;
        tracing::info!(
            skill = %skill.metadata.name,
            category = %skill.metadata.category,
            files = skill.files().len(),
            "generated skill"
        );

        Ok(Outcome::Written(dir))
    }

    fn generate_catalog(&self, metadata_path: &Path, catalog: &CatalogConfig) -> Result<usize> {
        let metadata = CatalogMetadata::load(metadata_path)?;
        let versions = VersionTable::load(&catalog.versions)?;

        let output = CatalogGenerator::new(&metadata, &versions).generate();
        let count = write_catalog(&output, &catalog.output, &self.config.output)?;
        tracing::info!(
            catalog = %catalog.output.display(),
            collections = count,
            "catalog generation complete"
        );

        Ok(count)
    }
}

// ============================================================================
// Tests
// ============================================================================
