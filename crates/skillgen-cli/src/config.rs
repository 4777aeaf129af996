//! Run configuration.
//!
//! [`SkillgenConfig`] is read from an optional TOML file. Every field has a
//! default, so a missing file or a partial file is valid. Command-line flags
//! are applied on top with [`SkillgenConfig::apply_cli`].
//!
//! ```toml
//! source = "docs"
//! output = "plugins"
//!
//! [catalog]
//! metadata = "scripts/plugin-metadata.json"
//! versions = ".release-please-manifest.json"
//! output = ".claude-plugin/marketplace.json"
//!
//! [extraction]
//! categories = ["patterns", "enforce", "build", "secure"]
//! reference_line_threshold = 200
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skillgen_core::{Error, Result};
use skillgen_skills::ExtractorConfig;
use skillgen_skills::extractor::{
    DEFAULT_CATEGORIES, DEFAULT_MAX_TECHNIQUES, DEFAULT_REFERENCE_LINE_THRESHOLD,
    DEFAULT_SOURCE_BASE_URL,
};
use skillgen_skills::filter::DEFAULT_MAX_CODE_LINES;

use crate::cli::Cli;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillgenConfig {
    /// Documentation root.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Output directory for skills and collection manifests.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Catalog phase inputs and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Collection metadata JSON. The catalog phase only runs when set.
    #[serde(default)]
    pub metadata: Option<PathBuf>,

    /// Collection version table JSON.
    #[serde(default = "default_versions")]
    pub versions: PathBuf,

    /// Generated catalog path.
    #[serde(default = "default_catalog_output")]
    pub output: PathBuf,
}

/// Extraction tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_reference_line_threshold")]
    pub reference_line_threshold: usize,

    #[serde(default = "default_long_code_block_lines")]
    pub long_code_block_lines: usize,

    #[serde(default = "default_max_techniques")]
    pub max_techniques: usize,

    #[serde(default = "default_source_base_url")]
    pub source_base_url: String,
}

fn default_source() -> PathBuf {
    PathBuf::from("docs")
}

fn default_output() -> PathBuf {
    PathBuf::from("plugins")
}

fn default_versions() -> PathBuf {
    PathBuf::from(".release-please-manifest.json")
}

fn default_catalog_output() -> PathBuf {
    PathBuf::from(".claude-plugin/marketplace.json")
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_reference_line_threshold() -> usize {
    DEFAULT_REFERENCE_LINE_THRESHOLD
}

fn default_long_code_block_lines() -> usize {
    DEFAULT_MAX_CODE_LINES
}

fn default_max_techniques() -> usize {
    DEFAULT_MAX_TECHNIQUES
}

fn default_source_base_url() -> String {
    DEFAULT_SOURCE_BASE_URL.to_string()
}

impl Default for SkillgenConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            catalog: CatalogConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            metadata: None,
            versions: default_versions(),
            output: default_catalog_output(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            reference_line_threshold: default_reference_line_threshold(),
            long_code_block_lines: default_long_code_block_lines(),
            max_techniques: default_max_techniques(),
            source_base_url: default_source_base_url(),
        }
    }
}

impl SkillgenConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
                Self::parse(&content).map_err(|e| {
                    Error::config(format!("Invalid configuration {}: {e}", path.display()))
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e.to_string()))
    }

    /// Serialize as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply command-line overrides. Only flags that were given take effect.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(source) = &cli.source {
            self.source = source.clone();
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if !cli.categories.is_empty() {
            self.extraction.categories = cli.categories.clone();
        }
        if let Some(metadata) = &cli.metadata {
            self.catalog.metadata = Some(metadata.clone());
        }
        if let Some(versions) = &cli.versions {
            self.catalog.versions = versions.clone();
        }
        if let Some(catalog_output) = &cli.catalog_output {
            self.catalog.output = catalog_output.clone();
        }
        if let Some(threshold) = cli.reference_threshold {
            self.extraction.reference_line_threshold = threshold;
        }
    }

    /// Extractor settings derived from the `[extraction]` table.
    pub fn extractor_config(&self) -> ExtractorConfig {
        let extraction = &self.extraction;
        ExtractorConfig {
            categories: extraction.categories.clone(),
            reference_line_threshold: extraction.reference_line_threshold,
            long_code_block_lines: extraction.long_code_block_lines,
            max_techniques: extraction.max_techniques,
            source_base_url: extraction.source_base_url.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use skillgen_core::ErrorKind;
    use tempfile::TempDir;

    // ------------------------------------------------------------------------
    // Defaults
    // ------------------------------------------------------------------------

    #[test]
    fn test_defaults() {
        let config = SkillgenConfig::default();
        assert_eq!(config.source, PathBuf::from("docs"));
        assert_eq!(config.output, PathBuf::from("plugins"));
        assert!(config.catalog.metadata.is_none());
        assert_eq!(
            config.extraction.categories,
            vec!["patterns", "enforce", "build", "secure"]
        );
        assert_eq!(config.extraction.reference_line_threshold, 200);
        assert_eq!(config.extraction.long_code_block_lines, 10);
        assert_eq!(config.extraction.max_techniques, 5);
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(SkillgenConfig::load(None).unwrap(), SkillgenConfig::default());
    }

    #[test]
    fn test_extractor_config_matches_defaults() {
        assert_eq!(
            SkillgenConfig::default().extractor_config(),
            ExtractorConfig::default()
        );
    }

    // ------------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_partial() {
        let config = SkillgenConfig::parse(
            r#"
            source = "site/docs"

            [extraction]
            reference_line_threshold = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.source, PathBuf::from("site/docs"));
        assert_eq!(config.output, PathBuf::from("plugins"));
        assert_eq!(config.extraction.reference_line_threshold, 500);
        assert_eq!(config.extraction.max_techniques, 5);
        assert_eq!(
            config.catalog.versions,
            PathBuf::from(".release-please-manifest.json")
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = SkillgenConfig::parse("source = [").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = SkillgenConfig::default();
        config.catalog.metadata = Some(PathBuf::from("meta.json"));
        let toml = config.to_toml().unwrap();
        assert_eq!(SkillgenConfig::parse(&toml).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("skillgen.toml");
        std::fs::write(&path, "[catalog]\nmetadata = \"meta.json\"\n").unwrap();

        let config = SkillgenConfig::load(Some(&path)).unwrap();
        assert_eq!(config.catalog.metadata, Some(PathBuf::from("meta.json")));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SkillgenConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    // ------------------------------------------------------------------------
    // Overrides
    // ------------------------------------------------------------------------

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "skillgen",
            "--output",
            "out",
            "--category",
            "build",
            "--metadata",
            "meta.json",
            "--reference-threshold",
            "50",
        ])
        .unwrap();

        let mut config = SkillgenConfig::default();
        config.apply_cli(&cli);

        assert_eq!(config.source, PathBuf::from("docs"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.extraction.categories, vec!["build"]);
        assert_eq!(config.catalog.metadata, Some(PathBuf::from("meta.json")));
        assert_eq!(config.extractor_config().reference_line_threshold, 50);
    }

    #[test]
    fn test_no_flags_no_changes() {
        let cli = Cli::try_parse_from(["skillgen"]).unwrap();
        let mut config = SkillgenConfig::default();
        config.apply_cli(&cli);
        assert_eq!(config, SkillgenConfig::default());
    }
}
