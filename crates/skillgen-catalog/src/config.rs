//! Catalog configuration.
//!
//! Two JSON inputs drive catalog generation:
//!
//! - The collection metadata document: catalog identity, fields shared by
//!   every manifest, and one entry per collection.
//! - The version table: a flat map from collection path (`plugins/<key>`)
//!   to version string, with the catalog's own version under
//!   `.claude-plugin`.
//!
//! Both are validated on load; an invalid input aborts the catalog phase.
//!
//! # Example
//!
//! ```rust
//! use skillgen_catalog::config::{CatalogMetadata, VersionTable};
//!
//! let metadata = CatalogMetadata::parse(r#"{
//!     "catalog": { "name": "ael-skills", "owner": { "name": "AEL" } },
//!     "collections": { "patterns": { "description": "Pattern skills", "category": "patterns" } }
//! }"#).unwrap();
//! assert_eq!(metadata.collections["patterns"].display_name("patterns"), "patterns");
//!
//! let versions = VersionTable::parse(r#"{ "plugins/patterns": "0.2.1" }"#).unwrap();
//! assert_eq!(versions.collection_version("patterns"), Some("0.2.1"));
//! assert_eq!(versions.catalog_version(), "0.0.0");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skillgen_core::{Error, Result};

/// Version used when the table has no entry.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Version table key of the catalog itself.
pub const CATALOG_VERSION_KEY: &str = ".claude-plugin";

/// Prefix of collection keys in the version table.
pub const COLLECTION_VERSION_PREFIX: &str = "plugins/";

/// The collection metadata document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Catalog identity.
    #[serde(alias = "marketplace")]
    pub catalog: CatalogSettings,

    /// Fields copied into every collection manifest.
    #[serde(default)]
    pub common: CommonFields,

    /// Collections by key. Ordered, so iteration is deterministic.
    #[serde(alias = "plugins")]
    pub collections: BTreeMap<String, CollectionConfig>,
}

/// Catalog-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plugin_root: String,
}

/// Catalog maintainer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Author block attached to entries and manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// Fields shared by every collection manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonFields {
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

/// Per-collection configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Display name override for the catalog entry.
    #[serde(default, alias = "marketplaceName")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CollectionConfig {
    /// Entry name: the override when set, otherwise the collection key.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(key)
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

impl CatalogMetadata {
    /// Load and validate the metadata document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("reading collection metadata path={}", path.display());
        Self::parse(&read_file(path)?)
    }

    /// Parse and validate a metadata document.
    pub fn parse(json: &str) -> Result<Self> {
        let metadata: Self = serde_json::from_str(json)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.name.trim().is_empty() {
            return Err(Error::config("catalog.name is required in collection metadata"));
        }
        if self.catalog.owner.name.trim().is_empty() {
            return Err(Error::config(
                "catalog.owner.name is required in collection metadata",
            ));
        }
        if self.collections.is_empty() {
            return Err(Error::config(
                "collections cannot be empty in collection metadata",
            ));
        }
        Ok(())
    }
}

/// Collection versions keyed by collection path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionTable(BTreeMap<String, String>);

impl VersionTable {
    /// Creates a table from `(key, version)` pairs.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Load and validate the version table at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("reading version table path={}", path.display());
        Self::parse(&read_file(path)?)
    }

    /// Parse a version table. An empty table is a configuration error.
    pub fn parse(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)?;
        if table.0.is_empty() {
            return Err(Error::config("version table is empty"));
        }
        Ok(table)
    }

    /// Raw lookup by table key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Version of the collection `key`, stored under `plugins/<key>`.
    pub fn collection_version(&self, key: &str) -> Option<&str> {
        self.get(&format!("{COLLECTION_VERSION_PREFIX}{key}"))
    }

    /// Version of the catalog itself, [`DEFAULT_VERSION`] when absent.
    pub fn catalog_version(&self) -> &str {
        self.get(CATALOG_VERSION_KEY).unwrap_or(DEFAULT_VERSION)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
