//! Catalog generation.
//!
//! Resolves a version for every collection and builds the catalog plus one
//! manifest per collection. Collections are visited in sorted key order, so
//! identical inputs always produce identical output.

use crate::config::{CatalogMetadata, CollectionConfig, DEFAULT_VERSION, VersionTable};
use crate::model::{Catalog, CatalogEntry, CatalogInfo, CatalogOutput, CollectionManifest};

/// Source path prefix of catalog entries.
pub const SOURCE_PREFIX: &str = "./plugins/";

/// Builds catalog documents from validated configuration.
#[derive(Debug, Clone)]
pub struct CatalogGenerator<'a> {
    metadata: &'a CatalogMetadata,
    versions: &'a VersionTable,
}

impl<'a> CatalogGenerator<'a> {
    /// Creates a generator over the given inputs.
    pub fn new(metadata: &'a CatalogMetadata, versions: &'a VersionTable) -> Self {
        Self { metadata, versions }
    }

    /// Version of collection `key`, [`DEFAULT_VERSION`] when the table has none.
    pub fn resolve_version(&self, key: &str) -> String {
        match self.versions.collection_version(key) {
            Some(version) => version.to_string(),
            None => {
                log::warn!("no version found for collection, using {DEFAULT_VERSION} collection={key}");
                DEFAULT_VERSION.to_string()
            }
        }
    }

    /// Build the catalog and every manifest.
    pub fn generate(&self) -> CatalogOutput {
        let mut keys: Vec<&String> = self.metadata.collections.keys().collect();
        keys.sort();

        let mut entries = Vec::with_capacity(keys.len());
        let mut manifests = Vec::with_capacity(keys.len());

        for key in keys {
            let config = &self.metadata.collections[key];
            let version = self.resolve_version(key);

            entries.push(self.entry(key, config, &version));
            manifests.push((key.clone(), self.manifest(key, config, version)));
        }

        let settings = &self.metadata.catalog;
        let catalog = Catalog {
            name: settings.name.clone(),
            owner: settings.owner.clone(),
            metadata: CatalogInfo {
                description: settings.description.clone(),
                version: self.versions.catalog_version().to_string(),
                plugin_root: settings.plugin_root.clone(),
            },
            plugins: entries,
        };

        CatalogOutput { catalog, manifests }
    }

    fn entry(&self, key: &str, config: &CollectionConfig, version: &str) -> CatalogEntry {
        CatalogEntry {
            name: config.display_name(key).to_string(),
            source: format!("{SOURCE_PREFIX}{key}"),
            description: config.description.clone(),
            version: version.to_string(),
            category: config.category.clone(),
            author: self.metadata.common.author.clone(),
            tags: config.tags.clone(),
        }
    }

    fn manifest(&self, key: &str, config: &CollectionConfig, version: String) -> CollectionManifest {
        let common = &self.metadata.common;
        CollectionManifest {
            name: key.to_string(),
            description: config.description.clone(),
            version,
            author: common.author.clone(),
            homepage: common.homepage.clone(),
            repository: common.repository.clone(),
            license: common.license.clone(),
            keywords: config.keywords.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
