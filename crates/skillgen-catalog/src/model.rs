//! Generated catalog documents.
//!
//! Field names follow the plugin marketplace format consumed downstream,
//! so these types serialize with camelCase keys and skip absent optionals.

use serde::{Deserialize, Serialize};

use crate::config::{Author, Owner};

/// The aggregate catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    pub owner: Owner,
    pub metadata: CatalogInfo,
    /// Entries in lexicographic key order.
    pub plugins: Vec<CatalogEntry>,
}

/// Catalog-level description and resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub description: String,
    pub version: String,
    pub plugin_root: String,
}

/// One collection in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Relative path of the collection, `./plugins/<key>`.
    pub source: String,
    pub description: String,
    pub version: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub tags: Vec<String>,
}

/// Per-collection manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// Everything one generation run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOutput {
    pub catalog: Catalog,
    /// Manifests keyed by collection, in the same order as the entries.
    pub manifests: Vec<(String, CollectionManifest)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_omits_absent_author() {
        let entry = CatalogEntry {
            name: "patterns".into(),
            source: "./plugins/patterns".into(),
            description: "d".into(),
            version: "0.1.0".into(),
            category: "development".into(),
            author: None,
            tags: vec![],
        };
        let json = serde_json::to_value(&entry).unwrap();

        assert!(json.get("author").is_none());
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_catalog_info_camel_case() {
        let info = CatalogInfo {
            description: "d".into(),
            version: "1.0.0".into(),
            plugin_root: "./plugins".into(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["pluginRoot"], "./plugins");
    }

    #[test]
    fn test_manifest_skips_empty_optionals() {
        let manifest = CollectionManifest {
            name: "test".into(),
            description: "d".into(),
            version: "0.0.0".into(),
            author: None,
            homepage: None,
            repository: None,
            license: None,
            keywords: vec![],
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(json, r#"{"name":"test","description":"d","version":"0.0.0"}"#);
    }
}
