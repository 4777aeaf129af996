//! Catalog and manifest writing.
//!
//! Every document is pretty-printed JSON with a trailing newline, written
//! atomically.

use std::path::{Path, PathBuf};

use serde::Serialize;
use skillgen_core::{Result, write_atomic};

use crate::model::CatalogOutput;

/// Directory holding a collection's manifest.
pub const MANIFEST_DIR: &str = ".claude-plugin";

/// Manifest file name.
pub const MANIFEST_FILE: &str = "plugin.json";

/// Serialize `value` as pretty JSON with a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Write `value` to `path` as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_atomic(path, to_pretty_json(value)?.as_bytes())
}

/// Path of the manifest for collection `key`.
pub fn manifest_path(collections_dir: &Path, key: &str) -> PathBuf {
    collections_dir.join(key).join(MANIFEST_DIR).join(MANIFEST_FILE)
}

/// Write the catalog to `catalog_path` and each manifest under
/// `collections_dir`. Returns the number of manifests written.
pub fn write_catalog(
    output: &CatalogOutput,
    catalog_path: &Path,
    collections_dir: &Path,
) -> Result<usize> {
    write_json(catalog_path, &output.catalog)?;
    log::info!("wrote catalog path={}", catalog_path.display());

    for (key, manifest) in &output.manifests {
        let path = manifest_path(collections_dir, key);
        write_json(&path, manifest)?;
        log::info!(
            "generated collection manifest collection={key} version={}",
            manifest.version
        );
    }

    Ok(output.manifests.len())
}

// ============================================================================
// Tests
// ============================================================================
