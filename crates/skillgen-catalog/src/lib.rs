//! Catalog generation for skillgen.
//!
//! Reads collection metadata and a version table, then produces the
//! aggregate catalog and one manifest per collection.
//!
//! # Modules
//!
//! - [`config`]: Metadata document and version table loading
//! - [`generator`]: Version resolution and document construction
//! - [`model`]: Serialized catalog and manifest types
//! - [`writer`]: Pretty JSON output
//!
//! # Example
//!
//! ```rust
//! use skillgen_catalog::{CatalogGenerator, CatalogMetadata, VersionTable};
//!
//! let metadata = CatalogMetadata::parse(r#"{
//!     "catalog": { "name": "skills", "owner": { "name": "Docs Team" } },
//!     "collections": {
//!         "zebra": { "description": "Z", "category": "misc" },
//!         "alpha": { "description": "A", "category": "misc" }
//!     }
//! }"#).unwrap();
//! let versions = VersionTable::parse(r#"{ "plugins/alpha": "1.2.0" }"#).unwrap();
//!
//! let output = CatalogGenerator::new(&metadata, &versions).generate();
//! assert_eq!(output.catalog.plugins[0].name, "alpha");
//! assert_eq!(output.catalog.plugins[1].version, "0.0.0");
//! ```

pub mod config;
pub mod generator;
pub mod model;
pub mod writer;

pub use config::{CatalogMetadata, CollectionConfig, VersionTable};
pub use generator::CatalogGenerator;
pub use model::{Catalog, CatalogEntry, CatalogOutput, CollectionManifest};
pub use writer::{write_catalog, write_json};
