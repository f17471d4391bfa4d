//! Reference catalog loading from YAML or JSON files.

mod file_catalog;

pub use file_catalog::{load_catalog, CatalogFormat, FileCatalogLoader};
