//! Reference catalog configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where occupation, university and subject tables come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML or JSON catalog file; the built-in tables are used when unset
    pub data_path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }
}
