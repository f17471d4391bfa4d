//! File-based Reference Catalog Loader
//!
//! Reads occupations, universities and subjects from a YAML or JSON file,
//! replacing the built-in tables. The file mirrors [`ReferenceCatalog`]:
//!
//! ```yaml
//! occupations:
//!   - name: Software Developer
//!     description: Develops applications and systems using programming languages
//!     traits: [analytical, creative, detail-oriented]
//!     interests: [programming, problem-solving, technology]
//!     education_required: Bachelor's degree in Computer Science
//! universities:
//!   - name: MIT
//!     location: Massachusetts
//!     programs: [Computer Science, Engineering, Mathematics]
//!     cost: 55000
//!     acceptance_rate: 0.07
//!     graduation_rate: 0.94
//! subjects:
//!   - name: Computer Science
//!     books: [Introduction to Algorithms by Cormen et al.]
//!     courses: [CS50 (Harvard)]
//!     video: https://www.youtube.com/c/MITOpenCourseWare
//! ```

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::{CatalogError, ReferenceCatalog};

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "json" => Ok(CatalogFormat::Json),
            other => Err(CatalogError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Loads a [`ReferenceCatalog`] from disk.
#[derive(Debug, Clone)]
pub struct FileCatalogLoader {
    path: PathBuf,
}

impl FileCatalogLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads, parses and validates the catalog file.
    pub async fn load(&self) -> Result<ReferenceCatalog, CatalogError> {
        let format = CatalogFormat::from_path(&self.path)?;
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let catalog = self.parse(format, &contents)?;
        catalog.validate()?;

        tracing::info!(
            path = %self.path.display(),
            occupations = catalog.occupations().len(),
            universities = catalog.universities().len(),
            subjects = catalog.subjects().len(),
            "Loaded reference catalog"
        );
        Ok(catalog)
    }

    fn parse(&self, format: CatalogFormat, contents: &str) -> Result<ReferenceCatalog, CatalogError> {
        let parse_error = |message: String| CatalogError::Parse {
            path: self.path.display().to_string(),
            message,
        };
        match format {
            CatalogFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))
            }
            CatalogFormat::Json => {
                serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

/// Loads the catalog from `data_path`, or returns the built-in tables.
pub async fn load_catalog(data_path: Option<&Path>) -> Result<ReferenceCatalog, CatalogError> {
    match data_path {
        Some(path) => FileCatalogLoader::new(path).load().await,
        None => {
            tracing::info!("Using built-in reference catalog");
            Ok(ReferenceCatalog::builtin())
        }
    }
}
