//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for reading the tool
//! catalog from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{RentalError, RentalResult};
use crate::models::ToolChargePolicy;

use super::types::{CatalogFile, ToolCatalog};

/// Loads the tool catalog from a YAML file.
///
/// The loader remembers its path so the catalog can be reloaded after the
/// file changes.
///
/// # File Format
///
/// ```text
/// tools:
///   - tool_code: LADW
///     tool_type: Ladder
///     brand: Werner
///     daily_rental_charge: "1.99"
///     weekday_charge: true
///     weekend_charge: true
///     holiday_charge: false
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::CatalogLoader;
///
/// let loader = CatalogLoader::new("./config/tools.yaml");
/// let catalog = loader.load()?;
/// let ladder = catalog.get("LADW").unwrap();
/// println!("Ladder rate: {:?}", ladder.daily_rental_charge);
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Creates a loader for the catalog file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the catalog file.
    ///
    /// # Returns
    ///
    /// Returns the catalog on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML, lists no tools, or repeats a tool
    ///   code (`ConfigParseError`)
    pub fn load(&self) -> RentalResult<ToolCatalog> {
        let path_str = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let catalog = Self::parse(&content, &path_str)?;
        info!(path = %path_str, tools = catalog.len(), "Loaded tool catalog");
        Ok(catalog)
    }

    /// Parses catalog YAML. `source` names the input in error messages.
    pub fn parse(content: &str, source: &str) -> RentalResult<ToolCatalog> {
        let file: CatalogFile =
            serde_yaml::from_str(content).map_err(|e| RentalError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        if file.tools.is_empty() {
            return Err(RentalError::ConfigParseError {
                path: source.to_string(),
                message: "catalog lists no tools".to_string(),
            });
        }

        let policies: Vec<ToolChargePolicy> = file.tools.into_iter().map(Into::into).collect();
        ToolCatalog::new(policies).map_err(|e| RentalError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }
}
