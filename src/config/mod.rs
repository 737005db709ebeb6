//! Tool catalog configuration.
//!
//! This module loads the tool catalog from a YAML file and exposes it as a
//! [`ToolCatalog`], which resolves charge policies by tool code.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::new("./config/tools.yaml").load().unwrap();
//! println!("Loaded {} tools", catalog.len());
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{CatalogFile, ToolCatalog, ToolEntry};
