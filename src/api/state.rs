//! Application state for the tool rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::calculation::{Clock, SystemClock};
use crate::config::{CatalogLoader, ToolCatalog};
use crate::error::{RentalError, RentalResult};

/// Shared application state.
///
/// Holds the current tool catalog, the loader used to refresh it and the
/// clock used for checkout date validation. Handlers take a snapshot of the
/// catalog per request, so a reload never changes a checkout in flight.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Arc<ToolCatalog>>>,
    loader: Option<CatalogLoader>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state around a fixed catalog, using the system clock.
    ///
    /// A catalog created this way cannot be reloaded.
    pub fn new(catalog: ToolCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
            loader: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Loads the catalog through `loader` and keeps the loader for reloads.
    pub fn from_loader(loader: CatalogLoader) -> RentalResult<Self> {
        let catalog = loader.load()?;
        let mut state = Self::new(catalog);
        state.loader = Some(loader);
        Ok(state)
    }

    /// Replaces the clock used for checkout date validation.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Returns a snapshot of the current catalog.
    pub fn catalog(&self) -> Arc<ToolCatalog> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Returns the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Re-reads the catalog from its source file and swaps it in.
    ///
    /// On failure the current catalog stays in place. Returns the number of
    /// tools in the new catalog.
    pub fn reload_catalog(&self) -> RentalResult<usize> {
        let loader = self.loader.as_ref().ok_or_else(|| RentalError::InvalidState {
            message: "Catalog has no source file to reload from".to_string(),
        })?;

        let fresh = loader.load()?;
        let count = fresh.len();
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(fresh);
        info!(path = %loader.path().display(), tools = count, "Tool catalog reloaded");
        Ok(count)
    }
}
