//! Application state for the tax engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, RoundingMode, SlabTable};

/// Shared application state.
///
/// Holds the loaded tax configuration, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured rounding policy.
    pub fn rounding(&self) -> RoundingMode {
        self.config.rounding()
    }

    /// Returns the configured slab table.
    pub fn slabs(&self) -> &SlabTable {
        self.config.slabs()
    }
}
