//! Configuration loading and management for the tax engine.
//!
//! This module provides functionality to load tax configurations from YAML files,
//! including assessment metadata, the rounding policy, and the slab table.
//!
//! # Example
//!
//! ```no_run
//! use tax_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fy2022-23").unwrap();
//! println!("Loaded assessment: {}", config.assessment().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AssessmentConfig, AssessmentMetadata, RoundingMode, SlabBracket, SlabConfig, SlabTable,
    TaxConfig,
};
