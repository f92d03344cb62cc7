//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{
    AssessmentConfig, AssessmentMetadata, RoundingMode, SlabConfig, SlabTable, TaxConfig,
};

/// Loads and provides access to tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the assessment metadata, rounding policy and slab table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fy2022-23/
/// ├── assessment.yaml  # Assessment metadata and rounding policy
/// └── slabs.yaml       # Slab width and old/new regime rates
/// ```
///
/// # Example
///
/// ```no_run
/// use tax_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/fy2022-23").unwrap();
/// println!("Loaded assessment: {}", loader.assessment().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The slab table violates the bracket layout (`InvalidSlabTable`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tax_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fy2022-23")?;
    /// # Ok::<(), tax_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let assessment = Self::load_yaml::<AssessmentConfig>(&path.join("assessment.yaml"))?;
        let slab_config = Self::load_yaml::<SlabConfig>(&path.join("slabs.yaml"))?;
        let slabs = SlabTable::try_from(slab_config)?;

        info!(
            code = %assessment.metadata.code,
            rounding = ?assessment.rounding,
            brackets = slabs.brackets().len(),
            "Loaded tax configuration"
        );

        Ok(Self {
            config: TaxConfig::new(assessment.metadata, assessment.rounding, slabs),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: TaxConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tax configuration.
    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Returns the assessment metadata.
    pub fn assessment(&self) -> &AssessmentMetadata {
        self.config.assessment()
    }

    /// Returns the rounding policy.
    pub fn rounding(&self) -> RoundingMode {
        self.config.rounding()
    }

    /// Returns the slab table.
    pub fn slabs(&self) -> &SlabTable {
        self.config.slabs()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(TaxConfig::default())
    }
}
