//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, SalaryBands, SalaryBandsConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml        # Engine metadata
/// └── salary_bands.yaml  # Hourly rate per attendee role
/// ```
///
/// # Example
///
/// ```no_run
/// use meeting_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let rate = loader.get_hourly_rate("Senior").unwrap();
/// println!("Senior hourly rate: ${}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or contains invalid YAML,
    /// or if no salary bands are configured.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;

        let bands_path = path.join("salary_bands.yaml");
        let bands_config = Self::load_yaml::<SalaryBandsConfig>(&bands_path)?;
        if bands_config.salary_bands.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: bands_path.display().to_string(),
                message: "no salary bands configured".to_string(),
            });
        }

        let config = EngineConfig::new(metadata, SalaryBands::new(bands_config.salary_bands));

        Ok(Self { config })
    }

    /// Builds a loader from an in-memory configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns the salary bands.
    pub fn salary_bands(&self) -> &SalaryBands {
        self.config.salary_bands()
    }

    /// Gets the hourly rate for a role.
    pub fn get_hourly_rate(&self, role: &str) -> EngineResult<Decimal> {
        self.config.salary_bands().hourly_rate(role)
    }
}
