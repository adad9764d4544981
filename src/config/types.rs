//! Configuration types for the Meeting Cost Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// Human-readable name of the deployment.
    pub name: String,
    /// Version of the configuration set.
    pub version: String,
    /// ISO currency code all monetary values are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// A salary band an attendee can be costed at.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryBand {
    /// Hourly cost of one attendee in this band.
    pub hourly: Decimal,
    /// A description of the band.
    #[serde(default)]
    pub description: String,
}

/// Salary bands configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryBandsConfig {
    /// Map of role name to salary band.
    pub salary_bands: BTreeMap<String, SalaryBand>,
}

/// Hourly rates by attendee role.
///
/// # Example
///
/// ```
/// use meeting_cost_engine::config::SalaryBands;
/// use rust_decimal::Decimal;
///
/// let bands = SalaryBands::standard();
/// assert_eq!(bands.hourly_rate("Manager").unwrap(), Decimal::from(110));
/// assert!(bands.hourly_rate("Intern").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBands {
    bands: BTreeMap<String, SalaryBand>,
}

impl SalaryBands {
    /// Creates salary bands from a role-to-band map.
    pub fn new(bands: BTreeMap<String, SalaryBand>) -> Self {
        Self { bands }
    }

    /// The built-in bands: Junior 45, Mid 65, Senior 85, Manager 110 per hour.
    pub fn standard() -> Self {
        let bands = [
            ("Junior", 45, "Junior individual contributor"),
            ("Mid", 65, "Mid-level individual contributor"),
            ("Senior", 85, "Senior individual contributor"),
            ("Manager", 110, "People manager"),
        ]
        .into_iter()
        .map(|(role, hourly, description)| {
            (
                role.to_string(),
                SalaryBand {
                    hourly: Decimal::from(hourly),
                    description: description.to_string(),
                },
            )
        })
        .collect();

        Self { bands }
    }

    /// Returns the hourly rate for `role`.
    ///
    /// Roles match exactly first, then case-insensitively.
    pub fn hourly_rate(&self, role: &str) -> EngineResult<Decimal> {
        self.bands
            .get(role)
            .or_else(|| {
                self.bands
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(role))
                    .map(|(_, band)| band)
            })
            .map(|band| band.hourly)
            .ok_or_else(|| EngineError::RoleNotFound {
                role: role.to_string(),
            })
    }

    /// Returns the configured role names in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.bands.keys().map(String::as_str)
    }

    /// Returns the band for `role`, if configured under exactly that name.
    pub fn get(&self, role: &str) -> Option<&SalaryBand> {
        self.bands.get(role)
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine metadata.
    metadata: EngineMetadata,
    /// Salary bands by role.
    salary_bands: SalaryBands,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, salary_bands: SalaryBands) -> Self {
        Self {
            metadata,
            salary_bands,
        }
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the salary bands.
    pub fn salary_bands(&self) -> &SalaryBands {
        &self.salary_bands
    }
}
