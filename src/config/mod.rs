//! Configuration loading and management for the Meeting Cost Engine.
//!
//! This module loads engine metadata and the salary bands attendees are
//! costed at from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use meeting_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded engine: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineMetadata, SalaryBand, SalaryBands, SalaryBandsConfig};
