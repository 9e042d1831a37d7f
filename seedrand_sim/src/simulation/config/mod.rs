// seedrand_sim/src/simulation/config/mod.rs

//! This module handles loading and validating scenario configuration from
//! disk, and discovering scenario files for batch runs.

mod catalog;

pub mod structs;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Format, Toml},
    Figment,
};
use log::{debug, info};
use seedrand_core::error::RangeError;
use thiserror::Error;

// Re-export public types
pub use catalog::discover_scenarios;
pub use structs::{ScenarioConfig, SimulationSettings, StreamConfig, MAX_SHUFFLE_LEN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scenario path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] figment::Error),

    #[error("scenario defines no streams")]
    NoStreams,

    #[error("simulation.steps must be at least 1")]
    ZeroSteps,

    #[error("duplicate stream name '{0}'")]
    DuplicateStream(String),

    #[error("stream '{name}' has an invalid range: {source}")]
    InvalidRange {
        name: String,
        #[source]
        source: RangeError,
    },

    #[error("stream '{name}' is invalid: {reason}")]
    InvalidStream { name: String, reason: String },
}

/// Loads, parses and validates the scenario file at `path`.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    // Figment treats a missing file as an empty provider; report it instead.
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    info!("Loading scenario from: {}", path.display());

    let config: ScenarioConfig = Figment::new().merge(Toml::file(path)).extract()?;
    config.validate()?;
    Ok(config)
}

impl ScenarioConfig {
    /// Parses and validates a scenario held in memory.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = Figment::new().merge(Toml::string(source)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every stream before a single value is drawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.streams.is_empty() {
            return Err(ConfigError::NoStreams);
        }

        let mut seen = HashSet::new();
        for stream in &self.streams {
            if !seen.insert(stream.name()) {
                return Err(ConfigError::DuplicateStream(stream.name().to_string()));
            }
            stream.validate()?;
            debug!(
                "Validated {} stream '{}'",
                stream.get_kind_str(),
                stream.name()
            );
        }
        Ok(())
    }
}

impl StreamConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid_range = |source: RangeError| ConfigError::InvalidRange {
            name: self.name().to_string(),
            source,
        };
        let invalid = |reason: &str| ConfigError::InvalidStream {
            name: self.name().to_string(),
            reason: reason.to_string(),
        };

        match self {
            StreamConfig::Int { min, max, .. } => {
                RangeError::check_int_range(*min, *max).map_err(invalid_range)
            }
            StreamConfig::Float { min, max, .. } => {
                RangeError::check_float_range(*min as f64, *max as f64).map_err(invalid_range)
            }
            StreamConfig::Gaussian { mean, std_dev, .. } => {
                if !mean.is_finite() {
                    return Err(invalid("mean must be finite"));
                }
                if !std_dev.is_finite() || *std_dev < 0.0 {
                    return Err(invalid("std_dev must be finite and non-negative"));
                }
                Ok(())
            }
            StreamConfig::Scatter { extents, .. } => {
                if extents.iter().all(|e| e.is_finite() && *e > 0.0) {
                    Ok(())
                } else {
                    Err(invalid("extents must be finite and positive"))
                }
            }
            StreamConfig::Shuffle { len, .. } => {
                if *len == 0 || *len > MAX_SHUFFLE_LEN {
                    Err(invalid(&format!(
                        "len must be between 1 and {}",
                        MAX_SHUFFLE_LEN
                    )))
                } else {
                    Ok(())
                }
            }
        }
    }
}
