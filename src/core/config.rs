//! Tactical configuration with documented constants
//!
//! Grid extent, default hex size and the sensor numbers used by the general
//! distance/environment visibility rule all live here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticsError};

/// Configuration for the tactical layer
///
/// Any field missing from a TOML file keeps its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsConfig {
    // === GRID ===
    /// Number of hex columns in a sector
    pub grid_width: u32,

    /// Number of hex rows in a sector
    pub grid_height: u32,

    /// Hex radius in pixels (center to corner)
    ///
    /// Rendering layers may override this per view; the geometry functions
    /// take the size explicitly.
    pub hex_size: f64,

    // === SENSORS ===
    /// Passive sensor range in hexes
    pub base_sensor_range: u32,

    /// Range added while the observer runs an active scan
    pub active_scan_bonus: u32,

    /// Range lost for each endpoint sitting in a nebula cell
    pub nebula_penalty: u32,

    /// Range lost for each endpoint sitting in a deep nebula cell
    ///
    /// Replaces `nebula_penalty` for that endpoint, it does not stack with it.
    pub deep_nebula_penalty: u32,

    /// Range lost for each endpoint sitting in an ion storm cell
    pub ion_storm_penalty: u32,

    /// Range lost for each endpoint sitting in a deep ion storm cell
    pub deep_ion_storm_penalty: u32,

    /// Distance at which anything is detected regardless of environment
    ///
    /// At 1, adjacent contacts are always picked up.
    pub min_detection_range: u32,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            // Grid
            grid_width: 11,
            grid_height: 10,
            hex_size: 40.0,

            // Sensors (deep > shallow, nebula > ion storm)
            base_sensor_range: 6,
            active_scan_bonus: 3,
            nebula_penalty: 2,
            deep_nebula_penalty: 4,
            ion_storm_penalty: 1,
            deep_ion_storm_penalty: 3,
            min_detection_range: 1,
        }
    }
}

impl TacticsConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TacticsConfig = toml::from_str(content)?;
        config.validate().map_err(TacticsError::InvalidConfig)?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded tactics config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(format!(
                "grid must have at least one cell (got {}x{})",
                self.grid_width, self.grid_height
            ));
        }

        if self.hex_size <= 0.0 || !self.hex_size.is_finite() {
            return Err(format!("hex_size ({}) must be a positive number", self.hex_size));
        }

        if self.deep_nebula_penalty < self.nebula_penalty {
            return Err(format!(
                "deep_nebula_penalty ({}) should be >= nebula_penalty ({})",
                self.deep_nebula_penalty, self.nebula_penalty
            ));
        }

        if self.deep_ion_storm_penalty < self.ion_storm_penalty {
            return Err(format!(
                "deep_ion_storm_penalty ({}) should be >= ion_storm_penalty ({})",
                self.deep_ion_storm_penalty, self.ion_storm_penalty
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<TacticsConfig> = OnceLock::new();

/// Get the global tactics config (initializes with defaults if not set)
pub fn config() -> &'static TacticsConfig {
    CONFIG.get_or_init(TacticsConfig::default)
}

/// Set the global tactics config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: TacticsConfig) -> std::result::Result<(), TacticsConfig> {
    CONFIG.set(config)
}
