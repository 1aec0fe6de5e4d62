//! Generator configuration, optionally loaded from TOML.
//!
//! Every field has a default, so a file only needs the keys it overrides:
//!
//! ```toml
//! min_planets = 5
//! reclassify_relocated = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SystemError;

/// Smallest planet count a system may have
pub const MIN_PLANETS: usize = 3;

/// Largest planet count a system may have
pub const MAX_PLANETS: usize = 18;

/// Tunables for system generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // ── Planet count ─────────────────────────────────────────────────────────
    pub min_planets: usize,
    pub max_planets: usize,

    // ── Orbit layout (AU) ────────────────────────────────────────────────────
    /// Innermost orbit
    pub min_orbit_au: f64,
    /// Outermost orbit is at least this far out
    pub max_orbit_floor_au: f64,
    /// Outermost orbit clears the habitable zone's outer edge by this much
    pub max_orbit_margin_au: f64,

    // ── Habitability guarantee ───────────────────────────────────────────────
    /// Re-sample a planet moved into the habitable zone instead of keeping
    /// the type and properties it was generated with
    pub reclassify_relocated: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_planets: MIN_PLANETS,
            max_planets: MAX_PLANETS,
            min_orbit_au: 0.2,
            max_orbit_floor_au: 50.0,
            max_orbit_margin_au: 20.0,
            reclassify_relocated: false,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, SystemError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SystemError> {
        let in_range = MIN_PLANETS..=MAX_PLANETS;
        if !in_range.contains(&self.min_planets) {
            return Err(invalid("min_planets", format!("must lie in {:?}", in_range)));
        }
        if !in_range.contains(&self.max_planets) {
            return Err(invalid("max_planets", format!("must lie in {:?}", in_range)));
        }
        if self.min_planets > self.max_planets {
            return Err(invalid("min_planets", "must not exceed max_planets".to_string()));
        }

        let distances = [
            ("min_orbit_au", self.min_orbit_au),
            ("max_orbit_floor_au", self.max_orbit_floor_au),
            ("max_orbit_margin_au", self.max_orbit_margin_au),
        ];
        for (field, value) in distances {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {}", value)));
            }
        }
        if self.min_orbit_au >= self.max_orbit_floor_au {
            return Err(invalid(
                "min_orbit_au",
                "must lie inside max_orbit_floor_au".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> SystemError {
    SystemError::InvalidConfig { field, reason }
}
