//! Habitable zone boundaries
//!
//! The band where liquid water is plausible, bounded by incident-flux
//! thresholds of 1.1 (inner, runaway greenhouse) and 0.53 (outer) times the
//! flux Earth receives.

use serde::{Deserialize, Serialize};

/// Flux threshold at the inner edge (Earth flux units)
pub const INNER_FLUX: f64 = 1.1;

/// Flux threshold at the outer edge (Earth flux units)
pub const OUTER_FLUX: f64 = 0.53;

/// Habitable zone boundaries in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_boundary_au: f64,
    pub outer_boundary_au: f64,
}

impl HabitableZone {
    /// Boundaries for a star of the given luminosity (L☉)
    ///
    /// # Example
    /// ```
    /// use stellar::HabitableZone;
    ///
    /// let zone = HabitableZone::from_luminosity(1.0);
    /// assert!((zone.inner_boundary_au - 0.953).abs() < 1e-3);
    /// assert!((zone.outer_boundary_au - 1.374).abs() < 1e-3);
    /// ```
    pub fn from_luminosity(luminosity: f64) -> Self {
        Self {
            inner_boundary_au: (luminosity / INNER_FLUX).sqrt(),
            outer_boundary_au: (luminosity / OUTER_FLUX).sqrt(),
        }
    }

    /// Whether `orbit_radius_au` lies inside the zone, boundaries included
    pub fn contains(&self, orbit_radius_au: f64) -> bool {
        (self.inner_boundary_au..=self.outer_boundary_au).contains(&orbit_radius_au)
    }

    /// Centre of the zone
    pub fn midpoint(&self) -> f64 {
        (self.inner_boundary_au + self.outer_boundary_au) / 2.0
    }

    /// Radial extent of the zone in AU
    pub fn width(&self) -> f64 {
        self.outer_boundary_au - self.inner_boundary_au
    }
}

/// Boundary-inclusive habitable zone test
///
/// Shared by classification, the habitability guarantee and consumers.
pub fn is_in_habitable_zone(orbit_radius_au: f64, zone: &HabitableZone) -> bool {
    zone.contains(orbit_radius_au)
}

/// Snow line location in AU
pub fn snow_line(luminosity: f64) -> f64 {
    2.7 * luminosity.sqrt()
}
