//! Generated star system and its queries

use planetary::{GeologicalInterior, Planet, PlanetType, Temperature, atmosphere_detail};
use serde::{Deserialize, Serialize};
use stellar::{HabitableZone, Star, snow_line};

use crate::error::SystemError;
use crate::metadata::SystemMetadata;

/// A parent star and its planets, ordered by orbit radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSystem {
    pub parent_star: Star,

    /// Planets sorted by ascending orbit radius
    pub planets: Vec<Planet>,

    /// Copy of the parent star's zone
    pub habitable_zone: HabitableZone,

    pub metadata: SystemMetadata,
}

impl GeneratedSystem {
    /// Assemble a system, sorting planets by orbit radius
    pub fn new(parent_star: Star, mut planets: Vec<Planet>, metadata: SystemMetadata) -> Self {
        sort_by_orbit(&mut planets);
        Self {
            habitable_zone: parent_star.habitable_zone,
            parent_star,
            planets,
            metadata,
        }
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Planets whose orbit lies inside the habitable zone
    pub fn habitable_zone_planets(&self) -> Vec<&Planet> {
        self.planets
            .iter()
            .filter(|p| self.habitable_zone.contains(p.orbit_radius_au))
            .collect()
    }

    pub fn has_habitable_zone_planet(&self) -> bool {
        self.planets
            .iter()
            .any(|p| self.habitable_zone.contains(p.orbit_radius_au))
    }

    pub fn planets_of_type(&self, planet_type: PlanetType) -> Vec<&Planet> {
        self.planets
            .iter()
            .filter(|p| p.planet_type == planet_type)
            .collect()
    }

    pub fn innermost_orbit(&self) -> Option<f64> {
        self.planets.first().map(|p| p.orbit_radius_au)
    }

    pub fn outermost_orbit(&self) -> Option<f64> {
        self.planets.last().map(|p| p.orbit_radius_au)
    }

    /// Water ice condensation distance in AU
    pub fn snow_line(&self) -> f64 {
        snow_line(self.parent_star.luminosity)
    }

    pub fn temperature(&self, planet: &Planet) -> Result<Temperature, SystemError> {
        Ok(Temperature::for_planet(&self.parent_star, planet)?)
    }

    pub fn interior(&self, planet: &Planet) -> Result<GeologicalInterior, SystemError> {
        Ok(planetary::geological_interior(&self.parent_star, planet)?)
    }

    pub fn atmosphere_detail(&self, planet: &Planet) -> Result<String, SystemError> {
        Ok(atmosphere_detail(&self.parent_star, planet)?)
    }
}

/// Stable ascending sort by orbit radius
pub fn sort_by_orbit(planets: &mut [Planet]) {
    planets.sort_by(|a, b| a.orbit_radius_au.total_cmp(&b.orbit_radius_au));
}
