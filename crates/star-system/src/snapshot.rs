//! Reduced snapshot encoding
//!
//! A snapshot keeps only what is needed to rebuild a system: the star's class,
//! size, mass and luminosity, and per planet its type, orbit, size, tilt, moon
//! count and tidal locking. It is JSON, base64-encoded:
//!
//! ```json
//! {
//!   "parentStar": { "type": "G", "size": 1.02, "mass": 0.97, "luminosity": 1.02 },
//!   "solarSystem": [
//!     { "type": "LavaPlanet", "orbitRadius": 0.2, "size": 0.61,
//!       "axialTilt": 12.5, "moons": 1, "isTidallyLocked": false }
//!   ]
//! }
//! ```
//!
//! Star age, atmospheres and metadata are not stored. On load the habitable
//! zone is recomputed from the star and each atmosphere is re-picked from the
//! planet's persisted fields.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use planetary::{Planet, PlanetType};
use serde::{Deserialize, Serialize};
use stellar::{SpectralClass, Star};

use crate::config::{MAX_PLANETS, MIN_PLANETS};
use crate::error::SystemError;
use crate::metadata::SystemMetadata;
use crate::system::GeneratedSystem;

/// Relative tolerance between persisted and recomputed luminosity
const LUMINOSITY_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Snapshot {
    parent_star: StarRecord,
    solar_system: Vec<PlanetRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StarRecord {
    #[serde(rename = "type")]
    spectral_class: SpectralClass,
    size: f64,
    mass: f64,
    luminosity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PlanetRecord {
    #[serde(rename = "type")]
    planet_type: PlanetType,
    orbit_radius: f64,
    size: f64,
    axial_tilt: f64,
    moons: u32,
    is_tidally_locked: bool,
}

impl From<&GeneratedSystem> for Snapshot {
    fn from(system: &GeneratedSystem) -> Self {
        let star = &system.parent_star;
        Self {
            parent_star: StarRecord {
                spectral_class: star.spectral_class,
                size: star.size_solar_radii,
                mass: star.mass_solar_masses,
                luminosity: star.luminosity,
            },
            solar_system: system
                .planets
                .iter()
                .map(|planet| PlanetRecord {
                    planet_type: planet.planet_type,
                    orbit_radius: planet.orbit_radius_au,
                    size: planet.size_earth_radii,
                    axial_tilt: planet.axial_tilt_degrees,
                    moons: planet.moon_count,
                    is_tidally_locked: planet.tidally_locked,
                })
                .collect(),
        }
    }
}

impl Snapshot {
    fn validate(&self) -> Result<(), String> {
        let star = &self.parent_star;
        for (field, value) in [("size", star.size), ("mass", star.mass)] {
            if !is_positive(value) {
                return Err(format!("parent star {} must be positive, got {}", field, value));
            }
        }
        let expected = Star::luminosity_for(star.spectral_class, star.size);
        if !is_positive(star.luminosity)
            || (star.luminosity - expected).abs() > LUMINOSITY_TOLERANCE * expected
        {
            return Err(format!(
                "luminosity {} does not match class {} and size {} (expected {})",
                star.luminosity, star.spectral_class, star.size, expected
            ));
        }

        let count = self.solar_system.len();
        if !(MIN_PLANETS..=MAX_PLANETS).contains(&count) {
            return Err(format!("{} planets outside {}..={}", count, MIN_PLANETS, MAX_PLANETS));
        }
        for (i, planet) in self.solar_system.iter().enumerate() {
            if !is_positive(planet.orbit_radius) || !is_positive(planet.size) {
                return Err(format!("planet {} has a non-positive orbit or size", i));
            }
            if !planet.axial_tilt.is_finite() {
                return Err(format!("planet {} has a non-finite axial tilt", i));
            }
        }
        Ok(())
    }

    fn restore(self) -> GeneratedSystem {
        let record = self.parent_star;
        let star = Star::restore(record.spectral_class, record.size, record.mass);
        let planets = self
            .solar_system
            .into_iter()
            .map(|p| {
                Planet::restore(
                    &star,
                    p.planet_type,
                    p.orbit_radius,
                    p.size,
                    p.moons,
                    p.axial_tilt,
                    p.is_tidally_locked,
                )
            })
            .collect();
        GeneratedSystem::new(star, planets, SystemMetadata::unseeded())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Encode a system as a base64 snapshot string
pub fn encode_snapshot(system: &GeneratedSystem) -> Result<String, SystemError> {
    let json = serde_json::to_vec(&Snapshot::from(system))
        .map_err(|e| SystemError::InvalidSnapshot(e.to_string()))?;
    Ok(STANDARD.encode(json))
}

/// Rebuild a system from a base64 snapshot string
///
/// # Errors
/// Any malformed input (bad base64, bad JSON, unknown class or type names,
/// inconsistent luminosity, out-of-range values) yields
/// [`SystemError::InvalidSnapshot`], displayed as "invalid data format".
pub fn decode_snapshot(encoded: &str) -> Result<GeneratedSystem, SystemError> {
    let result = STANDARD
        .decode(encoded.trim())
        .map_err(|e| format!("base64: {}", e))
        .and_then(|bytes| {
            serde_json::from_slice::<Snapshot>(&bytes).map_err(|e| format!("json: {}", e))
        })
        .and_then(|snapshot| snapshot.validate().map(|()| snapshot));

    match result {
        Ok(snapshot) => {
            let system = snapshot.restore();
            log::debug!(
                "Restored {}-class system with {} planets from snapshot",
                system.parent_star.spectral_class,
                system.planet_count()
            );
            Ok(system)
        }
        Err(detail) => {
            log::warn!("Rejected snapshot: {}", detail);
            Err(SystemError::InvalidSnapshot(detail))
        }
    }
}
