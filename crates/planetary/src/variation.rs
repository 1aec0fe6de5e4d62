//! Cosmetic variation for planetary properties
//!
//! Variation draws come from a ChaCha8 source keyed on a planet's persisted
//! fields, never from the generation stream. The same planet always receives
//! the same variation, and asking for variation never shifts the sequence a
//! seeded system is built from.

use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::planet_type::PlanetType;

/// Standard deviation of the cosmetic surface temperature jitter (K)
pub const SURFACE_JITTER_SIGMA_K: f64 = 1.5;

/// Deterministic per-planet random source
///
/// # Example
/// ```
/// use planetary::variation::PlanetaryVariation;
/// use planetary::PlanetType;
///
/// let mut a = PlanetaryVariation::from_planet(PlanetType::Terrestrial, 1.0, 1.0, 23.4, 1);
/// let mut b = PlanetaryVariation::from_planet(PlanetType::Terrestrial, 1.0, 1.0, 23.4, 1);
/// assert_eq!(a.unit(), b.unit());
/// ```
#[derive(Debug, Clone)]
pub struct PlanetaryVariation {
    rng: ChaCha8Rng,
}

impl PlanetaryVariation {
    /// Seeds from the fields a snapshot persists for a planet
    pub fn from_planet(
        planet_type: PlanetType,
        orbit_radius_au: f64,
        size_earth_radii: f64,
        axial_tilt_degrees: f64,
        moon_count: u32,
    ) -> Self {
        // Hash bit patterns so nearby floats still mix well
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        planet_type.hash(&mut hasher);
        orbit_radius_au.to_bits().hash(&mut hasher);
        size_earth_radii.to_bits().hash(&mut hasher);
        axial_tilt_degrees.to_bits().hash(&mut hasher);
        moon_count.hash(&mut hasher);

        Self::from_seed(hasher.finish())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform value in [0, 1)
    pub fn unit(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniform value in [min, max]
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        self.rng.random_range(min..=max)
    }

    /// Sample from N(mean, std_dev²) via Box-Muller
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u keeps the log argument in (0, 1]
        let u1: f64 = 1.0 - self.rng.random::<f64>();
        let u2: f64 = self.rng.random();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }

    /// Small display-only offset for a surface temperature, in Kelvin
    ///
    /// Clamped to three standard deviations.
    pub fn surface_temperature_jitter(&mut self) -> f64 {
        let limit = 3.0 * SURFACE_JITTER_SIGMA_K;
        self.gaussian(0.0, SURFACE_JITTER_SIGMA_K).clamp(-limit, limit)
    }
}
