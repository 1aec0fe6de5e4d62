//! Planetary temperature calculations
//!
//! - Equilibrium (blackbody) temperature from the star's effective temperature,
//!   photospheric radius, the orbit radius and the planet type's albedo
//! - Surface temperature: equilibrium plus internal heat plus the greenhouse
//!   offset of the atmosphere's gas family
//!
//! T_eq = T_eff × sqrt(R★ / 2d) × (1 − A)^¼
//!
//! # References
//! - Wallace & Hobbs (2006) - "Atmospheric Science: An Introductory Survey"

use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::error::{DerivationError, check_inputs};
use crate::planet::Planet;
use crate::planet_type::PlanetType;

/// 0 °C in Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;

/// Planetary temperatures in Kelvin
///
/// # Example
/// ```
/// use planetary::temperature::Temperature;
/// use planetary::{AtmosphereVariant, Planet, PlanetType};
/// use stellar::solar_analog;
///
/// let sun = solar_analog();
/// let earth = Planet {
///     planet_type: PlanetType::Terrestrial,
///     orbit_radius_au: 1.0,
///     size_earth_radii: 1.0,
///     moon_count: 1,
///     axial_tilt_degrees: 23.4,
///     atmosphere: AtmosphereVariant::NitrogenII,
///     tidally_locked: false,
/// };
/// let temperature = Temperature::for_planet(&sun, &earth).unwrap();
/// assert!((temperature.equilibrium - 255.0).abs() < 5.0);
/// assert!((temperature.effective - 288.0).abs() < 5.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Blackbody temperature from stellar radiation alone
    pub equilibrium: f64,
    /// Surface temperature including greenhouse and internal heating
    pub effective: f64,
}

impl Temperature {
    /// # Errors
    /// Any [`DerivationError`] from invalid star or planet inputs.
    pub fn for_planet(star: &Star, planet: &Planet) -> Result<Self, DerivationError> {
        let equilibrium = equilibrium_temperature(star, planet)?;
        let effective = equilibrium
            + internal_heating(planet.planet_type, planet.size_earth_radii)
            + planet.atmosphere.family().greenhouse_effect();

        Ok(Self {
            equilibrium,
            effective,
        })
    }

    pub fn effective_celsius(&self) -> f64 {
        self.effective - KELVIN_OFFSET
    }

    pub fn classification(&self) -> TemperatureClass {
        TemperatureClass::classify(self.effective)
    }
}

/// Equilibrium temperature in Kelvin
pub fn equilibrium_temperature(star: &Star, planet: &Planet) -> Result<f64, DerivationError> {
    check_inputs(star, planet)?;

    let radius_ratio = star.photospheric_radius_au() / (2.0 * planet.orbit_radius_au);
    let absorbed = (1.0 - planet.planet_type.albedo()).powf(0.25);
    Ok(star.effective_temperature() * radius_ratio.sqrt() * absorbed)
}

/// Internal heat contribution in Kelvin, scaled by planet radius
pub fn internal_heating(planet_type: PlanetType, size_earth_radii: f64) -> f64 {
    match planet_type {
        // Jupiter (11.2 R⊕) radiates ~100 K worth of primordial heat
        PlanetType::GasGiant => 100.0 * (size_earth_radii / 11.2).powf(0.3),
        // Neptune (3.9 R⊕) shows a ~12 K excess
        PlanetType::IceGiant => 5.0 * (size_earth_radii / 3.9).powf(0.5),
        // Young, recently resurfaced crust
        PlanetType::LavaPlanet => 0.5 * size_earth_radii,
        PlanetType::Terrestrial | PlanetType::OceanWorld => 0.1,
        PlanetType::DwarfPlanet => 0.0,
    }
}

/// Surface temperature in Kelvin
pub fn surface_temperature_kelvin(star: &Star, planet: &Planet) -> Result<f64, DerivationError> {
    Temperature::for_planet(star, planet).map(|t| t.effective)
}

/// Surface temperature in degrees Celsius
///
/// # Errors
/// Rejects stars with non-positive luminosity and planets with non-positive
/// size or orbit radius.
pub fn surface_temperature_celsius(star: &Star, planet: &Planet) -> Result<f64, DerivationError> {
    Temperature::for_planet(star, planet).map(|t| t.effective_celsius())
}

/// Surface temperature in °C with the planet's cosmetic jitter applied
///
/// For display only; the jitter comes from the planet's own variation
/// source and never touches the generation stream.
pub fn displayed_surface_temperature_celsius(
    star: &Star,
    planet: &Planet,
) -> Result<f64, DerivationError> {
    let base = surface_temperature_celsius(star, planet)?;
    Ok(base + planet.variation().surface_temperature_jitter())
}

/// Coarse temperature class of a planet's surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureClass {
    /// T < 150 K - Beyond snow line
    Cold,

    /// 150-400 K - Habitable zone range
    Temperate,

    /// 400-1000 K
    Warm,

    /// 1000-2000 K
    Hot,

    /// > 2000 K - Magma oceans, ionized atmospheres
    UltraHot,
}

impl TemperatureClass {
    /// Classify a temperature in Kelvin
    pub fn classify(temperature: f64) -> Self {
        match temperature {
            t if t < 150.0 => Self::Cold,
            t if t < 400.0 => Self::Temperate,
            t if t < 1000.0 => Self::Warm,
            t if t < 2000.0 => Self::Hot,
            _ => Self::UltraHot,
        }
    }

    /// Temperature range for this class in Kelvin
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Cold => (0.0, 150.0),
            Self::Temperate => (150.0, 400.0),
            Self::Warm => (400.0, 1000.0),
            Self::Hot => (1000.0, 2000.0),
            Self::UltraHot => (2000.0, f64::INFINITY),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Temperate => "Temperate",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
            Self::UltraHot => "Ultra-Hot",
        }
    }
}

impl std::fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
