//! Errors raised by the derived-property calculators.
//!
//! Every variant signals an upstream invariant violation (a star or planet
//! that generation could never have produced), not bad user input.

use std::fmt;

use stellar::Star;

use crate::planet::Planet;

#[derive(Debug, Clone, PartialEq)]
pub enum DerivationError {
    /// Stellar luminosity must be positive and finite.
    NonPositiveLuminosity(f64),

    /// Planet radius must be positive and finite.
    InvalidPlanetSize(f64),

    /// Orbit radius must be positive and finite.
    InvalidOrbitRadius(f64),
}

impl fmt::Display for DerivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivationError::NonPositiveLuminosity(value) => {
                write!(f, "star luminosity must be positive, got {value}")
            }
            DerivationError::InvalidPlanetSize(value) => {
                write!(f, "planet size must be positive, got {value} R⊕")
            }
            DerivationError::InvalidOrbitRadius(value) => {
                write!(f, "orbit radius must be positive, got {value} AU")
            }
        }
    }
}

impl std::error::Error for DerivationError {}

/// Reject inputs the derived calculators cannot work with
pub(crate) fn check_inputs(star: &Star, planet: &Planet) -> Result<(), DerivationError> {
    if !(star.luminosity.is_finite() && star.luminosity > 0.0) {
        return Err(DerivationError::NonPositiveLuminosity(star.luminosity));
    }
    if !(planet.size_earth_radii.is_finite() && planet.size_earth_radii > 0.0) {
        return Err(DerivationError::InvalidPlanetSize(planet.size_earth_radii));
    }
    if !(planet.orbit_radius_au.is_finite() && planet.orbit_radius_au > 0.0) {
        return Err(DerivationError::InvalidOrbitRadius(planet.orbit_radius_au));
    }
    Ok(())
}
