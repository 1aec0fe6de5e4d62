//! Orbit slot layout
//!
//! Orbits are spaced evenly in log radius from the innermost orbit out towards
//! the system edge, so inner slots crowd together and outer slots spread out:
//!
//! r_i = exp(ln(r_min) + i × (ln(r_max) − ln(r_min)) / N),  i = 0..N
//!
//! with r_max = max(floor, outer habitable edge + margin). The last slot stays
//! short of r_max.

use stellar::{RandomStream, Star};

use crate::config::{GeneratorConfig, MAX_PLANETS, MIN_PLANETS};
use crate::error::SystemError;

/// Outer edge of the layout for a star
pub fn max_orbit(star: &Star, config: &GeneratorConfig) -> f64 {
    config
        .max_orbit_floor_au
        .max(star.habitable_zone.outer_boundary_au + config.max_orbit_margin_au)
}

/// Orbit radii for `count` planets with the default layout
///
/// # Errors
/// `count` outside 3..=18 is rejected, never clamped.
///
/// # Example
/// ```
/// use star_system::orbits::layout_orbits;
/// use stellar::solar_analog;
///
/// let orbits = layout_orbits(&solar_analog(), 8).unwrap();
/// assert_eq!(orbits.len(), 8);
/// assert!((orbits[0] - 0.2).abs() < 1e-12);
/// ```
pub fn layout_orbits(star: &Star, count: usize) -> Result<Vec<f64>, SystemError> {
    layout_orbits_with(star, count, &GeneratorConfig::default())
}

/// Orbit radii for `count` planets, strictly increasing
pub fn layout_orbits_with(
    star: &Star,
    count: usize,
    config: &GeneratorConfig,
) -> Result<Vec<f64>, SystemError> {
    if !(MIN_PLANETS..=MAX_PLANETS).contains(&count) {
        return Err(SystemError::PlanetCountOutOfRange {
            count,
            min: MIN_PLANETS,
            max: MAX_PLANETS,
        });
    }

    Ok(spaced_orbits(star, count, config))
}

/// Layout without the count check; callers guarantee a count in range
pub(crate) fn spaced_orbits(star: &Star, count: usize, config: &GeneratorConfig) -> Vec<f64> {
    let ln_min = config.min_orbit_au.ln();
    let ln_max = max_orbit(star, config).ln();
    let step = (ln_max - ln_min) / count as f64;

    (0..count)
        .map(|i| (ln_min + i as f64 * step).exp())
        .collect()
}

/// Number of planets to generate, uniform over 3..=18
pub fn sample_planet_count(stream: &mut RandomStream) -> usize {
    sample_planet_count_with(stream, &GeneratorConfig::default())
}

/// Number of planets to generate, uniform over the configured bounds
pub fn sample_planet_count_with(stream: &mut RandomStream, config: &GeneratorConfig) -> usize {
    stream.int_range(config.min_planets as i64, config.max_planets as i64) as usize
}
