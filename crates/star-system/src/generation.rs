//! Star system generation
//!
//! Generation runs in two phases over a single seeded stream:
//!
//! 1. Sample the parent star, a planet count and one planet per log-spaced
//!    orbit slot.
//! 2. Guarantee habitability: when no planet landed inside the habitable
//!    zone, move one at random to the zone's midpoint. Then sort by orbit.
//!
//! Every draw comes from the supplied [`RandomStream`], so a seed fully
//! determines the resulting system.

use planetary::Planet;
use stellar::{RandomStream, Star};

use crate::config::GeneratorConfig;
use crate::error::SystemError;
use crate::metadata::SystemMetadata;
use crate::orbits::{sample_planet_count_with, spaced_orbits};
use crate::system::GeneratedSystem;

/// Generate a system from the stream's current state
///
/// The state on entry is recorded as the system's seed, since a fresh
/// stream with that seed replays the same system.
///
/// # Errors
/// Returns [`SystemError::InvalidConfig`] if `config` fails validation.
pub fn generate_orbit(
    stream: &mut RandomStream,
    config: &GeneratorConfig,
) -> Result<GeneratedSystem, SystemError> {
    config.validate()?;
    Ok(generate_validated(stream, config))
}

/// Generate a system from `seed` with the default configuration
///
/// # Example
/// ```
/// use star_system::generate_seeded;
///
/// let a = generate_seeded(42);
/// let b = generate_seeded(42);
/// assert_eq!(a, b);
/// assert!((3..=18).contains(&a.planets.len()));
/// assert!(a.has_habitable_zone_planet());
/// ```
pub fn generate_seeded(seed: u32) -> GeneratedSystem {
    generate_validated(&mut RandomStream::new(seed), &GeneratorConfig::default())
}

/// Generate a system from a clock-seeded stream
pub fn generate_random(config: &GeneratorConfig) -> Result<GeneratedSystem, SystemError> {
    generate_orbit(&mut RandomStream::from_time(), config)
}

/// Reseed a stream; the next generation replays the system for `seed`
pub fn set_random_seed(stream: &mut RandomStream, seed: u32) {
    stream.seed(seed);
}

fn generate_validated(stream: &mut RandomStream, config: &GeneratorConfig) -> GeneratedSystem {
    let seed = stream.state();

    // Phase 1: star, slots, planets
    let star = Star::generate(stream);
    let count = sample_planet_count_with(stream, config);
    let mut planets: Vec<Planet> = spaced_orbits(&star, count, config)
        .into_iter()
        .map(|orbit| Planet::sample(&star, orbit, stream))
        .collect();

    // Phase 2: habitability guarantee, then ordering
    ensure_habitable_planet(&star, &mut planets, stream, config);
    let system = GeneratedSystem::new(star, planets, SystemMetadata::from_seed(seed));

    log::info!(
        "Generated system {} (seed {}): {}-class star, {} planets, {} in habitable zone",
        system.metadata.catalog_name(),
        seed,
        system.parent_star.spectral_class,
        system.planet_count(),
        system.habitable_zone_planets().len()
    );

    system
}

/// Make sure at least one planet orbits inside the habitable zone
///
/// If none does, one planet chosen with `int_range(0, n - 1)` moves to the
/// zone midpoint. By default it keeps its sampled type, size and
/// atmosphere; with `reclassify_relocated` it is re-sampled at the new orbit.
/// Returns the index of the moved planet. An empty list is left untouched
/// and consumes no draws.
pub fn ensure_habitable_planet(
    star: &Star,
    planets: &mut [Planet],
    stream: &mut RandomStream,
    config: &GeneratorConfig,
) -> Option<usize> {
    let zone = &star.habitable_zone;
    if planets.is_empty() || planets.iter().any(|p| zone.contains(p.orbit_radius_au)) {
        return None;
    }

    let index = stream.int_range(0, planets.len() as i64 - 1) as usize;
    let midpoint = zone.midpoint();
    let previous_orbit = planets[index].orbit_radius_au;

    if config.reclassify_relocated {
        planets[index] = Planet::sample(star, midpoint, stream);
    } else {
        planets[index].relocate(star, midpoint);
    }

    log::warn!(
        "No planet in habitable zone [{:.3}, {:.3}] AU; moved {} from {:.3} to {:.3} AU",
        zone.inner_boundary_au,
        zone.outer_boundary_au,
        planets[index].planet_type,
        previous_orbit,
        midpoint
    );

    Some(index)
}
