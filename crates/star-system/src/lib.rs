//! Procedural star system generation
//!
//! Ties the parent star, orbit layout and planet sampling together into a
//! seeded generator, guarantees at least one habitable-zone planet and
//! encodes systems as compact snapshots.
//!
//! ```
//! use star_system::{decode_snapshot, encode_snapshot, generate_seeded};
//!
//! let system = generate_seeded(7);
//! let restored = decode_snapshot(&encode_snapshot(&system).unwrap()).unwrap();
//! assert_eq!(restored.planets.len(), system.planets.len());
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod metadata;
pub mod orbits;
pub mod snapshot;
pub mod system;

pub use config::GeneratorConfig;
pub use error::SystemError;
pub use generation::{
    ensure_habitable_planet, generate_orbit, generate_random, generate_seeded, set_random_seed,
};
pub use metadata::SystemMetadata;
pub use orbits::{layout_orbits, sample_planet_count};
pub use snapshot::{decode_snapshot, encode_snapshot};
pub use system::GeneratedSystem;

// Re-export the building blocks callers need alongside a system
pub use planetary::{
    AtmosphereVariant, DerivationError, GeologicalInterior, Planet, PlanetType, TemperatureClass,
    atmosphere_detail, geological_interior, surface_temperature_celsius,
};
pub use stellar::{HabitableZone, RandomStream, SpectralClass, Star, is_in_habitable_zone};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod system_test;
