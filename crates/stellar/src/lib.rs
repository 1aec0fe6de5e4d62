//! Parent star generation for procedural star systems.
//!
//! Holds the seeded random stream every generation step draws from, the
//! spectral class tables, star sampling and habitable zone boundaries.

pub mod habitable_zone;
pub mod random;
pub mod spectral;
pub mod star;

#[cfg(test)]
mod habitable_zone_test;
#[cfg(test)]
mod random_test;

pub use habitable_zone::{HabitableZone, is_in_habitable_zone, snow_line};
pub use random::RandomStream;
pub use spectral::{Band, SpectralClass, UnknownSpectralClass};
pub use star::{Star, generate_star, solar_analog};
