//! Planet typing and characterization
//!
//! Classifies orbit slots into planet types, samples per-type properties from
//! the generation stream and derives temperatures, interiors and atmosphere
//! descriptions for a planet under its star.

pub mod atmosphere;
pub mod classification;
pub mod composition;
pub mod error;
pub mod geology;
pub mod planet;
pub mod planet_type;
pub mod properties;
pub mod temperature;
pub mod variation;

pub use atmosphere::{AtmosphereVariant, GasFamily, atmosphere_detail};
pub use classification::{OrbitBand, classify};
pub use composition::Composition;
pub use error::DerivationError;
pub use geology::{GeologicalInterior, Layer, LayerMaterial, geological_interior};
pub use planet::Planet;
pub use planet_type::{PlanetType, UnknownPlanetType};
pub use temperature::{Temperature, TemperatureClass, surface_temperature_celsius};
pub use variation::PlanetaryVariation;

#[cfg(test)]
mod composition_test;
#[cfg(test)]
mod geology_test;
#[cfg(test)]
mod planet_type_test;
#[cfg(test)]
mod temperature_test;
