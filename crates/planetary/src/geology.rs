//! Layered interior structure
//!
//! Splits a planet's radius into core, mantle and crust shells and reports the
//! thickness and volume of each. Rocky bodies get an iron core whose share of
//! the radius falls off with orbital distance and grows with stellar mass; the
//! crust thins under stronger irradiation (larger star, closer orbit). Gas and
//! ice giants report their gaseous envelope in the crust slot.
//!
//! # References
//! - Seager et al. (2007) - "Mass-radius relationships for solid exoplanets"
//! - Valencia et al. (2006) - "Internal structure of massive terrestrial planets"

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::error::{DerivationError, check_inputs};
use crate::planet::Planet;
use crate::planet_type::PlanetType;

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// What a layer is made of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerMaterial {
    Iron,
    Silicate,
    Basalt,
    Granite,
    Water,
    WaterIce,
    FrozenVolatiles,
    RockIce,
    MetallicHydrogen,
    IonicWater,
    GaseousEnvelope,
}

impl LayerMaterial {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iron => "iron-nickel",
            Self::Silicate => "silicate rock",
            Self::Basalt => "basalt",
            Self::Granite => "granite",
            Self::Water => "liquid water",
            Self::WaterIce => "water ice",
            Self::FrozenVolatiles => "frozen nitrogen and methane",
            Self::RockIce => "rock and ice",
            Self::MetallicHydrogen => "metallic hydrogen",
            Self::IonicWater => "ionic water-ammonia fluid",
            Self::GaseousEnvelope => "hydrogen-helium envelope",
        }
    }
}

impl fmt::Display for LayerMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One spherical shell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub thickness_km: f64,
    pub volume_km3: f64,
    pub material: LayerMaterial,
}

/// Core, mantle and crust of a planet
///
/// Thicknesses sum to the planet radius and volumes to the planet volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeologicalInterior {
    pub core: Layer,
    pub mantle: Layer,
    pub crust: Layer,
}

impl GeologicalInterior {
    pub fn radius_km(&self) -> f64 {
        self.core.thickness_km + self.mantle.thickness_km + self.crust.thickness_km
    }

    pub fn volume_km3(&self) -> f64 {
        self.core.volume_km3 + self.mantle.volume_km3 + self.crust.volume_km3
    }

    /// Core radius as a fraction of the planet radius
    pub fn core_radius_fraction(&self) -> f64 {
        self.core.thickness_km / self.radius_km()
    }
}

/// Per-type layer defaults: core share of the radius and base crust depth (km)
struct Profile {
    core_fraction: f64,
    crust_km: f64,
    materials: [LayerMaterial; 3],
}

fn profile(planet_type: PlanetType) -> Profile {
    use LayerMaterial::*;
    match planet_type {
        PlanetType::LavaPlanet => Profile {
            core_fraction: 0.60,
            crust_km: 10.0,
            materials: [Iron, Silicate, Basalt],
        },
        PlanetType::Terrestrial => Profile {
            core_fraction: 0.55,
            crust_km: 35.0,
            materials: [Iron, Silicate, Granite],
        },
        PlanetType::OceanWorld => Profile {
            core_fraction: 0.45,
            crust_km: 100.0,
            materials: [Iron, Silicate, Water],
        },
        PlanetType::DwarfPlanet => Profile {
            core_fraction: 0.30,
            crust_km: 50.0,
            materials: [Silicate, WaterIce, FrozenVolatiles],
        },
        PlanetType::GasGiant => Profile {
            core_fraction: 0.10,
            crust_km: 0.0,
            materials: [RockIce, MetallicHydrogen, GaseousEnvelope],
        },
        PlanetType::IceGiant => Profile {
            core_fraction: 0.25,
            crust_km: 0.0,
            materials: [RockIce, IonicWater, GaseousEnvelope],
        },
    }
}

/// Iron share drops with distance from the star (condensation sequence)
fn distance_factor(orbit_radius_au: f64) -> f64 {
    1.0 / (1.0 + 0.05 * orbit_radius_au)
}

/// Heavier stars form from metal-richer disks
fn stellar_mass_factor(mass_solar_masses: f64) -> f64 {
    mass_solar_masses.max(0.01).powf(0.05).clamp(0.85, 1.25)
}

/// Irradiation thins the crust: R★ (R☉) over orbit (AU)
fn irradiation_factor(star_size_solar_radii: f64, orbit_radius_au: f64) -> f64 {
    1.0 + 0.1 * (star_size_solar_radii / orbit_radius_au)
}

/// Volume of a shell between two radii
fn shell_volume(inner_km: f64, outer_km: f64) -> f64 {
    4.0 / 3.0 * PI * (outer_km.powi(3) - inner_km.powi(3))
}

/// Layered interior of a planet under its star
///
/// # Errors
/// Rejects stars with non-positive luminosity and planets with non-positive
/// size or orbit radius.
pub fn geological_interior(
    star: &Star,
    planet: &Planet,
) -> Result<GeologicalInterior, DerivationError> {
    check_inputs(star, planet)?;

    let radius_km = planet.size_earth_radii * EARTH_RADIUS_KM;
    let profile = profile(planet.planet_type);
    let mass_factor = stellar_mass_factor(star.mass_solar_masses);

    let (core_km, mantle_km, crust_km) = if planet.planet_type.is_giant() {
        let core_km = (profile.core_fraction * mass_factor).clamp(0.05, 0.4) * radius_km;
        // Metallic or ionic mantle reaches ~80% of the radius; envelope above
        let mantle_km = 0.8 * radius_km - core_km;
        (core_km, mantle_km, radius_km - core_km - mantle_km)
    } else {
        let core_fraction = (profile.core_fraction
            * distance_factor(planet.orbit_radius_au)
            * mass_factor)
            .clamp(0.1, 0.8);
        let core_km = core_fraction * radius_km;
        let crust_km = (profile.crust_km * planet.size_earth_radii.sqrt()
            / irradiation_factor(star.size_solar_radii, planet.orbit_radius_au))
        .min(0.1 * radius_km);
        (core_km, radius_km - core_km - crust_km, crust_km)
    };

    let [core_material, mantle_material, crust_material] = profile.materials;
    let mantle_top = core_km + mantle_km;

    Ok(GeologicalInterior {
        core: Layer {
            thickness_km: core_km,
            volume_km3: shell_volume(0.0, core_km),
            material: core_material,
        },
        mantle: Layer {
            thickness_km: mantle_km,
            volume_km3: shell_volume(core_km, mantle_top),
            material: mantle_material,
        },
        crust: Layer {
            thickness_km: crust_km,
            volume_km3: shell_volume(mantle_top, radius_km),
            material: crust_material,
        },
    })
}
