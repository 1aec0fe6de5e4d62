//! Bulk composition by planet type
//!
//! Mass fractions of iron, silicate rock, water/ices and hydrogen-helium gas.
//! Each planet type maps to a fixed representative mix; the fractions always
//! sum to 1.

use serde::{Deserialize, Serialize};

use crate::planet_type::PlanetType;

/// Bulk composition as mass fractions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Iron/nickel (Earth ~0.32)
    pub iron: f64,
    /// Silicate rock (Earth ~0.68)
    pub silicate: f64,
    /// Water and other ices
    pub water: f64,
    /// Hydrogen/helium envelope
    pub h_he_gas: f64,
}

impl Composition {
    /// Build a composition, normalizing the fractions to sum to 1
    ///
    /// A non-positive total falls back to an Earth-like mix.
    pub fn new(iron: f64, silicate: f64, water: f64, h_he_gas: f64) -> Self {
        let total = iron + silicate + water + h_he_gas;
        if total <= 0.0 {
            return Self::for_type(PlanetType::Terrestrial);
        }
        Self {
            iron: iron / total,
            silicate: silicate / total,
            water: water / total,
            h_he_gas: h_he_gas / total,
        }
    }

    /// Representative composition for a planet type
    pub fn for_type(planet_type: PlanetType) -> Self {
        let (iron, silicate, water, h_he_gas) = match planet_type {
            PlanetType::LavaPlanet => (0.45, 0.55, 0.0, 0.0), // volatiles baked off
            PlanetType::Terrestrial => (0.32, 0.6798, 0.0002, 0.0),
            PlanetType::OceanWorld => (0.15, 0.35, 0.50, 0.0),
            PlanetType::GasGiant => (0.01, 0.02, 0.02, 0.95),
            PlanetType::IceGiant => (0.02, 0.13, 0.70, 0.15),
            PlanetType::DwarfPlanet => (0.10, 0.40, 0.50, 0.0), // Pluto-like rock and ice
        };
        Self {
            iron,
            silicate,
            water,
            h_he_gas,
        }
    }

    /// Iron plus silicate
    pub fn rocky_fraction(&self) -> f64 {
        self.iron + self.silicate
    }

    /// Water plus gas
    pub fn volatile_fraction(&self) -> f64 {
        self.water + self.h_he_gas
    }

    pub fn is_rocky(&self) -> bool {
        self.rocky_fraction() > 0.5
    }

    pub fn is_water_rich(&self) -> bool {
        self.water > 0.25
    }

    pub fn is_gas_dominated(&self) -> bool {
        self.h_he_gas > 0.5
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::for_type(PlanetType::Terrestrial)
    }
}
