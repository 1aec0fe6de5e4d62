//! Planet types
//!
//! A planet's type is fixed by where it formed relative to the habitable zone
//! of its star. Size, moon and tilt bands, atmosphere pools and the derived
//! calculators are all keyed by type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Observable planet type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    /// Inside the habitable zone's inner edge: magma surface
    LavaPlanet,

    /// Rocky habitable-zone world with continents
    Terrestrial,

    /// Habitable-zone world covered by a global ocean
    OceanWorld,

    /// Hydrogen/helium giant just beyond the habitable zone
    GasGiant,

    /// Ice-rich giant further out
    IceGiant,

    /// Small icy body at the system's frontier
    DwarfPlanet,
}

impl PlanetType {
    pub const ALL: [PlanetType; 6] = [
        PlanetType::LavaPlanet,
        PlanetType::Terrestrial,
        PlanetType::OceanWorld,
        PlanetType::GasGiant,
        PlanetType::IceGiant,
        PlanetType::DwarfPlanet,
    ];

    /// Identifier used in snapshots
    pub fn name(&self) -> &'static str {
        match self {
            Self::LavaPlanet => "LavaPlanet",
            Self::Terrestrial => "Terrestrial",
            Self::OceanWorld => "OceanWorld",
            Self::GasGiant => "GasGiant",
            Self::IceGiant => "IceGiant",
            Self::DwarfPlanet => "DwarfPlanet",
        }
    }

    /// Whether this is a gas or ice giant
    pub fn is_giant(&self) -> bool {
        matches!(self, Self::GasGiant | Self::IceGiant)
    }

    /// Whether this type has a solid surface
    pub fn has_solid_surface(&self) -> bool {
        matches!(self, Self::LavaPlanet | Self::Terrestrial | Self::DwarfPlanet)
    }

    /// Whether this type could support surface liquid water
    pub fn potentially_habitable(&self) -> bool {
        matches!(self, Self::Terrestrial | Self::OceanWorld)
    }

    /// Bond albedo used for equilibrium temperatures
    pub fn albedo(&self) -> f64 {
        match self {
            Self::LavaPlanet => 0.10,  // dark basalt
            Self::Terrestrial => 0.30, // Earth-like
            Self::OceanWorld => 0.25,
            Self::GasGiant => 0.50, // ammonia cloud decks
            Self::IceGiant => 0.30,
            Self::DwarfPlanet => 0.60, // fresh ice
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::LavaPlanet => "Lava planet: molten surface scorched by its star",
            Self::Terrestrial => "Terrestrial: rocky world with continents and seas",
            Self::OceanWorld => "Ocean world: global ocean over a rocky mantle",
            Self::GasGiant => "Gas giant: banded hydrogen-helium envelope",
            Self::IceGiant => "Ice giant: water, ammonia and methane ices under a thin envelope",
            Self::DwarfPlanet => "Dwarf planet: small icy body at the system's edge",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LavaPlanet => "Lava Planet",
            Self::Terrestrial => "Terrestrial",
            Self::OceanWorld => "Ocean World",
            Self::GasGiant => "Gas Giant",
            Self::IceGiant => "Ice Giant",
            Self::DwarfPlanet => "Dwarf Planet",
        };
        write!(f, "{}", name)
    }
}

/// Returned when a string names no known planet type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlanetType(pub String);

impl fmt::Display for UnknownPlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown planet type '{}'", self.0)
    }
}

impl std::error::Error for UnknownPlanetType {}

impl FromStr for PlanetType {
    type Err = UnknownPlanetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|planet_type| planet_type.name() == s)
            .ok_or_else(|| UnknownPlanetType(s.to_string()))
    }
}
