//! Atmosphere variants and gas-family pools
//!
//! Variants are grouped into named gas families. Each planet type draws its
//! atmosphere uniformly from a candidate list assembled from those pools:
//!
//! | Type                    | Candidate pools                    |
//! |-------------------------|------------------------------------|
//! | Terrestrial (in zone)   | carbon dioxide + nitrogen          |
//! | Terrestrial (outside)   | carbon dioxide                     |
//! | OceanWorld              | carbon + ammonia + nitrogen        |
//! | GasGiant                | hydrogen/helium + carbon           |
//! | IceGiant                | ice + ammonia                      |
//! | LavaPlanet              | carbon dioxide                     |
//! | DwarfPlanet             | trace + carbon dioxide             |
//!
//! The greenhouse offset used by the surface temperature calculator is keyed
//! by family, not by variant.

use std::fmt;

use serde::{Deserialize, Serialize};
use stellar::Star;

use crate::error::DerivationError;
use crate::planet::Planet;
use crate::planet_type::PlanetType;
use crate::temperature::{TemperatureClass, surface_temperature_celsius};

/// Named family of atmosphere variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasFamily {
    Trace,
    CarbonDioxide,
    HydrogenHelium,
    Ice,
    Nitrogen,
    Carbon,
    Ammonia,
    Unknown,
}

/// A concrete atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmosphereVariant {
    Trace,
    CarbonDioxideI,
    CarbonDioxideII,
    HydrogenHeliumI,
    HydrogenHeliumII,
    HydrogenHeliumIII,
    IceI,
    IceII,
    NitrogenI,
    NitrogenII,
    NitrogenIII,
    Carbon,
    Ammonia,
    /// Sentinel for a planet with no candidate atmosphere
    Unknown,
}

impl GasFamily {
    /// Variants belonging to this family, in pool order
    pub fn pool(&self) -> &'static [AtmosphereVariant] {
        use AtmosphereVariant::*;
        match self {
            Self::Trace => &[Trace],
            Self::CarbonDioxide => &[CarbonDioxideI, CarbonDioxideII],
            Self::HydrogenHelium => &[HydrogenHeliumI, HydrogenHeliumII, HydrogenHeliumIII],
            Self::Ice => &[IceI, IceII],
            Self::Nitrogen => &[NitrogenI, NitrogenII, NitrogenIII],
            Self::Carbon => &[Carbon],
            Self::Ammonia => &[Ammonia],
            Self::Unknown => &[],
        }
    }

    /// Warming above equilibrium temperature in Kelvin
    pub fn greenhouse_effect(&self) -> f64 {
        match self {
            Self::Trace | Self::Unknown => 0.0,
            Self::CarbonDioxide => 60.0,
            Self::Nitrogen => 33.0, // Earth's greenhouse effect
            Self::Carbon => 20.0,   // Titan-like methane haze
            Self::Ammonia => 30.0,
            Self::Ice => 5.0,
            Self::HydrogenHelium => 0.0, // internal heat dominates
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::CarbonDioxide => "carbon_dioxide",
            Self::HydrogenHelium => "hydrogen_helium",
            Self::Ice => "ice",
            Self::Nitrogen => "nitrogen",
            Self::Carbon => "carbon",
            Self::Ammonia => "ammonia",
            Self::Unknown => "unknown",
        }
    }
}

impl AtmosphereVariant {
    pub fn family(&self) -> GasFamily {
        match self {
            Self::Trace => GasFamily::Trace,
            Self::CarbonDioxideI | Self::CarbonDioxideII => GasFamily::CarbonDioxide,
            Self::HydrogenHeliumI | Self::HydrogenHeliumII | Self::HydrogenHeliumIII => {
                GasFamily::HydrogenHelium
            }
            Self::IceI | Self::IceII => GasFamily::Ice,
            Self::NitrogenI | Self::NitrogenII | Self::NitrogenIII => GasFamily::Nitrogen,
            Self::Carbon => GasFamily::Carbon,
            Self::Ammonia => GasFamily::Ammonia,
            Self::Unknown => GasFamily::Unknown,
        }
    }

    /// Nominal surface (or 1-bar reference level) pressure in bar
    pub fn surface_pressure_bar(&self) -> f64 {
        match self {
            Self::Trace => 1.0e-9,
            Self::CarbonDioxideI => 0.006, // Mars
            Self::CarbonDioxideII => 92.0, // Venus
            Self::HydrogenHeliumI | Self::HydrogenHeliumII | Self::HydrogenHeliumIII => 1.0,
            Self::IceI => 1.0e-5, // Pluto-like frost cycle
            Self::IceII => 0.01,
            Self::NitrogenI => 0.5,
            Self::NitrogenII => 1.0,
            Self::NitrogenIII => 1.5, // Titan
            Self::Carbon => 5.0,
            Self::Ammonia => 10.0,
            Self::Unknown => 0.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Trace => "Tenuous exosphere of sputtered atoms",
            Self::CarbonDioxideI => "Thin, dusty carbon dioxide",
            Self::CarbonDioxideII => "Crushing carbon dioxide under sulfuric clouds",
            Self::HydrogenHeliumI => "Hydrogen and helium with pale ammonia bands",
            Self::HydrogenHeliumII => "Hydrogen and helium with storm-streaked belts",
            Self::HydrogenHeliumIII => "Hydrogen and helium under a high golden haze",
            Self::IceI => "Frozen volatiles that sublimate near perihelion",
            Self::IceII => "Methane-tinted hydrogen over deep icy layers",
            Self::NitrogenI => "Thin nitrogen with traces of argon",
            Self::NitrogenII => "Nitrogen and oxygen, Earth-like",
            Self::NitrogenIII => "Dense nitrogen with water vapour clouds",
            Self::Carbon => "Hydrocarbon smog rich in methane",
            Self::Ammonia => "Ammonia-laden clouds",
            Self::Unknown => "Unknown composition",
        }
    }

    /// Short label such as "Nitrogen II"
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::CarbonDioxideI => "Carbon Dioxide I",
            Self::CarbonDioxideII => "Carbon Dioxide II",
            Self::HydrogenHeliumI => "Hydrogen-Helium I",
            Self::HydrogenHeliumII => "Hydrogen-Helium II",
            Self::HydrogenHeliumIII => "Hydrogen-Helium III",
            Self::IceI => "Ice I",
            Self::IceII => "Ice II",
            Self::NitrogenI => "Nitrogen I",
            Self::NitrogenII => "Nitrogen II",
            Self::NitrogenIII => "Nitrogen III",
            Self::Carbon => "Carbon",
            Self::Ammonia => "Ammonia",
            Self::Unknown => "Unknown",
        }
    }

    pub fn pressure_regime(&self) -> PressureRegime {
        PressureRegime::classify(self.surface_pressure_bar())
    }
}

impl fmt::Display for AtmosphereVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse pressure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureRegime {
    /// < 1e-6 bar
    Trace,
    /// < 0.1 bar
    Thin,
    /// 0.1 to 10 bar
    Medium,
    /// > 10 bar
    Thick,
}

impl PressureRegime {
    pub fn classify(pressure_bar: f64) -> Self {
        match pressure_bar {
            p if p < 1.0e-6 => Self::Trace,
            p if p < 0.1 => Self::Thin,
            p if p <= 10.0 => Self::Medium,
            _ => Self::Thick,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Thin => "thin",
            Self::Medium => "moderate",
            Self::Thick => "thick",
        }
    }
}

/// Candidate atmospheres for a planet type
///
/// Terrestrial planets inside the habitable zone also admit nitrogen
/// atmospheres; elsewhere they are limited to carbon dioxide.
pub fn candidate_atmospheres(
    planet_type: PlanetType,
    in_habitable_zone: bool,
) -> Vec<AtmosphereVariant> {
    let families: &[GasFamily] = match planet_type {
        PlanetType::Terrestrial if in_habitable_zone => {
            &[GasFamily::CarbonDioxide, GasFamily::Nitrogen]
        }
        PlanetType::Terrestrial => &[GasFamily::CarbonDioxide],
        PlanetType::OceanWorld => &[GasFamily::Carbon, GasFamily::Ammonia, GasFamily::Nitrogen],
        PlanetType::GasGiant => {
            let mut pool = GasFamily::HydrogenHelium.pool().to_vec();
            pool.push(GasFamily::Carbon.pool()[0]);
            return pool;
        }
        PlanetType::IceGiant => {
            let mut pool = GasFamily::Ice.pool().to_vec();
            pool.push(GasFamily::Ammonia.pool()[0]);
            return pool;
        }
        PlanetType::LavaPlanet => &[GasFamily::CarbonDioxide],
        PlanetType::DwarfPlanet => &[GasFamily::Trace, GasFamily::CarbonDioxide],
    };

    families
        .iter()
        .flat_map(|family| family.pool().iter().copied())
        .collect()
}

/// Pick a candidate with a uniform roll in [0, 1)
///
/// An empty list yields `AtmosphereVariant::Unknown`.
pub fn pick_atmosphere(candidates: &[AtmosphereVariant], roll: f64) -> AtmosphereVariant {
    if candidates.is_empty() {
        return AtmosphereVariant::Unknown;
    }
    let index = ((roll * candidates.len() as f64).floor() as usize).min(candidates.len() - 1);
    candidates[index]
}

/// Candidate list and pick in one step
pub fn select_atmosphere(
    planet_type: PlanetType,
    in_habitable_zone: bool,
    roll: f64,
) -> AtmosphereVariant {
    pick_atmosphere(&candidate_atmospheres(planet_type, in_habitable_zone), roll)
}

/// Descriptive summary of a planet's atmosphere under its star
///
/// # Errors
/// Rejects stars with non-positive luminosity and planets with non-positive
/// size or orbit radius.
pub fn atmosphere_detail(star: &Star, planet: &Planet) -> Result<String, DerivationError> {
    let surface_c = surface_temperature_celsius(star, planet)?;
    let atmosphere = planet.atmosphere;
    let class = TemperatureClass::classify(surface_c + 273.15);

    Ok(format!(
        "{}: {}. {} atmosphere at ~{} bar, greenhouse +{:.0} K, {} surface near {:.0} °C.",
        atmosphere.name(),
        atmosphere.description(),
        capitalize(atmosphere.pressure_regime().name()),
        format_pressure(atmosphere.surface_pressure_bar()),
        atmosphere.family().greenhouse_effect(),
        class.name().to_lowercase(),
        surface_c
    ))
}

fn format_pressure(bar: f64) -> String {
    if bar != 0.0 && bar.abs() < 0.01 {
        format!("{:.0e}", bar)
    } else {
        format!("{:.2}", bar)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
