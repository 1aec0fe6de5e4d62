//! Orbit-band classification
//!
//! A planet's type follows from its orbit radius relative to the habitable
//! zone. The bands overlap, so they are kept as an ordered rule table
//! evaluated first-match-wins:
//!
//! | # | Condition                    | Band       | Type                      |
//! |---|------------------------------|------------|---------------------------|
//! | 1 | r < inner                    | Inner      | LavaPlanet                |
//! | 2 | inner ≤ r ≤ outer            | Habitable  | Terrestrial / OceanWorld  |
//! | 3 | outer < r < outer + 15       | GasGiant   | GasGiant                  |
//! | 4 | outer + 5 ≤ r < 30           | IceGiant   | IceGiant                  |
//! | 5 | otherwise                    | Frontier   | DwarfPlanet               |
//!
//! Rules 3 and 4 overlap on [outer + 5, min(outer + 15, 30)); rule 3 wins.

use stellar::{HabitableZone, RandomStream};

use crate::planet_type::PlanetType;

/// Width of the gas giant band beyond the habitable zone (AU)
pub const GAS_GIANT_BAND_AU: f64 = 15.0;

/// Offset from the outer habitable edge where ice giants may start (AU)
pub const ICE_GIANT_OFFSET_AU: f64 = 5.0;

/// Absolute orbit beyond which only dwarf planets form (AU)
pub const ICE_GIANT_LIMIT_AU: f64 = 30.0;

/// Radial band an orbit falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitBand {
    Inner,
    Habitable,
    GasGiant,
    IceGiant,
    Frontier,
}

type BandRule = (fn(&HabitableZone, f64) -> bool, OrbitBand);

/// Ordered classification rules; the first matching predicate decides
const BAND_RULES: [BandRule; 4] = [
    (inside_inner_edge, OrbitBand::Inner),
    (inside_zone, OrbitBand::Habitable),
    (in_gas_giant_band, OrbitBand::GasGiant),
    (in_ice_giant_band, OrbitBand::IceGiant),
];

fn inside_inner_edge(zone: &HabitableZone, r: f64) -> bool {
    r < zone.inner_boundary_au
}

fn inside_zone(zone: &HabitableZone, r: f64) -> bool {
    zone.contains(r)
}

fn in_gas_giant_band(zone: &HabitableZone, r: f64) -> bool {
    r > zone.outer_boundary_au && r < zone.outer_boundary_au + GAS_GIANT_BAND_AU
}

fn in_ice_giant_band(zone: &HabitableZone, r: f64) -> bool {
    r >= zone.outer_boundary_au + ICE_GIANT_OFFSET_AU && r < ICE_GIANT_LIMIT_AU
}

impl OrbitBand {
    /// Band for `orbit_radius_au`; a pure function of its inputs
    pub fn of(zone: &HabitableZone, orbit_radius_au: f64) -> Self {
        BAND_RULES
            .iter()
            .find(|(matches, _)| matches(zone, orbit_radius_au))
            .map(|&(_, band)| band)
            .unwrap_or(OrbitBand::Frontier)
    }
}

/// Planet type for an orbit
///
/// Only the habitable band consumes a draw: a fair coin between Terrestrial
/// and OceanWorld.
///
/// # Example
/// ```
/// use planetary::classification::classify;
/// use planetary::PlanetType;
/// use stellar::{HabitableZone, RandomStream};
///
/// let zone = HabitableZone::from_luminosity(1.0);
/// let mut stream = RandomStream::new(42);
/// assert_eq!(classify(&zone, 0.3, &mut stream), PlanetType::LavaPlanet);
/// assert_eq!(classify(&zone, 5.0, &mut stream), PlanetType::GasGiant);
/// assert_eq!(classify(&zone, 40.0, &mut stream), PlanetType::DwarfPlanet);
/// ```
pub fn classify(
    zone: &HabitableZone,
    orbit_radius_au: f64,
    stream: &mut RandomStream,
) -> PlanetType {
    match OrbitBand::of(zone, orbit_radius_au) {
        OrbitBand::Inner => PlanetType::LavaPlanet,
        OrbitBand::Habitable => {
            if stream.coin_flip() {
                PlanetType::Terrestrial
            } else {
                PlanetType::OceanWorld
            }
        }
        OrbitBand::GasGiant => PlanetType::GasGiant,
        OrbitBand::IceGiant => PlanetType::IceGiant,
        OrbitBand::Frontier => PlanetType::DwarfPlanet,
    }
}
