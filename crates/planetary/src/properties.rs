//! Per-type physical property bands and their samplers
//!
//! | Type        | Size (R⊕)  | Moons   | Axial tilt (°) |
//! |-------------|------------|---------|----------------|
//! | LavaPlanet  | 0.3–1.0    | 0–2     | 0–40           |
//! | Terrestrial | 0.5–1.5    | 0–3     | 0–25           |
//! | OceanWorld  | 0.8–2.0    | 0–2     | 10–30          |
//! | GasGiant    | 6–15       | 1–80    | 15–90          |
//! | IceGiant    | 5–14       | 1–50    | 10–90          |
//! | DwarfPlanet | 0.1–0.3    | 0–5     | 0–30           |

use stellar::{Band, RandomStream};

use crate::planet_type::PlanetType;

/// Radius band in Earth radii
pub fn size_band(planet_type: PlanetType) -> Band {
    match planet_type {
        PlanetType::LavaPlanet => Band::new(0.3, 1.0),
        PlanetType::Terrestrial => Band::new(0.5, 1.5),
        PlanetType::OceanWorld => Band::new(0.8, 2.0),
        PlanetType::GasGiant => Band::new(6.0, 15.0),
        PlanetType::IceGiant => Band::new(5.0, 14.0),
        PlanetType::DwarfPlanet => Band::new(0.1, 0.3),
    }
}

/// Inclusive moon count range
pub fn moon_range(planet_type: PlanetType) -> (u32, u32) {
    match planet_type {
        PlanetType::LavaPlanet => (0, 2),
        PlanetType::Terrestrial => (0, 3),
        PlanetType::OceanWorld => (0, 2),
        PlanetType::GasGiant => (1, 80),
        PlanetType::IceGiant => (1, 50),
        PlanetType::DwarfPlanet => (0, 5),
    }
}

/// Axial tilt band in degrees
pub fn tilt_band(planet_type: PlanetType) -> Band {
    match planet_type {
        PlanetType::Terrestrial => Band::new(0.0, 25.0),
        PlanetType::OceanWorld => Band::new(10.0, 30.0),
        PlanetType::LavaPlanet => Band::new(0.0, 40.0),
        PlanetType::GasGiant => Band::new(15.0, 90.0),
        PlanetType::IceGiant => Band::new(10.0, 90.0),
        PlanetType::DwarfPlanet => Band::new(0.0, 30.0),
    }
}

/// Radius in Earth radii
pub fn sample_size(planet_type: PlanetType, stream: &mut RandomStream) -> f64 {
    let band = size_band(planet_type);
    stream.range(band.min, band.max)
}

/// Number of moons
pub fn sample_moon_count(planet_type: PlanetType, stream: &mut RandomStream) -> u32 {
    let (min, max) = moon_range(planet_type);
    stream.int_range(i64::from(min), i64::from(max)) as u32
}

/// Axial tilt in degrees
pub fn sample_axial_tilt(planet_type: PlanetType, stream: &mut RandomStream) -> f64 {
    let band = tilt_band(planet_type);
    stream.range(band.min, band.max)
}
