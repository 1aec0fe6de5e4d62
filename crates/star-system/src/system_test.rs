use approx::assert_relative_eq;
use planetary::{AtmosphereVariant, DerivationError, Planet, PlanetType};
use stellar::{Star, solar_analog};

use crate::error::SystemError;
use crate::metadata::SystemMetadata;
use crate::system::GeneratedSystem;

fn make_test_planet(planet_type: PlanetType, orbit: f64) -> Planet {
    Planet {
        planet_type,
        orbit_radius_au: orbit,
        size_earth_radii: 1.0,
        moon_count: 0,
        axial_tilt_degrees: 5.0,
        atmosphere: AtmosphereVariant::NitrogenII,
        tidally_locked: false,
    }
}

fn make_test_system() -> GeneratedSystem {
    GeneratedSystem::new(
        solar_analog(),
        vec![
            make_test_planet(PlanetType::GasGiant, 5.2),
            make_test_planet(PlanetType::LavaPlanet, 0.4),
            make_test_planet(PlanetType::Terrestrial, 1.0),
            make_test_planet(PlanetType::DwarfPlanet, 39.5),
            make_test_planet(PlanetType::OceanWorld, 1.2),
        ],
        SystemMetadata::from_seed(1),
    )
}

#[test]
fn test_new_sorts_by_orbit() {
    let system = make_test_system();
    let orbits: Vec<f64> = system.planets.iter().map(|p| p.orbit_radius_au).collect();

    assert_eq!(orbits, vec![0.4, 1.0, 1.2, 5.2, 39.5]);
    assert_eq!(system.innermost_orbit(), Some(0.4));
    assert_eq!(system.outermost_orbit(), Some(39.5));
}

#[test]
fn test_habitable_zone_queries() {
    let system = make_test_system();
    let habitable: Vec<PlanetType> = system
        .habitable_zone_planets()
        .into_iter()
        .map(|p| p.planet_type)
        .collect();

    assert_eq!(habitable, vec![PlanetType::Terrestrial, PlanetType::OceanWorld]);
    assert!(system.has_habitable_zone_planet());
    assert_eq!(system.habitable_zone, system.parent_star.habitable_zone);
}

#[test]
fn test_planets_of_type() {
    let system = make_test_system();
    assert_eq!(system.planets_of_type(PlanetType::GasGiant).len(), 1);
    assert!(system.planets_of_type(PlanetType::IceGiant).is_empty());
}

#[test]
fn test_snow_line() {
    assert_relative_eq!(make_test_system().snow_line(), 2.7);
}

#[test]
fn test_empty_system_has_no_orbits() {
    let system = GeneratedSystem::new(solar_analog(), Vec::new(), SystemMetadata::unseeded());
    assert_eq!(system.innermost_orbit(), None);
    assert!(!system.has_habitable_zone_planet());
}

#[test]
fn test_derived_properties_via_system() {
    let system = make_test_system();
    let earth = &system.planets[1];

    let temperature = system.temperature(earth).unwrap();
    assert_relative_eq!(temperature.effective, 288.0, epsilon = 2.0);
    assert!(system.interior(earth).unwrap().radius_km() > 6000.0);
    assert!(system.atmosphere_detail(earth).unwrap().contains("Nitrogen II"));
}

#[test]
fn test_derivation_errors_convert() {
    let dark = Star {
        luminosity: -1.0,
        ..solar_analog()
    };
    let system = GeneratedSystem::new(
        dark,
        vec![make_test_planet(PlanetType::Terrestrial, 1.0)],
        SystemMetadata::unseeded(),
    );

    let err = system.temperature(&system.planets[0]).unwrap_err();
    assert!(matches!(
        err,
        SystemError::Derivation(DerivationError::NonPositiveLuminosity(_))
    ));
}
