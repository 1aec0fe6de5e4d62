use approx::assert_relative_eq;
use stellar::{SpectralClass, Star, solar_analog};

use crate::atmosphere::AtmosphereVariant;
use crate::error::DerivationError;
use crate::planet::Planet;
use crate::planet_type::PlanetType;
use crate::temperature::{
    KELVIN_OFFSET, Temperature, TemperatureClass, displayed_surface_temperature_celsius,
    equilibrium_temperature, internal_heating, surface_temperature_celsius,
    surface_temperature_kelvin,
};
use crate::variation::SURFACE_JITTER_SIGMA_K;

fn make_test_planet(planet_type: PlanetType, orbit: f64, atmosphere: AtmosphereVariant) -> Planet {
    Planet {
        planet_type,
        orbit_radius_au: orbit,
        size_earth_radii: 1.0,
        moon_count: 0,
        axial_tilt_degrees: 10.0,
        atmosphere,
        tidally_locked: false,
    }
}

fn earth() -> Planet {
    make_test_planet(PlanetType::Terrestrial, 1.0, AtmosphereVariant::NitrogenII)
}

#[test]
fn test_earth_temperatures() {
    let temperature = Temperature::for_planet(&solar_analog(), &earth()).unwrap();

    assert_relative_eq!(temperature.equilibrium, 255.0, epsilon = 2.0);
    assert_relative_eq!(temperature.effective, 288.0, epsilon = 2.0);
    assert_eq!(temperature.classification(), TemperatureClass::Temperate);
}

#[test]
fn test_celsius_is_offset_kelvin() {
    let sun = solar_analog();
    let kelvin = surface_temperature_kelvin(&sun, &earth()).unwrap();
    let celsius = surface_temperature_celsius(&sun, &earth()).unwrap();

    assert_relative_eq!(celsius, kelvin - KELVIN_OFFSET);
    assert_relative_eq!(celsius, 15.0, epsilon = 2.0);
}

#[test]
fn test_equilibrium_falls_with_distance() {
    let sun = solar_analog();
    let near = make_test_planet(PlanetType::Terrestrial, 0.5, AtmosphereVariant::Trace);
    let far = make_test_planet(PlanetType::Terrestrial, 2.0, AtmosphereVariant::Trace);

    let t_near = equilibrium_temperature(&sun, &near).unwrap();
    let t_far = equilibrium_temperature(&sun, &far).unwrap();

    // T ∝ d^-1/2: four times the distance halves the temperature
    assert_relative_eq!(t_near / t_far, 2.0, epsilon = 1e-9);
}

#[test]
fn test_hotter_star_heats_more() {
    let g = solar_analog();
    let b = Star::restore(SpectralClass::B, 4.0, 8.0);
    let planet = earth();

    let hot = equilibrium_temperature(&b, &planet).unwrap();
    let mild = equilibrium_temperature(&g, &planet).unwrap();

    assert!(hot > mild);
}

#[test]
fn test_greenhouse_offsets_follow_family() {
    let sun = solar_analog();
    let bare = make_test_planet(PlanetType::Terrestrial, 1.0, AtmosphereVariant::Trace);
    let venus_like =
        make_test_planet(PlanetType::Terrestrial, 1.0, AtmosphereVariant::CarbonDioxideII);

    let t_bare = surface_temperature_kelvin(&sun, &bare).unwrap();
    let t_co2 = surface_temperature_kelvin(&sun, &venus_like).unwrap();

    assert_relative_eq!(t_co2 - t_bare, 60.0, epsilon = 1e-9);
}

#[test]
fn test_giants_carry_internal_heat() {
    let sun = solar_analog();
    let jupiter = Planet {
        size_earth_radii: 11.2,
        ..make_test_planet(PlanetType::GasGiant, 5.2, AtmosphereVariant::HydrogenHeliumI)
    };
    let temperature = Temperature::for_planet(&sun, &jupiter).unwrap();

    assert_relative_eq!(temperature.effective - temperature.equilibrium, 100.0, epsilon = 1e-9);
    assert!(
        internal_heating(PlanetType::GasGiant, 15.0) > internal_heating(PlanetType::GasGiant, 6.0)
    );
    assert_eq!(internal_heating(PlanetType::DwarfPlanet, 0.2), 0.0);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let sun = solar_analog();
    let shrunk = Planet {
        size_earth_radii: -1.0,
        ..earth()
    };
    let dark = Star {
        luminosity: f64::NAN,
        ..solar_analog()
    };

    assert_eq!(
        surface_temperature_celsius(&sun, &shrunk),
        Err(DerivationError::InvalidPlanetSize(-1.0))
    );
    assert!(matches!(
        surface_temperature_celsius(&dark, &earth()),
        Err(DerivationError::NonPositiveLuminosity(_))
    ));
}

#[test]
fn test_displayed_temperature_jitter_is_small_and_stable() {
    let sun = solar_analog();
    let base = surface_temperature_celsius(&sun, &earth()).unwrap();
    let shown = displayed_surface_temperature_celsius(&sun, &earth()).unwrap();

    assert!((shown - base).abs() <= 3.0 * SURFACE_JITTER_SIGMA_K);
    assert_eq!(shown, displayed_surface_temperature_celsius(&sun, &earth()).unwrap());
}

#[test]
fn test_temperature_class_boundaries() {
    assert_eq!(TemperatureClass::classify(149.9), TemperatureClass::Cold);
    assert_eq!(TemperatureClass::classify(150.0), TemperatureClass::Temperate);
    assert_eq!(TemperatureClass::classify(400.0), TemperatureClass::Warm);
    assert_eq!(TemperatureClass::classify(1000.0), TemperatureClass::Hot);
    assert_eq!(TemperatureClass::classify(2500.0), TemperatureClass::UltraHot);
}
