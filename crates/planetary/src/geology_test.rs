use std::f64::consts::PI;

use approx::assert_relative_eq;
use stellar::{SpectralClass, Star, solar_analog};

use crate::atmosphere::AtmosphereVariant;
use crate::error::DerivationError;
use crate::geology::{EARTH_RADIUS_KM, LayerMaterial, geological_interior};
use crate::planet::Planet;
use crate::planet_type::PlanetType;

fn make_test_planet(planet_type: PlanetType, orbit: f64, size: f64) -> Planet {
    Planet {
        planet_type,
        orbit_radius_au: orbit,
        size_earth_radii: size,
        moon_count: 0,
        axial_tilt_degrees: 0.0,
        atmosphere: AtmosphereVariant::Trace,
        tidally_locked: false,
    }
}

#[test]
fn test_layers_fill_the_planet() {
    let sun = solar_analog();

    for planet_type in PlanetType::ALL {
        let planet = make_test_planet(planet_type, 1.0, 1.3);
        let interior = geological_interior(&sun, &planet).unwrap();
        let radius = 1.3 * EARTH_RADIUS_KM;

        assert_relative_eq!(interior.radius_km(), radius, max_relative = 1e-9);
        assert_relative_eq!(
            interior.volume_km3(),
            4.0 / 3.0 * PI * radius.powi(3),
            max_relative = 1e-9
        );
        for layer in [&interior.core, &interior.mantle, &interior.crust] {
            assert!(layer.thickness_km > 0.0, "{}: {:?}", planet_type, layer);
            assert!(layer.volume_km3 > 0.0, "{}: {:?}", planet_type, layer);
        }
    }
}

#[test]
fn test_earth_has_thin_granite_crust_over_iron_core() {
    let interior =
        geological_interior(&solar_analog(), &make_test_planet(PlanetType::Terrestrial, 1.0, 1.0))
            .unwrap();

    assert_eq!(interior.core.material, LayerMaterial::Iron);
    assert_eq!(interior.crust.material, LayerMaterial::Granite);
    assert!(interior.crust.thickness_km < 50.0);
    assert!((0.4..0.6).contains(&interior.core_radius_fraction()));
}

#[test]
fn test_core_shrinks_with_distance() {
    let sun = solar_analog();
    let near = make_test_planet(PlanetType::Terrestrial, 0.5, 1.0);
    let far = make_test_planet(PlanetType::Terrestrial, 5.0, 1.0);

    let near = geological_interior(&sun, &near).unwrap();
    let far = geological_interior(&sun, &far).unwrap();

    assert!(near.core_radius_fraction() > far.core_radius_fraction());
}

#[test]
fn test_heavier_star_enriches_core() {
    let planet = make_test_planet(PlanetType::Terrestrial, 1.0, 1.0);
    let m_dwarf = Star::restore(SpectralClass::M, 0.3, 0.1);
    let a_star = Star::restore(SpectralClass::A, 1.6, 2.0);

    let light = geological_interior(&m_dwarf, &planet).unwrap();
    let heavy = geological_interior(&a_star, &planet).unwrap();

    assert!(heavy.core_radius_fraction() > light.core_radius_fraction());
}

#[test]
fn test_irradiation_thins_crust() {
    let planet = make_test_planet(PlanetType::LavaPlanet, 0.2, 0.8);
    let small = Star::restore(SpectralClass::G, 1.0, 1.0);
    let large = Star::restore(SpectralClass::B, 6.0, 10.0);

    let cool = geological_interior(&small, &planet).unwrap();
    let hot = geological_interior(&large, &planet).unwrap();

    assert!(hot.crust.thickness_km < cool.crust.thickness_km);
}

#[test]
fn test_giants_report_gaseous_envelope() {
    let sun = solar_analog();
    for planet_type in [PlanetType::GasGiant, PlanetType::IceGiant] {
        let planet = make_test_planet(planet_type, 8.0, 10.0);
        let interior = geological_interior(&sun, &planet).unwrap();

        assert_eq!(interior.crust.material, LayerMaterial::GaseousEnvelope);
        assert_relative_eq!(
            interior.crust.thickness_km,
            0.2 * 10.0 * EARTH_RADIUS_KM,
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_invalid_orbit_is_rejected() {
    let planet = make_test_planet(PlanetType::Terrestrial, -2.0, 1.0);

    assert_eq!(
        geological_interior(&solar_analog(), &planet),
        Err(DerivationError::InvalidOrbitRadius(-2.0))
    );
}
