use approx::assert_relative_eq;

use crate::composition::Composition;
use crate::planet_type::PlanetType;

#[test]
fn test_fractions_sum_to_one() {
    for planet_type in PlanetType::ALL {
        let comp = Composition::for_type(planet_type);
        let sum = comp.iron + comp.silicate + comp.water + comp.h_he_gas;

        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_type_character() {
    assert!(Composition::for_type(PlanetType::LavaPlanet).is_rocky());
    assert!(Composition::for_type(PlanetType::Terrestrial).is_rocky());
    assert!(Composition::for_type(PlanetType::OceanWorld).is_water_rich());
    assert!(Composition::for_type(PlanetType::IceGiant).is_water_rich());
    assert!(Composition::for_type(PlanetType::GasGiant).is_gas_dominated());
    assert!(!Composition::for_type(PlanetType::DwarfPlanet).is_gas_dominated());
}

#[test]
fn test_new_normalizes() {
    let comp = Composition::new(1.0, 3.0, 0.0, 0.0);
    assert_relative_eq!(comp.iron, 0.25);
    assert_relative_eq!(comp.silicate, 0.75);
}

#[test]
fn test_empty_mix_falls_back_to_terrestrial() {
    assert_eq!(
        Composition::new(0.0, 0.0, 0.0, 0.0),
        Composition::for_type(PlanetType::Terrestrial)
    );
}
