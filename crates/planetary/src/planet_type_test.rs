use crate::planet_type::{PlanetType, UnknownPlanetType};

#[test]
fn test_names_parse_back() {
    for planet_type in PlanetType::ALL {
        assert_eq!(planet_type.name().parse::<PlanetType>(), Ok(planet_type));
    }
}

#[test]
fn test_unknown_name_is_rejected() {
    assert_eq!(
        "HotJupiter".parse::<PlanetType>(),
        Err(UnknownPlanetType("HotJupiter".to_string()))
    );
    // Display names are not identifiers
    assert!("Gas Giant".parse::<PlanetType>().is_err());
}

#[test]
fn test_habitability() {
    assert!(PlanetType::Terrestrial.potentially_habitable());
    assert!(PlanetType::OceanWorld.potentially_habitable());
    assert!(!PlanetType::LavaPlanet.potentially_habitable());
    assert!(!PlanetType::GasGiant.potentially_habitable());
}

#[test]
fn test_giants() {
    let giants: Vec<_> = PlanetType::ALL.into_iter().filter(|t| t.is_giant()).collect();
    assert_eq!(giants, vec![PlanetType::GasGiant, PlanetType::IceGiant]);
    assert!(giants.iter().all(|t| !t.has_solid_surface()));
}

#[test]
fn test_albedo_is_a_fraction() {
    for planet_type in PlanetType::ALL {
        let albedo = planet_type.albedo();
        assert!((0.0..1.0).contains(&albedo), "{}: {}", planet_type, albedo);
    }
}

#[test]
fn test_serde_uses_identifiers() {
    let json = serde_json::to_string(&PlanetType::OceanWorld).unwrap();
    assert_eq!(json, "\"OceanWorld\"");
}
