use crate::config::GeneratorConfig;
use crate::error::SystemError;

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();

    assert_eq!(config.min_planets, 3);
    assert_eq!(config.max_planets, 18);
    assert_eq!(config.min_orbit_au, 0.2);
    assert_eq!(config.max_orbit_floor_au, 50.0);
    assert_eq!(config.max_orbit_margin_au, 20.0);
    assert!(!config.reclassify_relocated);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = GeneratorConfig::from_toml_str("min_planets = 5\nreclassify_relocated = true\n")
        .unwrap();

    assert_eq!(config.min_planets, 5);
    assert!(config.reclassify_relocated);
    assert_eq!(config.max_planets, 18);
    assert_eq!(config.min_orbit_au, 0.2);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(GeneratorConfig::from_toml_str("").unwrap(), GeneratorConfig::default());
}

#[test]
fn test_out_of_range_planet_bounds_rejected() {
    for toml in ["min_planets = 2", "max_planets = 19", "min_planets = 10\nmax_planets = 4"] {
        let result = GeneratorConfig::from_toml_str(toml);
        assert!(
            matches!(result, Err(SystemError::InvalidConfig { .. })),
            "{}: {:?}",
            toml,
            result
        );
    }
}

#[test]
fn test_non_positive_orbits_rejected() {
    let config = GeneratorConfig {
        min_orbit_au: 0.0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(SystemError::InvalidConfig { field: "min_orbit_au", .. })
    ));

    let config = GeneratorConfig {
        max_orbit_margin_au: f64::NAN,
        ..GeneratorConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_malformed_toml() {
    let result = GeneratorConfig::from_toml_str("min_planets = \"many\"");
    assert!(matches!(result, Err(SystemError::ConfigParse(_))));
}

#[test]
fn test_missing_file() {
    let result = GeneratorConfig::load("/nonexistent/generator.toml");
    assert!(matches!(result, Err(SystemError::Io(_))));
}
