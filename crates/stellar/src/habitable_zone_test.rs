use approx::assert_relative_eq;

use crate::habitable_zone::{HabitableZone, is_in_habitable_zone, snow_line};

#[test]
fn test_habitable_zone_sun_like() {
    let hz = HabitableZone::from_luminosity(1.0);

    assert_relative_eq!(hz.inner_boundary_au, (1.0_f64 / 1.1).sqrt());
    assert_relative_eq!(hz.outer_boundary_au, (1.0_f64 / 0.53).sqrt());
    assert!((hz.inner_boundary_au - 0.953).abs() < 1e-3);
    assert!((hz.outer_boundary_au - 1.374).abs() < 1e-3);
}

#[test]
fn test_inner_below_outer_across_luminosities() {
    let mut luminosity = 1e-4;
    while luminosity < 1e4 {
        let hz = HabitableZone::from_luminosity(luminosity);
        assert!(hz.inner_boundary_au > 0.0);
        assert!(
            hz.inner_boundary_au < hz.outer_boundary_au,
            "inner {} should be below outer {} at L = {}",
            hz.inner_boundary_au,
            hz.outer_boundary_au,
            luminosity
        );
        luminosity *= 1.7;
    }
}

#[test]
fn test_m_dwarf_zone_is_close_in() {
    let hz = HabitableZone::from_luminosity(0.01);
    assert!(hz.inner_boundary_au < 0.15);
    assert!(hz.outer_boundary_au < 0.3);
}

#[test]
fn test_boundaries_are_inclusive() {
    let hz = HabitableZone::from_luminosity(2.0);

    assert!(is_in_habitable_zone(hz.inner_boundary_au, &hz));
    assert!(is_in_habitable_zone(hz.outer_boundary_au, &hz));
    assert!(is_in_habitable_zone(hz.midpoint(), &hz));
    assert!(!is_in_habitable_zone(hz.inner_boundary_au * 0.999, &hz));
    assert!(!is_in_habitable_zone(hz.outer_boundary_au * 1.001, &hz));
}

#[test]
fn test_midpoint_and_width() {
    let hz = HabitableZone::from_luminosity(1.0);
    assert_relative_eq!(
        hz.midpoint(),
        (hz.inner_boundary_au + hz.outer_boundary_au) / 2.0
    );
    assert!(hz.width() > 0.0);
}

#[test]
fn test_snow_line() {
    let sl = snow_line(1.0);
    assert!(sl > 2.0 && sl < 4.0, "Snow line {} should be 2-4 AU", sl);

    let sl_m = snow_line(0.01);
    assert!(sl_m < 0.5, "M dwarf snow line {} should be < 0.5 AU", sl_m);
}
