//! Planet record and per-slot sampling
//!
//! A planet is sampled in a fixed draw order from the generation stream:
//! classification, size, moon count, axial tilt, atmosphere. Orbital period
//! and tidal locking follow from the orbit and the host star and are
//! refreshed whenever the planet moves.

use serde::{Deserialize, Serialize};
use stellar::{RandomStream, Star};

use crate::atmosphere::{AtmosphereVariant, select_atmosphere};
use crate::classification::classify;
use crate::composition::Composition;
use crate::planet_type::PlanetType;
use crate::properties::{sample_axial_tilt, sample_moon_count, sample_size};
use crate::variation::PlanetaryVariation;

const DAYS_PER_YEAR: f64 = 365.25;

/// A generated planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub planet_type: PlanetType,
    /// Orbit radius in AU
    pub orbit_radius_au: f64,
    /// Radius in Earth radii
    pub size_earth_radii: f64,
    pub moon_count: u32,
    pub axial_tilt_degrees: f64,
    pub atmosphere: AtmosphereVariant,
    pub tidally_locked: bool,
}

impl Planet {
    /// Sample a planet for an orbit slot
    ///
    /// Consumes draws from `stream` in the order: type (habitable band only),
    /// size, moons, tilt, atmosphere.
    pub fn sample(star: &Star, orbit_radius_au: f64, stream: &mut RandomStream) -> Self {
        let zone = &star.habitable_zone;
        let planet_type = classify(zone, orbit_radius_au, stream);
        let size_earth_radii = sample_size(planet_type, stream);
        let moon_count = sample_moon_count(planet_type, stream);
        let axial_tilt_degrees = sample_axial_tilt(planet_type, stream);
        let atmosphere = select_atmosphere(
            planet_type,
            zone.contains(orbit_radius_au),
            stream.next_f64(),
        );

        let planet = Self {
            planet_type,
            orbit_radius_au,
            size_earth_radii,
            moon_count,
            axial_tilt_degrees,
            atmosphere,
            tidally_locked: is_tidally_locked(
                orbital_period_days(orbit_radius_au, star.mass_solar_masses),
                star.mass_solar_masses,
            ),
        };

        log::debug!(
            "Sampled {} at {:.3} AU: {:.2} R⊕, {} moons, tilt {:.1}°, {}",
            planet.planet_type,
            planet.orbit_radius_au,
            planet.size_earth_radii,
            planet.moon_count,
            planet.axial_tilt_degrees,
            planet.atmosphere
        );

        planet
    }

    /// Rebuild a planet from persisted fields
    ///
    /// The atmosphere is not persisted; it is re-picked from the type's
    /// candidates with a roll keyed on the other fields, so the same record
    /// always restores the same atmosphere.
    pub fn restore(
        star: &Star,
        planet_type: PlanetType,
        orbit_radius_au: f64,
        size_earth_radii: f64,
        moon_count: u32,
        axial_tilt_degrees: f64,
        tidally_locked: bool,
    ) -> Self {
        let roll = PlanetaryVariation::from_planet(
            planet_type,
            orbit_radius_au,
            size_earth_radii,
            axial_tilt_degrees,
            moon_count,
        )
        .unit();
        let in_zone = star.habitable_zone.contains(orbit_radius_au);

        Self {
            planet_type,
            orbit_radius_au,
            size_earth_radii,
            moon_count,
            axial_tilt_degrees,
            atmosphere: select_atmosphere(planet_type, in_zone, roll),
            tidally_locked,
        }
    }

    /// Move the planet to a new orbit, keeping its sampled properties
    pub fn relocate(&mut self, star: &Star, orbit_radius_au: f64) {
        self.orbit_radius_au = orbit_radius_au;
        self.refresh_orbit_derived(star);
    }

    /// Recompute the values that depend on orbit and host star
    pub fn refresh_orbit_derived(&mut self, star: &Star) {
        self.tidally_locked = is_tidally_locked(
            self.orbital_period_days(star.mass_solar_masses),
            star.mass_solar_masses,
        );
    }

    /// Orbital period in years (Kepler's third law)
    pub fn orbital_period_years(&self, stellar_mass_solar: f64) -> f64 {
        orbital_period_years(self.orbit_radius_au, stellar_mass_solar)
    }

    /// Orbital period in days
    pub fn orbital_period_days(&self, stellar_mass_solar: f64) -> f64 {
        orbital_period_days(self.orbit_radius_au, stellar_mass_solar)
    }

    /// Whether the planet sits inside its star's habitable zone
    pub fn in_habitable_zone(&self, star: &Star) -> bool {
        star.habitable_zone.contains(self.orbit_radius_au)
    }

    /// Bulk composition for this planet's type
    pub fn composition(&self) -> Composition {
        Composition::for_type(self.planet_type)
    }

    /// Cosmetic variation source keyed on this planet
    pub fn variation(&self) -> PlanetaryVariation {
        PlanetaryVariation::from_planet(
            self.planet_type,
            self.orbit_radius_au,
            self.size_earth_radii,
            self.axial_tilt_degrees,
            self.moon_count,
        )
    }
}

/// P² = a³ / M with P in years, a in AU, M in solar masses
pub fn orbital_period_years(orbit_radius_au: f64, stellar_mass_solar: f64) -> f64 {
    (orbit_radius_au.powi(3) / stellar_mass_solar).sqrt()
}

pub fn orbital_period_days(orbit_radius_au: f64, stellar_mass_solar: f64) -> f64 {
    orbital_period_years(orbit_radius_au, stellar_mass_solar) * DAYS_PER_YEAR
}

/// Whether a planet with this period is tidally locked to its star
///
/// Lighter stars have habitable zones close enough that planets lock quickly,
/// so the threshold period is larger for M dwarfs:
/// - late M (< 0.20 M☉): 20 days
/// - mid M (< 0.35 M☉): 30 days
/// - early M (< 0.50 M☉): 40 days
/// - K (< 0.70 M☉): 15 days
/// - G and hotter: 5 days
pub fn is_tidally_locked(orbital_period_days: f64, stellar_mass_solar: f64) -> bool {
    let threshold_days = match stellar_mass_solar {
        m if m < 0.20 => 20.0,
        m if m < 0.35 => 30.0,
        m if m < 0.50 => 40.0,
        m if m < 0.70 => 15.0,
        _ => 5.0,
    };
    orbital_period_days < threshold_days
}
