//! Parent star generation
//!
//! A star is drawn class first, then age, size and mass from the class bands.
//! Luminosity is never sampled: it follows from class and size, so a star
//! restored from its size reproduces the stored luminosity exactly.

use serde::{Deserialize, Serialize};

use crate::habitable_zone::HabitableZone;
use crate::random::RandomStream;
use crate::spectral::SpectralClass;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;

/// Solar effective temperature in Kelvin
pub const SOLAR_TEMPERATURE: f64 = 5778.0;

/// Parent star of a generated system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub spectral_class: SpectralClass,
    /// Age in Gyr; `None` when restored from a snapshot, which does not carry it
    pub age_gyr: Option<f64>,
    /// Radius in solar radii (R☉)
    pub size_solar_radii: f64,
    /// Mass in solar masses (M☉)
    pub mass_solar_masses: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub habitable_zone: HabitableZone,
}

impl Star {
    /// Draw a star from the stream
    ///
    /// Draw order: class, age, size, mass.
    ///
    /// # Example
    /// ```
    /// use stellar::{RandomStream, Star};
    ///
    /// let mut stream = RandomStream::new(42);
    /// let star = Star::generate(&mut stream);
    /// assert!(star.spectral_class.size_band().contains(star.size_solar_radii));
    /// assert_eq!(
    ///     star.luminosity,
    ///     Star::luminosity_for(star.spectral_class, star.size_solar_radii)
    /// );
    /// ```
    pub fn generate(stream: &mut RandomStream) -> Self {
        let spectral_class = SpectralClass::ALL[stream.index(SpectralClass::ALL.len())];

        let age = spectral_class.age_band();
        let age_gyr = stream.range(age.min, age.max);

        let size = spectral_class.size_band();
        let size_solar_radii = stream.range(size.min, size.max);

        let mass = spectral_class.mass_band();
        let mass_solar_masses = stream.range(mass.min, mass.max);

        let star = Self::assemble(
            spectral_class,
            Some(age_gyr),
            size_solar_radii,
            mass_solar_masses,
        );

        log::debug!(
            "star: class {} age {:.3} Gyr size {:.3} R☉ mass {:.3} M☉ L {:.4} L☉",
            star.spectral_class,
            age_gyr,
            star.size_solar_radii,
            star.mass_solar_masses,
            star.luminosity
        );

        star
    }

    /// Rebuild a star from persisted fields, recomputing luminosity and zone
    pub fn restore(
        spectral_class: SpectralClass,
        size_solar_radii: f64,
        mass_solar_masses: f64,
    ) -> Self {
        Self::assemble(spectral_class, None, size_solar_radii, mass_solar_masses)
    }

    fn assemble(
        spectral_class: SpectralClass,
        age_gyr: Option<f64>,
        size_solar_radii: f64,
        mass_solar_masses: f64,
    ) -> Self {
        let luminosity = Self::luminosity_for(spectral_class, size_solar_radii);
        Self {
            spectral_class,
            age_gyr,
            size_solar_radii,
            mass_solar_masses,
            luminosity,
            habitable_zone: HabitableZone::from_luminosity(luminosity),
        }
    }

    /// Luminosity of a star of `class` with radius `size_solar_radii`
    pub fn luminosity_for(class: SpectralClass, size_solar_radii: f64) -> f64 {
        size_solar_radii * class.luminosity_multiplier()
    }

    /// Photospheric temperature from the class table (K)
    pub fn effective_temperature(&self) -> f64 {
        self.spectral_class.effective_temperature()
    }

    /// Radius consistent with luminosity and effective temperature (R☉)
    ///
    /// Stefan-Boltzmann: R = sqrt(L) × (T☉ / T)². This differs from
    /// `size_solar_radii`, which is drawn for presentation.
    pub fn photospheric_radius(&self) -> f64 {
        self.luminosity.sqrt() * (SOLAR_TEMPERATURE / self.effective_temperature()).powi(2)
    }

    /// Photospheric radius in AU
    pub fn photospheric_radius_au(&self) -> f64 {
        self.photospheric_radius() * SOLAR_RADIUS_AU
    }
}

/// Draw a star, reseeding the stream first when a seed is supplied
pub fn generate_star(seed: Option<u32>, stream: &mut RandomStream) -> Star {
    if let Some(seed) = seed {
        stream.seed(seed);
    }
    Star::generate(stream)
}

/// A G-class star with solar size, mass and luminosity
pub fn solar_analog() -> Star {
    Star {
        spectral_class: SpectralClass::G,
        age_gyr: Some(4.6),
        size_solar_radii: 1.0,
        mass_solar_masses: 1.0,
        luminosity: 1.0,
        habitable_zone: HabitableZone::from_luminosity(1.0),
    }
}
