//! Spectral classes and the per-class property bands
//!
//! Each class maps to disjoint numeric bands for size, mass and luminosity,
//! ordered coolest to hottest: M < K < G < F < A < B < O.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main sequence spectral class, coolest first
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    M,
    K,
    G,
    F,
    A,
    B,
    O,
}

/// Closed numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl SpectralClass {
    /// All classes in sampling order
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::M,
        SpectralClass::K,
        SpectralClass::G,
        SpectralClass::F,
        SpectralClass::A,
        SpectralClass::B,
        SpectralClass::O,
    ];

    /// Age band in Gyr
    ///
    /// Cool, low-mass stars live far longer, so their bands reach older ages.
    pub fn age_band(&self) -> Band {
        match self {
            Self::M => Band::new(1.0, 5000.0),
            Self::K => Band::new(1.0, 100.0),
            Self::G => Band::new(1.0, 10.0),
            Self::F => Band::new(1.0, 7.0),
            Self::A => Band::new(0.1, 3.0),
            Self::B => Band::new(0.01, 0.5),
            Self::O => Band::new(0.001, 0.1),
        }
    }

    /// Radius band in solar radii
    pub fn size_band(&self) -> Band {
        match self {
            Self::M => Band::new(0.1, 0.7),
            Self::K => Band::new(0.7, 0.96),
            Self::G => Band::new(0.96, 1.15),
            Self::F => Band::new(1.15, 1.4),
            Self::A => Band::new(1.4, 1.8),
            Self::B => Band::new(1.8, 6.6),
            Self::O => Band::new(6.6, 12.0),
        }
    }

    /// Mass band in solar masses
    pub fn mass_band(&self) -> Band {
        match self {
            Self::M => Band::new(0.08, 0.45),
            Self::K => Band::new(0.45, 0.8),
            Self::G => Band::new(0.8, 1.04),
            Self::F => Band::new(1.04, 1.4),
            Self::A => Band::new(1.4, 2.1),
            Self::B => Band::new(2.1, 16.0),
            Self::O => Band::new(16.0, 90.0),
        }
    }

    /// Luminosity per solar radius (L☉ / R☉)
    ///
    /// A piecewise stand-in for the mass-luminosity relation that keeps
    /// classes visually distinct.
    pub fn luminosity_multiplier(&self) -> f64 {
        match self {
            Self::M => 0.08,
            Self::K => 0.6,
            Self::G => 1.0,
            Self::F => 1.5,
            Self::A => 5.0,
            Self::B => 25.0,
            Self::O => 50.0,
        }
    }

    /// Representative photospheric temperature in Kelvin
    pub fn effective_temperature(&self) -> f64 {
        match self {
            Self::M => 3200.0,
            Self::K => 4500.0,
            Self::G => 5800.0,
            Self::F => 6800.0,
            Self::A => 8500.0,
            Self::B => 20000.0,
            Self::O => 35000.0,
        }
    }

    /// Single-letter designation
    pub fn letter(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::K => "K",
            Self::G => "G",
            Self::F => "F",
            Self::A => "A",
            Self::B => "B",
            Self::O => "O",
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Returned when a string names no known spectral class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpectralClass(pub String);

impl fmt::Display for UnknownSpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown spectral class '{}'", self.0)
    }
}

impl std::error::Error for UnknownSpectralClass {}

impl FromStr for SpectralClass {
    type Err = UnknownSpectralClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.letter() == s)
            .ok_or_else(|| UnknownSpectralClass(s.to_string()))
    }
}
