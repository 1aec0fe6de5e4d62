//! Errors raised while configuring, generating or decoding star systems.

use std::fmt;

use planetary::DerivationError;

#[derive(Debug)]
pub enum SystemError {
    /// Requested planet count lies outside the supported range.
    PlanetCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },

    /// A configuration value failed validation.
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Configuration text is not valid TOML for the generator config.
    ConfigParse(toml::de::Error),

    /// Reading a configuration file failed.
    Io(std::io::Error),

    /// A snapshot could not be decoded. The detail is kept for logging; the
    /// message shown to callers is always "invalid data format".
    InvalidSnapshot(String),

    /// A derived-property calculation rejected its inputs.
    Derivation(DerivationError),
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::PlanetCountOutOfRange { count, min, max } => write!(
                f,
                "planet count {} is outside the supported range {}..={}",
                count, min, max
            ),
            SystemError::InvalidConfig { field, reason } => {
                write!(f, "invalid generator config: {} {}", field, reason)
            }
            SystemError::ConfigParse(e) => write!(f, "failed to parse generator config: {}", e),
            SystemError::Io(e) => write!(f, "failed to read generator config: {}", e),
            SystemError::InvalidSnapshot(_) => write!(f, "invalid data format"),
            SystemError::Derivation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SystemError::ConfigParse(e) => Some(e),
            SystemError::Io(e) => Some(e),
            SystemError::Derivation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DerivationError> for SystemError {
    fn from(e: DerivationError) -> Self {
        SystemError::Derivation(e)
    }
}

impl From<std::io::Error> for SystemError {
    fn from(e: std::io::Error) -> Self {
        SystemError::Io(e)
    }
}

impl From<toml::de::Error> for SystemError {
    fn from(e: toml::de::Error) -> Self {
        SystemError::ConfigParse(e)
    }
}
