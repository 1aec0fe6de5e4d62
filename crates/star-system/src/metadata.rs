//! Seed provenance and catalog designation for generated systems.

use serde::{Deserialize, Serialize};

/// Where a system came from and what to call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    /// Stream seed the system was generated from; `None` when restored
    /// from a snapshot or generated from a stream of unknown origin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Optional proper name for notable systems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SystemMetadata {
    pub fn from_seed(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            name: None,
        }
    }

    pub fn unseeded() -> Self {
        Self {
            seed: None,
            name: None,
        }
    }

    /// Short catalog designation derived from the seed
    ///
    /// Format: two uppercase letters and four digits (e.g. "KV-4729").
    /// The same seed always produces the same designation; unseeded systems
    /// share "XX-0000".
    ///
    /// # Example
    /// ```
    /// use star_system::SystemMetadata;
    ///
    /// let name = SystemMetadata::from_seed(42).catalog_name();
    /// assert_eq!(name.len(), 7);
    /// assert_eq!(name, SystemMetadata::from_seed(42).catalog_name());
    /// ```
    pub fn catalog_name(&self) -> String {
        let Some(seed) = self.seed else {
            return "XX-0000".to_string();
        };
        // Scramble so consecutive seeds get unrelated designations
        let bytes = seed.wrapping_mul(0x9E37_79B1).rotate_left(13).to_le_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }

    /// Proper name if set, otherwise the catalog name
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.catalog_name())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
