//! # Application configuration — `recipebook.toml`
//!
//! A small TOML document stored in the same durable storage as the
//! records, under the well-known slot [`BookConfig::filename`]. It is read
//! once when the book is opened.
//!
//! ```toml
//! [storage]
//! key = "recipes"          # durable slot the record list lives under
//!
//! [seed]
//! sample_recipes = false   # populate starter recipes when the slot is empty
//! ```
//!
//! All sections default so that a missing or malformed config is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::persistence::{Persistence, StorageError};

/// Top-level configuration stored in `recipebook.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub seed: SeedSection,
}

/// Record-slot configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Durable slot the record list lives under.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    crate::book::DEFAULT_KEY.to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

/// Seeding configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedSection {
    /// Populate the starter recipes when the record slot starts empty.
    #[serde(default)]
    pub sample_recipes: bool,
}

impl BookConfig {
    /// The well-known slot for the config document.
    pub fn filename() -> &'static str {
        "recipebook.toml"
    }

    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read the config from its slot, falling back to the defaults.
    pub fn load(storage: &impl Persistence) -> Self {
        storage
            .load(Self::filename())
            .and_then(|raw| Self::from_toml(&raw).ok())
            .unwrap_or_default()
    }

    /// Write the config to its slot.
    pub fn save(&self, storage: &impl Persistence) -> Result<(), StorageError> {
        let raw = self.to_toml().unwrap_or_default();
        storage.save(Self::filename(), &raw)
    }
}
