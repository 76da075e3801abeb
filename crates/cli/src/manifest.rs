//! JSON load manifests.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use stowage_core::geometry::{Boundary, Geometry};
use stowage_core::solver::Config;
use stowage_d3::{Container, Item};
use thiserror::Error;

/// Errors that can occur when reading or writing manifests and sessions.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid manifest: {0}")]
    Invalid(#[from] stowage_core::Error),

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}

/// A container, the items to load into it and optional packer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Target container.
    pub container: Container,
    /// Items to load.
    pub items: Vec<Item>,
    /// Packer settings; defaults apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
}

impl Manifest {
    /// Creates a manifest with default packer settings.
    pub fn new(container: Container, items: Vec<Item>) -> Self {
        Self {
            container,
            items,
            config: None,
        }
    }

    /// Parses a manifest from a JSON file.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parses and validates a manifest from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks dimensions, weights and id uniqueness.
    pub fn validate(&self) -> Result<(), ManifestError> {
        self.container.validate()?;
        if let Some(config) = &self.config {
            config.validate()?;
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id().as_str()) {
                return Err(ManifestError::DuplicateId(item.id().clone()));
            }
        }
        Ok(())
    }

    /// Returns the packer settings, falling back to defaults.
    pub fn config(&self) -> Config {
        self.config.clone().unwrap_or_default()
    }

    /// A small van load used by `stowage sample`.
    pub fn sample() -> Self {
        let container = Container::new(4.2, 2.1, 2.3).with_max_weight(1200.0);
        let items = vec![
            Item::new("pallet-1", 1.2, 0.8, 1.0)
                .with_name("Euro pallet")
                .with_weight(180.0),
            Item::new("fridge", 0.7, 0.7, 1.8)
                .with_name("Fridge")
                .with_weight(75.0)
                .with_fragile(true),
            Item::new("wardrobe", 1.9, 0.6, 2.0)
                .with_name("Wardrobe")
                .with_weight(90.0),
            Item::new("box-1", 0.6, 0.4, 0.4)
                .with_name("Moving box")
                .with_weight(15.0),
            Item::new("box-2", 0.6, 0.4, 0.4)
                .with_name("Moving box")
                .with_weight(12.0),
            Item::new("mirror", 1.2, 0.1, 0.9)
                .with_name("Mirror")
                .with_weight(8.0)
                .with_fragile(true),
        ];
        Self::new(container, items)
    }
}
