//! Saved packing sessions.

use crate::manifest::{Manifest, ManifestError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stowage_core::solver::Config;
use stowage_core::{Geometry, PackingResult, PackingSummary};
use stowage_d3::{Container, Item, Packer3D};

/// A container, its items and the result of packing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingSession {
    /// Target container.
    pub container: Container,
    /// Items handed to the packer, in manifest order.
    pub items: Vec<Item>,
    /// Settings the packer ran with.
    pub config: Config,
    /// Packing outcome.
    pub result: PackingResult,
}

impl PackingSession {
    /// Packs a manifest's items with `config`.
    pub fn run(manifest: Manifest, config: Config) -> Self {
        let packer = Packer3D::new(config.clone());
        let result = packer.pack(Some(&manifest.container), &manifest.items);
        log::info!(
            "packed {}/{} items, efficiency {}",
            result.placed_count(),
            manifest.items.len(),
            result.efficiency_percent()
        );

        Self {
            container: manifest.container,
            items: manifest.items,
            config,
            result,
        }
    }

    /// Returns summary statistics of the result.
    pub fn summary(&self) -> PackingSummary {
        PackingSummary::from(&self.result)
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Saves the session to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Loads a session from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
