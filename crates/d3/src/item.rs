//! Cargo item types.

use crate::orientation::{Orientation, OrientedBox};
use stowage_core::geometry::{Geometry, ItemId};
use stowage_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box-shaped item to be loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    id: ItemId,

    /// Display name used in advisories.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    name: Option<String>,

    /// Length.
    length: f64,

    /// Width.
    width: f64,

    /// Height.
    height: f64,

    /// Declared volume, when it differs from length × width × height.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    volume: Option<f64>,

    /// Weight.
    #[cfg_attr(feature = "serde", serde(default))]
    weight: f64,

    /// Fragile items are never stacked on, nor stacked themselves.
    #[cfg_attr(feature = "serde", serde(default))]
    fragile: bool,
}

impl Item {
    /// Creates a new item with the given ID and dimensions.
    pub fn new(id: impl Into<ItemId>, length: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            length,
            width,
            height,
            volume: None,
            weight: 0.0,
            fragile: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the volume computed from the dimensions.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the fragility flag.
    pub fn with_fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }

    /// Returns the display name, falling back to the ID.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.volume.unwrap_or(self.length * self.width * self.height)
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns whether the item is fragile.
    pub fn is_fragile(&self) -> bool {
        self.fragile
    }

    /// Returns the six candidate orientations in priority order.
    pub fn orientations(&self) -> [OrientedBox; 6] {
        Orientation::enumerate(self.length, self.width, self.height)
    }

    /// Returns the item in its unrotated orientation.
    pub fn upright(&self) -> OrientedBox {
        Orientation::Normal.apply(self.length, self.width, self.height)
    }
}

impl Geometry for Item {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn measure(&self) -> f64 {
        self.volume()
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn validate(&self) -> Result<()> {
        let dims = [self.length, self.width, self.height];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "Weight for '{}' cannot be negative",
                self.id
            )));
        }

        if let Some(volume) = self.volume {
            if !volume.is_finite() || volume < 0.0 {
                return Err(Error::InvalidGeometry(format!(
                    "Volume for '{}' cannot be negative",
                    self.id
                )));
            }
        }

        Ok(())
    }
}
