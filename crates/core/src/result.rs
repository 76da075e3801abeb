//! Packing result representation.

use crate::geometry::ItemId;
use crate::placement::{Placement, PlacementStats};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound applied to the reported efficiency percentage.
pub const MAX_EFFICIENCY_PERCENT: f64 = 100.0;

/// A human-readable note about a packing decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Advisory {
    /// An item was placed in a non-normal orientation.
    Rotated {
        /// Display name of the item.
        item: String,
        /// Orientation label.
        orientation: String,
    },
    /// An item was placed on top of another item.
    Stacked {
        /// Display name of the stacked item.
        item: String,
        /// Display name of the supporting item.
        base: String,
    },
    /// An item could not be placed.
    Unplaced {
        /// Display name of the item.
        item: String,
    },
    /// The placed items exceed the container's payload limit.
    Overweight {
        /// Total weight of placed items.
        total: f64,
        /// Maximum payload of the container.
        limit: f64,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotated { item, orientation } => write!(f, "{} placed {}", item, orientation),
            Self::Stacked { item, base } => write!(f, "{} stacked on {}", item, base),
            Self::Unplaced { item } => write!(f, "{} could not be placed", item),
            Self::Overweight { total, limit } => write!(
                f,
                "Placed weight {:.1} exceeds maximum payload {:.1}",
                total, limit
            ),
        }
    }
}

/// Computes the requested-load efficiency as a percentage in `[0, 100]`.
///
/// `requested_volume` covers every item handed to the packer, placed or not.
pub fn volumetric_efficiency(requested_volume: f64, container_volume: f64) -> f64 {
    if container_volume <= 0.0 {
        return 0.0;
    }

    let percent = requested_volume / container_volume * 100.0;
    if !percent.is_finite() {
        return 0.0;
    }
    percent.clamp(0.0, MAX_EFFICIENCY_PERCENT)
}

/// Result of a packing run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// Placements in the order items were processed.
    pub placements: Vec<Placement>,

    /// IDs of items that could not be placed, in processing order.
    pub unplaced: Vec<ItemId>,

    /// Advisory notes in order of occurrence.
    pub advisories: Vec<Advisory>,

    /// Requested volume over container volume, in percent (0 - 100).
    pub efficiency: f64,

    /// Total volume of placed items.
    pub placed_volume: f64,

    /// Total weight of placed items.
    pub placed_weight: f64,
}

impl PackingResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every item was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of unplaced items.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns the number of items placed by stacking.
    pub fn stacked_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_stacked()).count()
    }

    /// Returns true if at least one item was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Looks up the placement of an item.
    pub fn placement_of(&self, item_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item_id == item_id)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Returns efficiency as a percentage string.
    pub fn efficiency_percent(&self) -> String {
        format!("{:.1}%", self.efficiency)
    }

    /// Returns the advisories rendered as text.
    pub fn advisory_messages(&self) -> Vec<String> {
        self.advisories.iter().map(ToString::to_string).collect()
    }
}

/// Summary statistics for a packing result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingSummary {
    /// Total items requested.
    pub total_requested: usize,
    /// Total items placed, stacked ones included.
    pub total_placed: usize,
    /// Items placed by stacking.
    pub total_stacked: usize,
    /// Items left out.
    pub total_unplaced: usize,
    /// Efficiency percentage.
    pub efficiency_percent: f64,
    /// Total volume of placed items.
    pub placed_volume: f64,
    /// Total weight of placed items.
    pub placed_weight: f64,
}

impl From<&PackingResult> for PackingSummary {
    fn from(result: &PackingResult) -> Self {
        Self {
            total_requested: result.placements.len() + result.unplaced.len(),
            total_placed: result.placements.len(),
            total_stacked: result.stacked_count(),
            total_unplaced: result.unplaced.len(),
            efficiency_percent: result.efficiency,
            placed_volume: result.placed_volume,
            placed_weight: result.placed_weight,
        }
    }
}
