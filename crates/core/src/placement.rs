//! Placement representation for positioned items.

use crate::aabb::AABB3D;
use crate::geometry::ItemId;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the placement of an item within a container.
///
/// Positions are item centroids in the container frame: x runs along the
/// container length, y is up with the floor at `0`, z runs along the
/// container width. The horizontal axes are centered on the container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed item.
    pub item_id: ItemId,

    /// Centroid coordinates [x, y, z].
    pub position: [f64; 3],

    /// Rotation descriptor in radians [rx, ry, rz].
    pub rotation: [f64; 3],

    /// Extents of the oriented box along [x, y, z].
    pub dimensions: [f64; 3],

    /// Label of the orientation used (e.g. "normal", "on its side").
    pub orientation: String,

    /// ID of the item this one rests on, if it was stacked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stacked_on: Option<ItemId>,
}

impl Placement {
    /// Creates an unrotated placement.
    pub fn new(item_id: ItemId, position: [f64; 3], dimensions: [f64; 3]) -> Self {
        Self {
            item_id,
            position,
            rotation: [0.0, 0.0, 0.0],
            dimensions,
            orientation: "normal".to_string(),
            stacked_on: None,
        }
    }

    /// Sets the orientation label and rotation descriptor.
    pub fn with_orientation(mut self, label: impl Into<String>, rotation: [f64; 3]) -> Self {
        self.orientation = label.into();
        self.rotation = rotation;
        self
    }

    /// Marks this placement as resting on another item.
    pub fn with_stacked_on(mut self, base: ItemId) -> Self {
        self.stacked_on = Some(base);
        self
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.position[1]
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> f64 {
        self.position[2]
    }

    /// Returns the height of the top face.
    pub fn top(&self) -> f64 {
        self.position[1] + self.dimensions[1] / 2.0
    }

    /// Returns true if any rotation was applied.
    pub fn is_rotated(&self) -> bool {
        self.rotation.iter().any(|angle| *angle != 0.0)
    }

    /// Returns true if the item was placed by stacking.
    pub fn is_stacked(&self) -> bool {
        self.stacked_on.is_some()
    }

    /// Returns the occupied region.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_center(self.position, self.dimensions)
    }

    /// Returns the volume of the oriented box.
    pub fn volume(&self) -> f64 {
        self.dimensions.iter().product()
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of rotated placements.
    pub rotated_count: usize,
    /// Number of stacked placements.
    pub stacked_count: usize,
    /// Distribution of orientation labels used.
    pub orientation_distribution: BTreeMap<String, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.is_rotated() {
                stats.rotated_count += 1;
            }

            if p.is_stacked() {
                stats.stacked_count += 1;
            }

            *stats
                .orientation_distribution
                .entry(p.orientation.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_placement_defaults() {
        let p = Placement::new("crate".to_string(), [-1.6, 0.5, -0.55], [1.0, 1.0, 1.0]);
        assert_eq!(p.orientation, "normal");
        assert!(!p.is_rotated());
        assert!(!p.is_stacked());
        assert_relative_eq!(p.top(), 1.0);
        assert_relative_eq!(p.volume(), 1.0);
    }

    #[test]
    fn test_placement_aabb() {
        let p = Placement::new("crate".to_string(), [0.0, 1.0, 0.0], [2.0, 2.0, 4.0]);
        let aabb = p.aabb();
        assert_relative_eq!(aabb.min_x, -1.0);
        assert_relative_eq!(aabb.min_y, 0.0);
        assert_relative_eq!(aabb.max_z, 2.0);
    }

    #[test]
    fn test_placement_stats() {
        let placements = vec![
            Placement::new("a".to_string(), [0.0; 3], [1.0; 3]),
            Placement::new("b".to_string(), [0.0; 3], [1.0; 3])
                .with_orientation("rotated 90°", [0.0, FRAC_PI_2, 0.0]),
            Placement::new("c".to_string(), [0.0; 3], [1.0; 3]).with_stacked_on("a".to_string()),
        ];

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.rotated_count, 1);
        assert_eq!(stats.stacked_count, 1);
        assert_eq!(stats.orientation_distribution.get("normal"), Some(&2));
        assert_eq!(stats.orientation_distribution.get("rotated 90°"), Some(&1));
    }
}
