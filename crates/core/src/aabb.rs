//! Axis-aligned bounding boxes in 3D.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB centered on `center` with the given full extents.
    pub fn from_center(center: [S; 3], extents: [S; 3]) -> Self {
        let two = S::one() + S::one();
        let (hx, hy, hz) = (extents[0] / two, extents[1] / two, extents[2] / two);
        Self::new(
            center[0] - hx,
            center[1] - hy,
            center[2] - hz,
            center[0] + hx,
            center[1] + hy,
            center[2] + hz,
        )
    }

    /// Creates an AABB from its min corner and full extents.
    pub fn from_origin(origin: [S; 3], extents: [S; 3]) -> Self {
        Self::new(
            origin[0],
            origin[1],
            origin[2],
            origin[0] + extents[0],
            origin[1] + extents[1],
            origin[2] + extents[2],
        )
    }

    /// Returns the x extent of the AABB.
    pub fn width(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the y extent of the AABB.
    pub fn height(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the z extent of the AABB.
    pub fn depth(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.width() * self.height() * self.depth()
    }

    /// Returns the center point of the AABB.
    pub fn center(&self) -> (S, S, S) {
        let two = S::one() + S::one();
        (
            (self.min_x + self.max_x) / two,
            (self.min_y + self.max_y) / two,
            (self.min_z + self.max_z) / two,
        )
    }

    /// Checks if `other` lies entirely inside this AABB, allowing `epsilon`
    /// of slack on every face.
    pub fn contains(&self, other: &Self, epsilon: S) -> bool {
        other.min_x >= self.min_x - epsilon
            && other.max_x <= self.max_x + epsilon
            && other.min_y >= self.min_y - epsilon
            && other.max_y <= self.max_y + epsilon
            && other.min_z >= self.min_z - epsilon
            && other.max_z <= self.max_z + epsilon
    }

    /// Checks if the two boxes share a region of positive volume.
    ///
    /// Faces that touch within `epsilon` do not count as overlap.
    pub fn overlaps(&self, other: &Self, epsilon: S) -> bool {
        let no_overlap_x =
            self.min_x >= other.max_x - epsilon || other.min_x >= self.max_x - epsilon;
        let no_overlap_y =
            self.min_y >= other.max_y - epsilon || other.min_y >= self.max_y - epsilon;
        let no_overlap_z =
            self.min_z >= other.max_z - epsilon || other.min_z >= self.max_z - epsilon;

        !(no_overlap_x || no_overlap_y || no_overlap_z)
    }
}
