//! Core geometry traits and types.

use crate::aabb::AABB3D;
use crate::Result;

/// Unique identifier for an item.
pub type ItemId = String;

/// Absolute tolerance used when comparing lengths.
pub const EPSILON: f64 = 1e-9;

/// Trait for box-shaped cargo that can be packed.
pub trait Geometry: Clone + Send + Sync {
    /// Returns the unique identifier for this item.
    fn id(&self) -> &ItemId;

    /// Returns the volume of this item.
    fn measure(&self) -> f64;

    /// Returns the weight of this item.
    fn weight(&self) -> f64;

    /// Validates the item and returns an error if invalid.
    fn validate(&self) -> Result<()>;
}

/// Trait for the container that items are packed into.
pub trait Boundary: Clone + Send + Sync {
    /// Returns the interior volume.
    fn measure(&self) -> f64;

    /// Returns the interior as an AABB in packing coordinates.
    fn aabb(&self) -> AABB3D<f64>;

    /// Validates the boundary and returns an error if invalid.
    fn validate(&self) -> Result<()>;

    /// Checks if a box lies fully inside the interior.
    fn contains_aabb(&self, aabb: &AABB3D<f64>) -> bool {
        self.aabb().contains(aabb, EPSILON)
    }
}
