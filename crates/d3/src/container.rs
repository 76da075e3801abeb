//! Cargo container types.

use stowage_core::geometry::Boundary;
use stowage_core::{Error, Result, AABB3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The interior of a cargo container.
///
/// The packing frame is centered on the horizontal plane: x spans
/// `[-length/2, length/2]`, z spans `[-width/2, width/2]`, and y runs from
/// the floor at `0` up to `height`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Interior length (x axis).
    length: f64,

    /// Interior width (z axis).
    width: f64,

    /// Interior height (y axis).
    height: f64,

    /// Maximum payload weight.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    max_weight: Option<f64>,
}

impl Container {
    /// Creates a new container with the given interior dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            max_weight: None,
        }
    }

    /// Sets the maximum payload weight.
    pub fn with_max_weight(mut self, weight: f64) -> Self {
        self.max_weight = Some(weight);
        self
    }

    /// Returns the interior length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the interior width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the interior height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the interior volume.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns the maximum payload weight.
    pub fn max_weight(&self) -> Option<f64> {
        self.max_weight
    }

    /// Returns the interior bounds in packing coordinates.
    pub fn bounds(&self) -> AABB3D<f64> {
        AABB3D::new(
            -self.length / 2.0,
            0.0,
            -self.width / 2.0,
            self.length / 2.0,
            self.height,
            self.width / 2.0,
        )
    }
}

impl Boundary for Container {
    fn measure(&self) -> f64 {
        self.volume()
    }

    fn aabb(&self) -> AABB3D<f64> {
        self.bounds()
    }

    fn validate(&self) -> Result<()> {
        let dims = [self.length, self.width, self.height];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidBoundary(
                "All dimensions must be positive".into(),
            ));
        }

        if let Some(weight) = self.max_weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::InvalidBoundary(
                    "Maximum payload must be positive".into(),
                ));
            }
        }

        Ok(())
    }
}
