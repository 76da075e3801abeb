//! Axis-aligned orientations of a box.
//!
//! The six orientations are tried in a fixed order. The first one that fits
//! wins, so [`Orientation::ALL`] doubles as the tie-break policy of the
//! placement search.

use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned rotations of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// (l, w, h)
    Normal,
    /// (w, l, h), turned about the vertical axis.
    Rotated,
    /// (l, h, w)
    OnSide,
    /// (h, l, w)
    Standing,
    /// (w, h, l)
    ComplexA,
    /// (h, w, l)
    ComplexB,
}

impl Orientation {
    /// All orientations in search priority order.
    pub const ALL: [Orientation; 6] = [
        Orientation::Normal,
        Orientation::Rotated,
        Orientation::OnSide,
        Orientation::Standing,
        Orientation::ComplexA,
        Orientation::ComplexB,
    ];

    /// Returns the position of this orientation in [`Orientation::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Rotated => 1,
            Self::OnSide => 2,
            Self::Standing => 3,
            Self::ComplexA => 4,
            Self::ComplexB => 5,
        }
    }

    /// Returns the human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Rotated => "rotated 90°",
            Self::OnSide => "on its side",
            Self::Standing => "standing",
            Self::ComplexA => "complex A",
            Self::ComplexB => "complex B",
        }
    }

    /// Returns the rotation descriptor (rx, ry, rz) in radians.
    pub fn rotation(self) -> [f64; 3] {
        match self {
            Self::Normal => [0.0, 0.0, 0.0],
            Self::Rotated => [0.0, FRAC_PI_2, 0.0],
            Self::OnSide => [FRAC_PI_2, 0.0, 0.0],
            Self::Standing => [0.0, 0.0, FRAC_PI_2],
            Self::ComplexA => [FRAC_PI_2, FRAC_PI_2, 0.0],
            Self::ComplexB => [FRAC_PI_2, 0.0, FRAC_PI_2],
        }
    }

    /// Returns true for every orientation except [`Orientation::Normal`].
    pub fn is_rotated(self) -> bool {
        self != Self::Normal
    }

    /// Permutes an item's (length, width, height) into this orientation.
    pub fn apply(self, length: f64, width: f64, height: f64) -> OrientedBox {
        let (l, w, h) = match self {
            Self::Normal => (length, width, height),
            Self::Rotated => (width, length, height),
            Self::OnSide => (length, height, width),
            Self::Standing => (height, length, width),
            Self::ComplexA => (width, height, length),
            Self::ComplexB => (height, width, length),
        };
        OrientedBox {
            orientation: self,
            length: l,
            width: w,
            height: h,
        }
    }

    /// Enumerates all six orientations of a box in priority order.
    pub fn enumerate(length: f64, width: f64, height: f64) -> [OrientedBox; 6] {
        Self::ALL.map(|o| o.apply(length, width, height))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An item's dimensions after applying an orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    /// The orientation applied.
    pub orientation: Orientation,
    /// Extent along the container length (x).
    pub length: f64,
    /// Extent along the container width (z).
    pub width: f64,
    /// Extent along the vertical axis (y).
    pub height: f64,
}

impl OrientedBox {
    /// Returns the extents in packing axes order (x, y, z).
    pub fn extents(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.height, self.width)
    }
}
