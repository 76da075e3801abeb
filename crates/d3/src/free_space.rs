//! Free-space catalog with guillotine-style splitting.
//!
//! The catalog starts with a single space covering the whole container. Each
//! placement marks the space it used as occupied and appends up to three
//! residual spaces. Spaces are never removed, merged or deduplicated, so the
//! catalog only grows for the lifetime of one packing run.
//!
//! The "top" and "back" residuals are sized to the placed item's footprint
//! rather than to the full parent space. Volume beside those footprints is
//! not offered again during the run.

use crate::container::Container;
use crate::orientation::OrientedBox;
use nalgebra::Vector3;
use stowage_core::{AABB3D, EPSILON};

/// Which residual of a split a space came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    /// The initial space spanning the container.
    Root,
    /// Remainder along the length axis.
    Right,
    /// Remainder along the height axis, above the placed footprint.
    Top,
    /// Remainder along the depth axis, behind the placed footprint.
    Back,
}

/// An axis-aligned empty cuboid inside the container.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeSpace {
    /// Min corner (x, y, z).
    pub origin: Vector3<f64>,
    /// Extents as (width along x, height along y, depth along z).
    pub extents: Vector3<f64>,
    /// Set once an item has been placed in this space.
    pub occupied: bool,
    /// How this space was produced.
    pub kind: SplitKind,
}

impl FreeSpace {
    /// Creates an unoccupied space.
    pub fn new(origin: Vector3<f64>, extents: Vector3<f64>, kind: SplitKind) -> Self {
        Self {
            origin,
            extents,
            occupied: false,
            kind,
        }
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.extents.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.extents.y
    }

    /// Extent along z.
    pub fn depth(&self) -> f64 {
        self.extents.z
    }

    /// Returns the volume of the space.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// Checks if an oriented box fits inside this space.
    pub fn fits(&self, b: &OrientedBox) -> bool {
        b.length <= self.width() + EPSILON
            && b.width <= self.depth() + EPSILON
            && b.height <= self.height() + EPSILON
    }

    /// Returns the region covered by this space.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_origin(to_array(&self.origin), to_array(&self.extents))
    }

    /// Returns the region an oriented box would cover when placed at the
    /// origin corner of this space.
    pub fn footprint_of(&self, b: &OrientedBox) -> AABB3D<f64> {
        AABB3D::from_origin(to_array(&self.origin), to_array(&b.extents()))
    }
}

pub(crate) fn to_array(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

/// Ordered, append-only collection of free spaces for one packing run.
#[derive(Debug, Clone)]
pub struct FreeSpaceCatalog {
    spaces: Vec<FreeSpace>,
}

impl FreeSpaceCatalog {
    /// Creates a catalog seeded with the whole container interior.
    pub fn new(container: &Container) -> Self {
        let root = FreeSpace::new(
            Vector3::new(-container.length() / 2.0, 0.0, -container.width() / 2.0),
            Vector3::new(container.length(), container.height(), container.width()),
            SplitKind::Root,
        );
        Self { spaces: vec![root] }
    }

    /// Returns the total number of spaces, occupied or not.
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Returns true if the catalog has no spaces.
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Returns the number of unoccupied spaces.
    pub fn free_count(&self) -> usize {
        self.spaces.iter().filter(|s| !s.occupied).count()
    }

    /// Returns the space at `index`.
    pub fn get(&self, index: usize) -> Option<&FreeSpace> {
        self.spaces.get(index)
    }

    /// Returns all spaces in catalog order.
    pub fn spaces(&self) -> &[FreeSpace] {
        &self.spaces
    }

    /// Iterates unoccupied spaces, oldest first, with their catalog index.
    pub fn free_spaces(&self) -> impl Iterator<Item = (usize, &FreeSpace)> {
        self.spaces.iter().enumerate().filter(|(_, s)| !s.occupied)
    }

    /// Marks the space at `index` occupied by a box of `extents` placed at
    /// its origin and appends the residual spaces.
    ///
    /// Returns the number of residuals appended (0 to 3). Residuals with no
    /// positive extent are dropped.
    pub fn split(&mut self, index: usize, extents: &Vector3<f64>) -> usize {
        let Some(space) = self.spaces.get_mut(index) else {
            return 0;
        };
        space.occupied = true;
        let parent = space.clone();

        let (l, h, w) = (extents.x, extents.y, extents.z);
        let candidates = [
            FreeSpace::new(
                parent.origin + Vector3::new(l, 0.0, 0.0),
                Vector3::new(parent.width() - l, parent.height(), parent.depth()),
                SplitKind::Right,
            ),
            FreeSpace::new(
                parent.origin + Vector3::new(0.0, h, 0.0),
                Vector3::new(l, parent.height() - h, parent.depth()),
                SplitKind::Top,
            ),
            FreeSpace::new(
                parent.origin + Vector3::new(0.0, 0.0, w),
                Vector3::new(l, h, parent.depth() - w),
                SplitKind::Back,
            ),
        ];

        let before = self.spaces.len();
        for candidate in candidates {
            let remaining = match candidate.kind {
                SplitKind::Right => candidate.width(),
                SplitKind::Top => candidate.height(),
                _ => candidate.depth(),
            };
            if remaining > EPSILON {
                log::trace!(
                    "split space {}: {:?} residual at ({:.3}, {:.3}, {:.3})",
                    index,
                    candidate.kind,
                    candidate.origin.x,
                    candidate.origin.y,
                    candidate.origin.z
                );
                self.spaces.push(candidate);
            }
        }
        self.spaces.len() - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;
    use approx::assert_relative_eq;

    #[test]
    fn test_catalog_seeded_with_interior() {
        let catalog = FreeSpaceCatalog::new(&Container::new(4.2, 2.1, 2.3));
        assert_eq!(catalog.len(), 1);

        let root = catalog.get(0).unwrap();
        assert_relative_eq!(root.origin.x, -2.1);
        assert_relative_eq!(root.origin.y, 0.0);
        assert_relative_eq!(root.origin.z, -1.05);
        assert_relative_eq!(root.width(), 4.2);
        assert_relative_eq!(root.height(), 2.3);
        assert_relative_eq!(root.depth(), 2.1);
        assert_eq!(root.kind, SplitKind::Root);
    }

    #[test]
    fn test_split_appends_three_residuals() {
        let mut catalog = FreeSpaceCatalog::new(&Container::new(4.0, 2.0, 3.0));
        let added = catalog.split(0, &Vector3::new(1.0, 1.0, 1.0));

        assert_eq!(added, 3);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get(0).unwrap().occupied);
        assert_eq!(catalog.free_count(), 3);

        let right = catalog.get(1).unwrap();
        assert_eq!(right.kind, SplitKind::Right);
        assert_relative_eq!(right.origin.x, -1.0);
        assert_relative_eq!(right.extents.x, 3.0);
        assert_relative_eq!(right.extents.y, 3.0);
        assert_relative_eq!(right.extents.z, 2.0);

        // Top keeps the full depth but only the placed length.
        let top = catalog.get(2).unwrap();
        assert_eq!(top.kind, SplitKind::Top);
        assert_relative_eq!(top.origin.y, 1.0);
        assert_relative_eq!(top.extents.x, 1.0);
        assert_relative_eq!(top.extents.y, 2.0);
        assert_relative_eq!(top.extents.z, 2.0);

        // Back is sized to the placed footprint.
        let back = catalog.get(3).unwrap();
        assert_eq!(back.kind, SplitKind::Back);
        assert_relative_eq!(back.origin.z, 0.0);
        assert_relative_eq!(back.extents.x, 1.0);
        assert_relative_eq!(back.extents.y, 1.0);
        assert_relative_eq!(back.extents.z, 1.0);
    }

    #[test]
    fn test_split_drops_degenerate_residuals() {
        let mut catalog = FreeSpaceCatalog::new(&Container::new(2.0, 1.0, 2.0));
        let added = catalog.split(0, &Vector3::new(2.0, 1.0, 1.0));

        assert_eq!(added, 1);
        assert_eq!(catalog.get(1).unwrap().kind, SplitKind::Top);
    }

    #[test]
    fn test_split_out_of_range_is_noop() {
        let mut catalog = FreeSpaceCatalog::new(&Container::new(2.0, 1.0, 2.0));
        assert_eq!(catalog.split(7, &Vector3::new(1.0, 1.0, 1.0)), 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_free_spaces_stay_disjoint() {
        let mut catalog = FreeSpaceCatalog::new(&Container::new(4.0, 3.0, 2.0));
        catalog.split(0, &Vector3::new(1.0, 0.5, 1.5));
        catalog.split(1, &Vector3::new(2.0, 1.0, 1.0));
        catalog.split(2, &Vector3::new(0.5, 0.5, 0.5));
        catalog.split(4, &Vector3::new(1.0, 1.0, 2.0));

        let free: Vec<_> = catalog.free_spaces().map(|(_, s)| s.aabb()).collect();
        assert!(free.len() > 3);
        for (i, a) in free.iter().enumerate() {
            for b in &free[i + 1..] {
                assert!(!a.overlaps(b, EPSILON));
            }
        }
    }

    #[test]
    fn test_space_fits_oriented_box() {
        let space = FreeSpace::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(2.0, 1.0, 3.0),
            SplitKind::Root,
        );

        assert!(space.fits(&Orientation::Normal.apply(2.0, 3.0, 1.0)));
        assert!(!space.fits(&Orientation::Normal.apply(3.0, 2.0, 1.0)));
        assert!(space.fits(&Orientation::Rotated.apply(3.0, 2.0, 1.0)));
    }
}
