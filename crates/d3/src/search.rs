//! First-fit search over the free-space catalog.

use crate::container::Container;
use crate::free_space::FreeSpaceCatalog;
use crate::item::Item;
use crate::orientation::OrientedBox;
use crate::packer::LoadedItem;
use nalgebra::Vector3;
use stowage_core::{Boundary, EPSILON};

/// A free space and orientation accepted for an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    /// Catalog index of the space used.
    pub space_index: usize,
    /// The chosen orientation.
    pub oriented: OrientedBox,
    /// Centroid of the placed box.
    pub centroid: Vector3<f64>,
}

/// Finds the first (space, orientation) pair that accepts `item`.
///
/// Spaces are scanned oldest-first and orientations in
/// [`Orientation::ALL`](crate::Orientation::ALL) order. The first pair where
/// the box fits the space and stays inside the container wins; no later
/// candidate is compared against it.
///
/// With `verify_overlap` set, candidates that intersect an already loaded
/// box are skipped as well.
pub fn find_fit(
    catalog: &FreeSpaceCatalog,
    container: &Container,
    item: &Item,
    loaded: &[LoadedItem<'_>],
    verify_overlap: bool,
) -> Option<Fit> {
    let orientations = item.orientations();

    for (space_index, space) in catalog.free_spaces() {
        for oriented in &orientations {
            if !space.fits(oriented) {
                continue;
            }

            let footprint = space.footprint_of(oriented);
            if !container.contains_aabb(&footprint) {
                continue;
            }

            if verify_overlap
                && loaded
                    .iter()
                    .any(|l| l.placement.aabb().overlaps(&footprint, EPSILON))
            {
                continue;
            }

            return Some(Fit {
                space_index,
                oriented: *oriented,
                centroid: space.origin + oriented.extents() / 2.0,
            });
        }
    }

    None
}
