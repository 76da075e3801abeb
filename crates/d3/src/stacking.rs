//! Stacking fallback for items that found no free space.
//!
//! An item may rest on an already loaded item when neither is fragile, the
//! item is light enough to be stacked at all, and the base is at least as
//! heavy as the item. Stacked items are never rotated.

use crate::container::Container;
use crate::item::Item;
use crate::packer::LoadedItem;
use nalgebra::Vector3;
use stowage_core::{Boundary, Config, AABB3D, EPSILON};

/// Where a stacked item ends up.
#[derive(Debug, Clone, PartialEq)]
pub struct StackPosition {
    /// Index of the supporting item in load order.
    pub base_index: usize,
    /// Centroid of the stacked item.
    pub centroid: Vector3<f64>,
}

/// Returns true if `item` may be stacked at all.
pub fn can_be_stacked(item: &Item, config: &Config) -> bool {
    !item.is_fragile() && item.weight() <= config.stack_weight_limit
}

/// Returns true if `base` may carry `item`.
pub fn can_support(base: &Item, item: &Item) -> bool {
    !base.is_fragile() && base.weight() >= item.weight()
}

/// Finds the first loaded item that `item` can rest on.
///
/// Bases are tried in load order, stacked items included. The item is
/// centered on the base's top face; the first base where the item stays
/// inside the container is accepted.
pub fn find_stack_position(
    item: &Item,
    loaded: &[LoadedItem<'_>],
    container: &Container,
    config: &Config,
) -> Option<StackPosition> {
    if !can_be_stacked(item, config) {
        return None;
    }

    let upright = item.upright();
    let extents = upright.extents();

    for (base_index, base) in loaded.iter().enumerate() {
        if !can_support(base.item, item) {
            continue;
        }

        let p = &base.placement;
        let centroid = Vector3::new(p.x(), p.top() + extents.y / 2.0, p.z());
        let region = AABB3D::from_center(
            [centroid.x, centroid.y, centroid.z],
            [extents.x, extents.y, extents.z],
        );

        if !container.contains_aabb(&region) {
            continue;
        }

        if config.verify_overlap
            && loaded
                .iter()
                .any(|other| other.placement.aabb().overlaps(&region, EPSILON))
        {
            continue;
        }

        return Some(StackPosition {
            base_index,
            centroid,
        });
    }

    None
}
