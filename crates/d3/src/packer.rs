//! Greedy 3D cargo packer.

use crate::container::Container;
use crate::free_space::FreeSpaceCatalog;
use crate::item::Item;
use crate::search::find_fit;
use crate::stacking::find_stack_position;
use stowage_core::geometry::{Boundary, Geometry};
use stowage_core::solver::{Config, Solver};
use stowage_core::{volumetric_efficiency, Advisory, PackingResult, Placement, Result};

/// An item together with the placement it received.
#[derive(Debug, Clone)]
pub struct LoadedItem<'a> {
    /// The source item.
    pub item: &'a Item,
    /// Where it was put.
    pub placement: Placement,
}

/// Greedy single-pass cargo packer.
///
/// Items are taken largest volume first. Each one goes into the first free
/// space and orientation that accept it; failing that it may be stacked on a
/// loaded item; failing that it is reported as unplaced. Earlier decisions
/// are never revisited.
#[derive(Debug, Clone, Default)]
pub struct Packer3D {
    config: Config,
}

impl Packer3D {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Packs `items` into `container`.
    ///
    /// A missing container or an empty item list yields an empty result.
    /// The caller's slice is left untouched; processing order is a stable
    /// sort by descending volume.
    pub fn pack(&self, container: Option<&Container>, items: &[Item]) -> PackingResult {
        let Some(container) = container else {
            log::warn!("no container given, skipping {} items", items.len());
            return PackingResult::new();
        };
        if items.is_empty() {
            return PackingResult::new();
        }

        let mut order: Vec<&Item> = items.iter().collect();
        order.sort_by(|a, b| b.volume().total_cmp(&a.volume()));

        let mut catalog = FreeSpaceCatalog::new(container);
        let mut loaded: Vec<LoadedItem<'_>> = Vec::with_capacity(items.len());
        let mut result = PackingResult::new();

        for item in order {
            if let Some(fit) = find_fit(
                &catalog,
                container,
                item,
                &loaded,
                self.config.verify_overlap,
            ) {
                let extents = fit.oriented.extents();
                catalog.split(fit.space_index, &extents);

                let orientation = fit.oriented.orientation;
                log::debug!(
                    "placed '{}' {} in space {} at ({:.3}, {:.3}, {:.3})",
                    item.id(),
                    orientation,
                    fit.space_index,
                    fit.centroid.x,
                    fit.centroid.y,
                    fit.centroid.z
                );

                if orientation.is_rotated() {
                    result.advisories.push(Advisory::Rotated {
                        item: item.name().to_string(),
                        orientation: orientation.label().to_string(),
                    });
                }

                let placement = Placement::new(
                    item.id().clone(),
                    [fit.centroid.x, fit.centroid.y, fit.centroid.z],
                    [extents.x, extents.y, extents.z],
                )
                .with_orientation(orientation.label(), orientation.rotation());
                loaded.push(LoadedItem { item, placement });
                continue;
            }

            if self.config.allow_stacking {
                if let Some(stack) = find_stack_position(item, &loaded, container, &self.config)
                {
                    let base = loaded[stack.base_index].item;
                    log::debug!(
                        "stacked '{}' on '{}' at height {:.3}",
                        item.id(),
                        base.id(),
                        stack.centroid.y
                    );

                    result.advisories.push(Advisory::Stacked {
                        item: item.name().to_string(),
                        base: base.name().to_string(),
                    });

                    let extents = item.upright().extents();
                    let placement = Placement::new(
                        item.id().clone(),
                        [stack.centroid.x, stack.centroid.y, stack.centroid.z],
                        [extents.x, extents.y, extents.z],
                    )
                    .with_stacked_on(base.id().clone());
                    loaded.push(LoadedItem { item, placement });
                    continue;
                }
            }

            log::debug!("could not place '{}'", item.id());
            result.unplaced.push(item.id().clone());
            result.advisories.push(Advisory::Unplaced {
                item: item.name().to_string(),
            });
        }

        log::trace!(
            "catalog finished with {} spaces ({} free)",
            catalog.len(),
            catalog.free_count()
        );

        let requested_volume: f64 = items.iter().map(Item::volume).sum();
        result.efficiency = volumetric_efficiency(requested_volume, container.volume());
        result.placed_volume = loaded.iter().map(|l| l.item.volume()).sum();
        result.placed_weight = loaded.iter().map(|l| l.item.weight()).sum();

        if let Some(limit) = container.max_weight() {
            if result.placed_weight > limit {
                log::warn!(
                    "placed weight {:.1} exceeds payload {:.1}",
                    result.placed_weight,
                    limit
                );
                result.advisories.push(Advisory::Overweight {
                    total: result.placed_weight,
                    limit,
                });
            }
        }

        result.placements = loaded.into_iter().map(|l| l.placement).collect();
        result
    }
}

impl Solver for Packer3D {
    type Geometry = Item;
    type Boundary = Container;

    fn solve(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
    ) -> Result<PackingResult> {
        self.config.validate()?;
        boundary.validate()?;
        for item in geometries {
            item.validate()?;
        }

        Ok(self.pack(Some(boundary), geometries))
    }
}

/// Packs `items` into `container` with the default configuration.
pub fn pack_items(container: &Container, items: &[Item]) -> PackingResult {
    Packer3D::default_config().pack(Some(container), items)
}
