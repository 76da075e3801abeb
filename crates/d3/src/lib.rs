//! # Stowage 3D
//!
//! Greedy cargo placement for box-shaped items in a rectangular container.
//!
//! Items are loaded largest first into a growing catalog of free spaces,
//! trying six axis-aligned orientations each. Items that fit nowhere may be
//! stacked on top of sturdier loaded items.
//!
//! ## Frame
//!
//! The container floor lies at `y = 0`. Length runs along `x` and width
//! along `z`, both centered on the origin. Placement positions are item
//! centroids.
//!
//! ## Example
//!
//! ```
//! use stowage_d3::{pack_items, Container, Item};
//!
//! let container = Container::new(4.2, 2.1, 2.3);
//! let items = vec![Item::new("crate", 1.0, 1.0, 1.0).with_weight(12.0)];
//!
//! let result = pack_items(&container, &items);
//! assert!(result.all_placed());
//! ```

pub mod container;
pub mod free_space;
pub mod item;
pub mod orientation;
pub mod packer;
pub mod search;
pub mod stacking;

// Re-exports
pub use container::Container;
pub use free_space::{FreeSpace, FreeSpaceCatalog, SplitKind};
pub use item::Item;
pub use orientation::{Orientation, OrientedBox};
pub use packer::{pack_items, LoadedItem, Packer3D};
pub use stowage_core::{
    Advisory, Boundary, Config, Error, Geometry, PackingResult, PackingSummary, Placement,
    Result, Solver,
};
