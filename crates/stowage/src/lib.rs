//! # Stowage
//!
//! Greedy 3D cargo placement engine.
//!
//! Given a rectangular container and a list of box-shaped items, Stowage
//! decides where each item goes, which way it is turned, and which items are
//! stacked on others or left behind.
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage::d3::{Container, Item, Packer3D};
//! use stowage::{Config, Solver};
//!
//! let container = Container::new(4.2, 2.1, 2.3);
//! let items = vec![
//!     Item::new("pallet", 1.2, 0.8, 1.0).with_weight(180.0),
//!     Item::new("box", 0.6, 0.4, 0.4).with_weight(15.0),
//! ];
//!
//! let packer = Packer3D::new(Config::default());
//! let result = packer.solve(&items, &container)?;
//! assert!(result.all_placed());
//! # Ok::<(), stowage::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core traits and result types.
pub use stowage_core as core;

/// 3D cargo placement.
pub use stowage_d3 as d3;

// Re-export commonly used types at root level
pub use stowage_core::{
    Advisory, Config, Error, PackingResult, PackingSummary, Placement, Result, Solver,
};
