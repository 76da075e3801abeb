//! # Stowage Core
//!
//! Core traits and abstractions for the Stowage cargo placement engine.
//!
//! This crate provides the types shared between the placement algorithms
//! and their consumers (visualization, summaries, persistence).
//!
//! ## Core Components
//!
//! - **Geometry traits**: `Geometry`, `Boundary`
//! - **Solver trait**: Common interface for packers
//! - **Results**: `Placement`, `PackingResult`, `Advisory`
//! - **AABBs**: `AABB3D` for containment and overlap checks
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::AABB3D;
pub use error::{Error, Result};
pub use geometry::{Boundary, Geometry, ItemId, EPSILON};
pub use placement::{Placement, PlacementStats};
pub use result::{volumetric_efficiency, Advisory, PackingResult, PackingSummary};
pub use solver::{Config, Solver};
