//! Command-line support for Stowage
//!
//! This crate provides:
//! - JSON load manifests (container, items, optional packer settings)
//! - Packing sessions that can be saved and reloaded
//! - Plain-text reports

mod manifest;
pub mod report;
mod session;

pub use manifest::{Manifest, ManifestError};
pub use session::PackingSession;
