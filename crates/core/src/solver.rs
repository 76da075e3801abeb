//! Solver traits and configuration.

use crate::geometry::{Boundary, Geometry};
use crate::result::PackingResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for packers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Whether items that find no free space may be rested on placed items.
    pub allow_stacking: bool,

    /// Heaviest item that may be stacked on another item.
    pub stack_weight_limit: f64,

    /// Reject candidate positions that overlap an already-placed box.
    ///
    /// Off by default: the free-space catalog is trusted as-is and stacked
    /// items are not checked against their neighbours.
    pub verify_overlap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_stacking: true,
            stack_weight_limit: 50.0,
            verify_overlap: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the stacking fallback.
    pub fn with_stacking(mut self, enabled: bool) -> Self {
        self.allow_stacking = enabled;
        self
    }

    /// Sets the heaviest item that may be stacked.
    pub fn with_stack_weight_limit(mut self, limit: f64) -> Self {
        self.stack_weight_limit = limit;
        self
    }

    /// Enables or disables overlap verification.
    pub fn with_overlap_check(mut self, enabled: bool) -> Self {
        self.verify_overlap = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.stack_weight_limit.is_finite() || self.stack_weight_limit < 0.0 {
            return Err(Error::ConfigError(format!(
                "Stack weight limit must be a non-negative number, got {}",
                self.stack_weight_limit
            )));
        }
        Ok(())
    }
}

/// Trait for packing solvers.
pub trait Solver {
    /// The item type this solver handles.
    type Geometry: Geometry;
    /// The container type this solver handles.
    type Boundary: Boundary;

    /// Validates the inputs and packs the items into the container.
    fn solve(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
    ) -> Result<PackingResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.allow_stacking);
        assert_eq!(config.stack_weight_limit, 50.0);
        assert!(!config.verify_overlap);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new()
            .with_stacking(false)
            .with_stack_weight_limit(25.0)
            .with_overlap_check(true);

        assert!(!config.allow_stacking);
        assert_eq!(config.stack_weight_limit, 25.0);
        assert!(config.verify_overlap);
    }

    #[test]
    fn test_invalid_stack_limit() {
        assert!(Config::new()
            .with_stack_weight_limit(-1.0)
            .validate()
            .is_err());
        assert!(Config::new()
            .with_stack_weight_limit(f64::NAN)
            .validate()
            .is_err());
    }
}
