//! Engine configuration.
//!
//! Constraints copy the values they need out of a [`SnapConfig`] when they
//! are built, so editing a config afterwards never reaches instances that
//! already exist.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapError};
use crate::traits::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Snap distance handed to every constraint built from this config.
    pub default_snap_distance: f64,
}

impl SnapConfig {
    pub const DEFAULT_SNAP_DISTANCE: f64 = 1.5;

    pub fn new(default_snap_distance: f64) -> Self {
        Self {
            default_snap_distance,
        }
    }

    /// Decode a config from JSON and validate it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SNAP_DISTANCE)
    }
}

impl Validate for SnapConfig {
    fn validate(&self) -> Result<()> {
        if !self.default_snap_distance.is_finite() || self.default_snap_distance < 0.0 {
            return Err(SnapError::Config(format!(
                "snap distance must be finite and non-negative, got {}",
                self.default_snap_distance
            )));
        }
        Ok(())
    }
}
