//! Choreographer configuration
//!
//! Configuration can be built in code or loaded from TOML or JSON:
//!
//! ```toml
//! look_at_transition_distance = 1.5
//! camera_recentering_height = 1.4
//! camera_pan_sensitivity = 0.8
//! convergence_threshold = 0.02
//! platform = "web"
//! look_at_target = { x = 0.0, y = 1.6, z = 8.0 }
//! ```

use crate::error::{NavigationError, Result};
use crate::input::Platform;
use pointclick_math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lower bound of the pan sensitivity
pub const MIN_PAN_SENSITIVITY: f32 = 0.1;
/// Upper bound of the pan sensitivity
pub const MAX_PAN_SENSITIVITY: f32 = 4.0;

/// Tunables of the navigation choreography
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoreographerConfig {
    /// Start turning toward the look-at target this many units before arrival
    pub look_at_transition_distance: f32,

    /// Height of the point above the destination the camera aims at while walking
    pub camera_recentering_height: f32,

    /// Pan sensitivity, clamped to [0.1, 4.0]
    pub camera_pan_sensitivity: f32,

    /// Per-axis tolerance for deciding the camera has settled
    pub convergence_threshold: f32,

    /// Runtime platform
    pub platform: Platform,

    /// Where to look after each walk. `None` keeps looking ahead.
    pub look_at_target: Option<Vec3>,
}

impl Default for ChoreographerConfig {
    fn default() -> Self {
        Self {
            look_at_transition_distance: 1.0,
            camera_recentering_height: 1.4,
            camera_pan_sensitivity: 1.0,
            convergence_threshold: 0.02,
            platform: Platform::Desktop,
            look_at_target: None,
        }
    }
}

impl ChoreographerConfig {
    /// Set the look-at transition distance
    pub fn with_transition_distance(mut self, distance: f32) -> Self {
        self.look_at_transition_distance = distance;
        self
    }

    /// Set the camera recentering height
    pub fn with_recentering_height(mut self, height: f32) -> Self {
        self.camera_recentering_height = height;
        self
    }

    /// Set the pan sensitivity (clamped)
    pub fn with_pan_sensitivity(mut self, sensitivity: f32) -> Self {
        self.camera_pan_sensitivity = clamp_sensitivity(sensitivity);
        self
    }

    /// Set the convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f32) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the platform
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the look-at target
    pub fn with_look_at_target(mut self, target: Vec3) -> Self {
        self.look_at_target = Some(target);
        self
    }

    /// Check that distances and thresholds are usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("look_at_transition_distance", self.look_at_transition_distance),
            ("camera_recentering_height", self.camera_recentering_height),
            ("camera_pan_sensitivity", self.camera_pan_sensitivity),
            ("convergence_threshold", self.convergence_threshold),
        ] {
            if !value.is_finite() {
                return Err(NavigationError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.look_at_transition_distance < 0.0 {
            return Err(NavigationError::InvalidConfig(format!(
                "look_at_transition_distance must not be negative, got {}",
                self.look_at_transition_distance
            )));
        }
        if self.convergence_threshold < 0.0 {
            return Err(NavigationError::InvalidConfig(format!(
                "convergence_threshold must not be negative, got {}",
                self.convergence_threshold
            )));
        }
        Ok(())
    }

    /// Parse from TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.finish()
    }

    /// Parse from JSON
    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.finish()
    }

    /// Load from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(NavigationError::InvalidConfig(format!(
                    "unsupported configuration format: {}",
                    path.display()
                )))
            }
        };

        log::info!("Loaded navigation config from {}", path.display());
        Ok(config)
    }

    fn finish(mut self) -> Result<Self> {
        self.camera_pan_sensitivity = clamp_sensitivity(self.camera_pan_sensitivity);
        self.validate()?;
        Ok(self)
    }
}

/// Clamp a pan sensitivity into its allowed range
pub fn clamp_sensitivity(value: f32) -> f32 {
    value.clamp(MIN_PAN_SENSITIVITY, MAX_PAN_SENSITIVITY)
}
