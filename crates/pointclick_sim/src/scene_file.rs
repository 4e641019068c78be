//! Scene file
//!
//! Describes the waypoints of a scene, the route to walk and the
//! navigation tunables.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. First command line argument: `pointclick-sim scene.toml`
//! 2. Environment variable: `POINTCLICK_SCENE=/path/to/scene.toml`
//! 3. Built-in demo scene
//!
//! `POINTCLICK_PLATFORM=web` overrides the platform of whichever source wins.

use pointclick_math::Vec3;
use pointclick_nav::{ChoreographerConfig, Marker, NavigationError, Platform, Result, Waypoint};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A waypoint as written in the scene file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointEntry {
    pub name: String,
    pub position: Vec3,
    #[serde(default = "enabled")]
    pub active: bool,
    #[serde(default = "enabled")]
    pub show_marker: bool,
}

fn enabled() -> bool {
    true
}

impl WaypointEntry {
    fn new(name: &str, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            position,
            active: true,
            show_marker: true,
        }
    }

    /// Build the scene waypoint
    pub fn to_waypoint(&self) -> Waypoint {
        Waypoint::new(self.name.clone(), self.position)
            .with_marker(Marker::new())
            .with_show_marker(self.show_marker)
            .with_active(self.active)
    }
}

/// Scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFile {
    /// Scene name, used for the one-choreographer-per-scene guard
    pub name: String,
    /// Simulated frames per second
    pub frame_rate: u32,
    /// Player walking speed in units per second
    pub agent_speed: f32,
    /// Camera height above the player's feet
    pub eye_height: f32,
    /// Waypoint names to visit in order
    pub route: Vec<String>,
    pub navigation: ChoreographerConfig,
    pub waypoints: Vec<WaypointEntry>,
}

impl Default for SceneFile {
    fn default() -> Self {
        Self {
            name: "demo".to_string(),
            frame_rate: 60,
            agent_speed: 3.5,
            eye_height: 1.6,
            route: vec!["door".to_string(), "desk".to_string(), "door".to_string()],
            navigation: ChoreographerConfig::default()
                .with_look_at_target(Vec3::new(0.0, 1.6, 10.0)),
            waypoints: vec![
                WaypointEntry::new("door", Vec3::new(0.0, 0.0, 3.0)),
                WaypointEntry::new("desk", Vec3::new(4.0, 0.0, 7.0)),
            ],
        }
    }
}

impl SceneFile {
    /// Load from the highest-priority available source
    pub fn load() -> Self {
        let path = std::env::args()
            .nth(1)
            .or_else(|| std::env::var("POINTCLICK_SCENE").ok());

        let mut scene = match path {
            Some(path) => match Self::from_path(&path) {
                Ok(scene) => {
                    log::info!("Loaded scene from {}", path);
                    scene
                }
                Err(e) => {
                    log::warn!("Failed to load scene {}: {}. Using demo scene.", path, e);
                    Self::default()
                }
            },
            None => {
                log::info!("No scene given, using demo scene");
                Self::default()
            }
        };

        if let Ok(platform) = std::env::var("POINTCLICK_PLATFORM") {
            match platform.parse::<Platform>() {
                Ok(platform) => scene.navigation.platform = platform,
                Err(e) => log::warn!("Ignoring POINTCLICK_PLATFORM: {}", e),
            }
        }

        scene
    }

    /// Parse a TOML scene file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut scene: Self = toml::from_str(source)?;
        let sensitivity = scene.navigation.camera_pan_sensitivity;
        scene.navigation = scene.navigation.with_pan_sensitivity(sensitivity);
        scene.navigation.validate()?;

        if scene.frame_rate == 0 {
            return Err(NavigationError::InvalidConfig(
                "frame_rate must be at least 1".to_string(),
            ));
        }
        Ok(scene)
    }

    /// Seconds per simulated frame
    pub fn frame_time(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }

    pub fn print_summary(&self) {
        log::info!("Scene configuration:");
        log::info!("  Name: {}", self.name);
        log::info!("  Waypoints: {}", self.waypoints.len());
        log::info!("  Route: {}", self.route.join(" -> "));
        log::info!("  Platform: {:?}", self.navigation.platform);
        log::info!("  Frame rate: {} Hz", self.frame_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene() {
        let scene = SceneFile::from_toml_str(
            r#"
            name = "hall"
            route = ["a"]

            [navigation]
            camera_pan_sensitivity = 12.0

            [[waypoints]]
            name = "a"
            position = { x = 1.0, y = 0.0, z = 2.0 }

            [[waypoints]]
            name = "b"
            position = { x = 0.0, y = 0.0, z = 0.0 }
            active = false
            "#,
        )
        .unwrap();

        assert_eq!(scene.name, "hall");
        assert_eq!(scene.frame_rate, 60);
        assert_eq!(scene.navigation.camera_pan_sensitivity, 4.0);
        assert_eq!(scene.waypoints.len(), 2);
        assert!(scene.waypoints[0].active);
        assert!(!scene.waypoints[1].active);
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let result = SceneFile::from_toml_str("frame_rate = 0");
        assert!(matches!(result, Err(NavigationError::InvalidConfig(_))));
    }

    #[test]
    fn test_hidden_marker() {
        let entry = WaypointEntry {
            show_marker: false,
            ..WaypointEntry::new("a", Vec3::ZERO)
        };
        let waypoint = entry.to_waypoint();
        assert!(!waypoint.marker().unwrap().is_visible());
    }

    #[test]
    fn test_demo_scene_route_resolves() {
        let scene = SceneFile::default();
        for stop in &scene.route {
            assert!(scene.waypoints.iter().any(|w| &w.name == stop));
        }
    }
}
