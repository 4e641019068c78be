//! Pointclick Nav - Waypoint Navigation and Camera Choreography
//!
//! This crate turns pointer input over waypoint markers into player walks
//! and keeps a point-of-view camera aimed sensibly while the player moves.
//!
//! # Features
//!
//! - Waypoint markers with hover highlighting
//! - Click-to-walk with a single active walk session
//! - Camera recentering along the direction of travel
//! - Look-at convergence before a walk completes
//! - Platform-scaled camera panning
//! - Walk started/completed notifications
//! - TOML/JSON configuration
//!
//! # Example
//!
//! ```ignore
//! use pointclick_nav::prelude::*;
//!
//! let scenes = SceneRegistry::new();
//! let waypoints = WaypointRegistry::from_scene(scene_waypoints);
//! let mut choreographer = Choreographer::new(
//!     &scenes,
//!     "gallery",
//!     ChoreographerConfig::default(),
//!     waypoints,
//!     agent,
//!     rig,
//! )?;
//! choreographer.start();
//!
//! // Every frame, after the agent has moved:
//! choreographer.update(delta_time);
//! ```
//!
//! The host ticks its navigation agent before the choreographer so that
//! path telemetry read during `update` reflects the current frame.

pub mod agent;
pub mod choreographer;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod input;
pub mod marker;
pub mod registry;
pub mod rig;
pub mod scene;
pub mod waypoint;

pub mod prelude {
    pub use crate::agent::{NavPath, NavigationAgent, SimulatedAgent};
    pub use crate::choreographer::{Choreographer, ChoreographyState, WalkSession};
    pub use crate::config::ChoreographerConfig;
    pub use crate::diagnostics::PanDiagnostics;
    pub use crate::error::{NavigationError, Result};
    pub use crate::events::{
        ListenerId, WalkEvent, WalkEventCollector, WalkEventType, WalkListener,
    };
    pub use crate::input::{Platform, PointerEvent};
    pub use crate::marker::{Color, HoverListener, Marker, MarkerState};
    pub use crate::registry::{HoverSelection, WaypointRegistry};
    pub use crate::rig::{CameraRig, SimulatedRig};
    pub use crate::scene::{SceneRegistry, SceneSlot};
    pub use crate::waypoint::{Waypoint, WaypointId};
}

pub use prelude::*;
