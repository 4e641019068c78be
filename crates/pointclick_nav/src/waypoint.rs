//! Waypoints - clickable navigation destinations

use crate::marker::Marker;
use pointclick_math::Vec3;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique waypoint identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaypointId(u64);

impl WaypointId {
    /// Allocate a new unique ID
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for WaypointId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "waypoint#{}", self.0)
    }
}

/// A destination the player can be sent to
#[derive(Debug, Clone)]
pub struct Waypoint {
    id: WaypointId,
    name: String,
    position: Vec3,
    marker: Option<Marker>,
    show_marker: bool,
    /// Inactive waypoints are skipped when the registry is built
    active: bool,
    /// Whether the marker hit region responds to the pointer
    interactable: bool,
}

impl Waypoint {
    /// Create a waypoint without a marker
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            id: WaypointId::new(),
            name: name.into(),
            position,
            marker: None,
            show_marker: true,
            active: true,
            interactable: true,
        }
    }

    /// Attach a marker, taking ownership of it
    pub fn with_marker(mut self, mut marker: Marker) -> Self {
        marker.attach(self.id);
        marker.set_visible(self.show_marker);
        self.marker = Some(marker);
        self
    }

    /// Set whether the marker is shown
    pub fn with_show_marker(mut self, show: bool) -> Self {
        self.set_show_marker(show);
        self
    }

    /// Set whether the waypoint is active in the scene
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id(&self) -> WaypointId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn marker_mut(&mut self) -> Option<&mut Marker> {
        self.marker.as_mut()
    }

    pub fn show_marker(&self) -> bool {
        self.show_marker
    }

    /// Show or hide the marker; the marker's visibility always follows this flag
    pub fn set_show_marker(&mut self, show: bool) {
        self.show_marker = show;
        if let Some(marker) = self.marker.as_mut() {
            marker.set_visible(show);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    pub(crate) fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }
}
