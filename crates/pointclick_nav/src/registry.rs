//! Waypoint registry and hover selection
//!
//! The registry is a snapshot of every active waypoint taken once at
//! startup. It tracks which waypoint the pointer is currently over and turns
//! a short click on that waypoint into a navigation request.

use crate::input::PointerEvent;
use crate::marker::HoverListener;
use crate::waypoint::{Waypoint, WaypointId};

/// Tracks at most one hovered waypoint
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HoverSelection {
    current: Option<WaypointId>,
}

impl HoverSelection {
    pub fn current(&self) -> Option<WaypointId> {
        self.current
    }

    pub fn clear(&mut self) -> Option<WaypointId> {
        self.current.take()
    }
}

impl HoverListener for HoverSelection {
    fn hover_entered(&mut self, waypoint: WaypointId) {
        self.current = Some(waypoint);
    }

    fn hover_exited(&mut self, source: Option<WaypointId>) {
        if source.is_some() && source == self.current {
            self.current = None;
        } else {
            log::debug!("Ignoring stale hover exit from {:?}", source);
        }
    }
}

/// Immutable set of scene waypoints plus the hover state
#[derive(Debug)]
pub struct WaypointRegistry {
    waypoints: Vec<Waypoint>,
    selection: HoverSelection,
    interactable: bool,
}

impl WaypointRegistry {
    /// Capture the active waypoints of a scene
    pub fn from_scene(scene: impl IntoIterator<Item = Waypoint>) -> Self {
        let mut skipped = 0usize;
        let waypoints: Vec<Waypoint> = scene
            .into_iter()
            .filter(|waypoint| {
                let keep = waypoint.is_active();
                if !keep {
                    skipped += 1;
                }
                keep
            })
            .collect();

        log::debug!(
            "Registered {} waypoints ({} inactive skipped)",
            waypoints.len(),
            skipped
        );

        Self {
            waypoints,
            selection: HoverSelection::default(),
            interactable: true,
        }
    }

    /// Reset every marker to its default display state
    pub fn start(&mut self) {
        for waypoint in &mut self.waypoints {
            match waypoint.marker_mut() {
                Some(marker) => marker.unhighlight(),
                None => log::debug!("Waypoint '{}' has no marker", waypoint.name()),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WaypointId) -> Option<&mut Waypoint> {
        self.waypoints.iter_mut().find(|w| w.id() == id)
    }

    /// Find a waypoint by name
    pub fn find_by_name(&self, name: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.name() == name)
    }

    /// Currently hovered waypoint
    pub fn selected(&self) -> Option<WaypointId> {
        self.selection.current()
    }

    /// Whether waypoint hit regions currently respond to the pointer
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Pointer entered the marker of `id`
    pub fn pointer_enter(&mut self, id: WaypointId) {
        let Some(waypoint) = self.waypoints.iter_mut().find(|w| w.id() == id) else {
            return;
        };
        if !waypoint.is_interactable() {
            return;
        }
        if let Some(marker) = waypoint.marker_mut().filter(|m| m.is_visible()) {
            marker.on_pointer_enter(&mut self.selection);
        }
    }

    /// Pointer left the marker of `id`
    pub fn pointer_exit(&mut self, id: WaypointId) {
        let Some(waypoint) = self.waypoints.iter_mut().find(|w| w.id() == id) else {
            return;
        };
        if !waypoint.is_interactable() {
            return;
        }
        if let Some(marker) = waypoint.marker_mut().filter(|m| m.is_visible()) {
            marker.on_pointer_exit(&mut self.selection);
        }
    }

    /// Translate a classified pointer event into a navigation request
    pub fn handle_pointer(&self, event: &PointerEvent) -> Option<WaypointId> {
        match event {
            PointerEvent::ShortClick => self.selection.current(),
            _ => None,
        }
    }

    /// Toggle whether every waypoint responds to pointer input
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
        for waypoint in &mut self.waypoints {
            waypoint.set_interactable(interactable);
        }

        if !interactable {
            // A disabled hit region never reports the pointer leaving it
            if let Some(hovered) = self.selection.clear() {
                if let Some(marker) = self.get_mut(hovered).and_then(|w| w.marker_mut()) {
                    marker.unhighlight();
                }
            }
        }
    }
}
