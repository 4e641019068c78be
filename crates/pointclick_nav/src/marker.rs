//! Waypoint markers
//!
//! A marker is the visual affordance of a waypoint. It has two display
//! states and reacts to the pointer entering or leaving its hit region by
//! switching state and notifying a [`HoverListener`].

use crate::waypoint::WaypointId;
use serde::{Deserialize, Serialize};

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Create a color from components
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Display state of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarkerState {
    #[default]
    Default,
    Highlighted,
}

/// Receives hover notifications from markers
pub trait HoverListener {
    /// The pointer entered the marker of `waypoint`
    fn hover_entered(&mut self, waypoint: WaypointId);

    /// The pointer left a marker. `source` is the marker's owning waypoint.
    fn hover_exited(&mut self, source: Option<WaypointId>);
}

/// Visual highlight affordance attached to a waypoint
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    state: MarkerState,
    default_color: Color,
    highlight_color: Color,
    visible: bool,
    owner: Option<WaypointId>,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            state: MarkerState::Default,
            default_color: Color::rgba(1.0, 1.0, 1.0, 0.4),
            highlight_color: Color::WHITE,
            visible: true,
            owner: None,
        }
    }
}

impl Marker {
    /// Create a marker with the default colors
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color shown while not hovered
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Set the color shown while hovered
    pub fn with_highlight_color(mut self, color: Color) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn state(&self) -> MarkerState {
        self.state
    }

    pub fn is_highlighted(&self) -> bool {
        self.state == MarkerState::Highlighted
    }

    pub fn default_color(&self) -> Color {
        self.default_color
    }

    pub fn set_default_color(&mut self, color: Color) {
        self.default_color = color;
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// Color for the current display state
    pub fn current_color(&self) -> Color {
        match self.state {
            MarkerState::Default => self.default_color,
            MarkerState::Highlighted => self.highlight_color,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Waypoint that owns this marker
    pub fn owner(&self) -> Option<WaypointId> {
        self.owner
    }

    pub(crate) fn attach(&mut self, owner: WaypointId) {
        self.owner = Some(owner);
    }

    pub fn highlight(&mut self) {
        self.state = MarkerState::Highlighted;
    }

    pub fn unhighlight(&mut self) {
        self.state = MarkerState::Default;
    }

    /// Pointer entered the hit region
    pub fn on_pointer_enter(&mut self, listener: &mut dyn HoverListener) {
        self.highlight();
        // An unowned marker still highlights but selects nothing
        if let Some(owner) = self.owner {
            listener.hover_entered(owner);
        }
    }

    /// Pointer left the hit region
    pub fn on_pointer_exit(&mut self, listener: &mut dyn HoverListener) {
        self.unhighlight();
        listener.hover_exited(self.owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        entered: Vec<WaypointId>,
        exited: Vec<Option<WaypointId>>,
    }

    impl HoverListener for Recorder {
        fn hover_entered(&mut self, waypoint: WaypointId) {
            self.entered.push(waypoint);
        }

        fn hover_exited(&mut self, source: Option<WaypointId>) {
            self.exited.push(source);
        }
    }

    #[test]
    fn test_marker_starts_in_default_state() {
        let marker = Marker::new();
        assert_eq!(marker.state(), MarkerState::Default);
        assert_eq!(marker.current_color(), Color::rgba(1.0, 1.0, 1.0, 0.4));
    }

    #[test]
    fn test_highlight_switches_color() {
        let mut marker = Marker::new().with_highlight_color(Color::rgba(1.0, 0.0, 0.0, 1.0));
        marker.highlight();
        assert!(marker.is_highlighted());
        assert_eq!(marker.current_color(), Color::rgba(1.0, 0.0, 0.0, 1.0));

        marker.unhighlight();
        assert_eq!(marker.state(), MarkerState::Default);
    }

    #[test]
    fn test_pointer_enter_notifies_owner() {
        let owner = WaypointId::new();
        let mut marker = Marker::new();
        marker.attach(owner);

        let mut recorder = Recorder::default();
        marker.on_pointer_enter(&mut recorder);
        assert!(marker.is_highlighted());
        assert_eq!(recorder.entered, vec![owner]);

        marker.on_pointer_exit(&mut recorder);
        assert!(!marker.is_highlighted());
        assert_eq!(recorder.exited, vec![Some(owner)]);
    }

    #[test]
    fn test_unowned_marker_enter_is_noop() {
        let mut marker = Marker::new();
        let mut recorder = Recorder::default();
        marker.on_pointer_enter(&mut recorder);

        assert!(marker.is_highlighted());
        assert!(recorder.entered.is_empty());
    }
}
