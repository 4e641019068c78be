//! Journaling collaborators shared by the integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use pointclick_nav::prelude::*;
use pointclick_math::Vec3;
use std::sync::Arc;

/// A call observed on one of the collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetDestination(Vec3),
    SetFollowForward(Vec3),
    SetLookAt(Option<Vec3>),
    HorizontalRecentering(bool),
    VerticalRecentering(bool),
    ResetInputAxes,
    Zoom(bool),
    WalkStarted(String),
    WalkCompleted(String),
}

impl Call {
    /// Whether this call changes how the camera recenters
    pub fn is_recenter_mutation(&self) -> bool {
        matches!(
            self,
            Call::SetFollowForward(_) | Call::HorizontalRecentering(_) | Call::VerticalRecentering(_)
        )
    }
}

/// Shared, ordered record of calls across all collaborators
#[derive(Debug, Clone, Default)]
pub struct Journal {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.calls.lock().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| predicate(*c)).count()
    }

    pub fn position(&self, predicate: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.lock().iter().position(|c| predicate(c))
    }
}

/// Agent whose telemetry is scripted by the test
#[derive(Debug)]
pub struct MockAgent {
    journal: Journal,
    pub has_path: bool,
    pub remaining: f32,
    pub velocity: Vec3,
    /// Remaining distance reported right after a destination is issued
    pub initial_remaining: f32,
}

impl MockAgent {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            has_path: false,
            remaining: 0.0,
            velocity: Vec3::ZERO,
            initial_remaining: 10.0,
        }
    }

    /// Report arrival
    pub fn arrive(&mut self) {
        self.has_path = false;
        self.remaining = 0.0;
        self.velocity = Vec3::ZERO;
    }
}

impl NavigationAgent for MockAgent {
    fn set_destination(&mut self, position: Vec3) {
        self.journal.push(Call::SetDestination(position));
        self.has_path = true;
        self.remaining = self.initial_remaining;
        self.velocity = Vec3::Z;
    }

    fn has_path(&self) -> bool {
        self.has_path
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
    }

    fn desired_velocity(&self) -> Vec3 {
        self.velocity
    }
}

/// Rig that journals every mutation; the camera forward is set by the test
#[derive(Debug)]
pub struct MockRig {
    journal: Journal,
    pub position: Vec3,
    pub camera_forward: Vec3,
    pub follow_forward: Vec3,
    pub horizontal_axis: f32,
    pub vertical_axis: f32,
    pub horizontal_recentering: bool,
    pub vertical_recentering: bool,
    pub zoom_enabled: bool,
}

impl MockRig {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            position: Vec3::new(0.0, 1.6, 0.0),
            camera_forward: Vec3::Z,
            follow_forward: Vec3::Z,
            horizontal_axis: 0.0,
            vertical_axis: 0.0,
            horizontal_recentering: false,
            vertical_recentering: false,
            zoom_enabled: true,
        }
    }

    /// Snap the camera onto the current recenter target
    pub fn settle(&mut self) {
        self.camera_forward = self.follow_forward;
    }
}

impl CameraRig for MockRig {
    fn camera_position(&self) -> Vec3 {
        self.position
    }

    fn camera_forward(&self) -> Vec3 {
        self.camera_forward
    }

    fn follow_forward(&self) -> Vec3 {
        self.follow_forward
    }

    fn set_follow_forward(&mut self, forward: Vec3) {
        self.journal.push(Call::SetFollowForward(forward));
        self.follow_forward = forward;
    }

    fn set_look_at(&mut self, target: Option<Vec3>) {
        self.journal.push(Call::SetLookAt(target));
    }

    fn set_horizontal_recentering(&mut self, enabled: bool) {
        self.journal.push(Call::HorizontalRecentering(enabled));
        self.horizontal_recentering = enabled;
    }

    fn set_vertical_recentering(&mut self, enabled: bool) {
        self.journal.push(Call::VerticalRecentering(enabled));
        self.vertical_recentering = enabled;
    }

    fn horizontal_axis(&self) -> f32 {
        self.horizontal_axis
    }

    fn set_horizontal_axis(&mut self, value: f32) {
        self.horizontal_axis = value;
    }

    fn vertical_axis(&self) -> f32 {
        self.vertical_axis
    }

    fn set_vertical_axis(&mut self, value: f32) {
        self.vertical_axis = value;
    }

    fn reset_input_axes(&mut self) {
        self.journal.push(Call::ResetInputAxes);
    }

    fn set_zoom_enabled(&mut self, enabled: bool) {
        self.journal.push(Call::Zoom(enabled));
        self.zoom_enabled = enabled;
    }
}

/// Listener that writes walk notifications into the journal
pub struct JournalListener {
    journal: Journal,
}

impl JournalListener {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl WalkListener for JournalListener {
    fn walk_started(&mut self, destination: &Waypoint) {
        self.journal
            .push(Call::WalkStarted(destination.name().to_string()));
    }

    fn walk_completed(&mut self, destination: &Waypoint) {
        self.journal
            .push(Call::WalkCompleted(destination.name().to_string()));
    }
}

pub type MockChoreographer = Choreographer<MockAgent, MockRig>;

/// Gallery scene with two marked waypoints and one unmarked one
pub fn gallery() -> Vec<Waypoint> {
    vec![
        Waypoint::new("entrance", Vec3::new(0.0, 0.0, 4.0)).with_marker(Marker::new()),
        Waypoint::new("statue", Vec3::new(3.0, 0.0, 10.0)).with_marker(Marker::new()),
        Waypoint::new("balcony", Vec3::new(-4.0, 2.0, 6.0)),
    ]
}

/// Choreographer over mocks, with a journal listener already registered
pub fn mock_choreographer(
    scenes: &SceneRegistry,
    config: ChoreographerConfig,
) -> (MockChoreographer, Journal) {
    let journal = Journal::new();
    let mut choreographer = Choreographer::new(
        scenes,
        "gallery",
        config,
        WaypointRegistry::from_scene(gallery()),
        MockAgent::new(journal.clone()),
        MockRig::new(journal.clone()),
    )
    .unwrap();
    choreographer.add_listener(Box::new(JournalListener::new(journal.clone())));
    journal.clear();
    (choreographer, journal)
}

pub fn waypoint(choreographer: &MockChoreographer, name: &str) -> WaypointId {
    choreographer.waypoints().find_by_name(name).unwrap().id()
}

/// Hover the marker of `name` and click it
pub fn click(choreographer: &mut MockChoreographer, name: &str) {
    let id = waypoint(choreographer, name);
    choreographer.pointer_enter(id);
    choreographer.handle_pointer(PointerEvent::ShortClick);
}
