//! Walk session notifications

use crate::waypoint::{Waypoint, WaypointId};
use parking_lot::Mutex;
use pointclick_math::Vec3;
use std::sync::Arc;

/// Kind of walk notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEventType {
    Started,
    Completed,
}

/// A recorded walk notification
#[derive(Debug, Clone, PartialEq)]
pub struct WalkEvent {
    pub event_type: WalkEventType,
    pub waypoint: WaypointId,
    pub name: String,
    pub position: Vec3,
}

impl WalkEvent {
    fn new(event_type: WalkEventType, destination: &Waypoint) -> Self {
        Self {
            event_type,
            waypoint: destination.id(),
            name: destination.name().to_string(),
            position: destination.position(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.event_type == WalkEventType::Started
    }

    pub fn is_completed(&self) -> bool {
        self.event_type == WalkEventType::Completed
    }
}

/// Observer for walk session boundaries
pub trait WalkListener: Send {
    /// A session was accepted and the agent is about to receive its destination
    fn walk_started(&mut self, _destination: &Waypoint) {}

    /// The session finished, after the camera settled
    fn walk_completed(&mut self, _destination: &Waypoint) {}
}

/// Listener registration ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Ordered set of registered listeners
#[derive(Default)]
pub struct WalkListeners {
    listeners: Vec<(ListenerId, Box<dyn WalkListener>)>,
    next_id: u64,
}

impl WalkListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; notifications are delivered in registration order
    pub fn add(&mut self, listener: Box<dyn WalkListener>) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    /// Revoke a registration. Returns whether it existed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn notify_started(&mut self, destination: &Waypoint) {
        for (_, listener) in &mut self.listeners {
            listener.walk_started(destination);
        }
    }

    pub(crate) fn notify_completed(&mut self, destination: &Waypoint) {
        for (_, listener) in &mut self.listeners {
            listener.walk_completed(destination);
        }
    }
}

/// Listener that records every notification into a shared buffer
///
/// Clones share the same buffer, so one clone can be registered while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct WalkEventCollector {
    events: Arc<Mutex<Vec<WalkEvent>>>,
}

impl WalkEventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events
    pub fn events(&self) -> Vec<WalkEvent> {
        self.events.lock().clone()
    }

    pub fn started(&self) -> Vec<WalkEvent> {
        self.events.lock().iter().filter(|e| e.is_started()).cloned().collect()
    }

    pub fn completed(&self) -> Vec<WalkEvent> {
        self.events.lock().iter().filter(|e| e.is_completed()).cloned().collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl WalkListener for WalkEventCollector {
    fn walk_started(&mut self, destination: &Waypoint) {
        self.events
            .lock()
            .push(WalkEvent::new(WalkEventType::Started, destination));
    }

    fn walk_completed(&mut self, destination: &Waypoint) {
        self.events
            .lock()
            .push(WalkEvent::new(WalkEventType::Completed, destination));
    }
}
