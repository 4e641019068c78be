//! Navigation agent boundary
//!
//! Path computation and steering live outside this crate. The choreographer
//! only issues a destination and reads back per-tick telemetry through
//! [`NavigationAgent`]. [`SimulatedAgent`] is a straight-line stand-in used by
//! the headless simulation and the tests.

use pointclick_math::Vec3;

/// Path-following telemetry provider
pub trait NavigationAgent {
    /// Start moving toward `position`
    fn set_destination(&mut self, position: Vec3);

    /// Whether a path is being followed. False once arrived or unreachable.
    fn has_path(&self) -> bool;

    /// Distance left along the current path
    fn remaining_distance(&self) -> f32;

    /// Velocity the agent wants to move at this tick
    fn desired_velocity(&self) -> Vec3;
}

/// A path as an ordered list of corners
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavPath {
    /// Corners along the path
    pub corners: Vec<Vec3>,
    /// Index of the corner currently steered toward
    pub current_index: usize,
}

impl NavPath {
    /// Direct path between two points
    pub fn straight(start: Vec3, end: Vec3) -> Self {
        Self {
            corners: vec![start, end],
            current_index: 1,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.corners.len()
    }

    pub fn current_corner(&self) -> Option<Vec3> {
        self.corners.get(self.current_index).copied()
    }

    pub fn advance(&mut self) {
        if self.current_index < self.corners.len() {
            self.current_index += 1;
        }
    }

    /// Distance from `position` through the remaining corners
    pub fn remaining_distance_from(&self, position: Vec3) -> f32 {
        let Some(next) = self.current_corner() else {
            return 0.0;
        };

        let mut distance = position.distance(next);
        for i in self.current_index..self.corners.len() - 1 {
            distance += self.corners[i].distance(self.corners[i + 1]);
        }
        distance
    }
}

/// Straight-line agent that walks at constant speed
#[derive(Debug, Clone)]
pub struct SimulatedAgent {
    position: Vec3,
    speed: f32,
    arrival_threshold: f32,
    path: Option<NavPath>,
    desired_velocity: Vec3,
}

impl SimulatedAgent {
    /// Create an agent at `position` moving at `speed` units per second
    pub fn new(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            speed,
            arrival_threshold: 0.05,
            path: None,
            desired_velocity: Vec3::ZERO,
        }
    }

    /// Set how close counts as arrived
    pub fn with_arrival_threshold(mut self, threshold: f32) -> Self {
        self.arrival_threshold = threshold;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn path(&self) -> Option<&NavPath> {
        self.path.as_ref()
    }

    /// Drop the current path and stop
    pub fn clear_path(&mut self) {
        self.path = None;
        self.desired_velocity = Vec3::ZERO;
    }

    /// Move along the path for one tick
    pub fn update(&mut self, delta_time: f32) {
        let Some(path) = self.path.as_mut() else {
            return;
        };

        let Some(corner) = path.current_corner() else {
            self.clear_path();
            return;
        };

        let to_corner = corner - self.position;
        let distance = to_corner.length();

        if distance <= self.arrival_threshold {
            self.position = corner;
            path.advance();
            if path.is_complete() {
                self.clear_path();
            }
            return;
        }

        let step = (self.speed * delta_time).min(distance);
        let direction = to_corner / distance;
        self.desired_velocity = direction * self.speed;
        self.position += direction * step;
    }
}

impl NavigationAgent for SimulatedAgent {
    fn set_destination(&mut self, position: Vec3) {
        log::debug!("Agent heading from {:?} to {:?}", self.position, position);
        self.path = Some(NavPath::straight(self.position, position));
        let to_target = position - self.position;
        self.desired_velocity = to_target.normalize_or_zero() * self.speed;
    }

    fn has_path(&self) -> bool {
        self.path.is_some()
    }

    fn remaining_distance(&self) -> f32 {
        self.path
            .as_ref()
            .map(|path| path.remaining_distance_from(self.position))
            .unwrap_or(0.0)
    }

    fn desired_velocity(&self) -> Vec3 {
        self.desired_velocity
    }
}
