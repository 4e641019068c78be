//! Camera rig boundary
//!
//! The rig is a point-of-view camera driven by two pan axes (yaw and pitch,
//! in degrees). It owns a `follow` transform whose forward vector is the
//! recentering target; while recentering is enabled the rig rotates the
//! camera toward that direction on its own.

use pointclick_math::{degrees, delta_angle, radians, Vec3};

/// Point-of-view camera rig driven by the choreographer
pub trait CameraRig {
    /// World position of the camera
    fn camera_position(&self) -> Vec3;

    /// Actual look direction of the camera
    fn camera_forward(&self) -> Vec3;

    /// Forward vector of the follow transform (the recenter target)
    fn follow_forward(&self) -> Vec3;

    fn set_follow_forward(&mut self, forward: Vec3);

    /// Point the rig's look-at slot at a target, or clear it
    fn set_look_at(&mut self, target: Option<Vec3>);

    fn set_horizontal_recentering(&mut self, enabled: bool);

    fn set_vertical_recentering(&mut self, enabled: bool);

    fn horizontal_axis(&self) -> f32;

    fn set_horizontal_axis(&mut self, value: f32);

    fn vertical_axis(&self) -> f32;

    fn set_vertical_axis(&mut self, value: f32);

    /// Zero any pending raw pan input on both axes
    fn reset_input_axes(&mut self);

    fn set_zoom_enabled(&mut self, enabled: bool);
}

/// Direction for a yaw/pitch pair in degrees. Yaw 0 faces +Z, positive pitch looks up.
pub fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (radians(yaw), radians(pitch));
    Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
}

/// Yaw/pitch in degrees for a direction, or `None` for a zero vector
pub fn angles_from_direction(direction: Vec3) -> Option<(f32, f32)> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }
    let yaw = degrees(direction.x.atan2(direction.z));
    let pitch = degrees(direction.y.clamp(-1.0, 1.0).asin());
    Some((yaw, pitch))
}

/// Self-contained POV rig with exponential recentering
#[derive(Debug, Clone)]
pub struct SimulatedRig {
    position: Vec3,
    follow_forward: Vec3,
    look_at: Option<Vec3>,
    /// Yaw in degrees
    horizontal_axis: f32,
    /// Pitch in degrees
    vertical_axis: f32,
    horizontal_input: f32,
    vertical_input: f32,
    horizontal_recentering: bool,
    vertical_recentering: bool,
    zoom_enabled: bool,
    /// Recentering time constant in seconds (0 = instant)
    pub recenter_time: f32,
    /// Degrees per second for a raw input value of 1
    pub input_speed: f32,
    /// Pitch limits (min, max in degrees)
    pub pitch_limits: (f32, f32),
}

impl Default for SimulatedRig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            follow_forward: Vec3::Z,
            look_at: None,
            horizontal_axis: 0.0,
            vertical_axis: 0.0,
            horizontal_input: 0.0,
            vertical_input: 0.0,
            horizontal_recentering: false,
            vertical_recentering: false,
            zoom_enabled: true,
            recenter_time: 0.2,
            input_speed: 300.0,
            pitch_limits: (-85.0, 85.0),
        }
    }
}

impl SimulatedRig {
    /// Create a rig at `position` looking down +Z
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the recentering time constant
    pub fn with_recenter_time(mut self, seconds: f32) -> Self {
        self.recenter_time = seconds;
        self
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn look_at(&self) -> Option<Vec3> {
        self.look_at
    }

    pub fn is_recentering(&self) -> bool {
        self.horizontal_recentering || self.vertical_recentering
    }

    pub fn is_zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    /// Raw input values (horizontal, vertical)
    pub fn input_axes(&self) -> (f32, f32) {
        (self.horizontal_input, self.vertical_input)
    }

    /// Feed raw drag input, consumed on every update until reset
    pub fn feed_input(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal_input = horizontal;
        self.vertical_input = vertical;
    }

    /// Advance input and recentering by one tick
    pub fn update(&mut self, delta_time: f32) {
        self.horizontal_axis += self.horizontal_input * self.input_speed * delta_time;
        self.vertical_axis += self.vertical_input * self.input_speed * delta_time;

        if let Some((target_yaw, target_pitch)) = angles_from_direction(self.follow_forward) {
            let t = if self.recenter_time > 0.0 {
                1.0 - (-delta_time / self.recenter_time).exp()
            } else {
                1.0
            };

            if self.horizontal_recentering {
                self.horizontal_axis += delta_angle(self.horizontal_axis, target_yaw) * t;
            }
            if self.vertical_recentering {
                self.vertical_axis += (target_pitch - self.vertical_axis) * t;
            }
        }

        self.vertical_axis = self.vertical_axis.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }
}

impl CameraRig for SimulatedRig {
    fn camera_position(&self) -> Vec3 {
        self.position
    }

    fn camera_forward(&self) -> Vec3 {
        direction_from_angles(self.horizontal_axis, self.vertical_axis)
    }

    fn follow_forward(&self) -> Vec3 {
        self.follow_forward
    }

    fn set_follow_forward(&mut self, forward: Vec3) {
        self.follow_forward = forward.normalize_or_zero();
    }

    fn set_look_at(&mut self, target: Option<Vec3>) {
        self.look_at = target;
    }

    fn set_horizontal_recentering(&mut self, enabled: bool) {
        self.horizontal_recentering = enabled;
    }

    fn set_vertical_recentering(&mut self, enabled: bool) {
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
        self.vertical_axis = value.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    fn reset_input_axes(&mut self) {
        self.horizontal_input = 0.0;
        self.vertical_input = 0.0;
    }

    fn set_zoom_enabled(&mut self, enabled: bool) {
        self.zoom_enabled = enabled;
    }
}
