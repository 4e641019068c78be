//! Navigation and camera choreography
//!
//! The choreographer owns one walk session at a time. A session moves
//! through a small state machine that is advanced once per rendered frame
//! by [`Choreographer::update`]:
//!
//! ```text
//!   Idle ──walk──▶ Arming ──1 tick──▶ Walking ──near + target──▶ Converging
//!    ▲                                  │  ▲ (aim along velocity)      │
//!    │                                  │  └──────────┘                │
//!    └────────────── no path ───────────┘                              │
//!    └─────────────────────────── camera settled ◀─────────────────────┘
//! ```
//!
//! While a session is active the choreographer has exclusive control of the
//! agent destination and the rig's recentering and pan axes. Waypoints are
//! made non-interactable before the destination is issued, so no second
//! request can be produced until the session completes.

use crate::agent::NavigationAgent;
use crate::config::{clamp_sensitivity, ChoreographerConfig};
use crate::diagnostics::PanDiagnostics;
use crate::error::Result;
use crate::events::{ListenerId, WalkListener, WalkListeners};
use crate::input::{Platform, PointerEvent};
use crate::registry::WaypointRegistry;
use crate::rig::CameraRig;
use crate::scene::{SceneRegistry, SceneSlot};
use crate::waypoint::WaypointId;
use pointclick_math::{compare_vectors, Vec2, Vec3};

/// Choreography state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoreographyState {
    /// Nothing in flight
    Idle,
    /// Destination issued; waiting one tick for the agent to build its path
    Arming,
    /// Following the agent, aiming the camera along the direction of travel
    Walking,
    /// Camera is being recentered on a fixed look direction
    Converging,
}

/// The active walk request
#[derive(Debug, Clone, PartialEq)]
pub struct WalkSession {
    /// Destination waypoint
    pub destination: WaypointId,
    /// Point above the destination the camera aims from while walking
    pub elevated_destination: Vec3,
    /// Tick on which the session was accepted
    pub started_tick: u64,
}

/// Whether a state handler yields the rest of the tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Yield,
}

/// Drives player walks and the camera that follows them
pub struct Choreographer<A, R>
where
    A: NavigationAgent,
    R: CameraRig,
{
    agent: A,
    rig: R,
    waypoints: WaypointRegistry,
    listeners: WalkListeners,

    state: ChoreographyState,
    previous: Option<ChoreographyState>,
    session: Option<WalkSession>,
    walking: bool,

    look_at_target: Option<Vec3>,
    look_at_transition_distance: f32,
    camera_recentering_height: f32,
    camera_pan_sensitivity: f32,
    convergence_threshold: f32,
    platform: Platform,

    navigation_enabled: bool,
    panning_enabled: bool,
    recentering: bool,
    /// Set when the application regains focus; the next pan is dropped
    focus_gained_frame: bool,

    last_pan_input: Vec2,
    last_pan_applied: Vec2,
    tick: u64,

    slot: SceneSlot,
}

impl<A, R> Choreographer<A, R>
where
    A: NavigationAgent,
    R: CameraRig,
{
    /// Create the choreographer for `scene`
    ///
    /// Fails if the scene already has a choreographer or the config is invalid.
    pub fn new(
        scenes: &SceneRegistry,
        scene: &str,
        config: ChoreographerConfig,
        waypoints: WaypointRegistry,
        agent: A,
        mut rig: R,
    ) -> Result<Self> {
        config.validate()?;
        let slot = scenes.claim(scene)?;

        rig.set_look_at(config.look_at_target);

        log::debug!(
            "Choreographer created for scene '{}' with {} waypoints",
            scene,
            waypoints.len()
        );

        Ok(Self {
            agent,
            rig,
            waypoints,
            listeners: WalkListeners::new(),
            state: ChoreographyState::Idle,
            previous: None,
            session: None,
            walking: false,
            look_at_target: config.look_at_target,
            look_at_transition_distance: config.look_at_transition_distance,
            camera_recentering_height: config.camera_recentering_height,
            camera_pan_sensitivity: clamp_sensitivity(config.camera_pan_sensitivity),
            convergence_threshold: config.convergence_threshold,
            platform: config.platform,
            navigation_enabled: true,
            panning_enabled: true,
            recentering: false,
            focus_gained_frame: false,
            last_pan_input: Vec2::ZERO,
            last_pan_applied: Vec2::ZERO,
            tick: 0,
            slot,
        })
    }

    /// Reset markers and orient the camera for the first frame
    pub fn start(&mut self) {
        self.waypoints.start();
        match self.look_at_target {
            Some(target) => {
                self.look_at(target);
            }
            None => self.set_recentering(false),
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Walk to a registered waypoint
    ///
    /// Returns `false` when the request is ignored: a session is already
    /// active or the waypoint is not registered.
    pub fn walk(&mut self, destination: WaypointId) -> bool {
        if self.walking {
            log::debug!("Ignoring walk to {}: a walk is in progress", destination);
            return false;
        }

        let Some(position) = self.waypoints.get(destination).map(|w| w.position()) else {
            log::warn!("Ignoring walk to {}: not a registered waypoint", destination);
            return false;
        };

        self.walking = true;
        self.waypoints.set_interactable(false);

        if let Some(waypoint) = self.waypoints.get(destination) {
            log::info!("Walk started to '{}'", waypoint.name());
            self.listeners.notify_started(waypoint);
        }

        self.agent.set_destination(position);
        self.session = Some(WalkSession {
            destination,
            elevated_destination: position.with_y(self.camera_recentering_height),
            started_tick: self.tick,
        });
        self.transition(ChoreographyState::Arming);
        true
    }

    /// Turn the camera toward `target` without moving the player
    ///
    /// Ignored while a walk is in progress.
    pub fn look_at(&mut self, target: Vec3) -> bool {
        if self.walking {
            log::warn!("Ignoring look-at request while the player is walking");
            return false;
        }

        self.rig.set_look_at(Some(target));
        let origin = self.rig.camera_position();
        self.set_recenter_vector(target, origin);
        self.set_recentering(true);
        self.transition(ChoreographyState::Converging);
        true
    }

    /// Enable or disable navigation by toggling waypoint interactability
    pub fn enable_navigation(&mut self, enable: bool) {
        log::info!("Navigation {}", if enable { "enabled" } else { "disabled" });
        self.navigation_enabled = enable;
        self.waypoints.set_interactable(enable);
    }

    /// Enable or disable camera panning and zooming
    pub fn enable_camera_pan_and_zoom(&mut self, enable: bool) {
        if !enable {
            self.stop_camera_panning();
        }
        self.panning_enabled = enable;
        self.rig.set_zoom_enabled(enable);
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Pointer entered the marker of a waypoint
    pub fn pointer_enter(&mut self, waypoint: WaypointId) {
        self.waypoints.pointer_enter(waypoint);
    }

    /// Pointer left the marker of a waypoint
    pub fn pointer_exit(&mut self, waypoint: WaypointId) {
        self.waypoints.pointer_exit(waypoint);
    }

    /// Feed a classified pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::MouseHold { delta } => self.handle_camera_panning(delta),
            PointerEvent::ShortClick | PointerEvent::LongClick => {
                self.stop_camera_panning();
                if let Some(destination) = self.waypoints.handle_pointer(&event) {
                    self.walk(destination);
                }
            }
        }
    }

    /// Application focus changed
    pub fn focus_changed(&mut self, gained: bool) {
        if gained {
            self.focus_gained_frame = true;
        }
    }

    // ------------------------------------------------------------------
    // Per-tick update
    // ------------------------------------------------------------------

    /// Advance the choreography by one tick
    pub fn update(&mut self, _delta_time: f32) {
        self.tick += 1;

        loop {
            let step = match self.state {
                ChoreographyState::Idle => Step::Yield,
                ChoreographyState::Arming => self.begin_walking(),
                ChoreographyState::Walking => self.step_walking(),
                ChoreographyState::Converging => self.step_converging(),
            };

            if step == Step::Yield {
                break;
            }
        }
    }

    fn begin_walking(&mut self) -> Step {
        self.enable_camera_pan_and_zoom(false);
        self.set_recentering(true);
        self.transition(ChoreographyState::Walking);
        Step::Continue
    }

    fn step_walking(&mut self) -> Step {
        let Some(elevated) = self.session.as_ref().map(|s| s.elevated_destination) else {
            self.finish_session();
            return Step::Yield;
        };

        if !self.agent.has_path() {
            self.finish_session();
            return Step::Yield;
        }

        if self.agent.remaining_distance() <= self.look_at_transition_distance {
            // Without a target, keep going until the agent drops its path
            if let Some(target) = self.look_at_target {
                self.set_recenter_vector(target, elevated);
                self.set_recentering(true);
                self.transition(ChoreographyState::Converging);
            }
            return Step::Yield;
        }

        let ahead = elevated + self.agent.desired_velocity();
        self.set_recenter_vector(ahead, elevated);
        Step::Yield
    }

    fn step_converging(&mut self) -> Step {
        if !self.camera_converged() {
            return Step::Yield;
        }

        self.set_recentering(false);
        if self.session.is_some() {
            self.finish_session();
        } else {
            self.transition(ChoreographyState::Idle);
        }
        Step::Yield
    }

    fn finish_session(&mut self) {
        self.set_recentering(false);
        if self.navigation_enabled {
            self.enable_camera_pan_and_zoom(true);
        }

        if let Some(session) = self.session.take() {
            if let Some(waypoint) = self.waypoints.get(session.destination) {
                log::info!(
                    "Walk completed at '{}' after {} ticks",
                    waypoint.name(),
                    self.tick - session.started_tick
                );
                self.listeners.notify_completed(waypoint);
            }
        }

        if self.navigation_enabled {
            self.waypoints.set_interactable(true);
        }
        self.walking = false;
        self.transition(ChoreographyState::Idle);
    }

    fn transition(&mut self, next: ChoreographyState) {
        if next != self.state {
            log::debug!("Choreography {:?} -> {:?}", self.state, next);
        }
        self.previous = Some(self.state);
        self.state = next;
    }

    // ------------------------------------------------------------------
    // Camera helpers
    // ------------------------------------------------------------------

    /// Point the follow transform along `endpoint - origin`
    fn set_recenter_vector(&mut self, endpoint: Vec3, origin: Vec3) {
        let forward = (endpoint - origin).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        self.rig.set_follow_forward(forward);
    }

    fn set_recentering(&mut self, recenter: bool) {
        self.recentering = recenter;
        self.rig.set_horizontal_recentering(recenter);
        self.rig.set_vertical_recentering(recenter);
    }

    fn camera_converged(&self) -> bool {
        compare_vectors(
            self.rig.follow_forward().normalize_or_zero(),
            self.rig.camera_forward().normalize_or_zero(),
            self.convergence_threshold,
        )
    }

    fn handle_camera_panning(&mut self, delta: Vec2) {
        if !self.panning_enabled || self.recentering {
            return;
        }

        // Skip this frame to avoid the camera jumping when focus is regained
        if self.focus_gained_frame {
            self.focus_gained_frame = false;
            return;
        }

        let modifier = self.camera_pan_sensitivity * self.platform.sensitivity_modifier();
        let applied = Vec2::new(-delta.x * modifier, delta.y * modifier);

        let horizontal = self.rig.horizontal_axis();
        self.rig.set_horizontal_axis(horizontal + applied.x);
        let vertical = self.rig.vertical_axis();
        self.rig.set_vertical_axis(vertical + applied.y);

        self.last_pan_input = delta;
        self.last_pan_applied = applied;
    }

    fn stop_camera_panning(&mut self) {
        self.rig.reset_input_axes();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// True from an accepted walk request until its completion notification
    pub fn is_player_walking(&self) -> bool {
        self.walking
    }

    pub fn state(&self) -> ChoreographyState {
        self.state
    }

    pub fn previous_state(&self) -> Option<ChoreographyState> {
        self.previous
    }

    pub fn is_in(&self, state: ChoreographyState) -> bool {
        self.state == state
    }

    pub fn session(&self) -> Option<&WalkSession> {
        self.session.as_ref()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn scene(&self) -> &str {
        self.slot.scene()
    }

    pub fn camera_pan_sensitivity(&self) -> f32 {
        self.camera_pan_sensitivity
    }

    /// Set the pan sensitivity, clamped to [0.1, 4.0]. Non-finite values are rejected.
    pub fn set_camera_pan_sensitivity(&mut self, sensitivity: f32) -> bool {
        if !sensitivity.is_finite() {
            log::warn!(
                "Camera pan sensitivity must be a finite value (got {})",
                sensitivity
            );
            return false;
        }
        self.camera_pan_sensitivity = clamp_sensitivity(sensitivity);
        true
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn platform_sensitivity_modifier(&self) -> f32 {
        self.platform.sensitivity_modifier()
    }

    pub fn look_at_target(&self) -> Option<Vec3> {
        self.look_at_target
    }

    /// Set where the camera looks after each walk; also updates the rig's look-at slot
    pub fn set_look_at_target(&mut self, target: Option<Vec3>) {
        self.look_at_target = target;
        self.rig.set_look_at(target);
    }

    pub fn look_at_transition_distance(&self) -> f32 {
        self.look_at_transition_distance
    }

    /// Set the look-at transition distance. Negative values are rejected.
    pub fn set_look_at_transition_distance(&mut self, distance: f32) -> bool {
        if distance.is_nan() || distance < 0.0 {
            log::warn!(
                "Minimum distance to look at should be a positive value (got {})",
                distance
            );
            return false;
        }
        self.look_at_transition_distance = distance;
        true
    }

    pub fn camera_recentering_height(&self) -> f32 {
        self.camera_recentering_height
    }

    pub fn convergence_threshold(&self) -> f32 {
        self.convergence_threshold
    }

    pub fn is_navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    pub fn is_panning_enabled(&self) -> bool {
        self.panning_enabled
    }

    pub fn is_recentering(&self) -> bool {
        self.recentering
    }

    pub fn waypoints(&self) -> &WaypointRegistry {
        &self.waypoints
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    pub fn rig(&self) -> &R {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut R {
        &mut self.rig
    }

    /// Register a walk listener
    pub fn add_listener(&mut self, listener: Box<dyn WalkListener>) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Revoke a walk listener
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Snapshot of the pan sensitivity pipeline
    pub fn pan_diagnostics(&self) -> PanDiagnostics {
        PanDiagnostics {
            raw_sensitivity: self.camera_pan_sensitivity,
            platform_modifier: self.platform.sensitivity_modifier(),
            last_input: self.last_pan_input,
            last_applied: self.last_pan_applied,
        }
    }
}
