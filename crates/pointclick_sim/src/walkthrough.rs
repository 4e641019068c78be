//! Scripted walkthrough
//!
//! Builds a choreographer over the simulated agent and rig, then clicks
//! through the route one stop at a time. Between stops the camera is dragged
//! around a little, including a focus loss, to exercise panning.

use crate::scene_file::SceneFile;
use pointclick_math::{Vec2, Vec3};
use pointclick_nav::prelude::*;

/// Give up on a walk after this many simulated seconds
const WALK_TIMEOUT_SECS: f32 = 120.0;

/// Frames spent dragging the camera between stops
const DRAG_FRAMES: usize = 20;

type SimChoreographer = Choreographer<SimulatedAgent, SimulatedRig>;

/// Outcome of one route stop
#[derive(Debug, Clone)]
pub struct Leg {
    pub destination: String,
    pub frames: usize,
    pub arrived_at: Vec3,
}

/// Outcome of the whole walkthrough
#[derive(Debug, Clone)]
pub struct Report {
    pub legs: Vec<Leg>,
    pub skipped: Vec<String>,
    pub diagnostics: PanDiagnostics,
}

impl Report {
    pub fn print(&self) {
        println!();
        println!("Walkthrough:");
        for leg in &self.legs {
            println!(
                "  {:<16} {:>5} frames   at ({:.2}, {:.2}, {:.2})",
                leg.destination, leg.frames, leg.arrived_at.x, leg.arrived_at.y, leg.arrived_at.z
            );
        }
        for name in &self.skipped {
            println!("  {:<16} skipped", name);
        }
        println!();
        println!("{}", self.diagnostics);
    }
}

/// Run the scene's route to completion
pub fn run(scene: &SceneFile) -> Result<Report> {
    let scenes = SceneRegistry::new();
    let waypoints = WaypointRegistry::from_scene(scene.waypoints.iter().map(|w| w.to_waypoint()));
    let agent = SimulatedAgent::new(Vec3::ZERO, scene.agent_speed);
    let rig = SimulatedRig::new(Vec3::new(0.0, scene.eye_height, 0.0));

    let mut choreographer = Choreographer::new(
        &scenes,
        &scene.name,
        scene.navigation.clone(),
        waypoints,
        agent,
        rig,
    )?;

    let collector = WalkEventCollector::new();
    choreographer.add_listener(Box::new(collector.clone()));
    choreographer.start();

    let dt = scene.frame_time();
    let max_frames = (WALK_TIMEOUT_SECS / dt) as usize;

    // Let the opening look-at settle
    settle(&mut choreographer, scene, max_frames);

    let mut legs = Vec::new();
    let mut skipped = Vec::new();

    for stop in &scene.route {
        let Some(id) = choreographer.waypoints().find_by_name(stop).map(|w| w.id()) else {
            log::warn!("Route stop '{}' is not an active waypoint", stop);
            skipped.push(stop.clone());
            continue;
        };

        choreographer.pointer_enter(id);
        choreographer.handle_pointer(PointerEvent::ShortClick);
        choreographer.pointer_exit(id);

        if !choreographer.is_player_walking() {
            log::warn!("Click on '{}' did not start a walk", stop);
            skipped.push(stop.clone());
            continue;
        }

        let mut frames = 0;
        while choreographer.is_player_walking() && frames < max_frames {
            step(&mut choreographer, scene);
            frames += 1;
        }

        if choreographer.is_player_walking() {
            log::error!("Walk to '{}' did not finish within {}s", stop, WALK_TIMEOUT_SECS);
            break;
        }

        legs.push(Leg {
            destination: stop.clone(),
            frames,
            arrived_at: choreographer.agent().position(),
        });

        drag_camera(&mut choreographer, scene);
    }

    log::info!(
        "Walkthrough finished: {} walks started, {} completed",
        collector.started().len(),
        collector.completed().len()
    );

    Ok(Report {
        legs,
        skipped,
        diagnostics: choreographer.pan_diagnostics(),
    })
}

/// One frame: agent first, then the rig, then the choreography
fn step(choreographer: &mut SimChoreographer, scene: &SceneFile) {
    let dt = scene.frame_time();
    choreographer.agent_mut().update(dt);
    let eye = choreographer.agent().position().with_y(scene.eye_height);
    choreographer.rig_mut().set_position(eye);
    choreographer.rig_mut().update(dt);
    choreographer.update(dt);
}

fn settle(choreographer: &mut SimChoreographer, scene: &SceneFile, max_frames: usize) {
    let mut frames = 0;
    while !choreographer.is_in(ChoreographyState::Idle) && frames < max_frames {
        step(choreographer, scene);
        frames += 1;
    }
    log::debug!("Camera settled after {} frames", frames);
}

/// Drag the camera sideways, lose and regain focus halfway, then release
fn drag_camera(choreographer: &mut SimChoreographer, scene: &SceneFile) {
    for frame in 0..DRAG_FRAMES {
        if frame == DRAG_FRAMES / 2 {
            choreographer.focus_changed(false);
            choreographer.focus_changed(true);
        }
        choreographer.handle_pointer(PointerEvent::MouseHold {
            delta: Vec2::new(1.5, 0.4),
        });
        step(choreographer, scene);
    }
    choreographer.handle_pointer(PointerEvent::LongClick);
    step(choreographer, scene);
}
