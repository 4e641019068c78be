//! Invariant tests for pointclick_nav
//!
//! Runs full sessions with the simulated agent and rig, checking on every
//! frame properties that must never be violated.

use pointclick_math::{compare_vectors, Vec3};
use pointclick_nav::prelude::*;

const DT: f32 = 1.0 / 60.0;
const EYE_HEIGHT: f32 = 1.6;
const MAX_FRAMES: usize = 5000;

type SimChoreographer = Choreographer<SimulatedAgent, SimulatedRig>;

fn museum(scenes: &SceneRegistry, config: ChoreographerConfig) -> SimChoreographer {
    let waypoints = WaypointRegistry::from_scene(vec![
        Waypoint::new("hall", Vec3::new(0.0, 0.0, 6.0)).with_marker(Marker::new()),
        Waypoint::new("east wing", Vec3::new(8.0, 0.0, 6.0)).with_marker(Marker::new()),
        Waypoint::new("courtyard", Vec3::new(8.0, 0.0, -4.0)).with_marker(Marker::new()),
        Waypoint::new("storage", Vec3::new(-8.0, 0.0, 0.0))
            .with_marker(Marker::new())
            .with_active(false),
    ]);

    let mut choreographer = Choreographer::new(
        scenes,
        "museum",
        config,
        waypoints,
        SimulatedAgent::new(Vec3::ZERO, 4.0),
        SimulatedRig::new(Vec3::new(0.0, EYE_HEIGHT, 0.0)).with_recenter_time(0.1),
    )
    .unwrap();
    choreographer.start();
    choreographer
}

fn frame(c: &mut SimChoreographer) {
    c.agent_mut().update(DT);
    let eye = c.agent().position().with_y(EYE_HEIGHT);
    c.rig_mut().set_position(eye);
    c.rig_mut().update(DT);
    c.update(DT);
}

/// Click `name` and run frames until the session ends, checking invariants
fn walk_to(c: &mut SimChoreographer, name: &str) -> usize {
    let id = c.waypoints().find_by_name(name).unwrap().id();
    c.pointer_enter(id);
    c.handle_pointer(PointerEvent::ShortClick);
    assert!(c.is_player_walking(), "click on '{}' did not start a walk", name);
    assert!(!c.waypoints().is_interactable());

    let mut frames = 0;
    loop {
        frame(c);
        frames += 1;
        if !c.is_player_walking() {
            break;
        }

        assert!(frames < MAX_FRAMES, "walk to '{}' never completed", name);
        assert!(!c.waypoints().is_interactable());
        assert!(c.waypoints().iter().all(|w| !w.is_interactable()));
        assert!(!c.is_panning_enabled());
        assert!(!c.is_in(ChoreographyState::Idle));
    }

    assert!(c.is_in(ChoreographyState::Idle));
    frames
}

/// INVARIANT: walking flag and interactability are exact complements
#[test]
fn invariant_walking_excludes_interaction() {
    let scenes = SceneRegistry::new();
    let mut c = museum(&scenes, ChoreographerConfig::default());

    // Let the start-up state settle
    for _ in 0..10 {
        frame(&mut c);
    }

    for name in ["east wing", "courtyard", "hall"] {
        walk_to(&mut c, name);
        assert!(c.waypoints().is_interactable());
        assert!(c.is_panning_enabled());
        assert!(!c.is_recentering());
    }
}

/// INVARIANT: one started and one completed notification per session, in order
#[test]
fn invariant_notifications_paired() {
    let scenes = SceneRegistry::new();
    let mut c = museum(&scenes, ChoreographerConfig::default());
    let collector = WalkEventCollector::new();
    c.add_listener(Box::new(collector.clone()));

    walk_to(&mut c, "east wing");
    walk_to(&mut c, "courtyard");

    let events = collector.events();
    let names: Vec<_> = events
        .iter()
        .map(|e| (e.event_type, e.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            (WalkEventType::Started, "east wing"),
            (WalkEventType::Completed, "east wing"),
            (WalkEventType::Started, "courtyard"),
            (WalkEventType::Completed, "courtyard"),
        ]
    );
}

/// INVARIANT: the player ends up at the destination
#[test]
fn invariant_walk_reaches_destination() {
    let scenes = SceneRegistry::new();
    let mut c = museum(&scenes, ChoreographerConfig::default());

    walk_to(&mut c, "east wing");
    let position = c.agent().position();
    assert!(position.distance(Vec3::new(8.0, 0.0, 6.0)) < 0.1);
}

/// INVARIANT: with a look-at target the camera faces it when the walk completes
#[test]
fn invariant_camera_faces_target_on_completion() {
    let scenes = SceneRegistry::new();
    let target = Vec3::new(8.0, 2.0, 12.0);
    let config = ChoreographerConfig::default().with_look_at_target(target);
    let mut c = museum(&scenes, config);

    // start() converges on the target before any walk
    for _ in 0..MAX_FRAMES {
        if c.is_in(ChoreographyState::Idle) {
            break;
        }
        frame(&mut c);
    }
    assert!(c.is_in(ChoreographyState::Idle));

    walk_to(&mut c, "east wing");
    assert_eq!(c.previous_state(), Some(ChoreographyState::Converging));
    assert!(compare_vectors(
        c.rig().camera_forward(),
        c.rig().follow_forward(),
        c.convergence_threshold()
    ));
}

/// INVARIANT: inactive waypoints never become destinations
#[test]
fn invariant_inactive_waypoints_not_registered() {
    let scenes = SceneRegistry::new();
    let c = museum(&scenes, ChoreographerConfig::default());

    assert_eq!(c.waypoints().len(), 3);
    assert!(c.waypoints().find_by_name("storage").is_none());
}

/// INVARIANT: clicks mid-walk never redirect the player
#[test]
fn invariant_clicks_during_walk_ignored() {
    let scenes = SceneRegistry::new();
    let mut c = museum(&scenes, ChoreographerConfig::default());
    let collector = WalkEventCollector::new();
    c.add_listener(Box::new(collector.clone()));

    let east = c.waypoints().find_by_name("east wing").unwrap().id();
    let hall = c.waypoints().find_by_name("hall").unwrap().id();

    c.pointer_enter(east);
    c.handle_pointer(PointerEvent::ShortClick);

    for _ in 0..20 {
        c.pointer_enter(hall);
        c.handle_pointer(PointerEvent::ShortClick);
        c.walk(hall);
        frame(&mut c);
    }

    while c.is_player_walking() {
        frame(&mut c);
    }

    assert_eq!(collector.started().len(), 1);
    assert_eq!(collector.completed()[0].waypoint, east);
    assert!(c.agent().position().distance(Vec3::new(8.0, 0.0, 6.0)) < 0.1);
}

/// INVARIANT: a second choreographer for a live scene is never created
#[test]
fn invariant_single_choreographer_per_scene() {
    let scenes = SceneRegistry::new();
    let first = museum(&scenes, ChoreographerConfig::default());

    let second = Choreographer::new(
        &scenes,
        "museum",
        ChoreographerConfig::default(),
        WaypointRegistry::from_scene(Vec::new()),
        SimulatedAgent::new(Vec3::ZERO, 1.0),
        SimulatedRig::default(),
    );
    assert!(second.is_err());

    let other = Choreographer::new(
        &scenes,
        "annex",
        ChoreographerConfig::default(),
        WaypointRegistry::from_scene(Vec::new()),
        SimulatedAgent::new(Vec3::ZERO, 1.0),
        SimulatedRig::default(),
    );
    assert!(other.is_ok());

    drop(first);
    assert!(!scenes.is_occupied("museum"));
}
