use std::f64::consts::{FRAC_PI_2, TAU};

use orbsim::camera::rig::{CameraKey, CameraMode, CameraRig, KeyState, MIN_ORBIT_DISTANCE, PITCH_LIMIT};
use orbsim::simulation::collision::check_collision;
use orbsim::simulation::engine::Engine;
use orbsim::simulation::forces::{AccelSet, NewtonianGravity};
use orbsim::simulation::hierarchy::{attach, propagate_transforms, world_transform, AttachResult, MAX_DEPTH};
use orbsim::simulation::integrator::step_system;
use orbsim::simulation::orbit::step_orbit;
use orbsim::simulation::params::Parameters;
use orbsim::simulation::scenario::Scenario;
use orbsim::simulation::states::{Body, MotionMode, NQuat, NVec3, Orbit, System};

/// Build a simple 2-body gravitational System separated along x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new([-dist / 2.0, 0.0, 0.0].into(), 0.0)
        .with_mass(m1)
        .with_mode(MotionMode::Gravitational);
    let b2 = Body::new([dist / 2.0, 0.0, 0.0].into(), 0.0)
        .with_mass(m2)
        .with_mode(MotionMode::Gravitational);
    System::new(vec![b1, b2])
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.001,
        min_distance: 0.1,
        g: 0.1,
        seed: 42.0,
    }
}

/// Engine with every runtime switch off
pub fn test_engine() -> Engine {
    Engine {
        player: None,
        attach_on_contact: false,
        boundary_clamp: false,
        boundary: 15.0,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set(p: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        g: p.g,
        min_distance: p.min_distance,
    })
}

/// Empty force set, for stepping without gravity
pub fn forces_none() -> AccelSet {
    AccelSet::new()
}

/// Key-down state backed by a plain list, for driving camera rigs in tests
pub struct Keys(pub Vec<CameraKey>);

impl KeyState for Keys {
    fn pressed(&self, key: CameraKey) -> bool {
        self.0.contains(&key)
    }
}

// ==================================================================================
// Attachment hierarchy tests
// ==================================================================================

#[test]
fn root_world_transform_uses_own_pose_only() {
    let a = Body::new([1.0, 2.0, 3.0].into(), 2.0);
    let b = Body::new([100.0, -50.0, 7.0].into(), 1.0);
    let sys = System::new(vec![a, b]);

    let w = world_transform(&sys, 0);

    // translation column carries the position, diagonal carries the scale
    assert!((w[(0, 3)] - 1.0).abs() < 1e-12);
    assert!((w[(1, 3)] - 2.0).abs() < 1e-12);
    assert!((w[(2, 3)] - 3.0).abs() < 1e-12);
    assert!((w[(0, 0)] - 2.0).abs() < 1e-12);
    assert!((w[(1, 1)] - 2.0).abs() < 1e-12);
    assert!((w[(2, 2)] - 2.0).abs() < 1e-12);
}

#[test]
fn attach_freezes_relative_pose() {
    let mut a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    a.rotation = NQuat::from_axis_angle(&NVec3::y_axis(), 0.7);
    let mut b = Body::new([1.5, 0.5, 0.0].into(), 0.5);
    b.rotation = NQuat::from_axis_angle(&NVec3::x_axis(), 0.3);
    let mut sys = System::new(vec![a, b]);

    let before = world_transform(&sys, 1);
    let result = attach(&mut sys, 1, 0);
    let after = world_transform(&sys, 1);

    assert_eq!(result, AttachResult::Attached);
    assert_eq!(sys.bodies[1].parent, Some(0));
    assert_eq!(sys.bodies[0].children, vec![1]);
    assert_eq!(sys.bodies[1].mode, MotionMode::Attached);

    // Composing world(parent) * relative right after the attach must
    // reproduce the child's pre-attach world transform
    let diff = (after - before).abs().max();
    assert!(diff < 1e-5, "world pose drifted across attach: {}", diff);
}

#[test]
fn attached_child_follows_parent() {
    let a = Body::new([0.0, 1.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 1.0, 0.0].into(), 0.5);
    let mut sys = System::new(vec![a, b]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    propagate_transforms(&mut sys);
    let before = sys.bodies[1].x;
    assert!((before - NVec3::new(1.5, 1.0, 0.0)).norm() < 1e-9);

    sys.bodies[0].x += NVec3::new(1.0, 0.0, 2.0);
    propagate_transforms(&mut sys);

    let after = sys.bodies[1].x;
    assert!((after - (before + NVec3::new(1.0, 0.0, 2.0))).norm() < 1e-9,
        "child did not ride along with the parent: {:?}", after);
}

#[test]
fn reattach_is_rejected_without_state_change() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 0.0, 0.0].into(), 0.5);
    let c = Body::new([5.0, 0.0, 0.0].into(), 1.0);
    let mut sys = System::new(vec![a, b, c]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    let relative = sys.bodies[1].relative;

    assert_eq!(attach(&mut sys, 1, 2), AttachResult::AlreadyAttached);
    assert_eq!(sys.bodies[1].parent, Some(0));
    assert_eq!(sys.bodies[1].relative, relative);
    assert!(sys.bodies[2].children.is_empty());
}

#[test]
fn self_attach_is_rejected() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let mut sys = System::new(vec![a]);

    assert_eq!(attach(&mut sys, 0, 0), AttachResult::SelfAttach);
    assert_eq!(sys.bodies[0].parent, None);
    assert!(sys.bodies[0].children.is_empty());
}

#[test]
fn attach_refuses_cycles() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 0.0, 0.0].into(), 0.5);
    let mut sys = System::new(vec![a, b]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    assert_eq!(attach(&mut sys, 0, 1), AttachResult::WouldCycle);
    assert_eq!(sys.bodies[0].parent, None);
}

#[test]
fn parent_chains_reach_a_root() {
    // Chain: 0 <- 1 <- 2 <- 3 <- 4
    let bodies: Vec<Body> = (0..5)
        .map(|i| Body::new([i as f64 * 1.5, 0.0, 0.0].into(), 1.0))
        .collect();
    let mut sys = System::new(bodies);
    for i in 1..5 {
        assert_eq!(attach(&mut sys, i, i - 1), AttachResult::Attached);
    }

    for start in 0..5 {
        let mut cursor = Some(start);
        let mut steps = 0;
        while let Some(id) = cursor {
            cursor = sys.bodies[id].parent;
            steps += 1;
            assert!(steps <= MAX_DEPTH, "parent chain from {} did not terminate", start);
        }
    }
}

#[test]
fn degenerate_scale_does_not_propagate_nan() {
    // Zero-radius parent collapses its world matrix; the decomposition floor
    // has to keep the child finite
    let a = Body::new([0.0, 0.0, 0.0].into(), 0.0);
    let b = Body::new([0.5, 0.0, 0.0].into(), 0.2);
    let mut sys = System::new(vec![a, b]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    propagate_transforms(&mut sys);

    assert!(sys.bodies[1].world.iter().all(|v| v.is_finite()), "world matrix went non-finite");
    assert!(sys.bodies[1].x.iter().all(|v| v.is_finite()), "derived position went non-finite");
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn collision_requires_strict_overlap() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let b = Body::new([2.0, 0.0, 0.0].into(), 1.0);
    let sys = System::new(vec![a, b]);

    // D == r1 + r2 is a miss
    assert!(check_collision(&sys, 0, 1).is_none());

    let mut sys = sys;
    sys.bodies[1].x = NVec3::new(1.999, 0.0, 0.0);
    assert!(check_collision(&sys, 0, 1).is_some());
}

#[test]
fn collision_reports_surface_attachment_point() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 0.0, 0.0].into(), 1.0);
    let sys = System::new(vec![a, b]);

    let contact = check_collision(&sys, 0, 1).expect("expected a collision at distance 1.5");
    assert_eq!(contact.body, 0);
    assert!((contact.point - NVec3::new(1.0, 0.0, 0.0)).norm() < 1e-9,
        "attachment point off the probe surface: {:?}", contact.point);
}

#[test]
fn cluster_members_catch_new_bodies() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 0.0, 0.0].into(), 1.0);
    let c = Body::new([2.8, 0.0, 0.0].into(), 0.5);
    let mut sys = System::new(vec![a, b, c]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);

    // Too far from the root, close enough to the attached member
    let contact = check_collision(&sys, 0, 2).expect("cluster member should catch the body");
    assert_eq!(contact.body, 1);
    assert!((contact.point - NVec3::new(2.5, 0.0, 0.0)).norm() < 1e-9);
}

#[test]
fn first_preorder_match_wins() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 0.3);
    let b = Body::new([0.5, 0.0, 0.0].into(), 1.0);
    let c = Body::new([-0.5, 0.0, 0.0].into(), 1.0);
    let d = Body::new([0.0, 1.2, 0.0].into(), 0.5);
    let mut sys = System::new(vec![a, b, c, d]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    assert_eq!(attach(&mut sys, 2, 0), AttachResult::Attached);

    // The newcomer overlaps both attached members; the earlier child in the
    // depth-first walk is the deterministic winner
    let contact = check_collision(&sys, 0, 3).expect("expected a collision with the cluster");
    assert_eq!(contact.body, 1);
}

#[test]
fn parented_bodies_are_never_candidates() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 0.0, 0.0].into(), 1.0);
    let mut sys = System::new(vec![a, b]);

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    assert!(check_collision(&sys, 0, 1).is_none(), "attached body re-registered as a collision");
    assert!(check_collision(&sys, 0, 0).is_none(), "self-collision registered");
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    let dx = sys.bodies[1].x - sys.bodies[0].x;

    assert!(dx.norm() > 0.0);
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc_r = vec![Default::default(); 2];
    let mut acc_2r = vec![Default::default(); 2];

    forces.accumulate_accels(sys_r.t, &sys_r, &mut acc_r);
    forces.accumulate_accels(sys_2r.t, &sys_2r, &mut acc_2r);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-3, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_distance_floor_prevents_blowup() {
    let mut p = test_params();
    p.min_distance = 0.5;

    let sys = two_body_system(1e-9, 1.0, 1.0);
    let forces = gravity_set(&p);

    let mut acc: Vec<NVec3> = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    // The floor replaces the separation in the magnitude: a = G m / d_min^2
    let expected = p.g * 1.0 / (p.min_distance * p.min_distance);
    assert!((acc[0].norm() - expected).abs() < 1e-9,
        "floored magnitude wrong: {} vs {}", acc[0].norm(), expected);
}

#[test]
fn gravity_only_couples_gravitational_bodies() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0)
        .with_mass(5.0)
        .with_mode(MotionMode::Gravitational);
    let b = Body::new([2.0, 0.0, 0.0].into(), 1.0).with_mass(5.0); // static
    let sys = System::new(vec![a, b]);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut acc: Vec<NVec3> = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);

    assert!(acc[0].norm() < 1e-15, "static body exerted gravity");
    assert!(acc[1].norm() < 1e-15, "static body felt gravity");
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn symmetric_pair_collapses() {
    let mut sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();
    let engine = test_engine();
    let forces = gravity_set(&p);

    let mut dist = (sys.bodies[1].x - sys.bodies[0].x).norm();
    for _ in 0..100 {
        step_system(&mut sys, &forces, &engine, &p);
        let new_dist = (sys.bodies[1].x - sys.bodies[0].x).norm();
        assert!(new_dist < dist, "bodies stopped approaching: {} -> {}", dist, new_dist);
        dist = new_dist;
    }
}

#[test]
fn velocity_updates_before_position() {
    let mut sys = two_body_system(2.0, 1.0, 1.0);
    let mut p = test_params();
    p.h0 = 0.01;
    let engine = test_engine();
    let forces = gravity_set(&p);

    let mut acc: Vec<NVec3> = vec![Default::default(); 2];
    forces.accumulate_accels(sys.t, &sys, &mut acc);
    let x0 = sys.bodies[0].x;

    step_system(&mut sys, &forces, &engine, &p);

    // Semi-implicit Euler from rest moves the position by a*dt^2 in the very
    // first step because the drift reads the freshly kicked velocity
    let expected = acc[0] * p.h0 * p.h0;
    let moved = sys.bodies[0].x - x0;
    assert!((moved - expected).norm() < 1e-15,
        "first-step displacement {:?} != a*dt^2 {:?}", moved, expected);
    assert!((sys.bodies[0].v - acc[0] * p.h0).norm() < 1e-15);
}

#[test]
fn boundary_clamp_pins_position_not_velocity() {
    let b = Body::new([14.9, 0.0, 0.0].into(), 0.5)
        .with_mass(1.0)
        .with_velocity([100.0, 0.0, 0.0].into())
        .with_mode(MotionMode::Gravitational);
    let mut sys = System::new(vec![b]);
    let mut p = test_params();
    p.h0 = 0.01;
    let mut engine = test_engine();
    engine.boundary_clamp = true;

    step_system(&mut sys, &forces_none(), &engine, &p);

    // Position hits the soft wall, velocity keeps its value
    assert_eq!(sys.bodies[0].x.x, 15.0);
    assert_eq!(sys.bodies[0].v.x, 100.0);
}

#[test]
fn every_body_spins_regardless_of_mode() {
    let a = Body::new([0.0, 0.0, 0.0].into(), 1.0).with_spin(1.0); // static, massless
    let b = Body::new([1.5, 0.0, 0.0].into(), 0.5).with_spin(2.0);
    let mut sys = System::new(vec![a, b]);
    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);

    let mut p = test_params();
    p.h0 = 0.01;
    let engine = test_engine();

    step_system(&mut sys, &forces_none(), &engine, &p);

    assert!((sys.bodies[0].rotation.angle() - 1.0 * p.h0).abs() < 1e-12,
        "static massless body did not spin");
    assert!((sys.bodies[1].rotation.angle() - 2.0 * p.h0).abs() < 1e-12,
        "attached body did not spin");
}

// ==================================================================================
// Orbital kinematics tests
// ==================================================================================

fn orbital_pair(radius: f64, speed: f64, inclination: f64) -> System {
    let center = Body::new([0.0, 0.0, 0.0].into(), 1.0);
    let child = Body::new([radius, 0.0, 0.0].into(), 0.3).with_orbit(Orbit {
        center: 0,
        radius,
        speed,
        inclination,
        angle: 0.0,
    });
    System::new(vec![center, child])
}

#[test]
fn quarter_orbit_lands_on_plus_z() {
    let mut sys = orbital_pair(5.0, 1.0, 0.0);

    step_orbit(&mut sys, 1, FRAC_PI_2);

    let x = sys.bodies[1].x;
    assert!((x - NVec3::new(0.0, 0.0, 5.0)).norm() < 1e-9,
        "expected (0, 0, 5), got {:?}", x);
}

#[test]
fn orbit_angle_stays_wrapped() {
    let mut sys = orbital_pair(5.0, 1.0, 0.0);

    step_orbit(&mut sys, 1, 7.0); // more than a full revolution

    let angle = sys.bodies[1].orbit.as_ref().unwrap().angle;
    assert!((0.0..TAU).contains(&angle), "angle escaped [0, 2pi): {}", angle);
    assert!((angle - (7.0 - TAU)).abs() < 1e-12);
}

#[test]
fn inclination_tilts_orbit_plane_about_x() {
    let mut sys = orbital_pair(2.0, 1.0, FRAC_PI_2);

    step_orbit(&mut sys, 1, FRAC_PI_2);

    // Equatorial (0, 0, 2) pitched a quarter turn about +X lands on -Y
    let x = sys.bodies[1].x;
    assert!((x - NVec3::new(0.0, -2.0, 0.0)).norm() < 1e-9,
        "expected (0, -2, 0), got {:?}", x);
}

#[test]
fn orbit_follows_center_position() {
    let mut sys = orbital_pair(3.0, 1.0, 0.0);
    sys.bodies[0].x = NVec3::new(10.0, 0.0, 0.0);

    step_orbit(&mut sys, 1, 0.25);

    let angle = 0.25_f64;
    let expected = NVec3::new(10.0 + 3.0 * angle.cos(), 0.0, 3.0 * angle.sin());
    assert!((sys.bodies[1].x - expected).norm() < 1e-12);
}

// ==================================================================================
// Camera rig tests
// ==================================================================================

#[test]
fn fly_pitch_pins_at_the_clamp_bound() {
    let mut rig = CameraRig::fly(None, None);
    let sys = System::new(Vec::new());
    let keys = Keys(vec![CameraKey::PitchUp]);

    // Far more input than the clamp allows
    for _ in 0..100 {
        rig.update(0.1, &keys, &sys, None);
    }

    match rig.mode {
        CameraMode::Fly { pitch, .. } => {
            assert_eq!(pitch, PITCH_LIMIT, "pitch overshot the clamp bound");
        }
        _ => unreachable!(),
    }
}

#[test]
fn orbital_radius_clamps_at_minimum() {
    let mut rig = CameraRig::orbital(Some(2.0), None, None);
    let sys = System::new(Vec::new());
    let keys = Keys(vec![CameraKey::Forward]);

    for _ in 0..100 {
        rig.update(0.1, &keys, &sys, None);
    }

    match rig.mode {
        CameraMode::Orbital { distance, .. } => {
            assert_eq!(distance, MIN_ORBIT_DISTANCE, "orbital radius fell through the floor");
        }
        _ => unreachable!(),
    }
}

#[test]
fn follow_distance_grows_with_cluster_size() {
    let a = Body::new([0.0, 1.0, 0.0].into(), 1.0);
    let b = Body::new([1.5, 1.0, 0.0].into(), 0.5);
    let c = Body::new([-1.5, 1.0, 0.0].into(), 0.5);
    let mut sys = System::new(vec![a, b, c]);

    let mut rig = CameraRig::follow(None, None);
    rig.update(0.016, &Keys(Vec::new()), &sys, Some(0));
    let bare = (rig.eye() - rig.look_target()).norm();

    assert_eq!(attach(&mut sys, 1, 0), AttachResult::Attached);
    assert_eq!(attach(&mut sys, 2, 0), AttachResult::Attached);
    rig.update(0.016, &Keys(Vec::new()), &sys, Some(0));
    let grown = (rig.eye() - rig.look_target()).norm();

    assert!(grown > bare, "camera did not back off as the cluster grew: {} vs {}", bare, grown);
    // offset (0, 5, -(10 + 2*2)) for two attached bodies
    let expected = (14.0_f64 * 14.0 + 5.0 * 5.0).sqrt();
    assert!((grown - expected).abs() < 1e-9);
}

#[test]
fn degenerate_look_direction_still_builds_a_view() {
    let p = NVec3::new(3.0, 1.0, -2.0);
    let rig = CameraRig {
        mode: CameraMode::Follow { position: p, target: p, yaw: 0.0 },
        fov: FRAC_PI_2,
        aspect: 1.3,
    };

    let view = rig.view_matrix();
    assert!(view.iter().all(|v| v.is_finite()), "view matrix went non-finite");
}

#[test]
fn view_matrix_maps_eye_to_origin() {
    let rig = CameraRig::fly(None, None);
    let eye = rig.eye();
    let view = rig.view_matrix();

    let mapped = view * nalgebra::Vector4::new(eye.x, eye.y, eye.z, 1.0);
    assert!(mapped.xyz().norm() < 1e-9, "eye did not map to the view origin: {:?}", mapped);

    let proj = rig.projection_matrix();
    assert!(proj.iter().all(|v| v.is_finite()));
    assert_eq!(proj[(3, 2)], -1.0); // right-handed perspective
}

// ==================================================================================
// Scenario configuration tests
// ==================================================================================

#[test]
fn yaml_scenario_builds_runtime_bundle() {
    let yaml = r#"
engine:
  player: 0
  attach_on_contact: true
  boundary_clamp: false

parameters:
  t_end: 10.0
  h0: 0.016
  min_distance: 0.1
  g: 1.0
  seed: 7.0

camera:
  mode: "follow"

bodies:
  - x: [ 0.0, 1.0, 0.0 ]
    radius: 1.0
    mode: "static"
  - x: [ 5.0, 0.0, 0.0 ]
    radius: 0.5
    spin_speed: 0.5
    mode: "orbital"
    orbit:
      center: 0
      radius: 5.0
      speed: 1.0
  - x: [ -5.0, 0.0, 0.0 ]
    v: [ 0.0, 0.0, 2.0 ]
    m: 3.0
    radius: 0.4
    mode: "gravitational"
"#;

    let cfg = serde_yaml::from_str(yaml).expect("scenario YAML should parse");
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.system.bodies.len(), 3);
    assert_eq!(scenario.engine.player, Some(0));
    assert!(scenario.engine.attach_on_contact);
    assert_eq!(scenario.engine.boundary, 15.0); // default half-extent

    assert_eq!(scenario.system.bodies[0].mode, MotionMode::Static);
    assert_eq!(scenario.system.bodies[1].mode, MotionMode::Orbital);
    assert_eq!(scenario.system.bodies[2].mode, MotionMode::Gravitational);

    let orbit = scenario.system.bodies[1].orbit.as_ref().expect("orbital body keeps its orbit");
    assert_eq!(orbit.center, 0);
    assert_eq!(orbit.radius, 5.0);
    assert_eq!(orbit.inclination, 0.0);

    assert_eq!(scenario.system.bodies[2].m, 3.0);
    assert!(matches!(scenario.camera.mode, CameraMode::Follow { .. }));

    // world caches are primed before the first frame
    let w = scenario.system.bodies[0].world;
    assert!((w[(1, 3)] - 1.0).abs() < 1e-12);
}
