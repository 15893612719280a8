//! Fixed-step time integration for the unified simulation core
//!
//! One `step_system` call advances every body according to its motion mode:
//! semi-implicit Euler for gravitational bodies, scripted kinematics for
//! orbital bodies, and an independent self-spin update for everyone,
//! all driven by `AccelSet`, `Engine` and `Parameters`

use super::engine::Engine;
use super::forces::AccelSet;
use super::orbit::step_orbit;
use super::params::Parameters;
use super::states::{MotionMode, NQuat, NVec3, System};

/// Advance the system by one fixed step `dt = params.h0`.
///
/// Gravitational bodies use semi-implicit Euler: the velocity update lands
/// first and the position update consumes the *new* velocity. That ordering
/// is part of the observable trajectory and must not be swapped.
pub fn step_system(sys: &mut System, forces: &AccelSet, engine: &Engine, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }
    let dt = params.h0; // time step dt

    // Accelerations at the current positions and time t = sys.t
    let mut accel = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accel);

    // Kick then drift, with the drift reading the updated velocity:
    // v_n+1 = v_n + dt * a_n
    // x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        if b.mode == MotionMode::Gravitational {
            b.v += *a * dt;
            b.x += b.v * dt;
        }
    }

    // Soft wall: positions are pinned inside the box, velocity is left alone
    if engine.boundary_clamp {
        let bound = engine.boundary;
        for b in sys.bodies.iter_mut() {
            if b.mode == MotionMode::Gravitational {
                for k in 0..3 {
                    b.x[k] = b.x[k].clamp(-bound, bound);
                }
            }
        }
    }

    // Scripted orbits recompute their position from the center body
    for i in 0..n {
        if sys.bodies[i].mode == MotionMode::Orbital {
            step_orbit(sys, i, dt);
        }
    }

    // Self-spin for every body, massless and attached ones included
    for b in sys.bodies.iter_mut() {
        if b.spin_speed != 0.0 {
            let delta = NQuat::from_axis_angle(&NVec3::y_axis(), b.spin_speed * dt);
            b.rotation *= delta;
            b.rotation.renormalize();
        }
    }

    // Increment the system time by one full step
    sys.t += dt;
}
