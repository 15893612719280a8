//! Scripted orbital kinematics.
//!
//! Orbital bodies trace a circle of fixed radius in their center's
//! equatorial plane, tilted once by a fixed inclination about +X. The motion
//! reads the center's *position* only, so orbital children do not inherit
//! the center's rotation or scale the way attached bodies do. The two
//! mechanisms stay separate on purpose.

use std::f64::consts::TAU;

use nalgebra::Rotation3;

use super::states::{BodyId, NVec3, System};

/// Advance one orbital-mode body by `dt`. Bodies without orbit parameters
/// are left alone.
pub fn step_orbit(sys: &mut System, id: BodyId, dt: f64) {
    let Some(orbit) = sys.bodies[id].orbit.clone() else {
        return;
    };
    let center = sys.bodies[orbit.center].x;

    // Wrapping keeps long runs from bleeding angular precision
    let angle = (orbit.angle + orbit.speed * dt).rem_euclid(TAU);

    let base = NVec3::new(orbit.radius * angle.cos(), 0.0, orbit.radius * angle.sin());
    let tilt = Rotation3::from_axis_angle(&NVec3::x_axis(), orbit.inclination);

    let b = &mut sys.bodies[id];
    b.x = center + tilt * base;
    if let Some(o) = b.orbit.as_mut() {
        o.angle = angle;
    }
}
