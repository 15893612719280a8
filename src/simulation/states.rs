//! Core state types for the simulation.
//!
//! Defines the body arena and per-body state:
//! - `Body` with pose, motion mode, and attachment fields
//! - `System` owning every body plus the current simulation time `t`
//! - `Orbit` parameters for scripted orbital motion
//!
//! Bodies are created at scene build time and never removed, so plain
//! indices (`BodyId`) work as stable handles; `parent`/`children` are
//! lookup relations into the arena, never owners.

use nalgebra::{Matrix4, UnitQuaternion, Vector3};

pub type NVec3 = Vector3<f64>;
pub type NQuat = UnitQuaternion<f64>;
pub type NMat4 = Matrix4<f64>;

/// Index of a body inside `System::bodies`.
pub type BodyId = usize;

/// How a body moves each tick. The first three are chosen at scene build
/// time; `Attached` is entered exactly once, when a collision glues the body
/// to a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionMode {
    Static,
    Orbital,
    Gravitational,
    Attached,
}

/// Scripted orbit parameters (orbital-mode bodies only).
#[derive(Debug, Clone)]
pub struct Orbit {
    pub center: BodyId, // body whose position the orbit is centered on
    pub radius: f64, // circle radius in the center's equatorial plane
    pub speed: f64, // angular speed, rad/s
    pub inclination: f64, // fixed tilt of the orbit plane about +X
    pub angle: f64, // accumulated angle, kept in [0, 2π)
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // world position; derived for attached bodies
    pub v: NVec3, // velocity (gravitational mode)
    pub m: f64, // mass (gravitational mode)
    pub radius: f64, // collision and render size
    pub rotation: NQuat, // self-spin orientation, integrated every tick
    pub spin_speed: f64, // self-spin rate about local Y, rad/s
    pub mode: MotionMode,
    pub parent: Option<BodyId>, // attachment relation only
    pub children: Vec<BodyId>, // attached bodies, insertion order
    pub relative: NMat4, // pose in parent frame, frozen at attach time
    pub orbit: Option<Orbit>,
    pub world: NMat4, // cached world transform, refreshed each tick
}

impl Body {
    /// A static body at `x`. The other fields pick up neutral defaults and
    /// the builder methods below override what a scene needs.
    pub fn new(x: NVec3, radius: f64) -> Self {
        Self {
            x,
            v: NVec3::zeros(),
            m: 0.0,
            radius,
            rotation: NQuat::identity(),
            spin_speed: 0.0,
            mode: MotionMode::Static,
            parent: None,
            children: Vec::new(),
            relative: NMat4::identity(),
            orbit: None,
            world: NMat4::identity(),
        }
    }

    pub fn with_mode(mut self, mode: MotionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_velocity(mut self, v: NVec3) -> Self {
        self.v = v;
        self
    }

    pub fn with_mass(mut self, m: f64) -> Self {
        self.m = m;
        self
    }

    pub fn with_spin(mut self, spin_speed: f64) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self.mode = MotionMode::Orbital;
        self
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // the arena owning every body
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Kinematically move a root body (the input-driven katamari). Attached
    /// bodies derive their position from the hierarchy and are not driven.
    pub fn drive(&mut self, id: BodyId, velocity: NVec3, dt: f64) {
        let b = &mut self.bodies[id];
        if b.parent.is_none() {
            b.x += velocity * dt;
        }
    }

    /// Number of bodies in the attached subtree below `id`.
    pub fn descendant_count(&self, id: BodyId) -> usize {
        let mut count = 0;
        let mut stack: Vec<BodyId> = self.bodies[id].children.clone();
        while let Some(c) = stack.pop() {
            count += 1;
            stack.extend_from_slice(&self.bodies[c].children);
        }
        count
    }
}
