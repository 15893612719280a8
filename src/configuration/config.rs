//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – runtime switches (player body, attachment, soft wall)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`CameraConfig`]     – which camera rig observes the scene
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example katamari scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   player: 0               # index of the input-driven body (optional)
//!   attach_on_contact: true # collisions glue free bodies to the cluster
//!   boundary_clamp: false   # soft wall on gravitational positions
//!   boundary: 15.0          # half-extent of the clamp box
//!
//! parameters:
//!   t_end: 100.0            # total simulation time
//!   h0: 0.016               # fixed step size
//!   min_distance: 0.1       # pairwise separation floor
//!   g: 1.0                  # gravitational constant
//!   seed: 42.0              # deterministic seed
//!
//! camera:
//!   mode: "follow"          # "fly", "orbital" or "follow"
//!   fov: 0.785              # vertical field of view, radians
//!   aspect: 1.3             # width / height
//!
//! bodies:
//!   - x: [ 0.0, 1.0, 0.0 ]
//!     radius: 1.0
//!     mode: "static"
//!   - x: [ 5.0, 0.5, 5.0 ]
//!     radius: 0.5
//!     mode: "static"
//!     spin_speed: 0.4
//! ```
//!
//! Orbital bodies additionally carry an `orbit:` block and gravitational
//! bodies carry `v:` and `m:`. The engine then maps this configuration into
//! its internal runtime scenario representation.

use serde::Deserialize;

/// How a body moves, as written in YAML
/// `mode: "static"`, `"orbital"` or `"gravitational"`
/// (attached is a runtime-only state entered through collisions)
#[derive(Deserialize, Debug, Clone)]
pub enum MotionModeConfig {
    #[serde(rename = "static")] // fixed unless driven by input
    Static,

    #[serde(rename = "orbital")] // scripted circle around a center body
    Orbital,

    #[serde(rename = "gravitational")] // pairwise Newtonian gravity + Euler
    Gravitational,
}

/// Which camera rig observes the scene
/// `mode: "fly"`, `"orbital"` or `"follow"`
#[derive(Deserialize, Debug, Clone)]
pub enum CameraModeConfig {
    #[serde(rename = "fly")] // free first-person camera, key-driven yaw/pitch
    Fly,

    #[serde(rename = "orbital")] // circles a fixed target, keys adjust radius
    Orbital,

    #[serde(rename = "follow")] // trails the player body, grows with the cluster
    Follow,
}

/// High-level engine configuration
/// Controls which runtime behaviors are active
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub player: Option<usize>, // index of the input-driven body, if any
    pub attach_on_contact: bool, // `true` - collisions become attachments (katamari)
    pub boundary_clamp: bool, // `true` - clamp gravitational positions into a box
    pub boundary: Option<f64>, // half-extent of the clamp box, defaults to 15
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,         // time end
    pub h0: f64,            // time step size
    pub min_distance: f64,  // separation floor - prevent singular forces at very small separations
    pub g: f64,             // gravitational constant
    pub seed: f64,          // deterministic seed to make runs reproducable
}

/// Camera rig selection and lens settings
#[derive(Deserialize, Debug)]
pub struct CameraConfig {
    pub mode: CameraModeConfig, // which rig to build
    pub fov: Option<f64>,    // vertical field of view in radians, defaults to pi/4
    pub aspect: Option<f64>, // width / height, defaults to 1.3
    pub distance: Option<f64>, // starting distance for the orbital rig
}

/// Scripted orbit parameters for an orbital-mode body
#[derive(Deserialize, Debug)]
pub struct OrbitConfig {
    pub center: usize, // index of the body the orbit is centered on
    pub radius: f64,   // circle radius in the center's equatorial plane
    pub speed: f64,    // angular speed in radians per time unit
    pub inclination: Option<f64>, // fixed tilt of the orbit plane about +X
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Option<Vec<f64>>, // Initial velocity, used by gravitational bodies
    pub m: Option<f64>, // Mass of the body, used by gravitational bodies
    pub radius: f64, // Radius of the body, used for collision tests and for visualization scaling
    pub spin_speed: Option<f64>, // Self-spin rate about local Y in radians per time unit
    pub mode: MotionModeConfig, // How the body moves each tick
    pub orbit: Option<OrbitConfig>, // Orbit parameters, required for orbital mode
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Engine-level configuration (player, attachment, soft wall)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub camera: CameraConfig, // Camera rig observing the scene
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
