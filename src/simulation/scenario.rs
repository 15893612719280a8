//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the camera rig observing the scene (`CameraRig`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, integration and visualization systems

use bevy::prelude::Resource;

use crate::camera::rig::CameraRig;
use crate::configuration::config::{BodyConfig, CameraModeConfig, MotionModeConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::hierarchy::propagate_transforms;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, MotionMode, NVec3, Orbit, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, the
/// set of active force laws (accelerations), and the camera rig
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for input, integration, visualization, etc
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub camera: CameraRig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(build_body).collect();

        // Initial system state: bodies at t = 0
        let mut system = System::new(bodies);

        // Fill the world-transform caches before the first frame reads them
        propagate_transforms(&mut system);

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            min_distance: p_cfg.min_distance,
            g: p_cfg.g,
            seed: p_cfg.seed,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            player: e_cfg.player,
            attach_on_contact: e_cfg.attach_on_contact,
            boundary_clamp: e_cfg.boundary_clamp,
            boundary: e_cfg.boundary.unwrap_or(15.0),
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let mut forces = AccelSet::new();
        forces = forces.with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
        });

        // Camera rig from CameraConfig
        let c_cfg = cfg.camera;
        let camera = match c_cfg.mode {
            CameraModeConfig::Fly => CameraRig::fly(c_cfg.fov, c_cfg.aspect),
            CameraModeConfig::Orbital => CameraRig::orbital(c_cfg.distance, c_cfg.fov, c_cfg.aspect),
            CameraModeConfig::Follow => CameraRig::follow(c_cfg.fov, c_cfg.aspect),
        };

        Self {
            engine,
            parameters,
            system,
            forces,
            camera,
        }
    }
}

fn build_body(bc: &BodyConfig) -> Body {
    let x = NVec3::new(bc.x[0], bc.x[1], bc.x[2]);
    let mut body = Body::new(x, bc.radius);

    if let Some(v) = &bc.v {
        body = body.with_velocity(NVec3::new(v[0], v[1], v[2]));
    }
    if let Some(m) = bc.m {
        body = body.with_mass(m);
    }
    if let Some(spin) = bc.spin_speed {
        body = body.with_spin(spin);
    }

    match bc.mode {
        MotionModeConfig::Static => body.with_mode(MotionMode::Static),
        MotionModeConfig::Gravitational => body.with_mode(MotionMode::Gravitational),
        MotionModeConfig::Orbital => {
            // An orbital body without orbit parameters degenerates to static
            match &bc.orbit {
                Some(o) => body.with_orbit(Orbit {
                    center: o.center,
                    radius: o.radius,
                    speed: o.speed,
                    inclination: o.inclination.unwrap_or(0.0),
                    angle: 0.0,
                }),
                None => body.with_mode(MotionMode::Static),
            }
        }
    }
}
