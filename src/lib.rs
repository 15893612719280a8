pub mod simulation;
pub mod configuration;
pub mod camera;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, MotionMode, NMat4, NQuat, NVec3, Orbit, System};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::step_system;
pub use simulation::hierarchy::{attach, propagate_transforms, world_transform, AttachResult};
pub use simulation::collision::{check_collision, Contact};
pub use simulation::orbit::step_orbit;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, CameraConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use camera::rig::{CameraKey, CameraMode, CameraRig, KeyState};

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_gravity, bench_step};
