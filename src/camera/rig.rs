//! Camera rigs producing view and projection matrices from body state.
//!
//! One `CameraRig` wraps a tagged behavior variant (fly, orbital, follow)
//! behind a single `update` / `view_matrix` / `projection_matrix` surface.
//! Input arrives through the [`KeyState`] trait so the rig never touches the
//! windowing layer; the Bevy viewer implements it over `ButtonInput` and
//! tests implement it over a plain list of keys.
//!
//! Rigs only read body state (position, attached-cluster size). They never
//! mutate the system.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use nalgebra::{Perspective3, Point3, Rotation3};

use crate::simulation::states::{BodyId, NMat4, NVec3, System};

/// Abstract camera inputs, mapped to concrete key codes by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKey {
    Forward,
    Back,
    Left,
    Right,
    YawLeft,
    YawRight,
    PitchUp,
    PitchDown,
}

/// Per-frame key-down sampling. Implementations must be non-blocking.
pub trait KeyState {
    fn pressed(&self, key: CameraKey) -> bool;
}

/// Pitch stays strictly inside the poles to keep the up vector usable.
pub const PITCH_LIMIT: f64 = FRAC_PI_2 - 0.1;

/// The orbital rig never closes in past this radius.
pub const MIN_ORBIT_DISTANCE: f64 = 1.0;

const MOVE_SPEED: f64 = 5.0; // translation units per second
const ROTATE_SPEED: f64 = 1.5; // yaw/pitch radians per second
const FOLLOW_BASE_DISTANCE: f64 = 10.0;
const FOLLOW_PER_CHILD: f64 = 2.0; // extra trailing distance per attached body
const FOLLOW_HEIGHT: f64 = 5.0;

/// Behavior variant of a rig. The fields are the whole per-mode state; view
/// direction and eye position are recomputed from them every query.
#[derive(Debug, Clone)]
pub enum CameraMode {
    /// First-person free flight: yaw/pitch scalars plus a position.
    Fly { position: NVec3, yaw: f64, pitch: f64 },
    /// Circles a fixed target at an adjustable radius.
    Orbital { target: NVec3, angle: f64, distance: f64 },
    /// Trails a tracked body, backing off as its cluster grows.
    Follow { position: NVec3, target: NVec3, yaw: f64 },
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub fov: f64, // vertical field of view, radians
    pub aspect: f64, // width / height
}

impl CameraRig {
    pub fn fly(fov: Option<f64>, aspect: Option<f64>) -> Self {
        Self {
            mode: CameraMode::Fly {
                position: NVec3::new(0.0, 0.0, -5.0),
                yaw: 0.0,
                pitch: 0.0,
            },
            fov: fov.unwrap_or(FRAC_PI_4),
            aspect: aspect.unwrap_or(1.3),
        }
    }

    pub fn orbital(distance: Option<f64>, fov: Option<f64>, aspect: Option<f64>) -> Self {
        Self {
            mode: CameraMode::Orbital {
                target: NVec3::zeros(),
                angle: 0.0,
                distance: distance.unwrap_or(5.0).max(MIN_ORBIT_DISTANCE),
            },
            fov: fov.unwrap_or(FRAC_PI_4),
            aspect: aspect.unwrap_or(1.3),
        }
    }

    pub fn follow(fov: Option<f64>, aspect: Option<f64>) -> Self {
        Self {
            mode: CameraMode::Follow {
                position: NVec3::new(0.0, FOLLOW_HEIGHT, -FOLLOW_BASE_DISTANCE),
                target: NVec3::zeros(),
                yaw: 0.0,
            },
            fov: fov.unwrap_or(FRAC_PI_4),
            aspect: aspect.unwrap_or(1.3),
        }
    }

    /// Advance the rig by one frame of sampled input.
    ///
    /// `tracked` names the body the follow rig trails; the other modes
    /// ignore it.
    pub fn update(&mut self, dt: f64, keys: &dyn KeyState, sys: &System, tracked: Option<BodyId>) {
        match &mut self.mode {
            CameraMode::Fly { position, yaw, pitch } => {
                if keys.pressed(CameraKey::YawLeft) {
                    *yaw += ROTATE_SPEED * dt;
                }
                if keys.pressed(CameraKey::YawRight) {
                    *yaw -= ROTATE_SPEED * dt;
                }
                if keys.pressed(CameraKey::PitchUp) {
                    *pitch += ROTATE_SPEED * dt;
                }
                if keys.pressed(CameraKey::PitchDown) {
                    *pitch -= ROTATE_SPEED * dt;
                }
                *pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

                // View direction comes straight from the two angles; there is
                // no persistent orientation state beyond them
                let dir = fly_direction(*yaw, *pitch);
                if keys.pressed(CameraKey::Forward) {
                    *position += dir * MOVE_SPEED * dt;
                }
                if keys.pressed(CameraKey::Back) {
                    *position -= dir * MOVE_SPEED * dt;
                }

                // Strafe stays in the ground plane
                let right = NVec3::new(dir.z, 0.0, -dir.x).normalize();
                if keys.pressed(CameraKey::Left) {
                    *position -= right * MOVE_SPEED * dt;
                }
                if keys.pressed(CameraKey::Right) {
                    *position += right * MOVE_SPEED * dt;
                }
            }

            CameraMode::Orbital { angle, distance, .. } => {
                *angle += dt;
                if keys.pressed(CameraKey::Forward) {
                    *distance -= 1.0 * dt;
                }
                if keys.pressed(CameraKey::Back) {
                    *distance += 1.0 * dt;
                }
                if *distance < MIN_ORBIT_DISTANCE {
                    *distance = MIN_ORBIT_DISTANCE;
                }
            }

            CameraMode::Follow { position, target, yaw } => {
                if keys.pressed(CameraKey::YawLeft) {
                    *yaw += ROTATE_SPEED * dt;
                }
                if keys.pressed(CameraKey::YawRight) {
                    *yaw -= ROTATE_SPEED * dt;
                }
                if let Some(id) = tracked {
                    *target = sys.bodies[id].x;
                    // Back off as the cluster grows so it stays in frame
                    let size = sys.descendant_count(id) as f64;
                    let distance = FOLLOW_BASE_DISTANCE + FOLLOW_PER_CHILD * size;
                    let offset = NVec3::new(0.0, FOLLOW_HEIGHT, -distance);
                    *position = *target + Rotation3::from_axis_angle(&NVec3::y_axis(), *yaw) * offset;
                }
            }
        }
    }

    /// Current camera position in world space.
    pub fn eye(&self) -> NVec3 {
        match &self.mode {
            CameraMode::Fly { position, .. } => *position,
            CameraMode::Orbital { target, angle, distance } => {
                *target + NVec3::new(distance * angle.sin(), 0.0, distance * angle.cos())
            }
            CameraMode::Follow { position, .. } => *position,
        }
    }

    /// Point the camera is looking at.
    pub fn look_target(&self) -> NVec3 {
        match &self.mode {
            CameraMode::Fly { position, yaw, pitch } => *position + fly_direction(*yaw, *pitch),
            CameraMode::Orbital { target, .. } => *target,
            CameraMode::Follow { target, .. } => *target,
        }
    }

    pub fn view_matrix(&self) -> NMat4 {
        let eye = self.eye();
        let mut target = self.look_target();
        // A zero-length look direction would degenerate the basis; fall back
        // to looking down +Z
        if (target - eye).norm_squared() < 1e-12 {
            target = eye + NVec3::z();
        }
        NMat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &NVec3::y())
    }

    pub fn projection_matrix(&self) -> NMat4 {
        Perspective3::new(self.aspect, self.fov, 0.1, 1000.0).to_homogeneous()
    }
}

fn fly_direction(yaw: f64, pitch: f64) -> NVec3 {
    NVec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
}
