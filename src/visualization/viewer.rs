use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;

use crate::camera::rig::{CameraKey, KeyState};
use crate::simulation::collision::check_collision;
use crate::simulation::hierarchy::{attach, propagate_transforms};
use crate::simulation::integrator::step_system;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, MotionMode, NQuat, NVec3};
use crate::simulation::transform::decompose_trs;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging the camera entity driven by the scenario's rig
#[derive(Component)]
struct RigCamera;

/// Speed of the input-driven body, world units per second
const PLAYER_SPEED: f64 = 5.0;

/// Rolling rotation applied to the driven body, radians per second
const ROLL_RATE: f64 = 2.0;

/// Convenience entrypoint: run the Bevy viewer over a built scenario
pub fn run_viewer(scenario: Scenario) {
    println!("run_viewer: starting Bevy viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (drive_player, attach_pass, physics_step, update_camera, sync_transforms).chain(),
        )
        .run();
}

/// Startup system: spawn camera, light, axes, ground, and one sphere per body
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera starts where the rig says and follows it every frame
    let eye = to_vec3(scenario.camera.eye());
    let target = to_vec3(scenario.camera.look_target());
    commands.spawn((
        Camera3dBundle {
            camera: Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
                ..Default::default()
            },
            projection: PerspectiveProjection {
                fov: scenario.camera.fov as f32,
                aspect_ratio: scenario.camera.aspect as f32,
                ..Default::default()
            }
            .into(),
            transform: Transform::from_translation(eye).looking_at(target, Vec3::Y),
            ..Default::default()
        },
        RigCamera,
    ));

    // Basic point light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(10.0, 20.0, 10.0),
        ..Default::default()
    });

    // =====================================================================
    // 3D AXES: three thin boxes along X, Y, Z
    spawn_axes(&mut commands, &mut meshes, &mut materials);
    // =====================================================================

    // Ground slab for input-driven scenes
    if scenario.engine.player.is_some() {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(40.0, 0.1, 40.0).mesh()),
            material: materials.add(StandardMaterial {
                base_color: Color::srgb(0.25, 0.25, 0.25),
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, -0.05, 0.0),
            ..Default::default()
        });
    }

    // Spawn one unit sphere per body; the body's world transform supplies
    // translation, rotation and scale every frame
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(1.0).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: body_color(&scenario, i, b),
                    unlit: true,
                    ..Default::default()
                }),
                transform: body_transform(b),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn body_color(scenario: &Scenario, index: usize, b: &Body) -> Color {
    if scenario.engine.player == Some(index) {
        return Color::srgb(1.0, 1.0, 1.0); // white
    }
    match b.mode {
        MotionMode::Static | MotionMode::Attached => Color::srgb(0.7, 0.7, 0.7),
        MotionMode::Orbital => Color::srgb(0.5, 0.7, 1.0),
        MotionMode::Gravitational => Color::srgb(1.0, 0.85, 0.5),
    }
}

/// Maps abstract camera keys onto the Bevy keyboard state
struct BevyKeys<'a>(&'a ButtonInput<KeyCode>);

impl KeyState for BevyKeys<'_> {
    fn pressed(&self, key: CameraKey) -> bool {
        let code = match key {
            CameraKey::Forward => KeyCode::KeyW,
            CameraKey::Back => KeyCode::KeyS,
            CameraKey::Left => KeyCode::KeyA,
            CameraKey::Right => KeyCode::KeyD,
            CameraKey::YawLeft => KeyCode::KeyQ,
            CameraKey::YawRight => KeyCode::KeyE,
            CameraKey::PitchUp => KeyCode::KeyF,
            CameraKey::PitchDown => KeyCode::KeyR,
        };
        self.0.pressed(code)
    }
}

/// WASD drives the player body: constant-speed velocity plus a rolling
/// rotation about the axis perpendicular to the motion. Velocity falls back
/// to zero whenever no key is held
fn drive_player(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    let Some(player) = scenario.engine.player else {
        return;
    };
    let dt = scenario.parameters.h0;

    let mut velocity = NVec3::zeros();
    let mut roll_axis = None;
    if keys.pressed(KeyCode::KeyW) {
        velocity = NVec3::new(0.0, 0.0, PLAYER_SPEED);
        roll_axis = Some(NVec3::x_axis());
    }
    if keys.pressed(KeyCode::KeyS) {
        velocity = NVec3::new(0.0, 0.0, -PLAYER_SPEED);
        roll_axis = Some(-NVec3::x_axis());
    }
    if keys.pressed(KeyCode::KeyA) {
        velocity = NVec3::new(-PLAYER_SPEED, 0.0, 0.0);
        roll_axis = Some(NVec3::z_axis());
    }
    if keys.pressed(KeyCode::KeyD) {
        velocity = NVec3::new(PLAYER_SPEED, 0.0, 0.0);
        roll_axis = Some(-NVec3::z_axis());
    }

    if let Some(axis) = roll_axis {
        let delta = NQuat::from_axis_angle(&axis, ROLL_RATE * dt);
        let b = &mut scenario.system.bodies[player];
        b.rotation *= delta;
        b.rotation.renormalize();
    }
    scenario.system.drive(player, velocity, dt);
}

/// Probe every free body against the player's cluster and glue the ones
/// that touch. Rejected requests (already attached, self) are no-ops here;
/// tests assert on the returned reasons
fn attach_pass(mut scenario: ResMut<Scenario>) {
    if !scenario.engine.attach_on_contact {
        return;
    }
    let Some(player) = scenario.engine.player else {
        return;
    };

    let system = &mut scenario.system;
    for other in 0..system.bodies.len() {
        if let Some(contact) = check_collision(system, player, other) {
            let _ = attach(system, other, contact.body);
        }
    }
}

/// Per-frame physics: integrate every body by its motion mode, then refresh
/// the world-transform caches before anything renders
fn physics_step(mut scenario: ResMut<Scenario>) {
    let Scenario {
        system,
        parameters,
        forces,
        engine,
        ..
    } = &mut *scenario;

    step_system(system, forces, engine, parameters);
    propagate_transforms(system);
}

/// Advance the camera rig from sampled keys and move the Bevy camera to it
fn update_camera(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut query: Query<&mut Transform, With<RigCamera>>,
) {
    let Scenario {
        camera,
        system,
        engine,
        parameters,
        ..
    } = &mut *scenario;

    camera.update(parameters.h0, &BevyKeys(&keys), system, engine.player);

    let eye = camera.eye();
    let mut target = camera.look_target();
    if (target - eye).norm_squared() < 1e-12 {
        target = eye + NVec3::z();
    }
    for mut transform in &mut query {
        *transform = Transform::from_translation(to_vec3(eye)).looking_at(to_vec3(target), Vec3::Y);
    }
}

/// Copy each body's propagated world transform onto its sphere entity
fn sync_transforms(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            *transform = body_transform(b);
        }
    }
}

fn body_transform(b: &Body) -> Transform {
    let (scale, rotation, translation) = decompose_trs(&b.world);
    Transform {
        translation: to_vec3(translation),
        rotation: to_quat(rotation),
        scale: to_vec3(scale),
    }
}

fn to_vec3(v: NVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

fn to_quat(q: NQuat) -> Quat {
    let c = q.quaternion().coords;
    Quat::from_xyzw(c[0] as f32, c[1] as f32, c[2] as f32, c[3] as f32)
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    // Axis length and thickness, in world units
    let axis_len = 20.0;
    let axis_thickness = 0.05;

    // X axis: red, along +X/-X
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_len, axis_thickness, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0), // red
            unlit: true,
            ..Default::default()
        }),
        // Cuboid is centered at its transform origin, so this puts it crossing the world origin
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Y axis: green, along +Y/-Y
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_len, axis_thickness).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 1.0, 0.0), // green
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // Z axis: blue, along +Z/-Z
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(axis_thickness, axis_thickness, axis_len).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.0, 0.0, 1.0), // blue
            unlit: true,
            ..Default::default()
        }),
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });
}
