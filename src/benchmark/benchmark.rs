use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::hierarchy::propagate_transforms;
use crate::simulation::integrator::step_system;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, MotionMode, NVec3, System};

/// Helper to build a gravitational System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(
            Body::new(x, 0.1)
                .with_mass(1.0)
                .with_spin(0.3)
                .with_mode(MotionMode::Gravitational),
        );
    }

    System::new(bodies)
}

fn make_params() -> Parameters {
    Parameters {
        t_end: 100.0,
        h0: 0.001,
        min_distance: 0.1,
        g: 0.1,
        seed: 42.0,
    }
}

pub fn bench_gravity() {
    // Different system sizes to test; the pairwise sum is O(n^2) by design,
    // so the supported demo scale tops out around 200 bodies
    let ns = [50, 100, 200, 400, 800];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();

        let mut out = vec![NVec3::zeros(); n];

        let direct = NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        };

        // Warm up
        direct.acceleration(0.0, &sys, &mut out);

        // Time direct
        let t0 = Instant::now();
        direct.acceleration(0.0, &sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
}

/// Time a whole simulation step (forces + integration + propagation) for a
/// range of n
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 5; // number of steps per size (tune as needed)

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();
        let engine = Engine {
            player: None,
            attach_on_contact: false,
            boundary_clamp: true,
            boundary: 15.0,
        };

        let forces = AccelSet::new().with(NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        });

        // Warm-up
        step_system(&mut sys, &forces, &engine, &params);
        propagate_transforms(&mut sys);

        let t0 = Instant::now();
        for _ in 0..steps {
            step_system(&mut sys, &forces, &engine, &params);
            propagate_transforms(&mut sys);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, step = {:8.6} s", n, per_step);
    }
}
