use std::time::Instant;

use crate::simulation::gravity::CentralGravity;
use crate::simulation::integrator::advance;
use crate::simulation::kepler::{self, OrbitalElements};
use crate::simulation::states::{BodyState, NVec3};

const G: f64 = 6.67430e-11;
const M_EARTH: f64 = 5.972e24;

/// Time raw semi-implicit Euler steps over a batch of LEO bodies
pub fn bench_numerical() {
    let ns: [usize; 4] = [1, 8, 64, 512];
    let steps = 10_000;

    for n in ns {
        let gravity = CentralGravity { G, m: M_EARTH };

        // Deterministic spread of circular states, no rand needed
        let mut bodies: Vec<BodyState> = (0..n)
            .map(|i| {
                let r = 6_771_000.0 + (i as f64) * 1_000.0;
                let v = (gravity.G * gravity.m / r).sqrt();
                BodyState {
                    x: NVec3::new(r, 0.0, 0.0),
                    v: NVec3::new(0.0, v, 0.0),
                }
            })
            .collect();

        // Warm up
        for b in bodies.iter_mut() {
            let _ = advance(b, &gravity, 1.0);
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            for b in bodies.iter_mut() {
                let _ = advance(b, &gravity, 1.0);
            }
        }
        let per_step = t0.elapsed().as_secs_f64() / (steps * n) as f64;

        println!("N = {n:4}, euler step = {per_step:.3e} s/body");
    }
}

/// Time closed-form Keplerian evaluations across a time grid
pub fn bench_kepler() {
    let evals = 100_000;
    let gm = G * M_EARTH;

    let elements = OrbitalElements {
        inclination: 51.64_f64.to_radians(),
        raan: 247.46_f64.to_radians(),
        eccentricity: 0.0006,
        arg_perigee: 1.0,
        mean_anomaly: 0.0,
        mean_motion: 15.49 * std::f64::consts::TAU / 86_400.0,
    };

    // Warm up
    let _ = kepler::position_at(&elements, gm, 0.0);

    let t0 = Instant::now();
    for i in 0..evals {
        let _ = kepler::position_at(&elements, gm, i as f64);
    }
    let per_eval = t0.elapsed().as_secs_f64() / evals as f64;

    println!("kepler eval = {per_eval:.3e} s ({evals} evaluations)");
}
