//! Closed-form Keplerian propagation
//!
//! Given a fixed set of classical elements, produces the inertial-frame
//! position at an elapsed time by solving Kepler's equation and rotating
//! the orbital-plane coordinates into the reference frame with the
//! standard 3-1-3 sequence (raan, inclination, argument of perigee).

use std::f64::consts::TAU;

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec3;

/// Newton refinements applied to Kepler's equation.
///
/// A fixed count keeps the per-call cost bounded. Five passes converge
/// to well under 1e-6 in the low-eccentricity regime this engine
/// targets; for highly eccentric orbits they are NOT sufficient. That is
/// a known limitation of the bound, not something to patch with a
/// tolerance-based exit.
pub const KEPLER_ITERATIONS: usize = 5;

/// Classical orbital elements, angles in radians, mean motion in rad/s
///
/// Fixed for the lifetime of a tracked body: without perturbations the
/// two-body elements do not evolve.
#[derive(Debug, Clone)]
pub struct OrbitalElements {
    pub inclination: f64,
    pub raan: f64,         // right ascension of the ascending node
    pub eccentricity: f64,
    pub arg_perigee: f64,
    pub mean_anomaly: f64, // at epoch t = 0
    pub mean_motion: f64,  // rad/s
}

impl OrbitalElements {
    /// Check the invalid-elements conditions up front
    pub fn validate(&self) -> SimResult<()> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(SimError::Eccentricity(self.eccentricity));
        }
        if self.mean_motion == 0.0 {
            return Err(SimError::ZeroMeanMotion);
        }
        Ok(())
    }

    /// Semi-major axis from Kepler's third law: a = (gm / n^2)^(1/3)
    pub fn semi_major_axis(&self, gm: f64) -> f64 {
        (gm / (self.mean_motion * self.mean_motion)).cbrt()
    }
}

/// Solve E - e sin E = M for the eccentric anomaly, Newton-Raphson
/// seeded at E = M with the fixed refinement count
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        e_anom -= (e_anom - eccentricity * e_anom.sin() - mean_anomaly)
            / (1.0 - eccentricity * e_anom.cos());
    }
    e_anom
}

/// Inertial-frame position at elapsed time `t` (seconds since epoch)
pub fn position_at(oe: &OrbitalElements, gm: f64, t: f64) -> SimResult<NVec3> {
    oe.validate()?;
    let ecc = oe.eccentricity;

    // Mean anomaly advances uniformly with time
    let m = (oe.mean_anomaly + oe.mean_motion * t).rem_euclid(TAU);

    let e_anom = solve_kepler(m, ecc);

    let a = oe.semi_major_axis(gm);

    // Orbital-plane coordinates
    let p = a * (e_anom.cos() - ecc);
    let q = a * (1.0 - ecc * ecc).sqrt() * e_anom.sin();

    // Rotate (P, Q) into the reference frame: 3-1-3 by raan (O),
    // inclination (i), argument of perigee (w)
    let (s_o, c_o) = oe.raan.sin_cos();
    let (s_i, c_i) = oe.inclination.sin_cos();
    let (s_w, c_w) = oe.arg_perigee.sin_cos();

    let x = p * (c_o * c_w - s_o * c_i * s_w) - q * (c_o * s_w + s_o * c_i * c_w);
    let y = p * (s_o * c_w + c_o * c_i * s_w) - q * (s_o * s_w - c_o * c_i * c_w);
    let z = p * (s_i * s_w) + q * (s_i * c_w);

    Ok(NVec3::new(x, y, z))
}
