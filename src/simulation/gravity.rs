//! Gravitational acceleration of the central primary
//!
//! The two-body model: one point primary fixed at the origin, an
//! inverse-square pull on each propagated body. No body-body
//! interaction and no perturbation terms.

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec3;

/// Inverse-square gravity of the primary at the origin
#[derive(Debug, Clone)]
pub struct CentralGravity {
    pub G: f64, // gravitational constant
    pub m: f64, // primary mass
}

impl CentralGravity {
    /// Acceleration at position `x`: a = -(G m / r^3) x
    ///
    /// Errors with `SimError::ZeroRadius` when `x` sits at the origin;
    /// dividing through would seed NaN into every downstream consumer.
    pub fn acceleration(&self, x: &NVec3) -> SimResult<NVec3> {
        // Squared distance from the primary's center
        let r2 = x.dot(x);
        if r2 == 0.0 {
            return Err(SimError::ZeroRadius);
        }

        // 1 / |r| and 1 / |r|^3
        // (a = -GM * r / |r|^3 is the vector form of the inverse-square law)
        let inv_r = r2.sqrt().recip();
        let inv_r3 = inv_r * inv_r * inv_r;

        let coef = self.G * self.m * inv_r3;
        Ok(-coef * *x)
    }
}
