//! Core state types for the orbital simulation.
//!
//! Defines the shared 3-vector alias and the Cartesian body state:
//! - `NVec3` — nalgebra `Vector3<f64>`, used by every component
//! - `BodyState` — position/velocity advanced by the numerical propagator
//!
//! Lengths are meters and angles radians unless a field says otherwise.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Cartesian state of a numerically propagated body
///
/// Mutated once per fixed step by the integrator and nowhere else.
/// The position must stay away from the coordinate origin (the primary's
/// center); the propagator reports that condition instead of handling it.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
}
