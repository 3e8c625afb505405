//! Physical constants and numerical parameters for a scenario
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and the primary's mass, radius, spin rate,
//! - integration step size and end time,
//! - physics steps folded into one driver tick
//!
//! These are domain constants supplied at construction, never discovered
//! at runtime.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64,             // gravitational constant
    pub m_primary: f64,     // primary mass (kg)
    pub radius: f64,        // primary mean radius (m)
    pub rotation_rate: f64, // primary spin rate (rad/s)
    pub h0: f64,            // step size (s)
    pub t_end: f64,         // time end (s)
    pub speedup: u32,       // physics steps per driver tick
}

impl Parameters {
    /// Gravitational parameter G*M of the primary
    pub fn gm(&self) -> f64 {
        self.G * self.m_primary
    }
}
