//! The two propagation strategies behind one capability
//!
//! "Produce the body position at time t" has two variants:
//! - `Numerical` — Cartesian state advanced step by step under gravity
//! - `Keplerian` — fixed elements evaluated in closed form at any t
//!
//! A tracked body is permanently one variant for its lifetime, so the
//! driver dispatches on the tag instead of duplicating its loop.

use crate::error::SimResult;
use crate::simulation::gravity::CentralGravity;
use crate::simulation::integrator;
use crate::simulation::kepler::{self, OrbitalElements};
use crate::simulation::states::{BodyState, NVec3};

#[derive(Debug, Clone)]
pub enum Propagator {
    Numerical { state: BodyState },
    Keplerian { elements: OrbitalElements },
}

impl Propagator {
    /// Position at elapsed time `t`, where `t` already includes the step
    /// `dt` the driver just advanced by
    ///
    /// The numerical variant integrates its owned state one `dt`
    /// forward; the Keplerian variant ignores `dt` and evaluates the
    /// closed form at `t` directly.
    pub fn position_at(&mut self, gravity: &CentralGravity, t: f64, dt: f64) -> SimResult<NVec3> {
        match self {
            Propagator::Numerical { state } => {
                integrator::advance(state, gravity, dt)?;
                Ok(state.x)
            }
            Propagator::Keplerian { elements } => {
                kepler::position_at(elements, gravity.G * gravity.m, t)
            }
        }
    }
}
