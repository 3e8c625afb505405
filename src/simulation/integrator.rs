//! Fixed-step time integrator for numerically propagated bodies
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked with the
//! current acceleration, then the position drifts with the *updated*
//! velocity. That ordering bounds the long-term energy error on orbital
//! motion; reversing it is plain explicit Euler and drifts.

use crate::error::SimResult;
use crate::simulation::gravity::CentralGravity;
use crate::simulation::states::BodyState;

/// Advance `state` by one fixed step `dt` under `gravity`
///
/// Mutates the caller-owned state in place. `dt > 0` is a documented
/// precondition; a zero radius is reported as `SimError::ZeroRadius`
/// before any component is touched. The caller repeats the call to
/// simulate multiple steps and accumulates elapsed time separately.
pub fn advance(state: &mut BodyState, gravity: &CentralGravity, dt: f64) -> SimResult<()> {
    // a_n from x_n
    let a = gravity.acceleration(&state.x)?;

    // Kick: v_{n+1} = v_n + dt * a_n
    state.v += dt * a;

    // Drift with the new velocity: x_{n+1} = x_n + dt * v_{n+1}
    state.x += dt * state.v;

    Ok(())
}
