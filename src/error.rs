//! Simulation error types

use thiserror::Error;

/// Result type for core simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Precondition violations reported by the simulation core
///
/// None of these occur with physically sane inputs (non-degenerate
/// orbits, nonzero altitude). They are reported instead of letting NaN
/// coordinates leak into the geometry pipeline, where they would corrupt
/// every downstream visibility and trail result. The driving loop
/// decides whether a failure halts the run or is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Radius collapsed to zero: the state coincides with the primary's
    /// center, physically a primary-impact condition
    #[error("radius is zero: state coincides with the primary's center")]
    ZeroRadius,

    /// Eccentricity outside the closed-orbit range
    #[error("eccentricity {0} outside [0, 1): open orbits are not supported")]
    Eccentricity(f64),

    /// A mean motion of zero cannot define an orbit
    #[error("mean motion must be nonzero")]
    ZeroMeanMotion,

    /// Zero-length vector passed where a direction is required
    #[error("zero-length vector where a direction is required")]
    DegenerateVector,
}
