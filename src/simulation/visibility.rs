//! Line-of-sight visibility between a surface point and an orbiting body
//!
//! The ground point's own position vector doubles as the local zenith
//! direction, so "above the horizon" is a single dot product against the
//! range vector.

use crate::simulation::states::NVec3;

/// Outcome of one visibility query, computed fresh each call
#[derive(Debug, Clone, Copy)]
pub struct Visibility {
    pub visible: bool,
    pub slant_range: f64, // m
}

/// Zero-elevation horizon test
///
/// Visible iff the body lies strictly in the half-space above the local
/// horizontal plane at the ground point. Both positions must be in the
/// same frame at the same instant; zero-length inputs are a caller
/// precondition, not a runtime case.
pub fn line_of_sight(ground: &NVec3, body: &NVec3) -> Visibility {
    let range = body - ground;
    Visibility {
        visible: ground.dot(&range) > 0.0,
        slant_range: range.norm(),
    }
}

/// Horizon test with a minimum-elevation mask (radians above horizon)
///
/// Real ground-station links usually need several degrees of margin
/// before a pass is usable; `min_elevation = 0` reduces to
/// [`line_of_sight`].
pub fn line_of_sight_masked(ground: &NVec3, body: &NVec3, min_elevation: f64) -> Visibility {
    let range = body - ground;
    let slant_range = range.norm();
    let elevation = (ground.normalize().dot(&range) / slant_range).asin();
    Visibility {
        visible: elevation > min_elevation,
        slant_range,
    }
}
