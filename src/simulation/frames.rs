//! Rotating-frame geometry
//!
//! The primary spins about +z at a fixed rate; elapsed time t maps the
//! body-fixed frame onto the inertial frame through a z-rotation by
//! rotation_rate * t. Both directions below share that sign convention,
//! so ground -> inertial -> ground is the identity up to longitude
//! normalization. Rigid-body rotation only: no precession, nutation, or
//! polar motion.

use std::f64::consts::PI;

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec3;

/// A fixed surface point on the primary, in degrees
#[derive(Debug, Clone)]
pub struct GroundPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

/// Inertial position of a surface point at elapsed time `t`
///
/// Spherical -> Cartesian at the primary's mean radius, then spun about
/// the +z axis by the rotation angle accumulated since epoch.
pub fn ground_point_to_inertial(
    gp: &GroundPoint,
    radius: f64,
    rotation_rate: f64,
    t: f64,
) -> NVec3 {
    let lat = gp.lat_deg.to_radians();
    let lon = gp.lon_deg.to_radians();

    // Body-fixed Cartesian position of the surface point
    let (s_lat, c_lat) = lat.sin_cos();
    let (s_lon, c_lon) = lon.sin_cos();
    let x = radius * c_lat * c_lon;
    let y = radius * c_lat * s_lon;
    let z = radius * s_lat;

    // Rotate with the primary about the spin axis (z)
    let (s_rot, c_rot) = (rotation_rate * t).sin_cos();
    NVec3::new(x * c_rot - y * s_rot, x * s_rot + y * c_rot, z)
}

/// Ground-track (lat, lon) in degrees beneath an inertial position
///
/// Longitude comes out of atan2 in the inertial frame, has the spin
/// angle removed, and is folded into [-180, 180]. Latitude via
/// asin(z / |pos|). Errors with `SimError::DegenerateVector` for a
/// zero-length position.
pub fn inertial_to_ground_track(pos: &NVec3, rotation_rate: f64, t: f64) -> SimResult<(f64, f64)> {
    let r = pos.norm();
    if r == 0.0 {
        return Err(SimError::DegenerateVector);
    }

    // Remove the spin to express longitude in the rotating frame
    let mut lon = pos.y.atan2(pos.x) - rotation_rate * t;
    while lon < -PI {
        lon += 2.0 * PI;
    }
    while lon > PI {
        lon -= 2.0 * PI;
    }

    let lat = (pos.z / r).asin();

    Ok((lat.to_degrees(), lon.to_degrees()))
}
