//! Build fully-initialized runtime scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle the driver ticks over:
//! - physical/numerical parameters (`Parameters`) and central gravity
//! - tracked bodies, each owning its propagator variant, trail, and
//!   trail-sampling countdown
//! - ground stations with their visibility masks
//!
//! The YAML-facing units (degrees, rev/day) are converted to radians
//! and rad/s here, so the core only ever sees its own units.

use std::f64::consts::TAU;

use crate::configuration::config::{BodyConfig, PropagatorConfig, ScenarioConfig, StationConfig};
use crate::simulation::frames::GroundPoint;
use crate::simulation::gravity::CentralGravity;
use crate::simulation::kepler::OrbitalElements;
use crate::simulation::params::Parameters;
use crate::simulation::propagator::Propagator;
use crate::simulation::states::{BodyState, NVec3};
use crate::simulation::trail::Trail;

/// One orbiting body as the driver tracks it
///
/// `name` and `color` ride along for the rendering consumer; the core
/// never interprets them. `sample_countdown` is per-body state (not a
/// shared frame counter), so bodies can sample their trails on
/// independent cadences.
#[derive(Debug)]
pub struct TrackedBody {
    pub name: String,
    pub color: [f32; 3],
    pub propagator: Propagator,
    pub trail: Trail,
    pub sample_every: u32,     // ticks between trail samples
    pub sample_countdown: u32,
}

/// A ground station with its visibility mask
#[derive(Debug)]
pub struct Station {
    pub name: String,
    pub point: GroundPoint,
    pub min_elevation: f64, // radians above the horizon
}

/// Runtime bundle constructed from a [`ScenarioConfig`]
///
/// Owns the monotonically advancing elapsed-simulation-time scalar `t`
/// along with every per-body record; nothing in the core keeps state of
/// its own between calls.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub gravity: CentralGravity,
    pub bodies: Vec<TrackedBody>,
    pub stations: Vec<Station>,
    pub t: f64, // elapsed simulation time (s)
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            m_primary: p_cfg.m_primary,
            radius: p_cfg.radius,
            rotation_rate: p_cfg.rotation_rate,
            h0: p_cfg.h0,
            t_end: p_cfg.t_end,
            speedup: p_cfg.speedup,
        };

        let gravity = CentralGravity {
            G: parameters.G,
            m: parameters.m_primary,
        };

        let bodies = cfg.bodies.into_iter().map(build_body).collect();
        let stations = cfg.stations.into_iter().map(build_station).collect();

        Self {
            parameters,
            gravity,
            bodies,
            stations,
            t: 0.0,
        }
    }
}

/// Bodies: map `BodyConfig` -> runtime `TrackedBody`
fn build_body(bc: BodyConfig) -> TrackedBody {
    let propagator = match bc.propagator {
        PropagatorConfig::Numerical { x, v } => Propagator::Numerical {
            state: BodyState {
                x: NVec3::new(x[0], x[1], x[2]),
                v: NVec3::new(v[0], v[1], v[2]),
            },
        },
        PropagatorConfig::Keplerian {
            inclination_deg,
            raan_deg,
            eccentricity,
            arg_perigee_deg,
            mean_anomaly_deg,
            rev_per_day,
        } => Propagator::Keplerian {
            elements: OrbitalElements {
                inclination: inclination_deg.to_radians(),
                raan: raan_deg.to_radians(),
                eccentricity,
                arg_perigee: arg_perigee_deg.to_radians(),
                mean_anomaly: mean_anomaly_deg.to_radians(),
                mean_motion: rev_per_day * TAU / 86_400.0,
            },
        },
    };

    TrackedBody {
        name: bc.name,
        color: bc.color,
        propagator,
        trail: Trail::new(bc.trail_len),
        sample_every: bc.sample_every.max(1),
        sample_countdown: 0,
    }
}

fn build_station(sc: StationConfig) -> Station {
    Station {
        name: sc.name,
        point: GroundPoint {
            lat_deg: sc.lat_deg,
            lon_deg: sc.lon_deg,
        },
        min_elevation: sc.min_elevation_deg.unwrap_or(0.0).to_radians(),
    }
}
