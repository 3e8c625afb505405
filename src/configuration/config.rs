//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a tracking scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and numerical parameters
//! - [`BodyConfig`]       – one entry per tracked orbiting body
//! - [`StationConfig`]    – one entry per ground station
//! - [`ScenarioConfig`]   – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 21600.0               # total simulated time (s)
//!   h0: 1.0                      # fixed step size (s)
//!   speedup: 10                  # physics steps per driver tick
//!   G: 6.67430e-11               # gravitational constant
//!   m_primary: 5.972e24          # primary mass (kg)
//!   radius: 6371000.0            # primary mean radius (m)
//!   rotation_rate: 7.2921159e-5  # primary spin rate (rad/s)
//!
//! bodies:
//!   - name: "LEO-1"
//!     color: [0.0, 1.0, 1.0]
//!     propagator:
//!       method: numerical
//!       x: [6771000.0, 0.0, 0.0]
//!       v: [0.0, 4765.4, 6013.0]
//!   - name: "ISS"
//!     trail_len: 150
//!     propagator:
//!       method: keplerian
//!       inclination_deg: 51.64
//!       raan_deg: 247.46
//!       eccentricity: 0.0006
//!       arg_perigee_deg: 57.3
//!       mean_anomaly_deg: 0.0
//!       rev_per_day: 15.49
//!
//! stations:
//!   - name: "Agartala"
//!     lat_deg: 23.83
//!     lon_deg: 91.28
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation (radians and rad/s throughout).

use serde::Deserialize;

/// Which propagation method drives a body
/// `method: "numerical"` with a Cartesian state, or `method: "keplerian"`
/// with classical elements in the usual catalog units
#[derive(Deserialize, Debug)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PropagatorConfig {
    Numerical {
        x: [f64; 3], // initial position (m)
        v: [f64; 3], // initial velocity (m/s)
    },
    Keplerian {
        inclination_deg: f64,
        raan_deg: f64,
        eccentricity: f64,
        arg_perigee_deg: f64,
        mean_anomaly_deg: f64, // at epoch t = 0
        rev_per_day: f64,      // mean motion in revolutions per day
    },
}

/// Physical constants and numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,         // total simulated time (s)
    pub h0: f64,            // fixed step size (s)
    pub speedup: u32,       // physics steps folded into one driver tick
    pub G: f64,             // gravitational constant
    pub m_primary: f64,     // primary mass (kg)
    pub radius: f64,        // primary mean radius (m)
    pub rotation_rate: f64, // primary spin rate (rad/s)
}

/// Configuration for a single tracked body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // display label, passed through to consumers
    #[serde(default = "default_color")]
    pub color: [f32; 3], // display color, passed through to consumers
    pub propagator: PropagatorConfig, // which variant drives this body
    #[serde(default = "default_trail_len")]
    pub trail_len: usize, // retained trail points
    #[serde(default = "default_sample_every")]
    pub sample_every: u32, // ticks between trail samples
}

/// Configuration for a single ground station
#[derive(Deserialize, Debug)]
pub struct StationConfig {
    pub name: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub min_elevation_deg: Option<f64>, // visibility mask, defaults to the horizon (0)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // physical and numerical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // tracked orbiting bodies
    #[serde(default)]
    pub stations: Vec<StationConfig>, // ground stations
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_trail_len() -> usize {
    1000
}

fn default_sample_every() -> u32 {
    5
}
