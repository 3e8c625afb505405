//! Headless driving loop
//!
//! Advances simulated time tick by tick and sequences the core in order:
//! propagate every body, derive its ground track, evaluate visibility
//! against every station, append to the trail on the body's cadence.
//! In the original program this loop lived inside a render loop; here it
//! is the crate's own consumer, reporting through `log` instead of a
//! window title.

use log::{debug, info};

use crate::error::SimResult;
use crate::simulation::frames;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;
use crate::simulation::visibility::{self, Visibility};

/// Simulated seconds between periodic status lines
const REPORT_EVERY: f64 = 600.0;

/// Everything one tick produces for one body
#[derive(Debug, Clone)]
pub struct BodySample {
    pub position: NVec3,
    pub ground_track: (f64, f64), // (lat, lon) degrees
    pub station_visibility: Vec<Visibility>, // one per station, scenario order
}

/// Output of a single driver tick
#[derive(Debug, Clone)]
pub struct TickReport {
    pub t: f64,
    pub samples: Vec<BodySample>,
}

/// Advance the scenario by one tick (`speedup * h0` seconds)
///
/// Several physics steps are folded into one tick, as the original did
/// with its speed multiplier; geometry and visibility are evaluated once
/// at the tick's final instant.
pub fn step(scenario: &mut Scenario) -> SimResult<TickReport> {
    let Scenario {
        parameters,
        gravity,
        bodies,
        stations,
        t,
    } = scenario;

    let steps = parameters.speedup.max(1);
    let t0 = *t;
    let t1 = t0 + steps as f64 * parameters.h0;

    // Station positions are shared by every body this tick
    let station_pos: Vec<NVec3> = stations
        .iter()
        .map(|s| {
            frames::ground_point_to_inertial(&s.point, parameters.radius, parameters.rotation_rate, t1)
        })
        .collect();

    let mut samples = Vec::with_capacity(bodies.len());
    for body in bodies.iter_mut() {
        let mut pos = NVec3::zeros();
        for i in 0..steps {
            let tb = t0 + (i + 1) as f64 * parameters.h0;
            pos = body.propagator.position_at(gravity, tb, parameters.h0)?;
        }

        let ground_track = frames::inertial_to_ground_track(&pos, parameters.rotation_rate, t1)?;

        let station_visibility: Vec<Visibility> = stations
            .iter()
            .zip(&station_pos)
            .map(|(s, sp)| visibility::line_of_sight_masked(sp, &pos, s.min_elevation))
            .collect();

        // Trail sampling on the body's own countdown
        if body.sample_countdown == 0 {
            body.trail.push(pos);
            body.sample_countdown = body.sample_every.saturating_sub(1);
        } else {
            body.sample_countdown -= 1;
        }

        samples.push(BodySample {
            position: pos,
            ground_track,
            station_visibility,
        });
    }

    *t = t1;
    Ok(TickReport { t: t1, samples })
}

/// Run the scenario to `t_end`, logging periodic per-body status and
/// every visibility transition (acquisition / loss of signal)
pub fn run(scenario: &mut Scenario) -> SimResult<()> {
    info!(
        "starting run: {} bodies, {} stations, dt = {} s, t_end = {} s",
        scenario.bodies.len(),
        scenario.stations.len(),
        scenario.parameters.h0,
        scenario.parameters.t_end
    );

    let mut last_visible: Vec<Vec<bool>> = scenario
        .bodies
        .iter()
        .map(|_| vec![false; scenario.stations.len()])
        .collect();
    let mut next_report = 0.0;

    while scenario.t < scenario.parameters.t_end {
        let report = step(scenario)?;

        for (bi, sample) in report.samples.iter().enumerate() {
            for (si, vis) in sample.station_visibility.iter().enumerate() {
                let was = last_visible[bi][si];
                if vis.visible && !was {
                    info!(
                        "t = {:7.0} s | {} acquired {} | range {:.0} km",
                        report.t,
                        scenario.stations[si].name,
                        scenario.bodies[bi].name,
                        vis.slant_range / 1000.0
                    );
                } else if !vis.visible && was {
                    info!(
                        "t = {:7.0} s | {} lost {}",
                        report.t, scenario.stations[si].name, scenario.bodies[bi].name
                    );
                }
                last_visible[bi][si] = vis.visible;
            }
        }

        // Periodic status, the original printed these every 10 minutes
        if report.t >= next_report {
            for (bi, sample) in report.samples.iter().enumerate() {
                let alt_km = (sample.position.norm() - scenario.parameters.radius) / 1000.0;
                let (lat, lon) = sample.ground_track;
                debug!(
                    "t = {:7.0} s | {} | alt {:8.1} km | track ({:6.2}, {:7.2})",
                    report.t, scenario.bodies[bi].name, alt_km, lat, lon
                );
            }
            next_report += REPORT_EVERY;
        }
    }

    info!("run complete at t = {:.0} s", scenario.t);
    Ok(())
}
