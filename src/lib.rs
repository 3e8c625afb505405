pub mod configuration;
pub mod driver;
pub mod error;
pub mod simulation;
pub mod benchmark;

pub use simulation::states::{BodyState, NVec3};
pub use simulation::params::Parameters;
pub use simulation::gravity::CentralGravity;
pub use simulation::kepler::{OrbitalElements, KEPLER_ITERATIONS};
pub use simulation::frames::GroundPoint;
pub use simulation::visibility::Visibility;
pub use simulation::trail::Trail;
pub use simulation::propagator::Propagator;
pub use simulation::scenario::{Scenario, Station, TrackedBody};

pub use configuration::config::{BodyConfig, ParametersConfig, PropagatorConfig, ScenarioConfig, StationConfig};

pub use driver::{run, step, BodySample, TickReport};

pub use error::{SimError, SimResult};

pub use benchmark::benchmark::{bench_kepler, bench_numerical};
