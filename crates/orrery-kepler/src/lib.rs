//! Keplerian orbit propagation for a fixed set of non-interacting bodies.
//!
//! Converts between mean, eccentric, and true anomaly, solves Kepler's equation
//! with a bounded Newton–Raphson iteration, and projects orbit-plane positions
//! into an inertial frame. A [`SimulationContext`] owns the bodies and the
//! speed scale; a [`SimulationStepper`] advances them one tick at a time.

pub mod anomaly;
mod body;
pub mod catalog;
mod context;
mod elements;
mod error;
pub mod kepler;
pub mod propagator;
mod sampler;
mod stepper;

pub use body::{Body, BodyKind, OrbitState};
pub use catalog::BodyDefinition;
pub use context::{BodySnapshot, SLIDER_SPEED_SCALE, SimulationContext};
pub use elements::{DAYS_PER_YEAR, OrbitalElements};
pub use error::OrbitError;
pub use kepler::{KeplerSolution, KeplerSolver, mean_to_eccentric};
pub use propagator::{propagate, radial_distance};
pub use sampler::{DEFAULT_SAMPLE_STEP, MIN_SAMPLE_STEP, OrbitSampler, OrbitTrace};
pub use stepper::{BodyFailure, BodyStep, SimulationStepper, TickReport};
