//! One-tick advance of every body's anomaly and time marker.

use tracing::{debug, warn};

use crate::anomaly::{eccentric_to_mean, eccentric_to_true, true_to_eccentric};
use crate::body::OrbitState;
use crate::context::SimulationContext;
use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::kepler::KeplerSolver;

/// A body that could not be advanced during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFailure {
    /// Name of the body that kept its previous state.
    pub name: String,
    /// Why the advance failed.
    pub error: OrbitError,
}

/// Outcome of one full pass over the body set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Tick number, starting at 1 for the first completed pass.
    pub tick: u64,
    /// Bodies whose state was committed.
    pub advanced: usize,
    /// Total Newton iterations spent across all successful bodies.
    pub solver_iterations: u32,
    /// Bodies that failed and were left untouched.
    pub failures: Vec<BodyFailure>,
}

impl TickReport {
    /// True if every body advanced.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of advancing a single body, before it is committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStep {
    /// State to commit.
    pub state: OrbitState,
    /// Newton iterations used by the Kepler solve.
    pub solver_iterations: u32,
}

/// Advances bodies by one tick at a given speed scale.
///
/// The mean anomaly is re-derived from the current true anomaly on every tick,
/// then pushed forward by `sim_speed · n` and solved back to a true anomaly.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationStepper {
    solver: KeplerSolver,
}

impl SimulationStepper {
    /// Creates a stepper that uses the given Kepler solver.
    pub fn new(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    /// Solver used for each body's advance.
    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    /// Computes a body's next state without committing it.
    pub fn advance(
        &self,
        elements: &OrbitalElements,
        state: &OrbitState,
        sim_speed: f64,
    ) -> Result<BodyStep, OrbitError> {
        let e = elements.eccentricity();
        let n = elements.mean_motion();

        let eccentric = true_to_eccentric(e, state.true_anomaly)?;
        let mean_now = eccentric_to_mean(e, eccentric)?;

        // Angle increment for this tick; independent of wall-clock delta.
        let delta = sim_speed * n;
        let mean_next = mean_now + delta;

        let solution = self.solver.solve(e, mean_next)?;
        let true_anomaly = eccentric_to_true(e, solution.eccentric_anomaly)?;

        Ok(BodyStep {
            state: OrbitState {
                true_anomaly,
                elapsed_time: state.elapsed_time + delta,
            },
            solver_iterations: solution.iterations,
        })
    }

    /// Runs one full pass over every body in the context.
    ///
    /// A body whose advance fails keeps its previous state and is listed in the
    /// report; the remaining bodies still advance.
    pub fn tick(&self, context: &mut SimulationContext) -> TickReport {
        let sim_speed = context.sim_speed();
        let mut report = TickReport::default();

        for body in context.bodies_mut() {
            match self.advance(body.elements(), &body.state, sim_speed) {
                Ok(step) => {
                    body.state = step.state;
                    report.advanced += 1;
                    report.solver_iterations += step.solver_iterations;
                }
                Err(error) => {
                    warn!(body = body.name(), %error, "Body left unchanged this tick");
                    report.failures.push(BodyFailure {
                        name: body.name().to_string(),
                        error,
                    });
                }
            }
        }

        report.tick = context.record_tick();
        debug!(
            tick = report.tick,
            advanced = report.advanced,
            failed = report.failures.len(),
            solver_iterations = report.solver_iterations,
            "Simulation tick complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, BodyKind};
    use std::f64::consts::TAU;

    fn circular(period: f64) -> OrbitalElements {
        OrbitalElements::from_degrees(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, period).unwrap()
    }

    #[test]
    fn test_circular_orbit_advances_linearly() {
        let stepper = SimulationStepper::default();
        let elements = circular(1.0);
        let body = Body::new("ring", BodyKind::Planet, None, elements, stepper.solver()).unwrap();
        let mut context = SimulationContext::new(vec![body], 1.0).unwrap();
        let n = elements.mean_motion();

        for tick in 1..=40u64 {
            let report = stepper.tick(&mut context);
            assert!(report.is_clean());
            assert_eq!(report.tick, tick);
            assert_eq!(report.solver_iterations, 1);

            let anomaly = context.body("ring").unwrap().state().true_anomaly();
            assert!(
                (anomaly - tick as f64 * n).abs() < 1e-12,
                "tick {tick}: {anomaly}"
            );
        }
    }

    #[test]
    fn test_elapsed_time_accumulates_speed_scaled_increment() {
        let stepper = SimulationStepper::default();
        let elements = OrbitalElements::from_degrees(1.5, 0.09, 1.8, 286.5, 49.6, 0.0, 1.881).unwrap();
        let body = Body::new("mars", BodyKind::Planet, None, elements, stepper.solver()).unwrap();
        let mut context = SimulationContext::new(vec![body], 2.5).unwrap();

        for _ in 0..10 {
            stepper.tick(&mut context);
        }
        let elapsed = context.body("mars").unwrap().state().elapsed_time();
        assert!((elapsed - 10.0 * 2.5 * elements.mean_motion()).abs() < 1e-12);
    }

    #[test]
    fn test_one_period_of_ticks_returns_to_start() {
        // With sim_speed = 1 each tick is one reference day.
        let stepper = SimulationStepper::default();
        let elements = OrbitalElements::from_degrees(1.0, 0.2, 5.0, 30.0, 60.0, 10.0, 1.0).unwrap();
        let body = Body::new("rock", BodyKind::Asteroid, None, elements, stepper.solver()).unwrap();
        let start = body.position();
        let mut context = SimulationContext::new(vec![body], 1.0).unwrap();

        for _ in 0..365 {
            stepper.tick(&mut context);
        }
        let quarter_day_remaining = 0.25 * elements.mean_motion() * elements.semi_major_axis() * 1.3;
        let drift = (context.body("rock").unwrap().position() - start).length();
        assert!(drift < quarter_day_remaining + 1e-3, "drift {drift}");
    }

    #[test]
    fn test_zero_speed_keeps_anomaly() {
        let stepper = SimulationStepper::default();
        let elements = OrbitalElements::from_degrees(1.0, 0.3, 0.0, 0.0, 0.0, 45.0, 1.0).unwrap();
        let body = Body::new("still", BodyKind::Planet, None, elements, stepper.solver()).unwrap();
        let before = body.state().true_anomaly();
        let mut context = SimulationContext::new(vec![body], 0.0).unwrap();

        stepper.tick(&mut context);
        let after = context.body("still").unwrap().state().true_anomaly();
        assert!((after - before).abs() < 1e-4);
    }

    #[test]
    fn test_failure_is_isolated_per_body() {
        // A one-iteration cap fails the eccentric body but not the circular one.
        let strict = SimulationStepper::new(KeplerSolver::new(1e-4, 1).unwrap());
        let loose = KeplerSolver::default();

        let round = Body::new("round", BodyKind::Planet, None, circular(1.0), &loose).unwrap();
        let eccentric = OrbitalElements::from_degrees(2.0, 0.8, 0.0, 0.0, 0.0, 60.0, 3.0).unwrap();
        let oval = Body::new("oval", BodyKind::Asteroid, None, eccentric, &loose).unwrap();
        let oval_before = *oval.state();

        let mut context = SimulationContext::new(vec![round, oval], 30.0).unwrap();
        let report = strict.tick(&mut context);

        assert_eq!(report.advanced, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "oval");
        assert!(matches!(
            report.failures[0].error,
            OrbitError::Convergence { .. }
        ));
        assert_eq!(*context.body("oval").unwrap().state(), oval_before);
        assert!(context.body("round").unwrap().state().true_anomaly() > 0.0);
    }

    #[test]
    fn test_advance_does_not_touch_input_state() {
        let stepper = SimulationStepper::default();
        let elements = OrbitalElements::from_degrees(1.0, 0.4, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        let state = OrbitState::at_epoch(&elements, stepper.solver()).unwrap();
        let step = stepper.advance(&elements, &state, 10.0).unwrap();
        assert_eq!(state.true_anomaly(), 0.0);
        assert!(step.state.true_anomaly() > 0.0);
        assert!(step.state.true_anomaly() < TAU);
    }
}
