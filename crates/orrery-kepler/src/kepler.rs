//! Newton–Raphson solver for Kepler's equation `E - e·sin(E) = M`.

use tracing::debug;

use crate::anomaly::check_elliptic;
use crate::error::OrbitError;

/// Default convergence tolerance on the Newton correction, in radians.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default cap on Newton iterations before giving up.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Result of a successful Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly `E` in radians.
    pub eccentric_anomaly: f64,
    /// Newton iterations performed, including the final one that met tolerance.
    pub iterations: u32,
}

/// Bounded Newton–Raphson solver.
///
/// Starts from `E₀ = M` and applies `E ← E - (E - e·sin E - M) / (1 - e·cos E)`
/// until the applied correction is within `tolerance`. Since `E - M = e·sin E`,
/// the root always lies in `[M - e, M + e]`; iterates are clamped to that
/// bracket, which keeps plain Newton from wandering near `e → 1`. Exceeding
/// `max_iterations` yields [`OrbitError::Convergence`] instead of spinning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolver {
    tolerance: f64,
    max_iterations: u32,
}

impl KeplerSolver {
    /// Creates a solver with an explicit tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Configuration`] if `tolerance` is not a positive
    /// finite number or `max_iterations` is zero.
    pub fn new(tolerance: f64, max_iterations: u32) -> Result<Self, OrbitError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(OrbitError::configuration(
                "kepler solver",
                format!("tolerance {tolerance} must be positive and finite"),
            ));
        }
        if max_iterations == 0 {
            return Err(OrbitError::configuration(
                "kepler solver",
                "max_iterations must be at least 1",
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// Convergence tolerance in radians.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Solves for the eccentric anomaly given eccentricity and mean anomaly.
    ///
    /// `mean_anomaly` may lie outside `[0, 2π)`; the solution follows it.
    pub fn solve(&self, eccentricity: f64, mean_anomaly: f64) -> Result<KeplerSolution, OrbitError> {
        check_elliptic(eccentricity)?;
        if !mean_anomaly.is_finite() {
            return Err(OrbitError::Convergence {
                eccentricity,
                mean_anomaly,
                iterations: 0,
            });
        }

        let lower = mean_anomaly - eccentricity;
        let upper = mean_anomaly + eccentricity;
        let mut eccentric = mean_anomaly;
        for iteration in 1..=self.max_iterations {
            let residual = eccentric - eccentricity * eccentric.sin() - mean_anomaly;
            let derivative = 1.0 - eccentricity * eccentric.cos();
            let correction = residual / derivative;

            if !correction.is_finite() {
                debug!(
                    eccentricity,
                    mean_anomaly, iteration, "Kepler solve produced a non-finite correction"
                );
                return Err(OrbitError::Convergence {
                    eccentricity,
                    mean_anomaly,
                    iterations: iteration,
                });
            }

            // Newton from either bracket end moves inward, so a zero applied
            // step only happens at the root.
            let next = (eccentric - correction).clamp(lower, upper);
            let applied = eccentric - next;
            eccentric = next;

            if applied.abs() <= self.tolerance {
                return Ok(KeplerSolution {
                    eccentric_anomaly: eccentric,
                    iterations: iteration,
                });
            }
        }

        debug!(
            eccentricity,
            mean_anomaly,
            max_iterations = self.max_iterations,
            "Kepler solve hit the iteration cap"
        );
        Err(OrbitError::Convergence {
            eccentricity,
            mean_anomaly,
            iterations: self.max_iterations,
        })
    }
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Solves Kepler's equation with the default tolerance and iteration cap.
pub fn mean_to_eccentric(eccentricity: f64, mean_anomaly: f64) -> Result<f64, OrbitError> {
    KeplerSolver::default()
        .solve(eccentricity, mean_anomaly)
        .map(|solution| solution.eccentric_anomaly)
}
