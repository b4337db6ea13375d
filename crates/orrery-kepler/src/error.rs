//! Orbit engine error types.

/// Errors raised while building bodies or evaluating orbits.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrbitError {
    /// A body definition or engine setting was rejected at load time.
    #[error("invalid configuration for {body}: {reason}")]
    Configuration {
        /// Body (or setting) the problem was found on.
        body: String,
        /// Human-readable description of the rejected value.
        reason: String,
    },

    /// An anomaly conversion was asked to work outside the elliptical domain.
    #[error("eccentricity {eccentricity} is outside the elliptical domain [0, 1)")]
    Domain {
        /// The offending eccentricity.
        eccentricity: f64,
    },

    /// Kepler's equation did not converge within the iteration cap.
    #[error(
        "Kepler solve did not converge after {iterations} iterations (e = {eccentricity}, M = {mean_anomaly})"
    )]
    Convergence {
        /// Eccentricity of the failed solve.
        eccentricity: f64,
        /// Mean anomaly of the failed solve, in radians.
        mean_anomaly: f64,
        /// Number of corrections applied before giving up.
        iterations: u32,
    },
}

impl OrbitError {
    /// Shorthand for a [`OrbitError::Configuration`] error.
    pub fn configuration(body: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            body: body.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_body() {
        let err = OrbitError::configuration("Mars", "eccentricity 1.2 is outside [0, 1)");
        let msg = err.to_string();
        assert!(msg.contains("Mars"));
        assert!(msg.contains("eccentricity 1.2"));
    }

    #[test]
    fn test_convergence_message_reports_iterations() {
        let err = OrbitError::Convergence {
            eccentricity: 0.9999,
            mean_anomaly: 0.001,
            iterations: 50,
        };
        assert!(err.to_string().contains("50 iterations"));
    }
}
