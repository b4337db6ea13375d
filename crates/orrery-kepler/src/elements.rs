//! Classical orbital elements for a closed Keplerian ellipse.

use std::f64::consts::TAU;

use crate::error::OrbitError;

/// Days in one reference (Earth) sidereal year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Immutable element set describing one body's orbit.
///
/// Angles are stored in radians. Values are validated once at construction;
/// after that nothing in the engine can change them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    argument_of_periapsis: f64,
    ascending_node: f64,
    mean_anomaly_at_epoch: f64,
    sidereal_period: f64,
}

impl OrbitalElements {
    /// Builds an element set from radian angles.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Configuration`] when the semi-major axis or the
    /// sidereal period is not positive, the eccentricity is outside `[0, 1)`,
    /// or any angle is not finite.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        argument_of_periapsis: f64,
        ascending_node: f64,
        mean_anomaly_at_epoch: f64,
        sidereal_period: f64,
    ) -> Result<Self, OrbitError> {
        let reject = |reason: String| -> Result<Self, OrbitError> {
            Err(OrbitError::configuration("orbital elements", reason))
        };

        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return reject(format!(
                "semi-major axis {semi_major_axis} must be positive"
            ));
        }
        if !(eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity)) {
            return reject(format!("eccentricity {eccentricity} is outside [0, 1)"));
        }
        if !(sidereal_period.is_finite() && sidereal_period > 0.0) {
            return reject(format!(
                "sidereal period {sidereal_period} must be positive"
            ));
        }
        for (label, angle) in [
            ("inclination", inclination),
            ("argument of periapsis", argument_of_periapsis),
            ("ascending node", ascending_node),
            ("mean anomaly at epoch", mean_anomaly_at_epoch),
        ] {
            if !angle.is_finite() {
                return reject(format!("{label} {angle} is not finite"));
            }
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination,
            argument_of_periapsis,
            ascending_node,
            mean_anomaly_at_epoch,
            sidereal_period,
        })
    }

    /// Builds an element set from angles given in degrees.
    pub fn from_degrees(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        argument_of_periapsis_deg: f64,
        ascending_node_deg: f64,
        mean_anomaly_at_epoch_deg: f64,
        sidereal_period: f64,
    ) -> Result<Self, OrbitError> {
        Self::new(
            semi_major_axis,
            eccentricity,
            inclination_deg.to_radians(),
            argument_of_periapsis_deg.to_radians(),
            ascending_node_deg.to_radians(),
            mean_anomaly_at_epoch_deg.to_radians(),
            sidereal_period,
        )
    }

    /// Semi-major axis in AU.
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Eccentricity, in `[0, 1)`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Inclination in radians.
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Argument of periapsis in radians.
    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    /// Longitude of the ascending node in radians.
    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    /// Mean anomaly at simulation time zero, in radians.
    pub fn mean_anomaly_at_epoch(&self) -> f64 {
        self.mean_anomaly_at_epoch
    }

    /// Sidereal period as a multiple of the reference year.
    pub fn sidereal_period(&self) -> f64 {
        self.sidereal_period
    }

    /// Mean motion in radians per reference day.
    pub fn mean_motion(&self) -> f64 {
        TAU / (self.sidereal_period * DAYS_PER_YEAR)
    }

    /// Semi-latus rectum `a·(1 - e²)`.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2))
    }

    /// Closest distance to the focus, `a·(1 - e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the focus, `a·(1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> OrbitalElements {
        OrbitalElements::from_degrees(1.0, 0.01671022, 0.00005, 102.94719, 0.0, 100.47, 1.0)
            .unwrap()
    }

    #[test]
    fn test_degrees_are_converted() {
        let elements = earth();
        assert!((elements.argument_of_periapsis() - 102.94719_f64.to_radians()).abs() < 1e-15);
        assert!((elements.mean_anomaly_at_epoch() - 1.753_532).abs() < 1e-5);
    }

    #[test]
    fn test_mean_motion_of_reference_body() {
        let n = earth().mean_motion();
        assert!((n - TAU / 365.25).abs() < 1e-15);
        assert!((n - 0.017_202_42).abs() < 1e-7);
    }

    #[test]
    fn test_derived_distances() {
        let elements = OrbitalElements::new(2.0, 0.5, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        assert!((elements.semi_latus_rectum() - 1.5).abs() < 1e-12);
        assert!((elements.periapsis_distance() - 1.0).abs() < 1e-12);
        assert!((elements.apoapsis_distance() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_open_orbits() {
        for e in [1.0, 1.3, -0.01, f64::NAN] {
            let err = OrbitalElements::new(1.0, e, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap_err();
            assert!(matches!(err, OrbitError::Configuration { .. }), "e={e}");
        }
    }

    #[test]
    fn test_rejects_non_positive_axis_and_period() {
        assert!(OrbitalElements::new(0.0, 0.1, 0.0, 0.0, 0.0, 0.0, 1.0).is_err());
        assert!(OrbitalElements::new(-1.0, 0.1, 0.0, 0.0, 0.0, 0.0, 1.0).is_err());
        assert!(OrbitalElements::new(1.0, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0).is_err());
        assert!(OrbitalElements::new(1.0, 0.1, 0.0, 0.0, 0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_non_finite_angles() {
        let err = OrbitalElements::new(1.0, 0.1, f64::NAN, 0.0, 0.0, 0.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("inclination"));
    }

    #[test]
    fn test_large_angles_are_kept_as_given() {
        let elements = OrbitalElements::from_degrees(1.0, 0.1, 0.0, 0.0, 0.0, 720.0, 1.0).unwrap();
        assert!((elements.mean_anomaly_at_epoch() - 2.0 * TAU).abs() < 1e-12);
    }
}
