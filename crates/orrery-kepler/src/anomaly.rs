//! Conversions between true, eccentric, and mean anomaly for elliptical orbits.
//!
//! All functions take the eccentricity first and reject anything outside
//! `[0, 1)` with [`OrbitError::Domain`] instead of letting a NaN escape from the
//! square root. Angles are not renormalized; results from the half-angle
//! formulas land in `(-π, π)`.

use crate::error::OrbitError;

/// Rejects eccentricities that do not describe a closed ellipse.
pub fn check_elliptic(eccentricity: f64) -> Result<(), OrbitError> {
    if eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity) {
        Ok(())
    } else {
        Err(OrbitError::Domain { eccentricity })
    }
}

/// Converts a true anomaly `f` into the eccentric anomaly `E`.
///
/// `E = 2·atan( sqrt((1-e)/(1+e)) · tan(f/2) )`
pub fn true_to_eccentric(eccentricity: f64, true_anomaly: f64) -> Result<f64, OrbitError> {
    check_elliptic(eccentricity)?;
    let factor = ((1.0 - eccentricity) / (1.0 + eccentricity)).sqrt();
    Ok(2.0 * (factor * (true_anomaly / 2.0).tan()).atan())
}

/// Converts an eccentric anomaly `E` into the true anomaly `f`.
///
/// `f = 2·atan( sqrt((1+e)/(1-e)) · tan(E/2) )`
pub fn eccentric_to_true(eccentricity: f64, eccentric_anomaly: f64) -> Result<f64, OrbitError> {
    check_elliptic(eccentricity)?;
    let factor = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    Ok(2.0 * (factor * (eccentric_anomaly / 2.0).tan()).atan())
}

/// Kepler's equation evaluated forward: `M = E - e·sin(E)`.
pub fn eccentric_to_mean(eccentricity: f64, eccentric_anomaly: f64) -> Result<f64, OrbitError> {
    check_elliptic(eccentricity)?;
    Ok(eccentric_anomaly - eccentricity * eccentric_anomaly.sin())
}

/// Mean anomaly for a true anomaly, via the eccentric anomaly.
pub fn true_to_mean(eccentricity: f64, true_anomaly: f64) -> Result<f64, OrbitError> {
    let eccentric = true_to_eccentric(eccentricity, true_anomaly)?;
    eccentric_to_mean(eccentricity, eccentric)
}
