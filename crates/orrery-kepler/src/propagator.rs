//! Projection of an orbit-plane position into the inertial frame.

use glam::DVec3;

use crate::elements::OrbitalElements;

/// Distance from the focus at true anomaly `θ`: `r = l / (1 + e·cos θ)`.
pub fn radial_distance(elements: &OrbitalElements, true_anomaly: f64) -> f64 {
    elements.semi_latus_rectum() / (1.0 + elements.eccentricity() * true_anomaly.cos())
}

/// Inertial position of a body at the given true anomaly.
///
/// Applies the classical rotation sequence (argument of periapsis, then
/// inclination, then ascending node) to the orbit-plane radius. Pure: the
/// anomaly need not be the body's current one, which is how orbit traces are
/// sampled without touching simulation state.
pub fn propagate(elements: &OrbitalElements, true_anomaly: f64) -> DVec3 {
    let r = radial_distance(elements, true_anomaly);

    let (sin_u, cos_u) = (elements.argument_of_periapsis() + true_anomaly).sin_cos();
    let (sin_node, cos_node) = elements.ascending_node().sin_cos();
    let (sin_i, cos_i) = elements.inclination().sin_cos();

    DVec3::new(
        r * (cos_u * cos_node - cos_i * sin_u * sin_node),
        r * (cos_u * sin_node + cos_i * sin_u * cos_node),
        r * (sin_u * sin_i),
    )
}
