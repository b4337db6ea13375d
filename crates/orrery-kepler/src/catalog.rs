//! Static element tables and the serializable body definition they use.
//!
//! Angles in a [`BodyDefinition`] are in degrees, as published in element
//! tables; they are converted to radians when the body is built.

use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyKind};
use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::kepler::KeplerSolver;

/// One row of an element table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDefinition {
    /// Unique body name.
    pub name: String,
    /// Body category.
    pub kind: BodyKind,
    /// Body this one orbits, if not the central star.
    #[serde(default)]
    pub parent: Option<String>,
    /// Semi-major axis in AU.
    pub semi_major_axis: f64,
    /// Inclination in degrees.
    pub inclination_deg: f64,
    /// Argument of periapsis in degrees.
    pub argument_of_periapsis_deg: f64,
    /// Eccentricity, `[0, 1)`.
    pub eccentricity: f64,
    /// Longitude of the ascending node in degrees.
    pub ascending_node_deg: f64,
    /// Mean anomaly at epoch in degrees.
    pub mean_anomaly_at_epoch_deg: f64,
    /// Sidereal period in reference years.
    pub sidereal_period: f64,
}

impl BodyDefinition {
    #[allow(clippy::too_many_arguments)]
    fn row(
        name: &str,
        kind: BodyKind,
        semi_major_axis: f64,
        inclination_deg: f64,
        argument_of_periapsis_deg: f64,
        eccentricity: f64,
        ascending_node_deg: f64,
        mean_anomaly_at_epoch_deg: f64,
        sidereal_period: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            parent: None,
            semi_major_axis,
            inclination_deg,
            argument_of_periapsis_deg,
            eccentricity,
            ascending_node_deg,
            mean_anomaly_at_epoch_deg,
            sidereal_period,
        }
    }

    fn orbiting(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    /// Validated orbital elements for this row.
    ///
    /// # Errors
    ///
    /// [`OrbitError::Configuration`] naming this body if any element is invalid.
    pub fn elements(&self) -> Result<OrbitalElements, OrbitError> {
        OrbitalElements::from_degrees(
            self.semi_major_axis,
            self.eccentricity,
            self.inclination_deg,
            self.argument_of_periapsis_deg,
            self.ascending_node_deg,
            self.mean_anomaly_at_epoch_deg,
            self.sidereal_period,
        )
        .map_err(|err| match err {
            OrbitError::Configuration { reason, .. } => OrbitError::Configuration {
                body: self.name.clone(),
                reason,
            },
            other => other,
        })
    }

    /// Builds the body with its state initialised at epoch.
    pub fn build(&self, solver: &KeplerSolver) -> Result<Body, OrbitError> {
        Body::new(
            self.name.clone(),
            self.kind,
            self.parent.clone(),
            self.elements()?,
            solver,
        )
    }
}

/// The eight planets plus the Moon (relative to Earth).
#[rustfmt::skip]
pub fn solar_system() -> Vec<BodyDefinition> {
    use BodyKind::{Moon, Planet};
    vec![
        BodyDefinition::row("Mercury", Planet, 0.38709843, 7.00559432, 77.45771895, 0.20563661, 48.33961819, 252.25, 0.24),
        BodyDefinition::row("Venus", Planet, 0.72333199, 3.39471, 54.9, 0.00677323, 76.7, 181.98, 0.615),
        BodyDefinition::row("Earth", Planet, 1.0, 0.00005, 102.94719, 0.01671022, 0.0, 100.47, 1.0),
        BodyDefinition::row("Moon", Moon, 0.15, 5.14, 318.0634, 0.0549006, 125.1228, 64.0, 0.3)
            .orbiting("Earth"),
        BodyDefinition::row("Mars", Planet, 1.52366231, 1.85061, 286.5, 0.09339, 49.57854, 355.43, 1.881),
        BodyDefinition::row("Jupiter", Planet, 5.20248019, 1.29861416, 14.27495244, 0.0485359, 100.29282654, 20.02, 11.86),
        BodyDefinition::row("Saturn", Planet, 9.54149883, 2.49424102, 92.86136063, 0.05550825, 113.63998702, 317.02, 29.46),
        BodyDefinition::row("Uranus", Planet, 19.18797948, 0.77298127, 172.43404441, 0.0468574, 73.96250215, 142.239, 84.01),
        BodyDefinition::row("Neptune", Planet, 30.06952752, 1.7700552, 46.68158724, 0.00895439, 131.78635853, 259.883, 164.79),
    ]
}

/// A selection of potentially hazardous near-Earth asteroids.
#[rustfmt::skip]
pub fn near_earth_asteroids() -> Vec<BodyDefinition> {
    use BodyKind::Asteroid;
    vec![
        BodyDefinition::row("2004TN1", Asteroid, 2.74, 8.4, 233.5, 0.698, 214.0, 66.6, 4.55),
        BodyDefinition::row("2011SM68", Asteroid, 1.4, 19.2, 109.1, 0.664, 24.2, 292.6, 1.65),
        BodyDefinition::row("2014EG45", Asteroid, 1.61, 25.5, 296.2, 0.498, 164.3, 156.4, 2.04),
        BodyDefinition::row("2011AG5", Asteroid, 1.43, 3.7, 53.5, 0.39, 135.7, 60.8, 1.99),
        BodyDefinition::row("2004XP14", Asteroid, 1.05, 33.0, 273.7, 0.158, 281.0, 4.5, 1.08),
        BodyDefinition::row("2009KK", Asteroid, 1.5, 18.2, 247.3, 0.455, 68.2, 328.3, 1.84),
        BodyDefinition::row("2007JY2", Asteroid, 2.2, 1.6, 105.3, 0.687, 225.6, 95.3, 3.26),
        BodyDefinition::row("2008DJ", Asteroid, 1.98, 5.1, 117.8, 0.603, 319.2, 173.9, 2.79),
        BodyDefinition::row("1999JU3", Asteroid, 1.19, 5.9, 211.4, 0.19, 251.6, 114.3, 1.3),
        BodyDefinition::row("2007RU9", Asteroid, 1.92, 5.7, 285.9, 0.63, 164.4, 230.7, 2.66),
        BodyDefinition::row("Apophis", Asteroid, 0.92, 3.3, 126.4, 0.191, 204.5, 215.5, 0.89),
        BodyDefinition::row("1993VB", Asteroid, 1.91, 5.1, 323.1, 0.519, 145.7, 332.8, 2.64),
        BodyDefinition::row("2012TO139", Asteroid, 2.44, 5.4, 56.2, 0.889, 179.3, 224.3, 3.81),
    ]
}

/// Every table combined.
pub fn all_bodies() -> Vec<BodyDefinition> {
    let mut bodies = solar_system();
    bodies.extend(near_earth_asteroids());
    bodies
}
