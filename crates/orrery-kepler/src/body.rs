//! A named body: immutable elements plus the evolving anomaly/time state.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::anomaly::eccentric_to_true;
use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::kepler::KeplerSolver;
use crate::propagator::propagate;

/// Broad category of a body, used by renderers to decide on labels and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// A major planet orbiting the central star.
    Planet,
    /// A satellite; its position is relative to its parent body.
    Moon,
    /// A minor body such as a near-Earth asteroid.
    Asteroid,
}

/// Mutable per-body state advanced once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub(crate) true_anomaly: f64,
    pub(crate) elapsed_time: f64,
}

impl OrbitState {
    /// State at simulation time zero.
    ///
    /// The true anomaly comes from one Kepler solve of the epoch mean anomaly.
    /// The time marker starts at `M₀ / n`, the time since periapsis passage in
    /// reference days.
    pub fn at_epoch(elements: &OrbitalElements, solver: &KeplerSolver) -> Result<Self, OrbitError> {
        let e = elements.eccentricity();
        let solution = solver.solve(e, elements.mean_anomaly_at_epoch())?;
        let true_anomaly = eccentric_to_true(e, solution.eccentric_anomaly)?;
        Ok(Self {
            true_anomaly,
            elapsed_time: elements.mean_anomaly_at_epoch() / elements.mean_motion(),
        })
    }

    /// Current true anomaly in radians.
    pub fn true_anomaly(&self) -> f64 {
        self.true_anomaly
    }

    /// Accumulated progression marker.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }
}

/// One orbiting body managed by a [`SimulationContext`](crate::SimulationContext).
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    kind: BodyKind,
    parent: Option<String>,
    elements: OrbitalElements,
    pub(crate) state: OrbitState,
}

impl Body {
    /// Creates a body and initialises its state from the epoch mean anomaly.
    pub fn new(
        name: impl Into<String>,
        kind: BodyKind,
        parent: Option<String>,
        elements: OrbitalElements,
        solver: &KeplerSolver,
    ) -> Result<Self, OrbitError> {
        let name = name.into();
        let state = OrbitState::at_epoch(&elements, solver).map_err(|err| match err {
            OrbitError::Configuration { reason, .. } => OrbitError::Configuration {
                body: name.clone(),
                reason,
            },
            other => other,
        })?;
        Ok(Self {
            name,
            kind,
            parent,
            elements,
            state,
        })
    }

    /// Unique body name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Body category.
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Name of the body this one orbits, if it is not the central star.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Orbital elements.
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Current anomaly/time state.
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Position at the current true anomaly, relative to the parent (or star).
    pub fn position(&self) -> DVec3 {
        propagate(&self.elements, self.state.true_anomaly)
    }
}
