//! The simulation context: owner of the body set and the speed scale.

use std::collections::{BTreeMap, HashSet};

use glam::DVec3;
use tracing::info;

use crate::body::{Body, BodyKind, OrbitState};
use crate::catalog::BodyDefinition;
use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::kepler::KeplerSolver;
use crate::sampler::{OrbitSampler, OrbitTrace};

/// Slider percentage to speed scale, as in `percent × 0.01`.
pub const SLIDER_SPEED_SCALE: f64 = 0.01;

/// Read-only view of one body between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    /// Body name.
    pub name: String,
    /// Body category.
    pub kind: BodyKind,
    /// Parent body name, if any.
    pub parent: Option<String>,
    /// Orbital elements.
    pub elements: OrbitalElements,
    /// Anomaly/time state at the time of the snapshot.
    pub state: OrbitState,
    /// Position relative to the parent (or the star).
    pub local_position: DVec3,
    /// Position relative to the star, composed through the parent chain.
    pub world_position: DVec3,
}

/// Explicit owner of every simulated body plus the current speed scale.
///
/// Bodies are added once at construction and never removed. Only
/// [`SimulationStepper`](crate::SimulationStepper) mutates their state; every
/// other consumer reads through `&self`.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    bodies: Vec<Body>,
    sim_speed: f64,
    ticks: u64,
}

impl SimulationContext {
    /// Creates a context from already-built bodies.
    ///
    /// # Errors
    ///
    /// Rejects duplicate names, parents that are not in the set (or that form a
    /// cycle), and a non-finite speed.
    pub fn new(bodies: Vec<Body>, sim_speed: f64) -> Result<Self, OrbitError> {
        check_speed(sim_speed)?;

        let mut seen = HashSet::new();
        for body in &bodies {
            if !seen.insert(body.name()) {
                return Err(OrbitError::configuration(
                    body.name(),
                    "duplicate body name",
                ));
            }
        }

        let context = Self {
            bodies,
            sim_speed,
            ticks: 0,
        };
        for body in &context.bodies {
            context.check_parent_chain(body)?;
        }
        Ok(context)
    }

    /// Validates every definition and builds a context from them.
    pub fn from_definitions(
        definitions: &[BodyDefinition],
        solver: &KeplerSolver,
        sim_speed: f64,
    ) -> Result<Self, OrbitError> {
        let bodies = definitions
            .iter()
            .map(|definition| definition.build(solver))
            .collect::<Result<Vec<_>, _>>()?;
        let context = Self::new(bodies, sim_speed)?;
        info!(
            bodies = context.len(),
            sim_speed, "Simulation context initialised"
        );
        Ok(context)
    }

    fn check_parent_chain(&self, body: &Body) -> Result<(), OrbitError> {
        let mut current = body;
        for _ in 0..self.bodies.len() {
            let Some(parent_name) = current.parent() else {
                return Ok(());
            };
            current = self.body(parent_name).ok_or_else(|| {
                OrbitError::configuration(body.name(), format!("unknown parent '{parent_name}'"))
            })?;
        }
        Err(OrbitError::configuration(
            body.name(),
            "parent chain forms a cycle",
        ))
    }

    /// Current speed scale.
    pub fn sim_speed(&self) -> f64 {
        self.sim_speed
    }

    /// Sets the speed scale used by the next tick.
    pub fn set_sim_speed(&mut self, sim_speed: f64) -> Result<(), OrbitError> {
        check_speed(sim_speed)?;
        self.sim_speed = sim_speed;
        Ok(())
    }

    /// Sets the speed scale from a 0–100 style slider value.
    pub fn set_speed_from_slider(&mut self, percent: f64) -> Result<(), OrbitError> {
        self.set_sim_speed(percent * SLIDER_SPEED_SCALE)
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn record_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// All bodies in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Looks up a body by name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name() == name)
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True if the context holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Parent-relative position of every body, keyed by name.
    pub fn positions(&self) -> BTreeMap<&str, DVec3> {
        self.bodies
            .iter()
            .map(|body| (body.name(), body.position()))
            .collect()
    }

    /// Position relative to the star, adding up the parent chain.
    pub fn world_position(&self, name: &str) -> Option<DVec3> {
        let mut body = self.body(name)?;
        let mut position = body.position();
        while let Some(parent) = body.parent() {
            body = self.body(parent)?;
            position += body.position();
        }
        Some(position)
    }

    /// Snapshot of one body.
    pub fn snapshot(&self, name: &str) -> Option<BodySnapshot> {
        let body = self.body(name)?;
        Some(BodySnapshot {
            name: body.name().to_string(),
            kind: body.kind(),
            parent: body.parent().map(str::to_string),
            elements: *body.elements(),
            state: *body.state(),
            local_position: body.position(),
            world_position: self.world_position(name)?,
        })
    }

    /// Snapshots of every body in insertion order.
    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        self.bodies
            .iter()
            .filter_map(|body| self.snapshot(body.name()))
            .collect()
    }

    /// Closed orbit trace for a body, relative to its parent.
    pub fn trace(&self, name: &str, sampler: &OrbitSampler) -> Option<OrbitTrace> {
        self.body(name).map(|body| sampler.trace(body.elements()))
    }
}

fn check_speed(sim_speed: f64) -> Result<(), OrbitError> {
    if sim_speed.is_finite() {
        Ok(())
    } else {
        Err(OrbitError::configuration(
            "sim_speed",
            format!("{sim_speed} is not a finite speed scale"),
        ))
    }
}
