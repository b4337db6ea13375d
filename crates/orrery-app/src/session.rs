//! A running simulation wired to a renderer.

use orrery_config::{CatalogChoice, Config, SimulationConfig, read_ron};
use orrery_kepler::{
    BodyDefinition, KeplerSolver, OrbitSampler, SimulationContext, SimulationStepper, TickReport,
    catalog,
};
use tracing::{info, warn};

use crate::error::AppError;
use crate::overlay::Overlay;
use crate::render::RenderSink;

/// Body definitions selected by the simulation settings.
///
/// A `bodies_file` replaces the built-in catalog entirely.
pub fn load_definitions(simulation: &SimulationConfig) -> Result<Vec<BodyDefinition>, AppError> {
    let definitions = match &simulation.bodies_file {
        Some(path) => {
            let definitions: Vec<BodyDefinition> = read_ron(path)?;
            info!(
                path = %path.display(),
                count = definitions.len(),
                "Loaded body table"
            );
            definitions
        }
        None => match simulation.catalog {
            CatalogChoice::SolarSystem => catalog::solar_system(),
            CatalogChoice::NearEarth => catalog::near_earth_asteroids(),
            CatalogChoice::All => catalog::all_bodies(),
        },
    };

    if definitions.is_empty() {
        return Err(AppError::NoBodies);
    }
    Ok(definitions)
}

/// Simulation state plus the renderer-side toggles.
pub struct Session {
    context: SimulationContext,
    stepper: SimulationStepper,
    sampler: OrbitSampler,
    overlay: Overlay,
}

impl Session {
    /// Builds solver, sampler and context from a validated config.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let definitions = load_definitions(&config.simulation)?;
        Self::with_definitions(config, &definitions)
    }

    /// Like [`from_config`](Self::from_config) with an explicit body list.
    pub fn with_definitions(
        config: &Config,
        definitions: &[BodyDefinition],
    ) -> Result<Self, AppError> {
        let solver = KeplerSolver::new(config.solver.tolerance, config.solver.max_iterations)?;
        let sampler = OrbitSampler::new(config.sampler.step)?;
        let context =
            SimulationContext::from_definitions(definitions, &solver, config.simulation.sim_speed)?;

        Ok(Self {
            context,
            stepper: SimulationStepper::new(solver),
            sampler,
            overlay: Overlay::from_config(&config.display),
        })
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// Builds every orbit trace, applies the toggles and places the bodies.
    ///
    /// Moon traces are relative to their parent.
    pub fn build_scene(&self, sink: &mut impl RenderSink) {
        for body in self.context.bodies() {
            if let Some(trace) = self.context.trace(body.name(), &self.sampler) {
                sink.build_orbit(body.name(), &trace);
            }
        }
        self.overlay.apply(self.context.bodies(), sink);
        self.place_bodies(sink);
    }

    /// Advances one tick and moves every body marker.
    pub fn step(&mut self, sink: &mut impl RenderSink) -> TickReport {
        let report = self.stepper.tick(&mut self.context);
        if !report.is_clean() {
            warn!(
                tick = report.tick,
                failed = report.failures.len(),
                "Tick completed with failures"
            );
        }
        self.place_bodies(sink);
        report
    }

    pub fn toggle_orbits(&mut self, sink: &mut impl RenderSink) -> bool {
        self.overlay.toggle_orbits(self.context.bodies(), sink)
    }

    pub fn toggle_labels(&mut self, sink: &mut impl RenderSink) -> bool {
        self.overlay.toggle_labels(self.context.bodies(), sink)
    }

    fn place_bodies(&self, sink: &mut impl RenderSink) {
        for body in self.context.bodies() {
            if let Some(position) = self.context.world_position(body.name()) {
                sink.place_body(body.name(), position);
            }
        }
    }
}
