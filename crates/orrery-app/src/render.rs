//! The seam between the simulation and whatever draws it.

use glam::DVec3;
use orrery_kepler::OrbitTrace;
use tracing::{debug, info, trace};

/// Receives scene updates from the host.
///
/// Positions are heliocentric world coordinates in AU. A body's orbit is
/// built once; later calls only toggle its visibility.
pub trait RenderSink {
    /// Moves a body's marker to `position`.
    fn place_body(&mut self, name: &str, position: DVec3);

    /// Creates the closed orbit polyline for a body.
    fn build_orbit(&mut self, name: &str, trace: &OrbitTrace);

    /// Shows or hides a body's orbit polyline.
    fn set_orbit_visible(&mut self, name: &str, visible: bool);

    /// Shows or hides a body's name label.
    fn set_label_visible(&mut self, name: &str, visible: bool);
}

/// Headless sink that reports scene updates through `tracing`.
#[derive(Debug, Default)]
pub struct TracingRenderer {
    log_positions: bool,
    placements: u64,
}

impl TracingRenderer {
    /// With `log_positions`, every placement is logged at debug level;
    /// otherwise placements are only counted.
    pub fn new(log_positions: bool) -> Self {
        Self {
            log_positions,
            placements: 0,
        }
    }

    /// Placements received so far.
    pub fn placements(&self) -> u64 {
        self.placements
    }
}

impl RenderSink for TracingRenderer {
    fn place_body(&mut self, name: &str, position: DVec3) {
        self.placements += 1;
        if self.log_positions {
            debug!(
                body = name,
                x = position.x,
                y = position.y,
                z = position.z,
                "place"
            );
        }
    }

    fn build_orbit(&mut self, name: &str, trace: &OrbitTrace) {
        let (near, far) = trace
            .positions
            .iter()
            .map(|p| p.length())
            .fold((f64::INFINITY, 0.0_f64), |(lo, hi), r| (lo.min(r), hi.max(r)));
        info!(
            body = name,
            samples = trace.len(),
            segments = trace.line_segments().count(),
            min_radius = near,
            max_radius = far,
            "Orbit built"
        );
    }

    fn set_orbit_visible(&mut self, name: &str, visible: bool) {
        trace!(body = name, visible, "orbit visibility");
    }

    fn set_label_visible(&mut self, name: &str, visible: bool) {
        trace!(body = name, visible, "label visibility");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_kepler::{OrbitSampler, OrbitalElements};

    #[test]
    fn test_placements_are_counted() {
        let mut renderer = TracingRenderer::new(false);
        renderer.place_body("Earth", DVec3::X);
        renderer.place_body("Mars", DVec3::Y);
        assert_eq!(renderer.placements(), 2);
    }

    #[test]
    fn test_build_orbit_accepts_trace() {
        let elements = OrbitalElements::new(1.0, 0.1, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        let trace = OrbitSampler::default().trace(&elements);
        let mut renderer = TracingRenderer::new(true);
        renderer.build_orbit("Test", &trace);
        renderer.set_orbit_visible("Test", false);
        assert_eq!(renderer.placements(), 0);
    }
}
