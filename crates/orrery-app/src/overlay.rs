//! Orbit and label visibility toggles.
//!
//! The toggles live with the renderer, not the simulation: flipping them never
//! touches body state.

use orrery_config::DisplayConfig;
use orrery_kepler::{Body, BodyKind};

use crate::render::RenderSink;

/// Current visibility of orbit traces and asteroid labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    show_orbits: bool,
    show_labels: bool,
}

impl Overlay {
    pub fn new(show_orbits: bool, show_labels: bool) -> Self {
        Self {
            show_orbits,
            show_labels,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.show_orbits, display.show_labels)
    }

    pub fn orbits_visible(&self) -> bool {
        self.show_orbits
    }

    pub fn labels_visible(&self) -> bool {
        self.show_labels
    }

    /// Pushes the full toggle state for every body to `sink`.
    pub fn apply(&self, bodies: &[Body], sink: &mut impl RenderSink) {
        self.push_orbits(bodies, sink);
        self.push_labels(bodies, sink);
    }

    /// Sets orbit visibility and pushes it if it changed.
    pub fn set_orbits_visible(
        &mut self,
        visible: bool,
        bodies: &[Body],
        sink: &mut impl RenderSink,
    ) {
        if self.show_orbits != visible {
            self.show_orbits = visible;
            self.push_orbits(bodies, sink);
        }
    }

    /// Sets label visibility and pushes it if it changed.
    pub fn set_labels_visible(
        &mut self,
        visible: bool,
        bodies: &[Body],
        sink: &mut impl RenderSink,
    ) {
        if self.show_labels != visible {
            self.show_labels = visible;
            self.push_labels(bodies, sink);
        }
    }

    /// Flips orbit visibility; returns the new state.
    pub fn toggle_orbits(&mut self, bodies: &[Body], sink: &mut impl RenderSink) -> bool {
        self.set_orbits_visible(!self.show_orbits, bodies, sink);
        self.show_orbits
    }

    /// Flips label visibility; returns the new state.
    pub fn toggle_labels(&mut self, bodies: &[Body], sink: &mut impl RenderSink) -> bool {
        self.set_labels_visible(!self.show_labels, bodies, sink);
        self.show_labels
    }

    fn push_orbits(&self, bodies: &[Body], sink: &mut impl RenderSink) {
        for body in bodies {
            sink.set_orbit_visible(body.name(), self.show_orbits);
        }
    }

    // Only asteroids carry labels.
    fn push_labels(&self, bodies: &[Body], sink: &mut impl RenderSink) {
        for body in bodies.iter().filter(|b| b.kind() == BodyKind::Asteroid) {
            sink.set_label_visible(body.name(), self.show_labels);
        }
    }
}
