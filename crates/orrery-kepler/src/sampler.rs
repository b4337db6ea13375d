//! Closed polyline sampling of a full orbit for rendering.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::elements::OrbitalElements;
use crate::error::OrbitError;
use crate::propagator::propagate;

/// Default anomaly step between trace samples (about 80 segments per orbit).
pub const DEFAULT_SAMPLE_STEP: f64 = 0.0785;

/// Smallest accepted step; bounds a trace to about 63 000 samples.
pub const MIN_SAMPLE_STEP: f64 = 1e-4;

/// Sampled orbit ready for a renderer: positions plus a matching index list.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTrace {
    /// Positions in sampling order; first and last coincide.
    pub positions: Vec<DVec3>,
    /// Index of each position, `0..positions.len()`.
    pub indices: Vec<u32>,
}

impl OrbitTrace {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the trace has no samples.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Consecutive index pairs forming the polyline's segments.
    pub fn line_segments(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        self.indices.windows(2).map(|pair| [pair[0], pair[1]])
    }

    /// Indexed-line-set form: every index followed by a `-1` terminator.
    pub fn coord_index(&self) -> Vec<i64> {
        self.indices
            .iter()
            .map(|&index| i64::from(index))
            .chain(std::iter::once(-1))
            .collect()
    }
}

/// Samples true anomaly over one revolution at a fixed step.
///
/// Anomalies `0, step, 2·step, …` below `2π` are sampled, followed by a final
/// sample at exactly `2π` so the curve closes on itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSampler {
    step: f64,
}

impl OrbitSampler {
    /// Creates a sampler with the given anomaly step in radians.
    ///
    /// # Errors
    ///
    /// [`OrbitError::Configuration`] if the step is not finite or is below
    /// [`MIN_SAMPLE_STEP`].
    pub fn new(step: f64) -> Result<Self, OrbitError> {
        if step.is_finite() && step >= MIN_SAMPLE_STEP {
            Ok(Self { step })
        } else {
            Err(OrbitError::configuration(
                "orbit sampler",
                format!("step {step} must be finite and at least {MIN_SAMPLE_STEP}"),
            ))
        }
    }

    /// Anomaly step in radians.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample anomalies, ending at exactly `2π`.
    pub fn anomalies(&self) -> impl Iterator<Item = f64> + use<> {
        let step = self.step;
        let below = (TAU / step).ceil() as u64;
        (0..below)
            .map(move |k| k as f64 * step)
            .filter(|&anomaly| anomaly < TAU)
            .chain(std::iter::once(TAU))
    }

    /// Restartable iterator of `(true anomaly, position)` pairs for an orbit.
    pub fn samples<'a>(
        &self,
        elements: &'a OrbitalElements,
    ) -> impl Iterator<Item = (f64, DVec3)> + use<'a> {
        self.anomalies()
            .map(move |anomaly| (anomaly, propagate(elements, anomaly)))
    }

    /// Builds the full trace for an orbit.
    pub fn trace(&self, elements: &OrbitalElements) -> OrbitTrace {
        let positions: Vec<DVec3> = self.samples(elements).map(|(_, position)| position).collect();
        let indices = (0u32..).take(positions.len()).collect();
        OrbitTrace { positions, indices }
    }
}

impl Default for OrbitSampler {
    fn default() -> Self {
        Self {
            step: DEFAULT_SAMPLE_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neptune() -> OrbitalElements {
        OrbitalElements::from_degrees(
            30.06952752,
            0.00895439,
            1.7700552,
            46.68158724,
            131.78635853,
            259.883,
            164.79,
        )
        .unwrap()
    }

    #[test]
    fn test_default_sampling_density() {
        let anomalies: Vec<f64> = OrbitSampler::default().anomalies().collect();
        // 0, 0.0785, ..., 80·0.0785 = 6.28, then 2π.
        assert_eq!(anomalies.len(), 82);
        assert_eq!(anomalies[0], 0.0);
        assert_eq!(*anomalies.last().unwrap(), TAU);
        assert!(anomalies.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_trace_is_closed() {
        let trace = OrbitSampler::default().trace(&neptune());
        let first = trace.positions[0];
        let last = *trace.positions.last().unwrap();
        assert!((first - last).length() < 1e-2, "gap {}", (first - last).length());
    }

    #[test]
    fn test_indices_match_positions() {
        let trace = OrbitSampler::default().trace(&neptune());
        assert_eq!(trace.indices.len(), trace.len());
        assert_eq!(trace.line_segments().count(), trace.len() - 1);
        assert_eq!(trace.line_segments().next(), Some([0, 1]));

        let coord_index = trace.coord_index();
        assert_eq!(coord_index.len(), trace.len() + 1);
        assert_eq!(*coord_index.last().unwrap(), -1);
    }

    #[test]
    fn test_samples_are_restartable() {
        let sampler = OrbitSampler::new(0.5).unwrap();
        let elements = neptune();
        let first: Vec<_> = sampler.samples(&elements).collect();
        let second: Vec<_> = sampler.samples(&elements).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 14);
    }

    #[test]
    fn test_step_larger_than_revolution() {
        let anomalies: Vec<f64> = OrbitSampler::new(10.0).unwrap().anomalies().collect();
        assert_eq!(anomalies, [0.0, TAU]);
    }

    #[test]
    fn test_rejects_invalid_step() {
        assert!(OrbitSampler::new(0.0).is_err());
        assert!(OrbitSampler::new(-0.1).is_err());
        assert!(OrbitSampler::new(f64::NAN).is_err());
        assert!(OrbitSampler::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_steps_below_minimum() {
        for step in [f64::MIN_POSITIVE, 1e-7, MIN_SAMPLE_STEP / 2.0] {
            let err = OrbitSampler::new(step).unwrap_err();
            assert!(matches!(err, OrbitError::Configuration { .. }), "step {step}");
        }
    }

    #[test]
    fn test_finest_step_is_bounded() {
        let sampler = OrbitSampler::new(MIN_SAMPLE_STEP).unwrap();
        let count = sampler.anomalies().count();
        assert_eq!(count, (TAU / MIN_SAMPLE_STEP).ceil() as usize + 1);
        assert!(count < 65_536);

        let trace = sampler.trace(&neptune());
        assert_eq!(trace.indices.len(), count);
        assert_eq!(*trace.indices.last().unwrap() as usize, count - 1);
    }
}
