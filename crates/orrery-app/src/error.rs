//! Top-level error type for the simulator binary.

use orrery_config::ConfigError;
use orrery_kepler::OrbitError;

use crate::platform::PlatformError;

/// Anything that can stop the simulator from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The body source resolved to an empty set.
    #[error("no bodies to simulate")]
    NoBodies,
}
