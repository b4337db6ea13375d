//! Configuration system for the Orrery simulator.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, and forward/backward
//! compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CatalogChoice, Config, DebugConfig, DisplayConfig, MIN_SAMPLE_STEP, SamplerConfig,
    SimulationConfig, SolverConfig, read_ron,
};
pub use error::ConfigError;
