//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level simulator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Tick rate, speed scale, and body source.
    pub simulation: SimulationConfig,
    /// Kepler solver settings.
    pub solver: SolverConfig,
    /// Orbit trace sampling.
    pub sampler: SamplerConfig,
    /// Initial renderer toggle state.
    pub display: DisplayConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Which built-in element table to load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogChoice {
    /// Planets plus the Moon.
    #[default]
    SolarSystem,
    /// Near-Earth asteroids only.
    NearEarth,
    /// Both tables.
    All,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Speed scale: anomaly advance per tick in units of mean motion.
    pub sim_speed: f64,
    /// Interval between ticks in milliseconds.
    pub tick_interval_ms: u64,
    /// Built-in table used when `bodies_file` is unset.
    pub catalog: CatalogChoice,
    /// Optional RON file holding a list of body definitions.
    pub bodies_file: Option<PathBuf>,
}

/// Kepler solver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence tolerance on the Newton correction, radians.
    pub tolerance: f64,
    /// Iteration cap before a solve is reported as non-convergent.
    pub max_iterations: u32,
}

/// Orbit trace sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
    /// True-anomaly step between samples, radians.
    pub step: f64,
}

/// Initial visibility of renderer overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw orbit traces.
    pub show_orbits: bool,
    /// Draw asteroid labels.
    pub show_labels: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log every body placement, not just tick summaries.
    pub log_positions: bool,
}

// --- Default implementations ---

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sim_speed: 1.0,
            tick_interval_ms: 50,
            catalog: CatalogChoice::SolarSystem,
            bodies_file: None,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 50,
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { step: 0.0785 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_positions: false,
        }
    }
}

// --- Load / Save / Reload ---

const CONFIG_FILE: &str = "config.ron";

/// Smallest accepted `sampler.step`; must equal `orrery_kepler::MIN_SAMPLE_STEP`.
pub const MIN_SAMPLE_STEP: f64 = 1e-4;

impl Config {
    /// Location of `config.ron` inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::file_path(config_dir);

        if config_path.exists() {
            let config: Config = read_ron(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = Self::file_path(config_dir);
        let write_error = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(write_error)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config: Config = read_ron(&Self::file_path(config_dir))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: String| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };

        if !self.simulation.sim_speed.is_finite() {
            return invalid(
                "simulation.sim_speed",
                format!("{} is not finite", self.simulation.sim_speed),
            );
        }
        if self.simulation.tick_interval_ms == 0 {
            return invalid("simulation.tick_interval_ms", "must be at least 1".into());
        }
        if !(self.solver.tolerance.is_finite() && self.solver.tolerance > 0.0) {
            return invalid(
                "solver.tolerance",
                format!("{} must be positive", self.solver.tolerance),
            );
        }
        if self.solver.max_iterations == 0 {
            return invalid("solver.max_iterations", "must be at least 1".into());
        }
        if !(self.sampler.step.is_finite() && self.sampler.step >= MIN_SAMPLE_STEP) {
            return invalid(
                "sampler.step",
                format!(
                    "{} must be finite and at least {MIN_SAMPLE_STEP}",
                    self.sampler.step
                ),
            );
        }
        Ok(())
    }
}

/// Reads and parses any RON document, such as a body table.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
