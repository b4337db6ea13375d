//! Command-line argument parsing for the Orrery simulator.

use std::path::PathBuf;

use clap::Parser;

use crate::{CatalogChoice, Config};

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Keplerian orbit simulator")]
pub struct CliArgs {
    /// Speed scale (anomaly advance per tick, in units of mean motion).
    #[arg(long)]
    pub sim_speed: Option<f64>,

    /// Milliseconds between ticks.
    #[arg(long)]
    pub tick_interval_ms: Option<u64>,

    /// Built-in element table to load.
    #[arg(long, value_enum)]
    pub catalog: Option<CatalogChoice>,

    /// RON file with body definitions (replaces the catalog).
    #[arg(long)]
    pub bodies: Option<PathBuf>,

    /// Run this many ticks, then exit.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.sim_speed {
            self.simulation.sim_speed = speed;
        }
        if let Some(interval) = args.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(catalog) = args.catalog {
            self.simulation.catalog = catalog;
        }
        if let Some(ref bodies) = args.bodies {
            self.simulation.bodies_file = Some(bodies.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            sim_speed: Some(4.0),
            catalog: Some(CatalogChoice::NearEarth),
            bodies: Some(PathBuf::from("comets.ron")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.sim_speed, 4.0);
        assert_eq!(config.simulation.catalog, CatalogChoice::NearEarth);
        assert_eq!(
            config.simulation.bodies_file.as_deref(),
            Some(std::path::Path::new("comets.ron"))
        );
        // Non-overridden fields retain defaults
        assert_eq!(config.simulation.tick_interval_ms, 50);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::parse_from([
            "orrery",
            "--sim-speed",
            "0.5",
            "--catalog",
            "near-earth",
            "--ticks",
            "100",
        ]);
        assert_eq!(args.sim_speed, Some(0.5));
        assert_eq!(args.catalog, Some(CatalogChoice::NearEarth));
        assert_eq!(args.ticks, Some(100));
        assert!(args.config.is_none());
    }
}
