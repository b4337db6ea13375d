//! Startup work that happens before the subscriber is installed.
//!
//! Config loading needs the directories, and the subscriber needs the config's
//! log level, so anything worth reporting here is kept on [`Startup`] and
//! logged once logging is up.

use std::path::{Path, PathBuf};

use orrery_config::{CliArgs, Config};
use tracing::info;

use crate::error::AppError;
use crate::platform::PlatformDirs;

/// Whether `config.ron` was read or freshly written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Loaded,
    Created,
}

/// Resolved directories and the effective configuration.
#[derive(Debug)]
pub struct Startup {
    pub dirs: PlatformDirs,
    pub config: Config,
    pub origin: ConfigOrigin,
}

impl Startup {
    /// Resolves directories, loads or creates the config, applies CLI
    /// overrides and validates the result.
    ///
    /// A relative body file that does not exist from the working directory is
    /// looked up in the data directory.
    pub fn prepare(args: &CliArgs) -> Result<Self, AppError> {
        let dirs = match &args.config {
            Some(root) => PlatformDirs::with_root(root),
            None => PlatformDirs::resolve()?,
        };
        dirs.create_dirs()?;

        let origin = if Config::file_path(&dirs.config_dir).exists() {
            ConfigOrigin::Loaded
        } else {
            ConfigOrigin::Created
        };
        let mut config = Config::load_or_create(&dirs.config_dir)?;
        config.apply_cli_overrides(args);
        if let Some(path) = config.simulation.bodies_file.take() {
            config.simulation.bodies_file = Some(resolve_bodies_file(&dirs.data_dir, path));
        }
        config.validate()?;

        Ok(Self {
            dirs,
            config,
            origin,
        })
    }

    /// Logs what [`prepare`](Self::prepare) did; call after `init_logging`.
    pub fn log_summary(&self) {
        let config_file = Config::file_path(&self.dirs.config_dir);
        match self.origin {
            ConfigOrigin::Loaded => info!(path = %config_file.display(), "Loaded config"),
            ConfigOrigin::Created => info!(path = %config_file.display(), "Created default config"),
        }
        if let Some(bodies) = &self.config.simulation.bodies_file {
            info!(path = %bodies.display(), "Body table replaces the built-in catalog");
        }
    }
}

fn resolve_bodies_file(data_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() && !path.exists() {
        data_dir.join(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(root: &Path) -> CliArgs {
        CliArgs {
            config: Some(root.to_path_buf()),
            ..CliArgs::default()
        }
    }

    #[test]
    fn test_first_run_creates_then_loads() {
        let tmp = tempfile::tempdir().unwrap();
        let args = args_for(tmp.path());

        let first = Startup::prepare(&args).unwrap();
        assert_eq!(first.origin, ConfigOrigin::Created);
        assert!(Config::file_path(tmp.path()).exists());
        assert!(first.dirs.log_dir.is_dir());

        let second = Startup::prepare(&args).unwrap();
        assert_eq!(second.origin, ConfigOrigin::Loaded);
        assert_eq!(second.config, first.config);
    }

    #[test]
    fn test_overrides_are_validated() {
        let tmp = tempfile::tempdir().unwrap();
        let args = CliArgs {
            sim_speed: Some(f64::NAN),
            ..args_for(tmp.path())
        };
        assert!(matches!(
            Startup::prepare(&args),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_relative_bodies_file_resolves_in_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let args = CliArgs {
            bodies: Some(PathBuf::from("orrery-test-comets.ron")),
            ..args_for(tmp.path())
        };
        let startup = Startup::prepare(&args).unwrap();
        assert_eq!(
            startup.config.simulation.bodies_file,
            Some(startup.dirs.data_dir.join("orrery-test-comets.ron"))
        );
    }

    #[test]
    fn test_absolute_bodies_file_is_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let absolute = tmp.path().join("elsewhere.ron");
        let args = CliArgs {
            bodies: Some(absolute.clone()),
            ..args_for(tmp.path())
        };
        let startup = Startup::prepare(&args).unwrap();
        assert_eq!(startup.config.simulation.bodies_file, Some(absolute));
    }
}
