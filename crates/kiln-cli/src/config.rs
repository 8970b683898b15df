//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns it; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--config`, also read from `KILN_CONFIG` by clap)
//! 2. Environment variables (`KILN_BLUEPRINTS_DIR`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Environment variable naming the local blueprints checkout.
pub const BLUEPRINTS_DIR_ENV: &str = "KILN_BLUEPRINTS_DIR";

/// Local blueprints root used when nothing else is configured.
pub const DEFAULT_BLUEPRINTS_DIR: &str = "../blueprints";

/// Runtime settings for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TOML file holding the registry configuration.
    pub registry_file: PathBuf,
    /// Directory holding local blueprint checkouts.
    pub blueprints_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry_file: Self::config_path(),
            blueprints_dir: PathBuf::from(DEFAULT_BLUEPRINTS_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration from flags and the process environment.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        Self::resolve(
            config_file.map(PathBuf::as_path),
            std::env::var_os(BLUEPRINTS_DIR_ENV).map(PathBuf::from),
        )
    }

    /// Build a configuration from explicit inputs.
    pub fn resolve(config_file: Option<&Path>, blueprints_dir: Option<PathBuf>) -> CliResult<Self> {
        let registry_file = match config_file {
            Some(path) if path.as_os_str().is_empty() => {
                return Err(CliError::ConfigError {
                    message: "--config must not be empty".into(),
                    source: None,
                });
            }
            Some(path) => path.to_path_buf(),
            None => Self::config_path(),
        };

        let blueprints_dir = blueprints_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BLUEPRINTS_DIR));

        Ok(Self {
            registry_file,
            blueprints_dir,
        })
    }

    /// Path to the default registry configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kiln.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "kiln", "kiln")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kiln.toml"))
    }
}
