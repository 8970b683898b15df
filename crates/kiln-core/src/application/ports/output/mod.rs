//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{Database, RegistryConfig, RenderContext};
use crate::error::KilnResult;

/// Port for loading a registry database.
///
/// Implemented by:
/// - `kiln_adapters::registry::HttpFileRegistrySource` (production)
/// - `kiln_adapters::registry::MemoryRegistrySource` (testing)
///
/// ## Contract
///
/// - `location` is either an `http(s)://` URL or a filesystem path
/// - A source that cannot be read fails with `ApplicationError::RegistryFetch`
/// - Malformed content fails with `ApplicationError::RegistryParse`
/// - Every call is a fresh load; nothing is cached between calls
#[cfg_attr(test, mockall::automock)]
pub trait RegistrySource: Send + Sync {
    fn load(&self, location: &str) -> KilnResult<Database>;
}

/// Port for remote blueprint archives.
///
/// Implemented by:
/// - `kiln_adapters::fetcher::HttpArchiveFetcher`
#[cfg_attr(test, mockall::automock)]
pub trait ArchiveFetcher: Send + Sync {
    /// Download `url`, unpack its `template/` subtree and return the local
    /// path of that subtree.
    ///
    /// The returned directory must stay valid for as long as the fetcher is
    /// alive.
    fn fetch_and_extract(&self, url: &str) -> KilnResult<PathBuf>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `kiln_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every file under `source_dir` into `dest_dir`.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Template root (the `template/` directory)
    /// * `dest_dir` - Output root, created if missing
    /// * `context` - Variable substitution context
    fn render(&self, source_dir: &Path, dest_dir: &Path, context: &RenderContext)
    -> KilnResult<()>;
}

/// Port for the persisted registry configuration.
///
/// Implemented by:
/// - `kiln_adapters::config_store::TomlConfigStore`
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Read the configuration, seeding it on first use.
    fn load(&self) -> KilnResult<RegistryConfig>;

    /// Write the configuration back.
    fn save(&self, config: &RegistryConfig) -> KilnResult<()>;
}

/// Port for interactive input.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask for `key`, offering `default`. An empty answer keeps the default.
    fn ask(&self, key: &str, default: &str) -> KilnResult<String>;
}
