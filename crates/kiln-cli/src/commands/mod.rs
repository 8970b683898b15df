//! Command handlers, one module per subcommand.
//!
//! Each handler has the shape
//! `execute(args, global, config, output) -> CliResult<()>` and builds the
//! adapters it needs on the spot.

pub mod bump;
pub mod completions;
pub mod generate;
pub mod get;
pub mod info;
pub mod init;
pub mod list;
pub mod registry;
pub mod search;
pub mod update;
pub mod validate;

use kiln_adapters::{HttpFileRegistrySource, TomlConfigStore};
use kiln_core::{
    application::{BlueprintResolver, ConfigService, RegistryAggregator, ResolveOptions},
    domain::RegistryConfig,
};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// `--registry` as resolution options.
pub(crate) fn resolve_options(global: &GlobalArgs) -> ResolveOptions {
    match &global.registry {
        Some(location) => ResolveOptions::new().with_registry(location.clone()),
        None => ResolveOptions::new(),
    }
}

pub(crate) fn config_service(config: &AppConfig) -> ConfigService {
    ConfigService::new(Box::new(TomlConfigStore::new(&config.registry_file)))
}

/// The registry configuration to resolve against.
///
/// The persisted file is not touched when an override replaces it.
pub(crate) fn registry_config(
    config: &AppConfig,
    options: &ResolveOptions,
) -> CliResult<RegistryConfig> {
    if options.registry_override.is_some() {
        return Ok(RegistryConfig::empty());
    }
    Ok(config_service(config).load()?)
}

pub(crate) fn aggregator() -> CliResult<RegistryAggregator> {
    Ok(RegistryAggregator::new(Box::new(
        HttpFileRegistrySource::new()?,
    )))
}

pub(crate) fn resolver() -> CliResult<BlueprintResolver> {
    Ok(BlueprintResolver::new(aggregator()?))
}
