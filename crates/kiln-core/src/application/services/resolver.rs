//! Blueprint resolution by name and version constraint.

use tracing::{debug, info, instrument};

use crate::{
    application::services::registry_service::{
        RegistryAggregator, ResolveOptions, SourcedBlueprint,
    },
    domain::{Constraint, DomainError, RegistryConfig},
    error::KilnResult,
};

/// Finds a blueprint across registries in precedence order.
pub struct BlueprintResolver {
    aggregator: RegistryAggregator,
}

impl BlueprintResolver {
    pub fn new(aggregator: RegistryAggregator) -> Self {
        Self { aggregator }
    }

    /// First registry, in resolution order, holding a blueprint named
    /// exactly `name`.
    ///
    /// Registries after the first hit are never loaded, so a newer version
    /// further down the order is not considered. A registry that fails to
    /// load before a hit aborts the lookup.
    #[instrument(skip(self, config, options))]
    pub fn find(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
        name: &str,
    ) -> KilnResult<SourcedBlueprint> {
        let order = self.aggregator.resolve_order(config, options);

        for location in &order {
            let loaded = self.aggregator.load(location)?;
            if let Some(bp) = loaded.database.find(name) {
                info!(source = %location, version = %bp.version, "Blueprint resolved");
                return Ok(SourcedBlueprint {
                    blueprint: bp.clone(),
                    source: loaded.location,
                });
            }
            debug!(source = %location, "Not in registry");
        }

        Err(DomainError::BlueprintNotFound {
            name: name.to_string(),
            searched: order.len(),
        }
        .into())
    }

    /// [`find`](Self::find), then check the found version against
    /// `constraint`.
    ///
    /// Only the first-found blueprint is checked. A mismatch fails without
    /// consulting later registries. An empty constraint always passes.
    #[instrument(skip(self, config, options))]
    pub fn resolve(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
        name: &str,
        constraint: &str,
    ) -> KilnResult<SourcedBlueprint> {
        let found = self.find(config, options, name)?;
        if !Constraint::parse(constraint).matches(&found.blueprint.parsed_version()) {
            return Err(DomainError::ConstraintUnsatisfied {
                name: name.to_string(),
                version: found.blueprint.version.clone(),
                constraint: constraint.trim().to_string(),
            }
            .into());
        }

        Ok(found)
    }
}
