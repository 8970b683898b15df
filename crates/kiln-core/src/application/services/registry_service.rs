//! Registry aggregation - ordered loading, listing and search.
//!
//! The aggregator turns a [`RegistryConfig`] into an ordered set of
//! locations and loads a [`Database`] from each through the
//! [`RegistrySource`] port. Order is precedence: earlier registries win on
//! name collisions.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::RegistrySource,
    domain::{Blueprint, BlueprintFilter, Database, DomainError, RegistryConfig},
    error::KilnResult,
};

/// Per-invocation resolution settings.
///
/// Passed explicitly into every aggregator and resolver call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// A single registry path or URL that replaces the configured order.
    pub registry_override: Option<String>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        self.registry_override = (!location.trim().is_empty()).then_some(location);
        self
    }
}

/// A database together with the location it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRegistry {
    pub location: String,
    pub database: Database,
}

/// A blueprint and the registry it was found in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcedBlueprint {
    #[serde(flatten)]
    pub blueprint: Blueprint,
    pub source: String,
}

/// Search hits for one registry. Empty groups are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchGroup {
    pub source: String,
    pub matches: Vec<Blueprint>,
}

/// Loads and merges blueprint databases across configured registries.
pub struct RegistryAggregator {
    source: Box<dyn RegistrySource>,
}

impl RegistryAggregator {
    pub fn new(source: Box<dyn RegistrySource>) -> Self {
        Self { source }
    }

    /// Locations to consult, in precedence order.
    ///
    /// An override replaces the configuration entirely.
    pub fn resolve_order(&self, config: &RegistryConfig, options: &ResolveOptions) -> Vec<String> {
        match &options.registry_override {
            Some(location) => vec![location.clone()],
            None => config.resolution_order(),
        }
    }

    /// The single registry used when not aggregating: the override if one
    /// is given, otherwise the default registry.
    pub fn active_location(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
    ) -> KilnResult<String> {
        if let Some(location) = &options.registry_override {
            return Ok(location.clone());
        }
        config
            .default_entry()
            .map(|r| r.url.clone())
            .ok_or_else(|| DomainError::NoRegistries.into())
    }

    /// Load one registry.
    pub fn load(&self, location: &str) -> KilnResult<LoadedRegistry> {
        let database = self.source.load(location)?;
        debug!(location, blueprints = database.len(), "Registry loaded");
        Ok(LoadedRegistry {
            location: location.to_string(),
            database,
        })
    }

    /// Load every registry in resolution order.
    ///
    /// Stops at the first registry that fails; later registries are not
    /// loaded.
    #[instrument(skip_all)]
    pub fn load_all(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
    ) -> KilnResult<Vec<LoadedRegistry>> {
        self.resolve_order(config, options)
            .iter()
            .map(|location| self.load(location))
            .collect()
    }

    /// Blueprints across all registries, first occurrence of each name only.
    ///
    /// A blueprint rejected by the tag filter does not hide a same-named
    /// blueprint in a later registry.
    #[instrument(skip_all, fields(tag = ?tag))]
    pub fn list(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
        tag: Option<&str>,
    ) -> KilnResult<Vec<SourcedBlueprint>> {
        let filter = tag_filter(tag);
        let mut seen = std::collections::HashSet::new();
        let mut rows = Vec::new();

        for loaded in self.load_all(config, options)? {
            for bp in loaded.database.blueprints {
                if seen.contains(&bp.name) || !filter.accepts(&bp) {
                    continue;
                }
                seen.insert(bp.name.clone());
                rows.push(SourcedBlueprint {
                    blueprint: bp,
                    source: loaded.location.clone(),
                });
            }
        }

        Ok(rows)
    }

    /// Blueprints of the active registry only.
    pub fn list_active(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
        tag: Option<&str>,
    ) -> KilnResult<Vec<SourcedBlueprint>> {
        let filter = tag_filter(tag);
        let loaded = self.load(&self.active_location(config, options)?)?;
        let source = loaded.location;

        Ok(loaded
            .database
            .blueprints
            .into_iter()
            .filter(|bp| filter.accepts(bp))
            .map(|blueprint| SourcedBlueprint {
                blueprint,
                source: source.clone(),
            })
            .collect())
    }

    /// Matches grouped per registry, without deduplication.
    ///
    /// With `all` unset only the active registry is searched.
    #[instrument(skip_all, fields(all))]
    pub fn search(
        &self,
        config: &RegistryConfig,
        options: &ResolveOptions,
        filter: &BlueprintFilter,
        all: bool,
    ) -> KilnResult<Vec<SearchGroup>> {
        let loaded = if all {
            self.load_all(config, options)?
        } else {
            vec![self.load(&self.active_location(config, options)?)?]
        };

        Ok(loaded
            .into_iter()
            .map(|registry| SearchGroup {
                matches: registry
                    .database
                    .blueprints
                    .into_iter()
                    .filter(|bp| filter.accepts(bp))
                    .collect(),
                source: registry.location,
            })
            .collect())
    }
}

fn tag_filter(tag: Option<&str>) -> BlueprintFilter {
    match tag {
        Some(tag) => BlueprintFilter::new().tag(tag),
        None => BlueprintFilter::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockRegistrySource};
    use crate::error::KilnError;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn three_registries() -> RegistryConfig {
        let mut config = RegistryConfig::empty();
        config.add("a", "/reg/a.json").unwrap();
        config.add("b", "/reg/b.json").unwrap();
        config.add("c", "/reg/c.json").unwrap();
        config.set_order(["a", "b", "c"]).unwrap();
        config
    }

    fn db(entries: &[(&str, &str, &[&str])]) -> Database {
        Database::new(
            entries
                .iter()
                .map(|(name, version, tags)| {
                    Blueprint::new(*name, *version).with_tags(tags.iter().copied())
                })
                .collect(),
        )
    }

    fn aggregator(source: MockRegistrySource) -> RegistryAggregator {
        RegistryAggregator::new(Box::new(source))
    }

    #[test]
    fn override_replaces_configured_order() {
        let agg = aggregator(MockRegistrySource::new());
        let options = ResolveOptions::new().with_registry("./local.json");
        assert_eq!(
            agg.resolve_order(&three_registries(), &options),
            vec!["./local.json"]
        );
    }

    #[test]
    fn blank_override_is_ignored() {
        let options = ResolveOptions::new().with_registry("  ");
        assert_eq!(options.registry_override, None);
    }

    #[test]
    fn load_all_is_fail_fast() {
        let mut source = MockRegistrySource::new();
        source
            .expect_load()
            .with(eq("/reg/a.json"))
            .times(1)
            .returning(|_| Ok(Database::default()));
        source
            .expect_load()
            .with(eq("/reg/b.json"))
            .times(1)
            .returning(|loc| {
                Err(ApplicationError::RegistryFetch {
                    location: loc.to_string(),
                    status: None,
                    reason: "unreachable".into(),
                }
                .into())
            });
        source.expect_load().with(eq("/reg/c.json")).never();

        let err = aggregator(source)
            .load_all(&three_registries(), &ResolveOptions::new())
            .unwrap_err();
        assert!(matches!(
            err,
            KilnError::Application(ApplicationError::RegistryFetch { location, .. })
                if location == "/reg/b.json"
        ));
    }

    #[test]
    fn list_keeps_first_seen_name() {
        let mut source = MockRegistrySource::new();
        source.expect_load().returning(|loc| {
            Ok(match loc {
                "/reg/a.json" => db(&[("x", "1.0.0", &[]), ("y", "1.0.0", &[])]),
                "/reg/b.json" => db(&[("x", "9.0.0", &[]), ("z", "1.0.0", &[])]),
                _ => Database::default(),
            })
        });

        let rows = aggregator(source)
            .list(&three_registries(), &ResolveOptions::new(), None)
            .unwrap();
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.blueprint.name.as_str(), r.blueprint.version.as_str(), r.source.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("x", "1.0.0", "/reg/a.json"),
                ("y", "1.0.0", "/reg/a.json"),
                ("z", "1.0.0", "/reg/b.json"),
            ]
        );
    }

    #[test]
    fn list_tag_filter_does_not_shadow_later_match() {
        let mut source = MockRegistrySource::new();
        source.expect_load().returning(|loc| {
            Ok(match loc {
                "/reg/a.json" => db(&[("x", "1.0.0", &["cli"])]),
                "/reg/b.json" => db(&[("x", "2.0.0", &["Web"])]),
                _ => Database::default(),
            })
        });

        let rows = aggregator(source)
            .list(&three_registries(), &ResolveOptions::new(), Some("web"))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].blueprint.version, "2.0.0");
        assert_eq!(rows[0].source, "/reg/b.json");
    }

    #[test]
    fn search_reports_every_registry() {
        let mut source = MockRegistrySource::new();
        source.expect_load().returning(|loc| {
            Ok(match loc {
                "/reg/a.json" => db(&[("api-service", "1.0.0", &["go"])]),
                "/reg/b.json" => db(&[("api-service", "2.0.0", &["go"])]),
                _ => db(&[("frontend", "1.0.0", &["ts"])]),
            })
        });

        let filter = BlueprintFilter::new().query("API");
        let groups = aggregator(source)
            .search(&three_registries(), &ResolveOptions::new(), &filter, true)
            .unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].matches[0].version, "1.0.0");
        assert_eq!(groups[1].matches[0].version, "2.0.0");
        assert!(groups[2].matches.is_empty());
    }

    #[test]
    fn search_without_all_uses_default_registry() {
        let mut config = three_registries();
        config.set_default("b").unwrap();

        let mut source = MockRegistrySource::new();
        source
            .expect_load()
            .with(eq("/reg/b.json"))
            .times(1)
            .returning(|_| Ok(db(&[("x", "1.0.0", &["go"])])));

        let groups = aggregator(source)
            .search(
                &config,
                &ResolveOptions::new(),
                &BlueprintFilter::new().tag("go"),
                false,
            )
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source, "/reg/b.json");
    }

    #[test]
    fn active_location_without_registries_fails() {
        let agg = aggregator(MockRegistrySource::new());
        let err = agg
            .active_location(&RegistryConfig::empty(), &ResolveOptions::new())
            .unwrap_err();
        assert_eq!(err, KilnError::Domain(DomainError::NoRegistries));
    }
}
