//! Registry configuration: which registries exist and in what order they
//! are consulted.
//!
//! # Invariants
//!
//! - registry names are unique
//! - every name in `order` refers to a configured registry
//! - a non-empty `default` refers to a configured registry
//!
//! Mutations keep these invariants; [`RegistryConfig::validate`] checks a
//! configuration read from disk, which may have been edited by hand.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Name of the registry seeded on first run.
pub const PUBLIC_REGISTRY_NAME: &str = "public";

/// Location of the registry seeded on first run.
pub const PUBLIC_REGISTRY_URL: &str = "https://registry.kiln.dev/registry.json";

/// `true` for `http://` and `https://` locations.
pub fn is_remote_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// A configured registry: a name and a filesystem path or HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub url: String,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Persisted set of registries, the default one, and the explicit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub registries: Vec<RegistryEntry>,
}

impl Default for RegistryConfig {
    /// The first-run configuration: only the public registry.
    fn default() -> Self {
        Self {
            default: PUBLIC_REGISTRY_NAME.into(),
            order: vec![PUBLIC_REGISTRY_NAME.into()],
            registries: vec![RegistryEntry::new(
                PUBLIC_REGISTRY_NAME,
                PUBLIC_REGISTRY_URL,
            )],
        }
    }
}

impl RegistryConfig {
    /// A configuration with no registries at all.
    pub fn empty() -> Self {
        Self {
            default: String::new(),
            order: Vec::new(),
            registries: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.registries.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The default registry entry, if one is set.
    pub fn default_entry(&self) -> Option<&RegistryEntry> {
        if self.default.is_empty() {
            return None;
        }
        self.get(&self.default)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.registries {
            if entry.name.trim().is_empty() {
                return Err(DomainError::InvalidConfiguration(
                    "registry with an empty name".into(),
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(DomainError::InvalidConfiguration(format!(
                    "registry '{}' is defined more than once",
                    entry.name
                )));
            }
        }

        if let Some(missing) = self.order.iter().find(|n| !self.contains(n)) {
            return Err(DomainError::InvalidConfiguration(format!(
                "order references unknown registry '{missing}'"
            )));
        }

        if !self.default.is_empty() && !self.contains(&self.default) {
            return Err(DomainError::InvalidConfiguration(format!(
                "default registry '{}' is not configured",
                self.default
            )));
        }

        Ok(())
    }

    /// Locations in the order registries are consulted.
    ///
    /// With an explicit `order`, each name maps to its URL and names without
    /// an entry are skipped. Without one, the default registry comes first,
    /// followed by the others in stored sequence.
    pub fn resolution_order(&self) -> Vec<String> {
        if !self.order.is_empty() {
            return self
                .order
                .iter()
                .filter_map(|name| self.get(name))
                .map(|r| r.url.clone())
                .collect();
        }

        self.default_entry()
            .into_iter()
            .chain(self.registries.iter().filter(|r| r.name != self.default))
            .map(|r| r.url.clone())
            .collect()
    }

    /// Insert or update a registry.
    ///
    /// The first registry added to an empty configuration becomes the
    /// default, and seeds `order` when none is set.
    pub fn add(&mut self, name: &str, url: &str) -> Result<(), DomainError> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if url.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "url" });
        }

        self.upsert(name, url);
        if self.default.is_empty() {
            self.default = name.to_string();
        }
        if self.order.is_empty() {
            self.order = vec![self.default.clone()];
        }
        Ok(())
    }

    /// Remove a registry, clearing it from `default` and `order`.
    pub fn remove(&mut self, name: &str) -> Result<RegistryEntry, DomainError> {
        let index = self
            .registries
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| DomainError::UnknownRegistry { name: name.into() })?;

        let removed = self.registries.remove(index);
        if self.default == name {
            self.default.clear();
        }
        self.order.retain(|n| n != name);
        Ok(removed)
    }

    /// Make `name` the default and move it to the front of `order`.
    pub fn set_default(&mut self, name: &str) -> Result<(), DomainError> {
        if !self.contains(name) {
            return Err(DomainError::UnknownRegistry { name: name.into() });
        }
        self.promote(name);
        Ok(())
    }

    /// Register `location` under a derived name and make it the default.
    ///
    /// Returns the name used.
    pub fn use_location(&mut self, location: &str) -> String {
        let name = auto_name(location);
        self.upsert(&name, location);
        self.promote(&name);
        name
    }

    /// Replace the explicit order. Blank entries are dropped; every other
    /// name must be configured.
    pub fn set_order<I, S>(&mut self, names: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        if let Some(unknown) = names.iter().find(|n| !self.contains(n)) {
            return Err(DomainError::UnknownRegistry {
                name: unknown.clone(),
            });
        }

        self.order = names;
        Ok(())
    }

    fn upsert(&mut self, name: &str, url: &str) {
        match self.registries.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.url = url.to_string(),
            None => self.registries.push(RegistryEntry::new(name, url)),
        }
    }

    fn promote(&mut self, name: &str) {
        self.default = name.to_string();
        self.order.retain(|n| n != name);
        self.order.insert(0, name.to_string());
    }
}

/// Derive a registry name from a location: the host of an HTTP(S) URL,
/// otherwise the last path component (`"local"` when there is none).
pub fn auto_name(location: &str) -> String {
    if is_remote_location(location) {
        if let Some(host) = url_host(location) {
            return host.to_string();
        }
    }

    Path::new(location)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("local")
        .to_string()
}

fn url_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://")?.1;
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    (!host.is_empty()).then_some(host)
}
