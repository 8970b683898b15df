//! Registry configuration management.
//!
//! Each mutation loads the persisted configuration, applies the change and
//! saves it straight back.

use tracing::info;

use crate::{
    application::ports::ConfigStore,
    domain::{RegistryConfig, RegistryEntry},
    error::KilnResult,
};

pub struct ConfigService {
    store: Box<dyn ConfigStore>,
}

impl ConfigService {
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> KilnResult<RegistryConfig> {
        self.store.load()
    }

    pub fn add(&self, name: &str, url: &str) -> KilnResult<RegistryConfig> {
        self.mutate(|config| Ok(config.add(name, url)?))
    }

    pub fn remove(&self, name: &str) -> KilnResult<RegistryEntry> {
        let mut config = self.store.load()?;
        let removed = config.remove(name)?;
        self.store.save(&config)?;
        info!(registry = %removed.name, "Registry removed");
        Ok(removed)
    }

    pub fn set_default(&self, name: &str) -> KilnResult<RegistryConfig> {
        self.mutate(|config| Ok(config.set_default(name)?))
    }

    /// Register `location` under a derived name and make it the default.
    /// Returns the name used.
    pub fn use_location(&self, location: &str) -> KilnResult<String> {
        let mut config = self.store.load()?;
        let name = config.use_location(location);
        self.store.save(&config)?;
        info!(registry = %name, "Registry in use");
        Ok(name)
    }

    pub fn set_order<I, S>(&self, names: I) -> KilnResult<RegistryConfig>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.mutate(|config| Ok(config.set_order(names)?))
    }

    fn mutate<F>(&self, f: F) -> KilnResult<RegistryConfig>
    where
        F: FnOnce(&mut RegistryConfig) -> KilnResult<()>,
    {
        let mut config = self.store.load()?;
        f(&mut config)?;
        self.store.save(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConfigStore;
    use crate::domain::{DomainError, PUBLIC_REGISTRY_NAME};
    use crate::error::KilnError;

    fn store_with_default() -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store.expect_load().returning(|| Ok(RegistryConfig::default()));
        store
    }

    #[test]
    fn add_persists_new_entry() {
        let mut store = store_with_default();
        store
            .expect_save()
            .withf(|c| c.contains("team") && c.default == PUBLIC_REGISTRY_NAME)
            .times(1)
            .returning(|_| Ok(()));

        let config = ConfigService::new(Box::new(store))
            .add("team", "https://team.example/registry.json")
            .unwrap();
        assert_eq!(config.registries.len(), 2);
    }

    #[test]
    fn failed_mutation_is_not_saved() {
        let mut store = store_with_default();
        store.expect_save().never();

        let err = ConfigService::new(Box::new(store))
            .set_default("nope")
            .unwrap_err();
        assert_eq!(
            err,
            KilnError::Domain(DomainError::UnknownRegistry {
                name: "nope".into()
            })
        );
    }

    #[test]
    fn use_location_saves_and_returns_name() {
        let mut store = store_with_default();
        store
            .expect_save()
            .withf(|c| {
                c.default == "mirror.example"
                    && c.order.first().map(String::as_str) == Some("mirror.example")
            })
            .times(1)
            .returning(|_| Ok(()));

        let name = ConfigService::new(Box::new(store))
            .use_location("https://mirror.example/registry.json")
            .unwrap();
        assert_eq!(name, "mirror.example");
    }
}
