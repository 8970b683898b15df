//! TOML-backed registry configuration.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use kiln_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{DomainValidator, RegistryConfig},
    error::{Context, KilnError, KilnResult},
};

/// Reads and writes [`RegistryConfig`] as a TOML file.
///
/// A missing file is seeded with the public registry and written out on
/// first load. Concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for TomlConfigStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> KilnResult<RegistryConfig> {
        if !self.path.exists() {
            let seeded = RegistryConfig::default();
            self.save(&seeded)?;
            info!("Seeded registry configuration");
            return Ok(seeded);
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| fs_error(&self.path, e))?;
        let config: RegistryConfig = toml::from_str(&raw).map_err(|e| KilnError::Configuration {
            message: format!("{}: {}", self.path.display(), e.message()),
        })?;
        DomainValidator::validate_config(&config)?;

        debug!(registries = config.registries.len(), "Configuration loaded");
        Ok(config)
    }

    fn save(&self, config: &RegistryConfig) -> KilnResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| fs_error(parent, e))?;
        }
        let raw = toml::to_string_pretty(config).context("failed to serialize configuration")?;
        std::fs::write(&self.path, raw).map_err(|e| fs_error(&self.path, e))
    }
}

fn fs_error(path: &Path, e: std::io::Error) -> KilnError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{DomainError, PUBLIC_REGISTRY_NAME};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn first_load_seeds_and_writes() {
        let dir = TempDir::new().unwrap();
        let store = TomlConfigStore::new(dir.path().join("nested/config.toml"));

        let config = store.load().unwrap();
        assert_eq!(config.default, PUBLIC_REGISTRY_NAME);
        assert_eq!(config.order, vec![PUBLIC_REGISTRY_NAME]);
        assert!(store.path().is_file());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = TomlConfigStore::new(dir.path().join("config.toml"));

        let mut config = RegistryConfig::default();
        config.add("team", "/srv/registry.json").unwrap();
        config.add("mirror", "https://mirror.example/r.json").unwrap();
        config.set_order(["mirror", "public", "team"]).unwrap();
        config.set_default("team").unwrap();
        store.save(&config).unwrap();

        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn invalid_order_is_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"default = "a"
order = ["a", "ghost"]

[[registries]]
name = "a"
url = "/a.json"
"#,
        )
        .unwrap();

        let err = TomlConfigStore::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            KilnError::Domain(DomainError::InvalidConfiguration(msg)) if msg.contains("ghost")
        ));
    }

    #[test]
    fn malformed_toml_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "registries = 3 = 4").unwrap();

        assert!(matches!(
            TomlConfigStore::new(path).load(),
            Err(KilnError::Configuration { .. })
        ));
    }
}
