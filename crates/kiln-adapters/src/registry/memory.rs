//! In-memory registry source for tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kiln_core::{
    application::{ApplicationError, ports::RegistrySource},
    domain::Database,
    error::KilnResult,
};

/// Serves databases keyed by location. Unknown locations fail as
/// unreachable.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistrySource {
    databases: Arc<RwLock<HashMap<String, Database>>>,
}

impl MemoryRegistrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, location: impl Into<String>, database: Database) {
        if let Ok(mut map) = self.databases.write() {
            map.insert(location.into(), database);
        }
    }

    pub fn with(self, location: impl Into<String>, database: Database) -> Self {
        self.insert(location, database);
        self
    }
}

impl RegistrySource for MemoryRegistrySource {
    fn load(&self, location: &str) -> KilnResult<Database> {
        let map = self.databases.read().map_err(|_| ApplicationError::RegistryFetch {
            location: location.to_string(),
            status: None,
            reason: "lock poisoned".into(),
        })?;

        map.get(location).cloned().ok_or_else(|| {
            ApplicationError::RegistryFetch {
                location: location.to_string(),
                status: None,
                reason: "no such registry".into(),
            }
            .into()
        })
    }
}
