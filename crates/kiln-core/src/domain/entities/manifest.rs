//! Blueprint package manifest (`manifest.yaml`).

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    version::{BumpKind, Version},
};

/// Version written into freshly initialised manifests.
pub const INITIAL_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlueprintManifest {
    /// A new manifest at [`INITIAL_VERSION`] with no tags.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: INITIAL_VERSION.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if self.version.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "version" });
        }
        Ok(())
    }

    /// Bump the version in place and return the new one.
    pub fn bump(&mut self, kind: BumpKind) -> Version {
        let next = Version::parse(&self.version).bump(kind);
        self.version = next.to_string();
        next
    }
}
