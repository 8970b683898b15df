use crate::domain::{
    entities::{BlueprintManifest, RegistryConfig},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &RegistryConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_manifest(manifest: &BlueprintManifest) -> Result<(), DomainError> {
        manifest.validate()
    }
}
