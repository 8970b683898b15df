// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for kiln.
//!
//! This module contains pure business logic: version parsing, constraint
//! evaluation, blueprint records and registry configuration. All I/O
//! (registry fetching, archive download, rendering, persistence) is handled
//! via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable inputs**: a loaded `Database` is never mutated in place
//!
pub mod constraint;
pub mod entities;
pub mod error;
pub mod version;

mod validation;

pub use constraint::{Bound, Constraint, Interval, Operator, satisfies};
pub use entities::{
    blueprint::{Blueprint, BlueprintFilter, Database},
    manifest::{BlueprintManifest, INITIAL_VERSION},
    registry::{
        PUBLIC_REGISTRY_NAME, PUBLIC_REGISTRY_URL, RegistryConfig, RegistryEntry, auto_name,
        is_remote_location,
    },
    render_context::{BlueprintDefaults, BlueprintKind, NAME_KEY, RenderContext},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use version::{BumpKind, Version};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Constraint + Blueprint
    // ========================================================================

    #[test]
    fn blueprint_version_checked_against_constraint() {
        let bp = Blueprint::new("api-service", "v1.4.2");
        assert!(Constraint::parse("^1.0").matches(&bp.parsed_version()));
        assert!(Constraint::parse("~1.4").matches(&bp.parsed_version()));
        assert!(!Constraint::parse(">=1.5").matches(&bp.parsed_version()));
    }

    #[test]
    fn lenient_registry_version_still_comparable() {
        let bp = Blueprint::new("odd", "latest");
        assert_eq!(bp.parsed_version(), Version::new(0, 0, 0));
        assert!(satisfies(&bp.version, "<1"));
    }

    // ========================================================================
    // Validator
    // ========================================================================

    #[test]
    fn validator_delegates_to_entities() {
        assert!(DomainValidator::validate_config(&RegistryConfig::default()).is_ok());
        assert!(DomainValidator::validate_manifest(&BlueprintManifest::new("", "")).is_err());
    }

    #[test]
    fn error_categories() {
        let nf = DomainError::BlueprintNotFound {
            name: "x".into(),
            searched: 2,
        };
        assert_eq!(nf.category(), ErrorCategory::NotFound);
        assert!(nf.to_string().contains("searched 2"));

        let unknown = DomainError::UnknownRegistry { name: "x".into() };
        assert_eq!(unknown.category(), ErrorCategory::Configuration);
        assert!(!unknown.suggestions().is_empty());
    }
}
