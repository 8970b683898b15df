// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can attach them to several reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Not Found
    // ========================================================================
    #[error("blueprint '{name}' not found in any configured registry (searched {searched})")]
    BlueprintNotFound { name: String, searched: usize },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("blueprint '{name}' version {version} does not satisfy constraint {constraint}")]
    ConstraintUnsatisfied {
        name: String,
        version: String,
        constraint: String,
    },

    // ========================================================================
    // Configuration
    // ========================================================================
    #[error("invalid registry configuration: {0}")]
    InvalidConfiguration(String),

    #[error("registry '{name}' not found")]
    UnknownRegistry { name: String },

    #[error("no registries configured")]
    NoRegistries,

    // ========================================================================
    // Validation
    // ========================================================================
    #[error("invalid blueprint manifest: {0}")]
    InvalidManifest(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BlueprintNotFound { name, .. } => vec![
                format!("No registry offers a blueprint named '{name}'"),
                "Try: kiln search --query <text> to find similar blueprints".into(),
                "Try: kiln registry list to check which registries are consulted".into(),
            ],
            Self::ConstraintUnsatisfied { name, .. } => vec![
                format!("The first registry offering '{name}' has a different version"),
                "Relax the --version constraint, or reorder registries with: kiln registry order"
                    .into(),
            ],
            Self::InvalidConfiguration(msg) => vec![
                format!("Details: {msg}"),
                "Fix the file shown by: kiln registry list -v".into(),
            ],
            Self::UnknownRegistry { name } => vec![
                format!("'{name}' is not a configured registry"),
                "Try: kiln registry list".into(),
                "Add it with: kiln registry add --name <name> --url <url>".into(),
            ],
            Self::NoRegistries => vec![
                "Add a registry with: kiln registry add --name <name> --url <url>".into(),
                "Or pass one directly with --registry <path-or-url>".into(),
            ],
            Self::InvalidManifest(_) | Self::MissingRequiredField { .. } => vec![
                "A manifest needs at least 'name' and 'version'".into(),
                "Create a fresh one with: kiln init --name <name>".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BlueprintNotFound { .. } => ErrorCategory::NotFound,
            Self::ConstraintUnsatisfied { .. } => ErrorCategory::Constraint,
            Self::InvalidConfiguration(_) | Self::UnknownRegistry { .. } | Self::NoRegistries => {
                ErrorCategory::Configuration
            }
            Self::InvalidManifest(_) | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Constraint,
    NotFound,
    Configuration,
}
