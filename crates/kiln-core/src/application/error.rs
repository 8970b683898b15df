//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports, not business logic. Business logic errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A registry could not be reached or read.
    #[error("failed to fetch registry {location}: {reason}")]
    RegistryFetch {
        location: String,
        status: Option<u16>,
        reason: String,
    },

    /// A registry was reached but its content is malformed.
    #[error("failed to parse registry {location}: {reason}")]
    RegistryParse { location: String, reason: String },

    /// A remote blueprint archive could not be downloaded or extracted.
    #[error("failed to fetch archive {url}: {reason}")]
    ArchiveFetch {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    /// The local template directory for a blueprint does not exist.
    #[error("template not found locally: {path}")]
    TemplateMissing { path: PathBuf, source_location: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// User-supplied template variables could not be used.
    #[error("invalid template variables: {reason}")]
    VariablesInvalid { reason: String },

    /// Interactive input could not be read.
    #[error("prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RegistryFetch { location, .. } => vec![
                format!("Could not read registry: {location}"),
                "Check your network connection or the registry path".into(),
                "Registries are loaded in order; fix or remove the failing one: kiln registry remove <name>".into(),
            ],
            Self::RegistryParse { location, .. } => vec![
                format!("Registry content is not valid: {location}"),
                "A registry must be JSON of the form {\"blueprints\": [...]}".into(),
            ],
            Self::ArchiveFetch { url, .. } => vec![
                format!("Could not download blueprint archive: {url}"),
                "The archive must be a .tar.gz containing a template/ directory".into(),
            ],
            Self::TemplateMissing { source_location, .. } => vec![
                "The blueprint is not checked out locally".into(),
                format!("Use --remote to download it from {source_location}"),
                "Or point KILN_BLUEPRINTS_DIR at your local blueprints checkout".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::VariablesInvalid { .. } => vec![
                "Variables are given as --set key=value".into(),
                "A --vars file must contain a YAML or JSON mapping".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RegistryFetch { .. } | Self::ArchiveFetch { .. } => ErrorCategory::Network,
            Self::RegistryParse { .. } => ErrorCategory::Parse,
            Self::TemplateMissing { .. } => ErrorCategory::Configuration,
            Self::VariablesInvalid { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
