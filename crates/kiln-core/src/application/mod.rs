//! Application layer for kiln.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RegistryAggregator, BlueprintResolver, FetchPipeline)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    BlueprintResolver, ConfigService, FetchPipeline, GenerateOutcome, GenerateRequest,
    LoadedRegistry, RegistryAggregator, ResolveOptions, SearchGroup, SourcedBlueprint,
    TEMPLATE_DIR, parse_assignment,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ArchiveFetcher, ConfigStore, Prompter, RegistrySource, TemplateRenderer};

pub use error::ApplicationError;
