//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve a blueprint" or "generate a project".

pub mod config_service;
pub mod generate_service;
pub mod registry_service;
pub mod resolver;

pub use config_service::ConfigService;
pub use generate_service::{
    FetchPipeline, GenerateOutcome, GenerateRequest, TEMPLATE_DIR, parse_assignment,
};
pub use registry_service::{
    LoadedRegistry, RegistryAggregator, ResolveOptions, SearchGroup, SourcedBlueprint,
};
pub use resolver::BlueprintResolver;
