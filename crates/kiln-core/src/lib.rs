//! Kiln Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the kiln
//! blueprint scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             kiln-cli (CLI)              │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (RegistryAggregator, BlueprintResolver │
//! │   FetchPipeline, ConfigService)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (RegistrySource, ArchiveFetcher,       │
//! │   TemplateRenderer, ConfigStore)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     kiln-adapters (Infrastructure)      │
//! │  (HTTP/file registries, tar.gz fetcher, │
//! │   directory renderer, TOML config)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Version, Constraint, Blueprint,       │
//! │   RegistryConfig, RenderContext)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kiln_core::{
//!     application::{BlueprintResolver, RegistryAggregator, ResolveOptions},
//!     domain::RegistryConfig,
//! };
//!
//! # fn source() -> Box<dyn kiln_core::application::RegistrySource> { unimplemented!() }
//! let resolver = BlueprintResolver::new(RegistryAggregator::new(source()));
//! let config = RegistryConfig::default();
//!
//! let found = resolver
//!     .resolve(&config, &ResolveOptions::new(), "api-service", "^1.0")
//!     .unwrap();
//! println!("{} {} from {}", found.blueprint.name, found.blueprint.version, found.source);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlueprintResolver, ConfigService, FetchPipeline, GenerateRequest, RegistryAggregator,
        ResolveOptions, SourcedBlueprint,
        ports::{ArchiveFetcher, ConfigStore, Prompter, RegistrySource, TemplateRenderer},
    };
    pub use crate::domain::{
        Blueprint, BlueprintFilter, BlueprintManifest, Constraint, Database, RegistryConfig,
        RenderContext, Version, satisfies,
    };
    pub use crate::error::{KilnError, KilnResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
