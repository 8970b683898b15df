//! Infrastructure adapters for kiln.
//!
//! This crate implements the ports defined in `kiln-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod fetcher;
pub mod http;
pub mod manifest;
pub mod registry;
pub mod renderer;

// Re-export commonly used adapters
pub use config_store::TomlConfigStore;
pub use fetcher::HttpArchiveFetcher;
pub use registry::{HttpFileRegistrySource, MemoryRegistrySource};
pub use renderer::SimpleRenderer;
