//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `kiln-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RegistrySource`: Load a blueprint database from a path or URL
//!   - `ArchiveFetcher`: Download and unpack a remote blueprint archive
//!   - `TemplateRenderer`: Render a template directory into an output directory
//!   - `ConfigStore`: Persist the registry configuration
//!   - `Prompter`: Ask the user for missing values
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ArchiveFetcher, ConfigStore, Prompter, RegistrySource, TemplateRenderer};

#[cfg(test)]
pub use output::{
    MockArchiveFetcher, MockConfigStore, MockPrompter, MockRegistrySource, MockTemplateRenderer,
};
