pub mod blueprint;
pub mod manifest;
pub mod registry;
pub mod render_context;

pub use blueprint::{Blueprint, BlueprintFilter, Database};
pub use manifest::BlueprintManifest;
pub use registry::{RegistryConfig, RegistryEntry};
pub use render_context::{BlueprintDefaults, BlueprintKind, RenderContext};
