//! Registry database sources.

mod http_file;
mod memory;

pub use http_file::{HttpFileRegistrySource, parse_database};
pub use memory::MemoryRegistrySource;
