//! Remote blueprint archive fetching.

mod archive;

pub use archive::{HttpArchiveFetcher, extract_template};
