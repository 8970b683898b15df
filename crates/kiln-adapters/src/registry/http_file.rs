//! Registry source for `http(s)://` URLs and filesystem paths.

use std::path::Path;

use tracing::{debug, instrument};

use kiln_core::{
    application::{ApplicationError, ports::RegistrySource},
    domain::{Database, is_remote_location},
    error::KilnResult,
};

use crate::http::HttpClient;

/// Production registry source.
///
/// URLs are fetched over HTTP; anything else is read as a file.
#[derive(Debug, Clone)]
pub struct HttpFileRegistrySource {
    http: HttpClient,
}

impl HttpFileRegistrySource {
    pub fn new() -> KilnResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
        })
    }

    /// Raw registry bytes from `location`, without parsing.
    pub fn fetch_raw(&self, location: &str) -> KilnResult<Vec<u8>> {
        if is_remote_location(location) {
            debug!(location, "Fetching registry over HTTP");
            return self.http.get_bytes(location).map_err(|f| {
                ApplicationError::RegistryFetch {
                    location: location.to_string(),
                    status: f.status,
                    reason: f.reason,
                }
                .into()
            });
        }

        std::fs::read(Path::new(location)).map_err(|e| {
            ApplicationError::RegistryFetch {
                location: location.to_string(),
                status: None,
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl RegistrySource for HttpFileRegistrySource {
    #[instrument(skip(self))]
    fn load(&self, location: &str) -> KilnResult<Database> {
        let bytes = self.fetch_raw(location)?;
        parse_database(location, &bytes)
    }
}

/// Parse a registry document. A missing or null `blueprints` field yields
/// an empty database.
pub fn parse_database(location: &str, bytes: &[u8]) -> KilnResult<Database> {
    serde_json::from_slice(bytes).map_err(|e| {
        ApplicationError::RegistryParse {
            location: location.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
