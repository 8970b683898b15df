//! Blocking HTTP client shared by the registry source and archive fetcher.

use reqwest::blocking::Client;
use thiserror::Error;

use kiln_core::error::{Context, KilnResult};

const USER_AGENT: &str = concat!("kiln/", env!("CARGO_PKG_VERSION"));

/// A failed GET: transport error (no status) or non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct HttpFailure {
    pub status: Option<u16>,
    pub reason: String,
}

/// Thin wrapper over a blocking `reqwest` client.
///
/// No timeout is configured; a hanging server blocks the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> KilnResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// GET `url` and return the body.
    ///
    /// A non-2xx status fails with the status and response body.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, HttpFailure> {
        let response = self.client.get(url).send().map_err(|e| HttpFailure {
            status: None,
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(HttpFailure {
                status: Some(status.as_u16()),
                reason: format!("HTTP {}: {}", status, body.trim()),
            });
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| HttpFailure {
                status: Some(status.as_u16()),
                reason: e.to_string(),
            })
    }
}
