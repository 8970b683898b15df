//! `.tar.gz` blueprint archives served over HTTP.

use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use flate2::read::GzDecoder;
use tempfile::TempDir;
use tracing::{debug, info, instrument, warn};

use kiln_core::{
    application::{ApplicationError, TEMPLATE_DIR, ports::ArchiveFetcher},
    error::{KilnError, KilnResult},
};

use crate::http::HttpClient;

/// Downloads blueprint archives and unpacks their `template/` subtree.
///
/// Each fetch lands in its own temporary directory, removed when the
/// fetcher is dropped.
#[derive(Debug)]
pub struct HttpArchiveFetcher {
    http: HttpClient,
    workspaces: Mutex<Vec<TempDir>>,
}

impl HttpArchiveFetcher {
    pub fn new() -> KilnResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            workspaces: Mutex::new(Vec::new()),
        })
    }

    fn workspace(&self, url: &str) -> KilnResult<PathBuf> {
        let dir = tempfile::Builder::new()
            .prefix("kiln-tpl-")
            .tempdir()
            .map_err(|e| archive_error(url, e))?;
        let path = dir.path().to_path_buf();

        self.workspaces
            .lock()
            .map_err(|_| KilnError::Internal {
                message: "archive workspace lock poisoned".into(),
            })?
            .push(dir);
        Ok(path)
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    #[instrument(skip(self))]
    fn fetch_and_extract(&self, url: &str) -> KilnResult<PathBuf> {
        let bytes = self.http.get_bytes(url).map_err(|f| {
            KilnError::from(ApplicationError::ArchiveFetch {
                url: url.to_string(),
                status: f.status,
                reason: f.reason,
            })
        })?;
        debug!(bytes = bytes.len(), "Archive downloaded");

        let dest = self.workspace(url)?;
        let written = extract_template(&bytes, &dest).map_err(|e| archive_error(url, e))?;
        info!(files = written, "Template extracted");

        Ok(dest.join(TEMPLATE_DIR))
    }
}

/// Unpack regular files under `template/` from gzip-compressed tar bytes
/// into `dest`, keeping their relative paths. Returns the number of files
/// written.
///
/// Directories, links and entries outside `template/` are skipped. A
/// leading `./` is ignored. Entries with `..` or absolute components are
/// rejected.
pub fn extract_template(bytes: &[u8], dest: &Path) -> io::Result<usize> {
    let mut archive = tar::Archive::new(GzDecoder::new(Cursor::new(bytes)));
    let mut written = 0;

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        // `tar czf x.tgz ./template` stores entries as `./template/...`.
        let path: PathBuf = entry
            .path()?
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if !path.starts_with(TEMPLATE_DIR) {
            continue;
        }
        if path.components().any(|c| !matches!(c, Component::Normal(_))) {
            warn!(path = %path.display(), "Rejecting unsafe archive entry");
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsafe path in archive: {}", path.display()),
            ));
        }

        let out = dest.join(&path);
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(&out)?;
        io::copy(&mut entry, &mut file)?;
        written += 1;
    }

    Ok(written)
}

fn archive_error(url: &str, e: io::Error) -> KilnError {
    ApplicationError::ArchiveFetch {
        url: url.to_string(),
        status: None,
        reason: e.to_string(),
    }
    .into()
}
