//! Simple variable substitution renderer.

use std::path::{Path, PathBuf};

use kiln_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::{Context, KilnError, KilnResult},
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// Renders a template directory by placeholder substitution.
///
/// `{{Key}}` and `{{ .Key }}` are replaced in UTF-8 file contents and in
/// every path component. Other files are copied byte for byte.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(source = %source_dir.display(), dest = %dest_dir.display()))]
    fn render(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        context: &RenderContext,
    ) -> KilnResult<()> {
        if !source_dir.is_dir() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("template directory not found: {}", source_dir.display()),
            }
            .into());
        }

        std::fs::create_dir_all(dest_dir).map_err(|e| map_io_error(dest_dir, e))?;

        let mut files = 0usize;
        for entry in WalkDir::new(source_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::RenderingFailed {
                reason: e.to_string(),
            })?;
            let relative = entry
                .path()
                .strip_prefix(source_dir)
                .context("walked outside template root")?;
            let target = dest_dir.join(render_path(relative, context));

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target).map_err(|e| map_io_error(&target, e))?;
                continue;
            }

            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e))?;
            }
            let bytes = std::fs::read(entry.path()).map_err(|e| map_io_error(entry.path(), e))?;
            let rendered = match String::from_utf8(bytes) {
                Ok(text) => context.render(&text).into_bytes(),
                Err(raw) => raw.into_bytes(),
            };
            std::fs::write(&target, rendered).map_err(|e| map_io_error(&target, e))?;
            files += 1;
        }

        debug!(files, "Template rendered");
        Ok(())
    }
}

fn render_path(relative: &Path, context: &RenderContext) -> PathBuf {
    relative
        .components()
        .map(|c| context.render(&c.as_os_str().to_string_lossy()))
        .collect()
}

fn map_io_error(path: &Path, e: std::io::Error) -> KilnError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
