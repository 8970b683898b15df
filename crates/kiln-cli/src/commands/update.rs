//! `kiln update` - refresh a local registry file from a URL.

use std::path::PathBuf;

use tracing::info;

use kiln_adapters::{HttpFileRegistrySource, registry::parse_database};
use kiln_core::domain::is_remote_location;

use crate::{
    cli::{GlobalArgs, UpdateArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: UpdateArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    if !is_remote_location(&args.from) {
        return Err(CliError::invalid_input("--from must be an http(s) URL"));
    }
    let dest = destination(args.dest, global.registry)?;

    let spinner = output.spinner("Downloading registry");
    let fetched = HttpFileRegistrySource::new().and_then(|source| source.fetch_raw(&args.from));
    spinner.finish_and_clear();
    let bytes = fetched?;

    let database = parse_database(&args.from, &bytes)?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(&dest, &bytes)
        .with_cli_context(|| format!("Failed to write registry to '{}'", dest.display()))?;

    info!(blueprints = database.len(), dest = %dest.display(), "Registry updated");
    output.success(&format!(
        "Updated {} ({} blueprints)",
        dest.display(),
        database.len()
    ))?;
    Ok(())
}

/// `--dest`, else a local `--registry` override.
fn destination(dest: Option<PathBuf>, registry: Option<String>) -> CliResult<PathBuf> {
    if let Some(dest) = dest {
        return Ok(dest);
    }
    match registry {
        Some(location) if !location.trim().is_empty() && !is_remote_location(&location) => {
            Ok(PathBuf::from(location))
        }
        Some(_) => Err(CliError::invalid_input(
            "--registry is a URL; pass a local file with --dest",
        )),
        None => Err(CliError::invalid_input(
            "no destination; pass --dest or a local --registry path",
        )),
    }
}
