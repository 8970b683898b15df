//! `kiln bump` - increment the version in a blueprint manifest.

use tracing::info;

use kiln_adapters::manifest::{read_manifest, write_manifest};
use kiln_core::domain::BumpKind;

use crate::{
    cli::{BumpArgs, BumpKindArg},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: BumpArgs, output: OutputManager) -> CliResult<()> {
    if !args.file.is_file() {
        return Err(CliError::FileNotFound { path: args.file });
    }

    let mut manifest = read_manifest(&args.file)?;
    let previous = manifest.version.clone();
    let next = manifest.bump(convert_kind(args.kind));
    write_manifest(&args.file, &manifest)?;

    info!(from = %previous, to = %next, "Manifest version bumped");
    output.print(&format!("bumped to {next}"))?;
    Ok(())
}

fn convert_kind(kind: BumpKindArg) -> BumpKind {
    match kind {
        BumpKindArg::Patch => BumpKind::Patch,
        BumpKindArg::Minor => BumpKind::Minor,
        BumpKindArg::Major => BumpKind::Major,
    }
}
