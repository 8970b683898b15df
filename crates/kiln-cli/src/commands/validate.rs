//! `kiln validate` - check a blueprint manifest.

use kiln_adapters::manifest::validate_manifest;

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    if !args.file.is_file() {
        return Err(CliError::FileNotFound { path: args.file });
    }
    validate_manifest(&args.file)?;
    output.print(&format!("OK: {}", args.file.display()))?;
    Ok(())
}
