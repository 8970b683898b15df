//! `kiln get` - remote generation into `./<name>`.

use std::path::Path;

use crate::{
    cli::{GetArgs, GlobalArgs},
    commands::generate,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: GetArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let out = Path::new(".").join(&args.name);
    output.info(&format!(
        "Generating {} into {} using remote asset...",
        args.name,
        out.display()
    ))?;

    let outcome = generate::run(
        &args.name,
        &out,
        true,
        &args.options,
        &global,
        &config,
        &output,
    )?;

    output.success(&format!(
        "Generated {} into {}",
        outcome.blueprint,
        outcome.output_dir.display()
    ))?;
    Ok(())
}
