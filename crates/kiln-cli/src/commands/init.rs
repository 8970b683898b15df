//! `kiln init` - create a blueprint skeleton.

use kiln_adapters::manifest::{MANIFEST_FILE, init_blueprint};

use crate::{cli::InitArgs, error::CliResult, output::OutputManager};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let desc = args.desc.as_deref().unwrap_or_default();
    let root = init_blueprint(&args.dir, &args.name, desc)?;

    output.success(&format!("Initialized blueprint at {}", root.display()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  Add files under {}", root.join("template").display()))?;
    output.print(&format!(
        "  kiln validate --file {}",
        root.join(MANIFEST_FILE).display()
    ))?;
    Ok(())
}
