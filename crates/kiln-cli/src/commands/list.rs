//! `kiln list` - blueprints of the active registry, or of all registries.

use kiln_core::domain::Blueprint;

use crate::{
    cli::{GlobalArgs, ListArgs},
    commands::{aggregator, registry_config, resolve_options},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Printed above aggregated listings.
pub const PRECEDENCE_NOTE: &str = "Registries are searched in configured order. First match wins.";

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = resolve_options(&global);
    let registries = registry_config(&config, &options)?;
    let aggregator = aggregator()?;

    let mut rows = if args.all {
        aggregator.list(&registries, &options, args.tag.as_deref())?
    } else {
        aggregator.list_active(&registries, &options, args.tag.as_deref())?
    };
    rows.sort_by(|a, b| a.blueprint.name.cmp(&b.blueprint.name));

    if output.is_json() {
        output.json(&rows)?;
        return Ok(());
    }

    if args.all {
        output.print(PRECEDENCE_NOTE)?;
    }
    if rows.is_empty() {
        output.info("No blueprints found")?;
    }
    for row in &rows {
        output.print(&format_row(&row.blueprint))?;
    }
    Ok(())
}

fn format_row(bp: &Blueprint) -> String {
    if bp.description.is_empty() {
        format!("- {} ({})", bp.name, bp.version)
    } else {
        format!("- {} ({}) - {}", bp.name, bp.version, bp.description)
    }
}
