//! `kiln info` - details of a resolved blueprint.

use kiln_core::application::SourcedBlueprint;

use crate::{
    cli::{GlobalArgs, InfoArgs},
    commands::{registry_config, resolve_options, resolver},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: InfoArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let options = resolve_options(&global);
    let registries = registry_config(&config, &options)?;
    let found = resolver()?.resolve(
        &registries,
        &options,
        &args.name,
        args.version.as_deref().unwrap_or_default(),
    )?;

    if output.is_json() {
        output.json(&found)?;
        return Ok(());
    }

    for line in describe(&found) {
        output.print(&line)?;
    }
    Ok(())
}

fn describe(found: &SourcedBlueprint) -> Vec<String> {
    let bp = &found.blueprint;
    vec![
        format!("Name:        {}", bp.name),
        format!("Version:     {}", bp.version),
        format!("Description: {}", bp.description),
        format!("Tags:        {}", bp.tags.join(", ")),
        format!("Download:    {}", bp.download_url),
        format!("Repo:        {}", bp.repo),
        format!("Path:        {}", bp.path),
        format!("Registry:    {}", found.source),
    ]
}
