//! `kiln search` - per-registry matches for a query and/or tag.

use kiln_core::domain::BlueprintFilter;

use crate::{
    cli::{GlobalArgs, SearchArgs},
    commands::{aggregator, registry_config, resolve_options},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: SearchArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let filter = build_filter(&args)?;
    let options = resolve_options(&global);
    let registries = registry_config(&config, &options)?;

    let groups = aggregator()?.search(&registries, &options, &filter, args.all)?;

    if output.is_json() {
        output.json(&groups)?;
        return Ok(());
    }

    for group in &groups {
        output.header(&group.source)?;
        for bp in &group.matches {
            output.print(&format!("  - {}", bp.name))?;
        }
    }
    Ok(())
}

/// At least one of `--query` or `--tag` is required.
fn build_filter(args: &SearchArgs) -> CliResult<BlueprintFilter> {
    let query = args.query.as_deref().map(str::trim).unwrap_or_default();
    let tag = args.tag.as_deref().map(str::trim).unwrap_or_default();

    if query.is_empty() && tag.is_empty() {
        return Err(CliError::invalid_input("provide --query or --tag"));
    }

    let mut filter = BlueprintFilter::new();
    if !query.is_empty() {
        filter = filter.query(query);
    }
    if !tag.is_empty() {
        filter = filter.tag(tag);
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(query: Option<&str>, tag: Option<&str>) -> SearchArgs {
        SearchArgs {
            query: query.map(String::from),
            tag: tag.map(String::from),
            all: true,
        }
    }

    #[test]
    fn requires_query_or_tag() {
        let err = build_filter(&args(None, Some("  "))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn builds_combined_filter() {
        let filter = build_filter(&args(Some("api"), Some("go"))).unwrap();
        assert!(!filter.is_empty());
    }
}
