//! `kiln gen` - render a resolved blueprint into a directory.

use std::path::Path;

use tracing::{debug, instrument};

use kiln_adapters::{HttpArchiveFetcher, SimpleRenderer, manifest::load_variables};
use kiln_core::{
    application::{
        ArchiveFetcher, FetchPipeline, GenerateOutcome, GenerateRequest, parse_assignment,
    },
    domain::BlueprintDefaults,
    error::KilnResult,
};

use crate::{
    cli::{GenArgs, GlobalArgs, RenderArgs},
    commands::{registry_config, resolve_options, resolver},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    progress::SpinningFetcher,
    prompt::prompter,
};

pub fn execute(
    args: GenArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let outcome = run(
        &args.blueprint,
        &args.out,
        args.remote,
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

/// Resolve `name`, then fetch and render it into `out`.
///
/// Shared with `kiln get`.
#[instrument(skip(options, global, config, output))]
pub(crate) fn run(
    name: &str,
    out: &Path,
    remote: bool,
    options: &RenderArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<GenerateOutcome> {
    let request = build_request(out, remote, options)?;
    let prompter = prompter(options.interactive)?;

    let resolve = resolve_options(global);
    let registries = registry_config(config, &resolve)?;
    let resolved = resolver()?.resolve(
        &registries,
        &resolve,
        name,
        options.version.as_deref().unwrap_or_default(),
    )?;
    debug!(version = %resolved.blueprint.version, source = %resolved.source, "Resolved");

    let fetcher: Box<dyn ArchiveFetcher> = if remote {
        Box::new(SpinningFetcher::new(
            HttpArchiveFetcher::new()?,
            output.spinner("Downloading blueprint"),
        ))
    } else {
        Box::new(HttpArchiveFetcher::new()?)
    };
    let pipeline = FetchPipeline::new(
        fetcher,
        Box::new(SimpleRenderer::new()),
        &config.blueprints_dir,
    );

    Ok(pipeline.generate(&resolved, &request, prompter.as_deref())?)
}

/// Collect defaults, the vars file and `--set` overrides.
fn build_request(out: &Path, remote: bool, options: &RenderArgs) -> CliResult<GenerateRequest> {
    let mut request = GenerateRequest::new(out).remote(remote);
    request.defaults = BlueprintDefaults {
        router: options.router.clone(),
        db: options.db.clone(),
    };
    if let Some(vars) = &options.vars {
        request.file_variables = load_variables(vars)?;
    }
    request.overrides = options
        .set
        .iter()
        .map(|raw| parse_assignment(raw))
        .collect::<KilnResult<_>>()?;
    Ok(request)
}
