//! Generate Service - turns a resolved blueprint into files on disk.
//!
//! This service coordinates the generation workflow:
//! 1. Locate the template directory (local checkout or remote archive)
//! 2. Layer the render context
//! 3. Hand both to the renderer
//!
//! Writes are not transactional: a failure partway through rendering leaves
//! whatever was already written in place.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{ArchiveFetcher, Prompter, TemplateRenderer},
        services::registry_service::SourcedBlueprint,
    },
    domain::{Blueprint, BlueprintDefaults, BlueprintKind, RenderContext},
    error::KilnResult,
};

/// Directory name holding template content, both in a local blueprint
/// checkout and inside a remote archive.
pub const TEMPLATE_DIR: &str = "template";

/// Everything the caller supplies for one generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub output_dir: PathBuf,
    /// Fetch the archive at the blueprint's download URL instead of using
    /// the local checkout.
    pub remote: bool,
    /// Values for recognised blueprint kinds.
    pub defaults: BlueprintDefaults,
    /// Variables from a vars file, applied after defaults.
    pub file_variables: Vec<(String, Value)>,
    /// `--set` overrides, applied last before prompting.
    pub overrides: Vec<(String, String)>,
}

impl GenerateRequest {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutcome {
    pub blueprint: String,
    pub version: String,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Fetch pipeline: template location, context layering and rendering.
pub struct FetchPipeline {
    fetcher: Box<dyn ArchiveFetcher>,
    renderer: Box<dyn TemplateRenderer>,
    local_root: PathBuf,
}

impl FetchPipeline {
    /// `local_root` is the directory holding local blueprint checkouts.
    pub fn new(
        fetcher: Box<dyn ArchiveFetcher>,
        renderer: Box<dyn TemplateRenderer>,
        local_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher,
            renderer,
            local_root: local_root.into(),
        }
    }

    /// Where the template for `resolved` lives.
    ///
    /// Remote mode downloads the archive. Local mode expects
    /// `<local_root>/<path>/template` to exist.
    pub fn template_dir(&self, resolved: &SourcedBlueprint, remote: bool) -> KilnResult<PathBuf> {
        let bp = &resolved.blueprint;

        if remote {
            if bp.download_url.trim().is_empty() {
                return Err(ApplicationError::ArchiveFetch {
                    url: String::new(),
                    status: None,
                    reason: format!("blueprint '{}' has no download URL", bp.name),
                }
                .into());
            }
            return self.fetcher.fetch_and_extract(&bp.download_url);
        }

        let dir = self.local_root.join(&bp.path).join(TEMPLATE_DIR);
        if !dir.is_dir() {
            return Err(ApplicationError::TemplateMissing {
                path: dir,
                source_location: resolved.source.clone(),
            }
            .into());
        }
        Ok(dir)
    }

    /// Layer the render context.
    ///
    /// Name, then kind defaults, then file variables, then overrides, then
    /// prompts for recognised keys that are still missing or empty. Later
    /// layers override earlier ones.
    pub fn build_context(
        bp: &Blueprint,
        request: &GenerateRequest,
        prompter: Option<&dyn Prompter>,
    ) -> KilnResult<RenderContext> {
        let mut ctx = RenderContext::new(bp.name.clone());
        let kind = BlueprintKind::recognize(&bp.name);

        if let Some(kind) = kind {
            ctx.merge(kind.defaults(&request.defaults));
        }
        ctx.merge(request.file_variables.iter().cloned());
        ctx.merge(
            request
                .overrides
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone()))),
        );

        if let (Some(kind), Some(prompter)) = (kind, prompter) {
            for key in kind.prompt_keys() {
                let current = ctx.get_str(key).unwrap_or_default();
                if current.is_empty() {
                    let answer = prompter.ask(key, &current)?;
                    ctx.set(*key, answer);
                }
            }
        }

        Ok(ctx)
    }

    /// Run the whole pipeline for a resolved blueprint.
    #[instrument(
        skip_all,
        fields(
            blueprint = %resolved.blueprint.name,
            output = %request.output_dir.display(),
            remote = request.remote
        )
    )]
    pub fn generate(
        &self,
        resolved: &SourcedBlueprint,
        request: &GenerateRequest,
        prompter: Option<&dyn Prompter>,
    ) -> KilnResult<GenerateOutcome> {
        let template_dir = self.template_dir(resolved, request.remote)?;
        let context = Self::build_context(&resolved.blueprint, request, prompter)?;

        self.renderer
            .render(&template_dir, &request.output_dir, &context)?;
        info!("Generation completed");

        Ok(GenerateOutcome {
            blueprint: resolved.blueprint.name.clone(),
            version: resolved.blueprint.version.clone(),
            template_dir,
            output_dir: request.output_dir.clone(),
        })
    }
}

/// Parse one `key=value` assignment, splitting on the first `=` and
/// trimming both sides.
pub fn parse_assignment(raw: &str) -> KilnResult<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ApplicationError::VariablesInvalid {
            reason: format!("bad --set {raw:?}, want key=value"),
        }
        .into()),
    }
}
