//! `kiln completions` - emit shell completion scripts.
//!
//! Static scripts come from `kiln completions <shell>`. Blueprint names for
//! `gen -b` are completed at run time when the shell is set up with
//! `COMPLETE=<shell> kiln`.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{Shell as ClapShell, engine::CompletionCandidate, generate};
use kiln_core::{
    application::{RegistryAggregator, ResolveOptions},
    domain::RegistryConfig,
    error::KilnResult,
};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    commands::{aggregator, registry_config},
    config::AppConfig,
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(to_clap(args.shell), &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

fn to_clap(shell: Shell) -> ClapShell {
    match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    }
}

/// Value completer for `gen -b`.
///
/// Reads `KILN_CONFIG` and `KILN_REGISTRY` from the environment, since
/// flags on the partial command line are not parsed yet. Any failure
/// yields no candidates.
pub fn complete_blueprints(current: &OsStr) -> Vec<CompletionCandidate> {
    let prefix = current.to_string_lossy();
    let options = std::env::var("KILN_REGISTRY")
        .map(|location| ResolveOptions::new().with_registry(location))
        .unwrap_or_default();

    let names = || -> CliResult<Vec<String>> {
        let config = AppConfig::load(std::env::var_os("KILN_CONFIG").map(PathBuf::from).as_ref())?;
        let registries = registry_config(&config, &options)?;
        Ok(blueprint_names(&aggregator()?, &registries, &options, &prefix)?)
    };

    names()
        .unwrap_or_default()
        .into_iter()
        .map(CompletionCandidate::new)
        .collect()
}

/// Names across all registries, first occurrence only, starting with
/// `prefix`.
pub(crate) fn blueprint_names(
    aggregator: &RegistryAggregator,
    config: &RegistryConfig,
    options: &ResolveOptions,
    prefix: &str,
) -> KilnResult<Vec<String>> {
    Ok(aggregator
        .list(config, options, None)?
        .into_iter()
        .map(|row| row.blueprint.name)
        .filter(|name| name.starts_with(prefix))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_adapters::MemoryRegistrySource;
    use kiln_core::domain::{Blueprint, Database};

    fn two_registries() -> (RegistryAggregator, RegistryConfig) {
        let source = MemoryRegistrySource::new()
            .with(
                "/team.json",
                Database::new(vec![
                    Blueprint::new("api-service", "2.0.0"),
                    Blueprint::new("api-gateway", "0.1.0"),
                ]),
            )
            .with(
                "/public.json",
                Database::new(vec![
                    Blueprint::new("api-service", "1.0.0"),
                    Blueprint::new("frontend", "0.3.0"),
                ]),
            );

        let mut config = RegistryConfig::empty();
        config.add("team", "/team.json").unwrap();
        config.add("public", "/public.json").unwrap();
        config.set_order(["team", "public"]).unwrap();

        (RegistryAggregator::new(Box::new(source)), config)
    }

    #[test]
    fn blueprint_names_are_unique_and_prefix_filtered() {
        let (agg, config) = two_registries();
        let options = ResolveOptions::new();

        assert_eq!(
            blueprint_names(&agg, &config, &options, "api").unwrap(),
            vec!["api-service", "api-gateway"]
        );
        assert_eq!(
            blueprint_names(&agg, &config, &options, "").unwrap(),
            vec!["api-service", "api-gateway", "frontend"]
        );
        assert!(blueprint_names(&agg, &config, &options, "zzz").unwrap().is_empty());
    }

    #[test]
    fn blueprint_names_honour_registry_override() {
        let (agg, config) = two_registries();
        let options = ResolveOptions::new().with_registry("/public.json");

        assert_eq!(
            blueprint_names(&agg, &config, &options, "").unwrap(),
            vec!["api-service", "frontend"]
        );
    }

    #[test]
    fn unreachable_registry_is_an_error() {
        let (agg, config) = two_registries();
        let options = ResolveOptions::new().with_registry("/missing.json");
        assert!(blueprint_names(&agg, &config, &options, "").is_err());
    }

    #[test]
    fn bash_script_mentions_binary() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(to_clap(Shell::Bash), &mut cmd, "kiln", &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("kiln"));
        assert!(script.contains("registry"));
    }
}
