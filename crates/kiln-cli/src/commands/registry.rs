//! `kiln registry` - manage the persisted registry configuration.

use tracing::info;

use kiln_core::domain::RegistryConfig;

use crate::{
    cli::{RegistryArgs, RegistryCommands},
    commands::config_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: RegistryArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = config_service(&config);

    match args.command {
        RegistryCommands::List => {
            let registries = service.load()?;
            if output.is_json() {
                output.json(&registries)?;
            } else {
                for line in describe(&registries) {
                    output.print(&line)?;
                }
            }
        }
        RegistryCommands::Add { name, url } => {
            service.add(&name, &url)?;
            output.success(&format!("Added registry {} -> {}", name.trim(), url.trim()))?;
        }
        RegistryCommands::Remove { name } => {
            let removed = service.remove(&name)?;
            output.success(&format!("Removed registry {}", removed.name))?;
        }
        RegistryCommands::SetDefault { name } => {
            service.set_default(&name)?;
            output.success(&format!("Default registry set to {name}"))?;
        }
        RegistryCommands::Use { location } => {
            let name = service.use_location(&location)?;
            output.success(&format!("Using registry {name} -> {location}"))?;
        }
        RegistryCommands::Order { names } => {
            let updated = service.set_order(&names)?;
            output.success(&format!("Order: {}", updated.order.join(", ")))?;
        }
    }

    info!(path = %config.registry_file.display(), "Registry configuration handled");
    Ok(())
}

/// Entries with the default marked `*`, then the explicit order.
fn describe(config: &RegistryConfig) -> Vec<String> {
    let mut lines = vec!["Registries:".to_string()];
    for entry in &config.registries {
        let mark = if entry.name == config.default { '*' } else { ' ' };
        lines.push(format!("{mark} {} -> {}", entry.name, entry.url));
    }
    if !config.order.is_empty() {
        lines.push(format!("Order: {}", config.order.join(", ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_marked() {
        let mut config = RegistryConfig::empty();
        config.add("team", "https://team.example/r.json").unwrap();
        config.add("local", "./registry.json").unwrap();
        config.set_order(["local", "team"]).unwrap();

        assert_eq!(
            describe(&config),
            vec![
                "Registries:",
                "* team -> https://team.example/r.json",
                "  local -> ./registry.json",
                "Order: local, team",
            ]
        );
    }

    #[test]
    fn empty_order_is_omitted() {
        assert_eq!(describe(&RegistryConfig::empty()), vec!["Registries:"]);
    }
}
