//! stderr logging for the `kiln` binary.
//!
//! The library crates emit `tracing` events and never install a subscriber.
//! `RUST_LOG`, when set, replaces the level picked from `-v`/`-q`.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the level chosen on the command line.
const KILN_TARGETS: [&str; 3] = ["kiln", "kiln_core", "kiln_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `kiln=<level>,kiln_core=<level>,...`; other crates stay off.
fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    KILN_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            registry: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn warnings_by_default() {
        assert_eq!(level_for(&args_with(0, false)), LevelFilter::WARN);
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(level_for(&args_with(1, false)), LevelFilter::INFO);
        assert_eq!(level_for(&args_with(2, false)), LevelFilter::DEBUG);
        assert_eq!(level_for(&args_with(3, false)), LevelFilter::TRACE);
        assert_eq!(level_for(&args_with(9, false)), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(&args_with(0, true)), LevelFilter::ERROR);
        assert_eq!(level_for(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_each_workspace_crate() {
        assert_eq!(
            filter_directives(LevelFilter::DEBUG),
            "kiln=debug,kiln_core=debug,kiln_adapters=debug"
        );
    }
}
