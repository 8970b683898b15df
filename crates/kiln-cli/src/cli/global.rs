//! Flags accepted by every `kiln` subcommand.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` progress, `-vv` registry and fetch details, `-vvv`
    /// everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output (-v, -vv, -vvv)",
        long_help = "Log level written to stderr:
    (none)  warnings
    -v      which registry served each blueprint
    -vv     every registry load and archive entry
    -vvv    trace spans"
    )]
    pub verbose: u8,

    /// Only errors reach stderr; informational lines are dropped.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Plain output without ANSI styling. Set by `NO_COLOR` too.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file holding the configured registries, their default and order.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "KILN_CONFIG",
        value_name = "FILE",
        help = "Registry configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Consult this registry alone. The configuration file is not read.
    #[arg(
        short = 'r',
        long = "registry",
        global = true,
        env = "KILN_REGISTRY",
        value_name = "PATH|URL",
        help = "Use a single registry (path or URL) instead of the configured ones"
    )]
    pub registry: Option<String>,

    /// `json` applies to list, search, info and registry list.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colour when stdout is a terminal.
    #[default]
    Auto,
    Human,
    /// Never coloured.
    Plain,
    Json,
}
