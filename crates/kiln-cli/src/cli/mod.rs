//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::engine::ArgValueCompleter;

use crate::commands::completions::complete_blueprints;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f525} Blueprint-based project scaffolding",
    long_about = "Kiln generates projects from versioned blueprints published \
                  in one or more registries.",
    after_help = "EXAMPLES:\n\
        \x20 kiln gen -b api-service -o ./svc --version ^1.0\n\
        \x20 kiln get api-service\n\
        \x20 kiln search --query api\n\
        \x20 kiln registry add --name team --url https://team.example/registry.json\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project from a blueprint.
    #[command(
        visible_alias = "g",
        about = "Generate a project from a blueprint",
        after_help = "EXAMPLES:\n\
            \x20 kiln gen -b api-service -o ./svc\n\
            \x20 kiln gen -b api-service --remote --version '>=1.2' --set Module=github.com/acme/svc\n\
            \x20 kiln gen -b frontend --vars vars.yaml --interactive"
    )]
    Gen(GenArgs),

    /// Fetch a blueprint remotely and render it into `./<name>`.
    #[command(about = "Fetch and render a blueprint (remote)")]
    Get(GetArgs),

    /// List blueprints.
    #[command(
        visible_alias = "ls",
        about = "List blueprints (active registry, or all with --all)",
        after_help = "EXAMPLES:\n\
            \x20 kiln list\n\
            \x20 kiln list --all --tag go\n\
            \x20 kiln list --output-format json"
    )]
    List(ListArgs),

    /// Search blueprints.
    #[command(
        about = "Search blueprints by name, description or tags",
        after_help = "EXAMPLES:\n\
            \x20 kiln search --query api\n\
            \x20 kiln search --tag go --all=false"
    )]
    Search(SearchArgs),

    /// Show a resolved blueprint.
    #[command(about = "Show detailed info about a blueprint")]
    Info(InfoArgs),

    /// Manage registries.
    #[command(
        about = "Manage registries",
        after_help = "EXAMPLES:\n\
            \x20 kiln registry list\n\
            \x20 kiln registry add --name team --url https://team.example/registry.json\n\
            \x20 kiln registry use ../my-blueprints/registry.json\n\
            \x20 kiln registry order --names team,public"
    )]
    Registry(RegistryArgs),

    /// Create a blueprint skeleton.
    #[command(about = "Initialize a new blueprint skeleton in a directory")]
    Init(InitArgs),

    /// Validate a blueprint manifest.
    #[command(about = "Validate a blueprint manifest.yaml")]
    Validate(ValidateArgs),

    /// Bump a blueprint manifest version.
    #[command(about = "Bump version in manifest.yaml (patch|minor|major)")]
    Bump(BumpArgs),

    /// Download a registry file.
    #[command(about = "Update a local registry file from a URL")]
    Update(UpdateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),
}

// ── gen / get ─────────────────────────────────────────────────────────────────

/// Arguments for `kiln gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Blueprint to generate.
    #[arg(
        short = 'b',
        long = "blueprint",
        value_name = "NAME",
        help = "Blueprint name",
        add = ArgValueCompleter::new(complete_blueprints)
    )]
    pub blueprint: String,

    /// Output directory.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub out: PathBuf,

    #[command(flatten)]
    pub options: RenderArgs,

    /// Download the blueprint archive instead of using a local checkout.
    #[arg(long = "remote", help = "Download the blueprint archive from its release URL")]
    pub remote: bool,
}

/// Arguments for `kiln get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Blueprint to fetch.
    #[arg(value_name = "BLUEPRINT")]
    pub name: String,

    #[command(flatten)]
    pub options: RenderArgs,
}

/// Rendering options shared by `gen` and `get`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Version constraint the resolved blueprint must satisfy.
    #[arg(
        long = "version",
        value_name = "CONSTRAINT",
        help = "Version constraint (e.g. ^1.0, >=1.2.3)"
    )]
    pub version: Option<String>,

    /// YAML or JSON file with template variables.
    #[arg(long = "vars", value_name = "FILE", help = "YAML/JSON file with template variables")]
    pub vars: Option<PathBuf>,

    /// Template variable overrides.
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        help = "Set template var (key=value), repeatable"
    )]
    pub set: Vec<String>,

    /// Prompt for common variables that are still missing.
    #[arg(long = "interactive", help = "Prompt for common variables when missing")]
    pub interactive: bool,

    /// Router for `api-service`.
    #[arg(
        long = "router",
        value_name = "ROUTER",
        default_value = "servemux",
        help = "Router: chi|gorilla|httprouter|servemux (api-service only)"
    )]
    pub router: String,

    /// Database for `api-service`.
    #[arg(
        long = "db",
        value_name = "DB",
        default_value = "sqlite-native",
        help = "DB: sqlite-native|sqlite-gorm|postgres-native|postgres-gorm|mysql-native|mysql-gorm (api-service only)"
    )]
    pub db: String,
}

// ── list / search / info ──────────────────────────────────────────────────────

/// Arguments for `kiln list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Aggregate across all registries.
    #[arg(long = "all", help = "Aggregate across all registries")]
    pub all: bool,

    /// Keep only blueprints with this tag.
    #[arg(long = "tag", value_name = "TAG", help = "Filter by tag (exact match)")]
    pub tag: Option<String>,
}

/// Arguments for `kiln search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring of name, description or tags.
    #[arg(long = "query", value_name = "TEXT", help = "Substring to search for")]
    pub query: Option<String>,

    /// Keep only blueprints with this tag.
    #[arg(long = "tag", value_name = "TAG", help = "Filter by exact tag")]
    pub tag: Option<String>,

    /// Search every registry (default) or only the active one.
    #[arg(
        long = "all",
        default_value_t = true,
        action = clap::ArgAction::Set,
        value_name = "BOOL",
        help = "Search across all registries"
    )]
    pub all: bool,
}

/// Arguments for `kiln info`.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Blueprint to show.
    #[arg(value_name = "BLUEPRINT")]
    pub name: String,

    /// Version constraint the resolved blueprint must satisfy.
    #[arg(
        long = "version",
        value_name = "CONSTRAINT",
        help = "Version constraint (e.g. ^1.0, >=1.2.3)"
    )]
    pub version: Option<String>,
}

// ── registry subcommands ──────────────────────────────────────────────────────

/// Arguments for `kiln registry`.
#[derive(Debug, Args)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommands,
}

/// Subcommands for `kiln registry`.
#[derive(Debug, Subcommand)]
pub enum RegistryCommands {
    /// Show configured registries and their order.
    List,
    /// Add or update a registry.
    Add {
        /// Registry name.
        #[arg(long = "name")]
        name: String,
        /// Registry URL or local path.
        #[arg(long = "url")]
        url: String,
    },
    /// Remove a registry.
    Remove {
        /// Registry name.
        name: String,
    },
    /// Make a registry the default and move it to the front of the order.
    SetDefault {
        /// Registry name.
        name: String,
    },
    /// Register a path or URL under a derived name and make it the default.
    Use {
        /// Registry URL or local path.
        #[arg(value_name = "URL_OR_PATH")]
        location: String,
    },
    /// Replace the resolution order.
    Order {
        /// Comma-separated registry names, highest precedence first.
        #[arg(long = "names", value_name = "A,B,C", value_delimiter = ',', required = true)]
        names: Vec<String>,
    },
}

// ── blueprint authoring ───────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Blueprint name.
    #[arg(long = "name", help = "Blueprint name")]
    pub name: String,

    /// Parent directory for the blueprint.
    #[arg(
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory to create the blueprint in"
    )]
    pub dir: PathBuf,

    /// Manifest description.
    #[arg(long = "desc", help = "Description")]
    pub desc: Option<String>,
}

/// Arguments for `kiln validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Manifest to check.
    #[arg(
        long = "file",
        value_name = "FILE",
        default_value = "manifest.yaml",
        help = "Path to manifest.yaml"
    )]
    pub file: PathBuf,
}

/// Arguments for `kiln bump`.
#[derive(Debug, Args)]
pub struct BumpArgs {
    /// Which component to increment.
    #[arg(long = "kind", value_enum, default_value = "patch", help = "Bump kind")]
    pub kind: BumpKindArg,

    /// Manifest to rewrite.
    #[arg(
        long = "file",
        value_name = "FILE",
        default_value = "manifest.yaml",
        help = "Path to manifest.yaml"
    )]
    pub file: PathBuf,
}

/// Version component for `kiln bump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpKindArg {
    Patch,
    Minor,
    Major,
}

/// Arguments for `kiln update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Registry URL to download.
    #[arg(long = "from", value_name = "URL", help = "URL to registry.json")]
    pub from: String,

    /// Where to write the registry. Defaults to `--registry`.
    #[arg(long = "dest", value_name = "FILE", help = "Destination registry file")]
    pub dest: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
