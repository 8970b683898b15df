//! # Kiln CLI
//!
//! Blueprint-based project scaffolding.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, answer dynamic completion requests, then parse CLI
//!    arguments.
//! 2. Initialise the tracing subscriber.
//! 3. Resolve the [`AppConfig`] (registry file, local blueprints root).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                            |
//! |------|------------------------------------|
//! |  0   | Success                            |
//! |  1   | Internal, network or system error  |
//! |  2   | User input or unsatisfied version  |
//! |  3   | Blueprint or file not found        |
//! |  4   | Configuration error                |

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod progress;
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // Answers `COMPLETE=<shell> kiln ...` requests and exits; no-op otherwise.
    clap_complete::CompleteEnv::with_factory(Cli::command).complete();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        registry = ?cli.global.registry,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose),
    };

    let output = OutputManager::new(&cli.global);

    match run(cli, config, output) {
        Ok(()) => {
            info!("kiln completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Gen(cmd) => commands::generate::execute(cmd, cli.global, config, output),
        Commands::Get(cmd) => commands::get::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, cli.global, config, output),
        Commands::Search(cmd) => commands::search::execute(cmd, cli.global, config, output),
        Commands::Info(cmd) => commands::info::execute(cmd, cli.global, config, output),
        Commands::Registry(cmd) => commands::registry::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Validate(cmd) => commands::validate::execute(cmd, output),
        Commands::Bump(cmd) => commands::bump::execute(cmd, output),
        Commands::Update(cmd) => commands::update::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Print the error with suggestions on stderr and pick the exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
