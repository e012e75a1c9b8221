//! mtailc - front-end driver for the mtail DSL.
//!
//! Two subcommands: `check` parses one or more `.mtail` programs and
//! reports diagnostics, exiting non-zero if any of them fail; `dump`
//! prints the token stream or AST of a single program for debugging.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{check::CheckArgs, dump::DumpArgs, run_check, run_dump};
use config::Config;
use error::{CliError, Result};

/// mtailc - parse and check mtail programs.
#[derive(Parser, Debug)]
#[command(name = "mtailc")]
#[command(author = "mtailc contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Front-end driver for the mtail DSL", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "MTAILC_VERBOSE")]
    verbose: bool,

    /// Path to an `mtailc.toml` configuration file.
    #[arg(short, long, global = true, env = "MTAILC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse one or more mtail programs and report diagnostics.
    Check(CheckCommand),

    /// Print the token stream or AST of one mtail program.
    Dump(DumpCommand),
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Program files to check. If omitted, every `.mtail` file under the
    /// configured search directories is checked.
    files: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct DumpCommand {
    /// Program file to dump.
    file: PathBuf,

    /// Dump the raw token stream instead of the parsed AST.
    #[arg(long)]
    tokens: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Dispatches the selected subcommand. Returns `Ok(false)` (not an `Err`)
/// when a `check` run found diagnostics, since that is a normal outcome of
/// checking a program, not an infrastructural failure.
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check(args) => run_check(CheckArgs { files: args.files }, &config),
        Commands::Dump(args) => {
            run_dump(DumpArgs { file: args.file, tokens: args.tokens })?;
            Ok(true)
        }
    }
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Initializes `tracing` once, gated by `-v/--verbose` and `MTAILC_LOG`.
/// The library crates never log themselves; this is the only place
/// instrumentation is wired up.
fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("MTAILC_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(())
}
