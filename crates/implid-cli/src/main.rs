//! # implid CLI Entry Point
//!
//! Parses arguments, installs logging, dispatches to the handlers in the
//! library, and maps the outcome to an exit status:
//! `0` all records valid, `1` some record rejected, `2` load or output failure.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use implid_cli::report::{self, ReportFormat};
use implid_cli::validate::{self as handlers, CheckArgs, ValidateArgs};
use tracing_subscriber::EnvFilter;

/// Implementation identifier validator.
///
/// Checks implementation identifier records before a host persists them:
/// `code` and `passphrase` are required and `code` may not contain `^` or `|`.
#[derive(Parser, Debug)]
#[command(name = "implid", version, about)]
struct Cli {
    /// Report format.
    #[arg(long, value_enum, global = true, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate records stored in JSON or YAML files.
    Validate(ValidateArgs),
    /// Validate a single record given as flags.
    Check(CheckArgs),
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let reports = match cli.command {
        Commands::Validate(args) => {
            handlers::validate_files(&args).context("loading implementation identifier records")?
        }
        Commands::Check(args) => vec![handlers::check(args)],
    };

    let mut stdout = std::io::stdout().lock();
    report::render(&reports, cli.format, &mut stdout).context("writing report")?;

    let valid = report::all_valid(&reports);
    tracing::debug!(records = reports.len(), valid, "validation finished");
    Ok(valid)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, "implid failed");
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
