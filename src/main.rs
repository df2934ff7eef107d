use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quickdiff::cli::{EXIT_INVALID_ARGS, EXIT_NO_DIFF};
use quickdiff::render::write_records;
use quickdiff::{build_options, run, Args};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUICKDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn execute(args: &Args) -> Result<ExitCode> {
    let opts = build_options(args)?;
    colored::control::set_override(opts.color);

    let Some(records) = run(&opts)? else {
        eprintln!(
            "quickdiff: {} and {} must both be text files or both be directories",
            opts.base.display(),
            opts.comparison.display()
        );
        eprintln!("Run with --help for usage.");
        return Ok(ExitCode::from(EXIT_NO_DIFF));
    };

    let stdout = io::stdout();
    write_records(&mut stdout.lock(), &records).context("Failed to write diff output")?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::from(EXIT_INVALID_ARGS)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if args.base.as_os_str().is_empty() || args.comparison.as_os_str().is_empty() {
        eprintln!("quickdiff: both paths must be non-empty");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    init_tracing();

    match execute(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
