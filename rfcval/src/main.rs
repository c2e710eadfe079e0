// rfcval/src/main.rs
//! rfcval entry point.
//!
//! Parses the CLI, initializes logging and dispatches to the command
//! runners. Runners return a process exit code; anything that fails with an
//! `Err` is an operational problem (I/O, bad arguments), not a validation
//! verdict.

use anyhow::Result;
use clap::Parser;

use rfcval::cli::{Cli, Commands};
use rfcval::commands;
use rfcval::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let exit_code = match args.command {
        Commands::Check(cmd) => commands::check::run(&cmd)?,
        Commands::Batch(cmd) => commands::batch::run(&cmd)?,
        Commands::Sample(cmd) => commands::sample::run(&cmd)?,
    };

    std::process::exit(exit_code)
}
