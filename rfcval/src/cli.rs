// rfcval/src/cli.rs
//! This file defines the command-line interface (CLI) for the rfcval
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use rfcval_core::PersonType;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rfcval",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate Mexican RFC tax identifiers",
    long_about = "rfcval is a command-line utility for validating Mexican RFC tax identifiers (Registro Federal de Contribuyentes). It checks single values, produces consolidated reports for line-oriented batches (including in-batch duplicate detection), and fabricates structurally valid sample identifiers for documentation and testing.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'rfcval' crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rfcval` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates one or more RFC values.
    #[command(about = "Validates one or more RFC values from arguments or stdin.")]
    Check(CheckCommand),

    /// Validates a line-oriented batch and prints a consolidated report.
    #[command(about = "Validates a line-oriented batch and prints a consolidated report.")]
    Batch(BatchCommand),

    /// Prints structurally valid sample RFC values.
    #[command(about = "Prints structurally valid sample RFC values.")]
    Sample(SampleCommand),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// RFC values to validate (reads lines from stdin when omitted).
    #[arg(value_name = "RFC", help = "RFC values to validate (reads lines from stdin when omitted).")]
    pub values: Vec<String>,

    /// Print results as JSON to stdout.
    #[arg(long, help = "Print results as JSON to stdout.")]
    pub json: bool,
}

/// Arguments for the `batch` command.
#[derive(Parser, Debug)]
pub struct BatchCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Export the batch report to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the batch report to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the batch report as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the batch report to stdout as JSON.")]
    pub json_stdout: bool,

    /// Exit with a non-zero code if any row is invalid.
    #[arg(long = "fail-on-invalid", help = "Exit with a non-zero code if any row is invalid.")]
    pub fail_on_invalid: bool,
}

/// Arguments for the `sample` command.
#[derive(Parser, Debug)]
pub struct SampleCommand {
    /// Person type of the generated samples.
    #[arg(long = "tipo", short = 't', value_enum, default_value = "fisica", help = "Person type of the generated samples.")]
    pub tipo: TipoChoice,

    /// Number of samples to print.
    #[arg(long, short = 'n', default_value_t = 1, help = "Number of samples to print.")]
    pub count: usize,
}

/// Enum for selecting the RFC person type on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum TipoChoice {
    /// Individual / natural person (13 characters).
    Fisica,
    /// Organization / legal entity (12 characters).
    Moral,
}

impl From<TipoChoice> for PersonType {
    fn from(choice: TipoChoice) -> Self {
        match choice {
            TipoChoice::Fisica => PersonType::Fisica,
            TipoChoice::Moral => PersonType::Moral,
        }
    }
}
