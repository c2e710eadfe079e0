// rfcval/src/commands/batch.rs
//! Batch command implementation: consolidated report over line-oriented
//! input, with optional JSON export.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;

use rfcval_core::validate_batch;

use crate::cli::BatchCommand;
use crate::ui;

/// Runs the `batch` command. The exit code reflects validity only when
/// `--fail-on-invalid` is set; operational failures (unreadable input,
/// unwritable report) surface as `Err`.
pub fn run(cmd: &BatchCommand) -> Result<i32> {
    let rows = read_rows(cmd.input_file.as_deref())?;
    info!("Validating batch of {} row(s).", rows.len());

    let report = validate_batch(rows.iter());

    if let Some(path) = &cmd.json_file {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize batch report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write batch report to {}", path.display()))?;
        info!("Batch report written to {}", path.display());
    }

    if cmd.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        serde_json::to_writer_pretty(&mut writer, &report)
            .context("Failed to serialize batch report")?;
        writeln!(writer)?;
    } else {
        let stderr = io::stderr();
        let color = stderr.is_terminal();
        ui::print_batch_summary(&report, &mut stderr.lock(), color)?;
    }

    if cmd.fail_on_invalid && report.invalid > 0 {
        eprintln!(
            "FAIL: {} of {} rows did not validate.",
            report.invalid, report.total
        );
        return Ok(1);
    }
    Ok(0)
}

/// Reads non-blank lines from the given file, or stdin when absent.
fn read_rows(path: Option<&Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}
