// rfcval/src/commands/check.rs
//! Check command implementation: validate values from arguments or stdin.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;

use rfcval_core::{validate, ValidationResult};

use crate::cli::CheckCommand;
use crate::ui;

/// Runs the `check` command. Returns the process exit code: non-zero when
/// any of the checked values is invalid.
pub fn run(cmd: &CheckCommand) -> Result<i32> {
    let values = gather_values(cmd)?;
    info!("Checking {} RFC value(s).", values.len());

    let results: Vec<ValidationResult> = values.iter().map(|v| validate(v)).collect();

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if cmd.json {
        serde_json::to_writer_pretty(&mut writer, &results)
            .context("Failed to serialize check results")?;
        writeln!(writer)?;
    } else {
        for (raw, result) in values.iter().zip(&results) {
            ui::print_check_result(&mut writer, raw, result, supports_color)?;
        }
    }

    let invalid = results.iter().filter(|r| !r.is_valid).count();
    Ok(if invalid > 0 { 1 } else { 0 })
}

fn gather_values(cmd: &CheckCommand) -> Result<Vec<String>> {
    if !cmd.values.is_empty() {
        return Ok(cmd.values.clone());
    }
    let stdin = io::stdin();
    let mut values = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }
    Ok(values)
}
