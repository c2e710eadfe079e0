// rfcval/src/ui/mod.rs
//! Console rendering for validation verdicts and batch summaries.

use std::io::{self, Write};

use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

use rfcval_core::{BatchReport, ValidationResult};

/// Renders a single verdict line plus one bullet per violation.
pub fn print_check_result(
    out: &mut impl Write,
    raw: &str,
    result: &ValidationResult,
    color: bool,
) -> io::Result<()> {
    let shown = if result.normalized.is_empty() { raw } else { result.normalized.as_str() };
    let verdict = paint_verdict(result.is_valid, color);
    let tipo = result
        .tipo_persona
        .map(|t| t.to_string())
        .unwrap_or_else(|| "sin clasificar".to_string());

    writeln!(out, "{shown}  {verdict} ({tipo})")?;
    for message in result.messages() {
        writeln!(out, "  - {message}")?;
    }
    Ok(())
}

/// Renders the consolidated batch table and totals to the given writer.
pub fn print_batch_summary(
    report: &BatchReport,
    out: &mut impl Write,
    color: bool,
) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Fila", "RFC", "Tipo", "Resultado", "Detalle"]);

    for row in &report.rows {
        let shown = if row.result.normalized.is_empty() {
            row.raw.clone()
        } else {
            row.result.normalized.clone()
        };
        let tipo = row
            .result
            .tipo_persona
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        let verdict = if row.result.is_valid { "válido" } else { "inválido" };

        let mut detail = row.result.messages().join("; ");
        if let Some(first) = row.duplicate_of {
            if !detail.is_empty() {
                detail.push_str("; ");
            }
            detail.push_str(&format!("duplicado de la fila {first}"));
        }

        table.add_row(vec![row.row.to_string(), shown, tipo, verdict.to_string(), detail]);
    }

    writeln!(out, "{table}")?;

    let totals = format!(
        "Total: {}  válidos: {}  inválidos: {}  duplicados: {}",
        report.total, report.valid, report.invalid, report.duplicates
    );
    if color {
        if report.invalid == 0 {
            writeln!(out, "{}", totals.green())?;
        } else {
            writeln!(out, "{}", totals.red())?;
        }
    } else {
        writeln!(out, "{totals}")?;
    }
    writeln!(out, "run_id: {}  input_hash: {}", report.run_id, report.input_hash)?;
    Ok(())
}

fn paint_verdict(is_valid: bool, color: bool) -> String {
    match (is_valid, color) {
        (true, true) => "válido".green().to_string(),
        (false, true) => "inválido".red().to_string(),
        (true, false) => "válido".to_string(),
        (false, false) => "inválido".to_string(),
    }
}
