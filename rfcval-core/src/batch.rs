// rfcval-core/src/batch.rs
//! Bulk validation with a consolidated, exportable report.
//!
//! The bulk-import contract: validate every row, never abort on a bad one,
//! and flag duplicate normalized identifiers within the batch itself.
//! Duplication is orthogonal to validity — a duplicate row keeps its own
//! validation verdict. The report carries provenance (run id, timestamp,
//! input hash) so a consolidated import report can be audited later.
//!
//! License: MIT OR APACHE 2.0

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::Utc;
use log::debug;
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::validator::{validate, ValidationResult};

/// Outcome of one batch row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowOutcome {
    /// 1-based row number within the batch.
    pub row: usize,
    /// The raw value as submitted.
    pub raw: String,
    /// Set when the normalized form already appeared earlier in the batch;
    /// points at the first occurrence's row number.
    pub duplicate_of: Option<usize>,
    /// The full validation result for this row.
    pub result: ValidationResult,
}

/// Consolidated report for a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Unique identifier of this validation run.
    pub run_id: String,
    /// RFC 3339 timestamp of when the batch started.
    pub started_at: String,
    /// SHA-256 over the newline-joined raw input, for audit trails.
    pub input_hash: String,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Rows whose normalized form already appeared earlier in the batch.
    pub duplicates: usize,
    pub rows: Vec<RowOutcome>,
}

/// Validates every row of a batch, accumulating per-row outcomes and
/// in-batch duplicate flags. Never stops early: a failing row only affects
/// its own outcome.
pub fn validate_batch<I, S>(rows: I) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let started_at = Utc::now().to_rfc3339();
    let run_id = Uuid::new_v4().to_string();
    let mut hasher = Sha256::new();

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut outcomes: Vec<RowOutcome> = Vec::new();
    let mut valid = 0usize;
    let mut invalid = 0usize;
    let mut duplicates = 0usize;

    for (idx, row) in rows.into_iter().enumerate() {
        let raw = row.as_ref();
        let row_no = idx + 1;
        hasher.update(raw.as_bytes());
        hasher.update(b"\n");

        let result = validate(raw);
        let duplicate_of = if result.normalized.is_empty() {
            None
        } else {
            match seen.entry(result.normalized.clone()) {
                Entry::Occupied(e) => Some(*e.get()),
                Entry::Vacant(v) => {
                    v.insert(row_no);
                    None
                }
            }
        };

        if result.is_valid {
            valid += 1;
        } else {
            invalid += 1;
        }
        if duplicate_of.is_some() {
            duplicates += 1;
        }

        debug!(
            "batch row {}: valid={}, duplicate_of={:?}",
            row_no, result.is_valid, duplicate_of
        );

        outcomes.push(RowOutcome {
            row: row_no,
            raw: raw.to_string(),
            duplicate_of,
            result,
        });
    }

    BatchReport {
        run_id,
        started_at,
        input_hash: hex::encode(hasher.finalize()),
        total: outcomes.len(),
        valid,
        invalid,
        duplicates,
        rows: outcomes,
    }
}
