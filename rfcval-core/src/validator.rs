// rfcval-core/src/validator.rs
//! Normalization, classification and structural validation of RFC strings.
//!
//! The validator is a pure function over its input: no I/O, no shared
//! mutable state, no panics for any input. Every applicable rule violation
//! is accumulated into the result rather than short-circuiting on the first
//! failure, so bulk consumers can show a user every problem at once.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use chrono::{Datelike, Utc};
use log::debug;
use serde::Serialize;

use crate::alphabet::{is_forbidden_word, MASTER_ALPHABET};
use crate::errors::ValidationError;
use crate::fields::{layout_for_len, VariantLayout};

/// Two-digit years this far past the current year are still treated as a
/// plausible 2000s birth year; beyond that they decode to the 1900s.
const FUTURE_YEAR_SLACK: u8 = 10;

/// The two RFC variants, inferred from normalized length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonType {
    /// Individual / natural person — 13 characters.
    Fisica,
    /// Organization / legal entity — 12 characters.
    Moral,
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fisica => write!(f, "persona física"),
            Self::Moral => write!(f, "persona moral"),
        }
    }
}

/// Outcome of validating a single RFC candidate.
///
/// Ephemeral by design: constructed, inspected and discarded within one
/// call. `tipo_persona` is inferred from length alone and is populated even
/// when other checks fail; it is `None` only for lengths other than 12/13.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True iff no rule violation was found.
    pub is_valid: bool,
    /// Length-inferred variant, independent of validity.
    pub tipo_persona: Option<PersonType>,
    /// Every violation found, in check order.
    pub errors: Vec<ValidationError>,
    /// The normalized (uppercase, whitespace-free) form.
    pub normalized: String,
    /// Character count of the normalized form.
    pub length: usize,
}

impl ValidationResult {
    /// User-facing messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// All messages joined for single-line rejection surfaces (e.g. the
    /// authentication flow).
    pub fn joined_messages(&self) -> String {
        self.messages().join("; ")
    }
}

/// Canonicalizes a raw identifier: strips all whitespace and upper-cases
/// every letter. Never fails; empty input normalizes to the empty string.
/// Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Infers the person type from normalized length: 13 characters is FISICA,
/// 12 is MORAL, anything else is `None`. Tolerates un-normalized input and
/// never errors, even for empty strings.
pub fn classify(input: &str) -> Option<PersonType> {
    match normalize(input).chars().count() {
        13 => Some(PersonType::Fisica),
        12 => Some(PersonType::Moral),
        _ => None,
    }
}

/// Convenience alias for [`classify`], named after the domain term.
pub fn tipo_persona(input: &str) -> Option<PersonType> {
    classify(input)
}

/// Validates a raw RFC candidate, accumulating every applicable rule
/// violation. Total over all inputs: empty strings, non-ASCII garbage and
/// arbitrarily long input all produce a structured result, never a panic.
pub fn validate(raw: &str) -> ValidationResult {
    let current_yy = (Utc::now().year() % 100) as u8;
    validate_with_reference_year(raw, current_yy)
}

/// Validation against an explicit current two-digit year, so the FISICA
/// future-year rule stays deterministic under test. `validate` feeds in the
/// current UTC year.
pub(crate) fn validate_with_reference_year(raw: &str, current_yy: u8) -> ValidationResult {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return ValidationResult {
            is_valid: false,
            tipo_persona: None,
            errors: vec![ValidationError::Required],
            normalized,
            length: 0,
        };
    }

    let chars: Vec<char> = normalized.chars().collect();
    let length = chars.len();
    let Some(layout) = layout_for_len(length) else {
        return ValidationResult {
            is_valid: false,
            tipo_persona: None,
            errors: vec![ValidationError::InvalidLength { length }],
            normalized,
            length,
        };
    };

    let mut errors = Vec::new();
    run_structural_checks(layout, &normalized, &chars, current_yy, &mut errors);

    debug!(
        "validated RFC candidate: tipo={:?}, length={}, violations={}",
        layout.tipo,
        length,
        errors.len()
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        tipo_persona: Some(layout.tipo),
        errors,
        normalized,
        length,
    }
}

/// Runs every variant check from the field table. All checks run regardless
/// of earlier failures; each appends to the shared error list.
fn run_structural_checks(
    layout: &VariantLayout,
    normalized: &str,
    chars: &[char],
    current_yy: u8,
    errors: &mut Vec<ValidationError>,
) {
    // Coarse fixed-width shape check. Does not suppress the finer checks.
    if !layout.shape.is_match(normalized) {
        errors.push(ValidationError::MalformedShape { tipo: layout.tipo });
    }

    // Name field: every character must be a letter, Ñ or &.
    let name_field = layout.name_field.extract(chars);
    for c in name_field.chars() {
        if !layout.name_field.class.contains(c) {
            errors.push(ValidationError::NameFieldChar { character: c });
        }
    }

    // Date field: 6 digits split as YY / MM / DD. Day is only range-checked
    // against 1-31; month lengths and leap years are deliberately ignored.
    let date_field = layout.date_field.extract(chars);
    if date_field.chars().all(|c| c.is_ascii_digit()) {
        // All-ASCII at this point, so byte slicing is safe.
        let year: u8 = date_field[0..2].parse().unwrap_or(0);
        let month: u8 = date_field[2..4].parse().unwrap_or(0);
        let day: u8 = date_field[4..6].parse().unwrap_or(0);

        if !(1..=12).contains(&month) {
            errors.push(ValidationError::MonthOutOfRange { month });
        }
        if !(1..=31).contains(&day) {
            errors.push(ValidationError::DayOutOfRange { day });
        }
        // FISICA only: a year in (current, current + slack] decodes to the
        // 2000s and lies in the future, so the birth date is implausible.
        // Larger years decode to the 1900s; MORAL constitution dates are
        // exempt entirely.
        if layout.tipo == PersonType::Fisica
            && year > current_yy
            && year <= current_yy + FUTURE_YEAR_SLACK
        {
            errors.push(ValidationError::ImplausibleBirthYear { year });
        }
    } else {
        errors.push(ValidationError::DateNotNumeric);
    }

    // Homoclave: 3 alphanumeric characters; Ñ and & are not admitted here.
    let homoclave = layout.homoclave.extract(chars);
    for c in homoclave.chars() {
        if !layout.homoclave.class.contains(c) {
            errors.push(ValidationError::HomoclaveChar { character: c });
        }
    }

    // Forbidden word: the leading name field must not match the denylist.
    if is_forbidden_word(&name_field) {
        errors.push(ValidationError::ForbiddenWord { word: name_field });
    }

    // Global scan of the whole string against the master alphabet. This can
    // fire even when every field-level check passed.
    for (i, c) in chars.iter().enumerate() {
        if !MASTER_ALPHABET.contains(c) {
            errors.push(ValidationError::IllegalChar { character: *c, position: i + 1 });
        }
    }
}
