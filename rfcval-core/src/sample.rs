// rfcval-core/src/sample.rs
//! Fabrication of structurally valid sample identifiers.
//!
//! Used for documentation, templates and tests. Output is built from the
//! same field tables the validator checks against, so a sample always
//! round-trips through `validate` as valid.
//!
//! License: MIT OR APACHE 2.0

use crate::fields::layout_for;
use crate::validator::PersonType;

// Letter pool for the leading field; "XAMP"/"XAM" are not on the denylist.
const SAMPLE_LETTERS: &str = "XAMP";
const SAMPLE_DATE: &str = "900101";
const SAMPLE_HOMOCLAVE: &str = "XX1";

/// Builds a structurally valid sample RFC for the given person type.
pub fn sample(tipo: PersonType) -> String {
    let layout = layout_for(tipo);
    let mut out = String::with_capacity(layout.len);
    out.push_str(&SAMPLE_LETTERS[..layout.name_field.width]);
    out.push_str(SAMPLE_DATE);
    out.push_str(SAMPLE_HOMOCLAVE);
    out
}
