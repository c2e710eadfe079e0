// rfcval-core/src/alphabet.rs
//! Character classes and word denylists for RFC validation.
//!
//! Every structural check in the validator draws from the sets defined here,
//! so the allowed alphabet and the forbidden-word list live in one place as
//! module-level immutable statics with O(1) membership.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The only non-ASCII letter admitted by the RFC grammar.
pub const ENIE: char = 'Ñ';

/// Ampersand appears in organization names ("&") and is letter-class only.
pub const AMPERSAND: char = '&';

/// Master alphabet for the full normalized string: A-Z, Ñ, 0-9 and &.
pub static MASTER_ALPHABET: Lazy<HashSet<char>> = Lazy::new(|| {
    let mut set: HashSet<char> = ('A'..='Z').collect();
    set.extend('0'..='9');
    set.insert(ENIE);
    set.insert(AMPERSAND);
    set
});

/// Words (Anexo IV of the RCFF) that must never appear as the leading name
/// field of an RFC. The stock list is four-letter only; lookup is generic
/// over entry length, so a shorter entry would also match a MORAL field.
pub static FORBIDDEN_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend([
        "BUEI", "BUEY", "CACA", "CACO", "CAGA", "CAGO", "CAKA", "CAKO",
        "COGE", "COJA", "COJE", "COJI", "COJO", "CULO", "FETO", "GUEY",
        "JOTO", "KACA", "KACO", "KAGA", "KAGO", "KAKA", "KOGE", "KOJO",
        "KULO", "MAME", "MAMO", "MEAR", "MEAS", "MEON", "MION", "MOCO",
        "MULA", "PEDA", "PEDO", "PENE", "PUTA", "PUTO", "QULO", "RATA",
        "RUIN",
    ]);
    set
});

/// Character class of a positional field within an RFC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A-Z, Ñ and & — the name-derived fields.
    Letters,
    /// 0-9 — the date field.
    Digits,
    /// A-Z and 0-9 — the homoclave. Ñ and & are not alphanumeric.
    Alphanumeric,
}

impl CharClass {
    /// Whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            Self::Letters => c.is_ascii_uppercase() || c == ENIE || c == AMPERSAND,
            Self::Digits => c.is_ascii_digit(),
            Self::Alphanumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
        }
    }
}

/// Checks the leading name field against the denylist. Input is expected to
/// be normalized (uppercase) already.
pub fn is_forbidden_word(field: &str) -> bool {
    FORBIDDEN_WORDS.contains(field)
}
