// rfcval-core/src/fields.rs
//! Declarative field tables for the two RFC variants.
//!
//! Each variant (FISICA, MORAL) is described by a `VariantLayout`: a fixed
//! set of positional fields with an offset, a width and a character class,
//! plus a compiled coarse shape regex for the overall-format check. The
//! validator runs every check from these tables, which keeps the
//! "accumulate all errors" contract mechanical instead of hand-threaded
//! through nested conditionals.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::alphabet::CharClass;
use crate::validator::PersonType;

/// A single positional field within a normalized RFC.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name used in error reporting ("nombre", "fecha", "homoclave").
    pub name: &'static str,
    /// Character offset of the field within the normalized string.
    pub offset: usize,
    /// Field width in characters.
    pub width: usize,
    /// The character class every character of the field must belong to.
    pub class: CharClass,
}

impl FieldSpec {
    /// Extracts the field from a pre-collected character buffer. Callers
    /// guarantee `chars.len()` equals the owning layout's length.
    pub fn extract(&self, chars: &[char]) -> String {
        chars[self.offset..self.offset + self.width].iter().collect()
    }
}

/// Full structural description of one RFC variant.
#[derive(Debug)]
pub struct VariantLayout {
    /// The person type this layout validates.
    pub tipo: PersonType,
    /// Exact normalized length of the variant.
    pub len: usize,
    /// Name-derived leading letters (4 for FISICA, 3 for MORAL).
    pub name_field: FieldSpec,
    /// Six-digit YYMMDD date field.
    pub date_field: FieldSpec,
    /// Three-character alphanumeric disambiguation suffix.
    pub homoclave: FieldSpec,
    /// Coarse fixed-width shape check for the whole string. A shape failure
    /// never suppresses the finer per-field checks.
    pub shape: &'static Regex,
}

lazy_static! {
    static ref FISICA_SHAPE: Regex =
        Regex::new(r"^[A-ZÑ&]{4}[0-9]{6}[A-Z0-9]{3}$").unwrap();
    static ref MORAL_SHAPE: Regex =
        Regex::new(r"^[A-ZÑ&]{3}[0-9]{6}[A-Z0-9]{3}$").unwrap();
}

/// Layout for individuals: 13 characters, 4 leading letters.
pub static FISICA_LAYOUT: Lazy<VariantLayout> = Lazy::new(|| VariantLayout {
    tipo: PersonType::Fisica,
    len: 13,
    name_field: FieldSpec { name: "nombre", offset: 0, width: 4, class: CharClass::Letters },
    date_field: FieldSpec { name: "fecha", offset: 4, width: 6, class: CharClass::Digits },
    homoclave: FieldSpec { name: "homoclave", offset: 10, width: 3, class: CharClass::Alphanumeric },
    shape: &FISICA_SHAPE,
});

/// Layout for organizations: 12 characters, 3 leading letters.
pub static MORAL_LAYOUT: Lazy<VariantLayout> = Lazy::new(|| VariantLayout {
    tipo: PersonType::Moral,
    len: 12,
    name_field: FieldSpec { name: "nombre", offset: 0, width: 3, class: CharClass::Letters },
    date_field: FieldSpec { name: "fecha", offset: 3, width: 6, class: CharClass::Digits },
    homoclave: FieldSpec { name: "homoclave", offset: 9, width: 3, class: CharClass::Alphanumeric },
    shape: &MORAL_SHAPE,
});

/// Resolves the layout for a normalized length, if one exists.
pub fn layout_for_len(len: usize) -> Option<&'static VariantLayout> {
    match len {
        13 => Some(&FISICA_LAYOUT),
        12 => Some(&MORAL_LAYOUT),
        _ => None,
    }
}

/// Resolves the layout for a person type.
pub fn layout_for(tipo: PersonType) -> &'static VariantLayout {
    match tipo {
        PersonType::Fisica => &FISICA_LAYOUT,
        PersonType::Moral => &MORAL_LAYOUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_cover_exactly_the_two_lengths() {
        assert_eq!(layout_for_len(13).map(|l| l.tipo), Some(PersonType::Fisica));
        assert_eq!(layout_for_len(12).map(|l| l.tipo), Some(PersonType::Moral));
        assert!(layout_for_len(11).is_none());
        assert!(layout_for_len(14).is_none());
        assert!(layout_for_len(0).is_none());
    }

    #[test]
    fn fields_tile_the_full_string() {
        for layout in [&*FISICA_LAYOUT, &*MORAL_LAYOUT] {
            assert_eq!(layout.name_field.offset, 0);
            assert_eq!(layout.date_field.offset, layout.name_field.width);
            assert_eq!(
                layout.homoclave.offset,
                layout.date_field.offset + layout.date_field.width
            );
            assert_eq!(layout.homoclave.offset + layout.homoclave.width, layout.len);
        }
    }

    #[test]
    fn shape_regexes_accept_canonical_forms() {
        assert!(FISICA_LAYOUT.shape.is_match("GOPE650615ABC"));
        assert!(FISICA_LAYOUT.shape.is_match("XAXX010101000"));
        assert!(MORAL_LAYOUT.shape.is_match("TUB650615ABC"));
        assert!(MORAL_LAYOUT.shape.is_match("AÑO900101XX1"));
        assert!(!FISICA_LAYOUT.shape.is_match("GOPE65061MABC"));
        assert!(!MORAL_LAYOUT.shape.is_match("TUB650615AB"));
    }

    #[test]
    fn extract_slices_by_character_not_byte() {
        let chars: Vec<char> = "AÑO900101XX1".chars().collect();
        assert_eq!(MORAL_LAYOUT.name_field.extract(&chars), "AÑO");
        assert_eq!(MORAL_LAYOUT.date_field.extract(&chars), "900101");
        assert_eq!(MORAL_LAYOUT.homoclave.extract(&chars), "XX1");
    }
}
