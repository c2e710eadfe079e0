// rfcval-core/tests/validator_integration_tests.rs
//! End-to-end checks of the public validation API: the documented concrete
//! scenarios, the idempotence/classification/totality properties and the
//! JSON shape of exported results.

use rfcval_core::{
    classify, normalize, sample, tipo_persona, validate, validate_batch, PersonType,
    ValidationError,
};

#[test]
fn scenario_valid_fisica() {
    let r = validate("GOPE650615ABC");
    assert!(r.is_valid, "unexpected errors: {:?}", r.errors);
    assert_eq!(r.tipo_persona, Some(PersonType::Fisica));
    assert_eq!(r.normalized, "GOPE650615ABC");
    assert_eq!(r.length, 13);
}

#[test]
fn scenario_valid_moral() {
    let r = validate("TUB650615ABC");
    assert!(r.is_valid, "unexpected errors: {:?}", r.errors);
    assert_eq!(r.tipo_persona, Some(PersonType::Moral));
    assert_eq!(r.length, 12);
}

#[test]
fn scenario_generic_placeholder() {
    // The commonly used generic/placeholder identifier.
    let r = validate("XAXX010101000");
    assert!(r.is_valid, "unexpected errors: {:?}", r.errors);
    assert_eq!(r.tipo_persona, Some(PersonType::Fisica));
}

#[test]
fn scenario_wrong_length() {
    let r = validate("AB12");
    assert!(!r.is_valid);
    assert_eq!(r.tipo_persona, None);
    let joined = r.joined_messages();
    assert!(joined.contains("12"), "message should name both lengths: {joined}");
    assert!(joined.contains("13"), "message should name both lengths: {joined}");
}

#[test]
fn scenario_empty_input() {
    let r = validate("");
    assert!(!r.is_valid);
    assert_eq!(r.errors.len(), 1);
    assert_eq!(r.errors[0], ValidationError::Required);
    assert_eq!(r.length, 0);
}

#[test]
fn scenario_forbidden_word() {
    let r = validate("CACA650615ABC");
    assert!(!r.is_valid);
    assert!(r
        .errors
        .iter()
        .any(|e| matches!(e, ValidationError::ForbiddenWord { .. })));
    assert_eq!(r.tipo_persona, Some(PersonType::Fisica));
}

#[test]
fn property_normalize_idempotent() {
    for s in [
        "GOPE650615ABC",
        "  gope 650615 abc ",
        "",
        "ß ñ &",
        "🙂🙂",
        "mixed CASE with\ttabs",
    ] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {s:?}");
    }
}

#[test]
fn property_classification_independent_of_validity() {
    // 13 invalid characters: still FISICA.
    let r = validate("!!!!!!!!!!!!!");
    assert!(!r.is_valid);
    assert_eq!(r.tipo_persona, Some(PersonType::Fisica));
    assert_eq!(classify("!!!!!!!!!!!!!"), Some(PersonType::Fisica));

    // 12 invalid characters: still MORAL.
    assert_eq!(classify("############"), Some(PersonType::Moral));
    assert_eq!(tipo_persona("############"), Some(PersonType::Moral));

    assert_eq!(classify("tooshort"), None);
}

#[test]
fn property_no_throw_totality() {
    let kilo = "Ñ&9 ".repeat(250);
    for s in ["", " ", "\u{0}", "🙂", kilo.as_str(), "nulls\u{0}and\u{7}bells"] {
        // Must return a structured result for anything at all.
        let r = validate(s);
        assert_eq!(r.is_valid, r.errors.is_empty());
    }
}

#[test]
fn property_sample_round_trip() {
    assert!(validate(&sample(PersonType::Fisica)).is_valid);
    assert!(validate(&sample(PersonType::Moral)).is_valid);
}

#[test]
fn property_exhaustive_error_accumulation() {
    // Forbidden word + month 13 + day 45 + bad homoclave character.
    let r = validate("CACA991345AB&");
    assert!(!r.is_valid);
    assert!(
        r.errors.len() >= 3,
        "expected at least 3 distinct errors, got {:?}",
        r.errors
    );
}

#[test]
fn results_export_as_json() -> anyhow::Result<()> {
    let r = validate("AB12");
    let json = serde_json::to_value(&r)?;
    assert_eq!(json["is_valid"], false);
    assert!(json["tipo_persona"].is_null());
    assert_eq!(json["errors"][0]["code"], "invalid_length");
    assert_eq!(json["errors"][0]["length"], 4);
    Ok(())
}

#[test]
fn batch_report_exports_as_json() -> anyhow::Result<()> {
    let report = validate_batch(["GOPE650615ABC", "GOPE650615ABC", "AB12"]);
    let json = serde_json::to_value(&report)?;
    assert_eq!(json["total"], 3);
    assert_eq!(json["valid"], 2);
    assert_eq!(json["invalid"], 1);
    assert_eq!(json["duplicates"], 1);
    assert_eq!(json["rows"][1]["duplicate_of"], 1);
    Ok(())
}
