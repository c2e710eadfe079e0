// rfcval-core/src/lib.rs
//! # rfcval Core Library
//!
//! `rfcval-core` provides the fundamental, platform-independent logic for
//! validating and classifying Mexican RFC tax identifiers (Registro Federal
//! de Contribuyentes). It defines the structural grammar of the two RFC
//! variants as declarative field tables, validates raw input against them
//! while accumulating every rule violation, and packages bulk validation
//! into a consolidated, exportable report.
//!
//! The library is pure and stateless: validation operates solely on its
//! input, performs no I/O, holds no state across invocations, and never
//! panics for any input. It is safe to call concurrently from any number of
//! threads without coordination.
//!
//! ## Modules
//!
//! * `alphabet`: master alphabet, per-field character classes and the
//!   forbidden-word denylist.
//! * `fields`: declarative `FieldSpec`/`VariantLayout` tables for the FISICA
//!   and MORAL variants.
//! * `validator`: `normalize`, `classify` and `validate` plus the
//!   `ValidationResult` record.
//! * `errors`: the `ValidationError` taxonomy with Spanish user-facing
//!   messages.
//! * `sample`: fabrication of structurally valid sample identifiers.
//! * `batch`: bulk validation with in-batch duplicate detection and a
//!   provenance-stamped report.
//!
//! ## Usage Example
//!
//! ```rust
//! use rfcval_core::{validate, classify, PersonType};
//!
//! let result = validate("GOPE650615ABC");
//! assert!(result.is_valid);
//! assert_eq!(result.tipo_persona, Some(PersonType::Fisica));
//!
//! // Classification is determined by length alone, even for invalid input.
//! assert_eq!(classify("TUB650615ABC"), Some(PersonType::Moral));
//!
//! let bad = validate("AB12");
//! assert!(!bad.is_valid);
//! for message in bad.messages() {
//!     eprintln!("{message}");
//! }
//! ```
//!
//! ## Error Handling
//!
//! Validation never returns `Err` and never panics; every rule violation is
//! captured as a [`ValidationError`] entry in the result. Callers decide
//! user-visible behavior — this crate only supplies the structured verdict
//! and ready-to-display Spanish messages.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod alphabet;
pub mod batch;
pub mod errors;
pub mod fields;
pub mod sample;
pub mod validator;

/// Re-exports the character sets driving the structural checks.
pub use alphabet::{CharClass, FORBIDDEN_WORDS, MASTER_ALPHABET};

/// Re-exports the validation error taxonomy.
pub use errors::ValidationError;

/// Re-exports the declarative variant layouts.
pub use fields::{layout_for, layout_for_len, FieldSpec, VariantLayout};

/// Re-exports the core validation entry points and result types.
pub use validator::{classify, normalize, tipo_persona, validate, PersonType, ValidationResult};

/// Re-exports sample fabrication for documentation and templates.
pub use sample::sample;

/// Re-exports bulk validation and its report types.
pub use batch::{validate_batch, BatchReport, RowOutcome};
