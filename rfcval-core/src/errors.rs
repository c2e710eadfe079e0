// rfcval-core/src/errors.rs
//! Validation error taxonomy for the `rfcval-core` library.
//!
//! Every rule violation the validator can find is represented here as data,
//! never as a panic or a propagated exception. `Display` renders the
//! Spanish-language, user-facing message; consumers that need machine
//! handling match on the variant or serialize the structured form.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use thiserror::Error;

use crate::validator::PersonType;

/// A single rule violation found while validating an RFC.
///
/// `#[non_exhaustive]` signals that new variants may be added in future
/// versions, so consumers should keep a catch-all arm.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ValidationError {
    #[error("El RFC es requerido")]
    Required,

    #[error("El RFC debe tener 12 caracteres (persona moral) o 13 caracteres (persona física); se recibieron {length}")]
    InvalidLength { length: usize },

    #[error("El RFC no cumple con la estructura general de una {tipo}")]
    MalformedShape { tipo: PersonType },

    #[error("El carácter '{character}' no es válido en la parte del nombre; solo se permiten letras, Ñ y &")]
    NameFieldChar { character: char },

    #[error("La fecha del RFC debe constar de 6 dígitos (AAMMDD)")]
    DateNotNumeric,

    #[error("El mes '{month:02}' de la fecha no es válido; debe estar entre 01 y 12")]
    MonthOutOfRange { month: u8 },

    #[error("El día '{day:02}' de la fecha no es válido; debe estar entre 01 y 31")]
    DayOutOfRange { day: u8 },

    #[error("El año '{year:02}' de la fecha de nacimiento corresponde a un año futuro")]
    ImplausibleBirthYear { year: u8 },

    #[error("El carácter '{character}' no es válido en la homoclave; solo se permiten letras y dígitos")]
    HomoclaveChar { character: char },

    #[error("La parte del nombre '{word}' corresponde a una palabra inconveniente")]
    ForbiddenWord { word: String },

    #[error("El carácter '{character}' en la posición {position} no está permitido en un RFC")]
    IllegalChar { character: char, position: usize },
}
