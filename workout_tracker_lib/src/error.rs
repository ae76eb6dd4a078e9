use thiserror::Error;

use crate::form::Field;

/// Bad or missing form input. Blocks the submit, nothing is mutated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{0} is not a number: {1:?}")]
    NotANumber(Field, String),

    #[error("{0} must be a finite number")]
    NotFinite(Field),

    #[error("{0} must be positive")]
    NotPositive(Field),

    #[error("{0} must be a whole number")]
    NotAWholeNumber(Field),

    #[error("distance and duration give a {0} that is out of range")]
    DerivedOutOfRange(&'static str),

    #[error("no location selected on the map")]
    MissingLocation,

    #[error("unknown workout type: {0:?}")]
    UnknownKind(String),
}

/// The browser refused or failed to hand out a position.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("geolocation failed with code {code}: {message}")]
pub struct GeolocationError {
    pub code: u16,
    pub message: String,
}

impl GeolocationError {
    pub fn unsupported() -> Self {
        Self {
            code: 0,
            message: "geolocation is not available".into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read {key:?}: {reason}")]
    Read { key: String, reason: String },

    #[error("data stored under {key:?} is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode workouts: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {key:?}: {reason}")]
    Write { key: String, reason: String },
}
