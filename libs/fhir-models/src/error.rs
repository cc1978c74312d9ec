//! Error types for FHIR STU3 models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing resourceType property")]
    MissingResourceType,

    #[error("Unknown resourceType: {0}")]
    UnknownResourceType(String),

    #[error("Expected a JSON object for the resource")]
    ExpectedObject,

    #[error("Invalid {kind} value '{value}': {reason}")]
    InvalidPrimitive {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_primitive(
        kind: &'static str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidPrimitive {
            kind,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
