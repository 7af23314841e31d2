//! Error types for serialization and rendering.

use std::fmt;

use thiserror::Error;

use rdfv_ingest::EncodingError;

/// Slot of a triple a term was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPosition {
    Subject,
    Predicate,
    Object,
    Datatype,
}

impl fmt::Display for TermPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Subject => "subject",
            Self::Predicate => "predicate",
            Self::Object => "object",
            Self::Datatype => "datatype",
        })
    }
}

/// The data graph cannot be written in the requested notation.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The term has no textual notation at all.
    #[error("cannot serialize {term} in {position} position: unsupported term type")]
    UnsupportedTerm { position: TermPosition, term: String },

    /// The term is valid but not allowed where it appears.
    #[error("{term} is not allowed in {position} position")]
    InvalidPosition { position: TermPosition, term: String },

    #[error("invalid IRI <{iri}>")]
    InvalidIri { iri: String },

    #[error("invalid blank node label '{label}'")]
    InvalidBlankNode { label: String },

    #[error("invalid language tag '{tag}'")]
    InvalidLanguageTag { tag: String },

    #[error("serialized data failed to decode: {0}")]
    Encoding(#[from] EncodingError),

    #[error("failed to write serialized data: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while rendering a report to markup or JSON.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write markup: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered markup is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
