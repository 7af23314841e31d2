//! Error types for graph ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::encoding::TextEncoding;

/// Errors raised while decoding text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// Input is not valid in the encoding the caller required.
    #[error("input is not valid {encoding}")]
    Malformed { encoding: TextEncoding },
}

/// Errors that can occur while loading graphs or calling the collaborator.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Graph dump not found.
    #[error("graph file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// N-Triples syntax error.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// N-Triples syntax error in a named file.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<IngestError>,
    },

    // === Collaborator Errors ===
    /// The extraction collaborator could not process the request.
    #[error("extraction failed: {message}")]
    Extraction { message: String },
}

impl IngestError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
