//! Request and option types for a validation run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Host language of the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum HostLanguage {
    Xhtml,
    Html,
    Svg,
    Atom,
    Xml,
}

impl From<String> for HostLanguage {
    fn from(value: String) -> Self {
        Self::from_form_value(&value)
    }
}

impl HostLanguage {
    /// Parse a form value. Unrecognized values fall back to generic XML.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "xhtml" => Self::Xhtml,
            "html" => Self::Html,
            "svg" => Self::Svg,
            "atom" => Self::Atom,
            _ => Self::Xml,
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Xhtml => "application/xhtml+xml",
            Self::Html => "text/html",
            Self::Svg => "image/svg+xml",
            Self::Atom => "application/atom+xml",
            Self::Xml => "application/xml",
        }
    }
}

/// Textual notation for the serialized data block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DataFormat {
    NTriples,
    #[default]
    Turtle,
}

impl DataFormat {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NTriples => "N-Triples",
            Self::Turtle => "Turtle",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DataFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ntriples" | "n-triples" | "nt" => Ok(Self::NTriples),
            "turtle" | "ttl" => Ok(Self::Turtle),
            other => Err(ModelError::UnknownDataFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for DataFormat {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options passed to the extraction collaborator and the report assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Explicit host language. When absent the collaborator sniffs the media type.
    pub host_language: Option<HostLanguage>,
    /// Prune the output to the RDFa Lite attribute subset.
    pub rdfa_lite: bool,
    /// Also extract RDF embedded in the document (e.g. Turtle script blocks).
    pub embedded_rdf: bool,
    /// Perform vocabulary expansion.
    pub vocab_expansion: bool,
    /// Notation used for the data region.
    pub data_format: DataFormat,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host_language(mut self, host_language: Option<HostLanguage>) -> Self {
        self.host_language = host_language;
        self
    }

    pub fn with_rdfa_lite(mut self, enable: bool) -> Self {
        self.rdfa_lite = enable;
        self
    }

    pub fn with_embedded_rdf(mut self, enable: bool) -> Self {
        self.embedded_rdf = enable;
        self
    }

    pub fn with_vocab_expansion(mut self, enable: bool) -> Self {
        self.vocab_expansion = enable;
        self
    }

    pub fn with_data_format(mut self, format: DataFormat) -> Self {
        self.data_format = format;
        self
    }

    /// Media type implied by the host language, if one was given.
    pub fn media_type(&self) -> Option<&'static str> {
        self.host_language.map(|language| language.media_type())
    }
}

/// Where the document under validation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Uri(String),
    Uploaded { name: String, bytes: Vec<u8> },
    Text(String),
}

impl DocumentSource {
    /// Short label for report headers and logs.
    pub fn label(&self) -> String {
        match self {
            Self::Uri(uri) => uri.clone(),
            Self::Uploaded { .. } => "uploaded file".to_string(),
            Self::Text(_) => "text input".to_string(),
        }
    }

    /// Base IRI for the generated data: the URI itself, empty otherwise.
    pub fn base(&self) -> &str {
        match self {
            Self::Uri(uri) => uri,
            Self::Uploaded { .. } | Self::Text(_) => "",
        }
    }
}

/// Everything the extraction collaborator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub source: DocumentSource,
    pub base: String,
    pub options: ValidatorOptions,
}

impl ExtractionRequest {
    pub fn new(source: DocumentSource, options: ValidatorOptions) -> Self {
        let base = source.base().to_string();
        Self {
            source,
            base,
            options,
        }
    }
}
