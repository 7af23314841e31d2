//! Serialization of the default graph into report text.
//!
//! Writers produce UTF-8 bytes. Those bytes are decoded strictly before they
//! become a [`SerializedData`], so a writer that emits anything else fails
//! loudly. Dumps produced by a graph engine in its own encoding go through
//! [`SerializedData::from_native_bytes`] and the fallback chain instead.

use tracing::{debug, warn};

use rdfv_ingest::{TextEncoding, normalize_strict, normalize_text};
use rdfv_model::{DataFormat, Graph, Literal, Term};

use crate::error::{SerializationError, TermPosition};
use crate::{ntriples, turtle};

/// Textual dump of the default graph, embedded verbatim in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedData {
    pub text: String,
    pub format: DataFormat,
    /// Encoding the text was decoded from.
    pub encoding: TextEncoding,
    /// Set when the text came out of the windows-1252 fallback or had
    /// malformed sequences replaced.
    pub lossy: bool,
}

impl SerializedData {
    pub fn empty(format: DataFormat) -> Self {
        Self {
            text: String::new(),
            format,
            encoding: TextEncoding::Utf8,
            lossy: false,
        }
    }

    /// Wrap bytes written by a graph engine in an unknown encoding.
    pub fn from_native_bytes(bytes: &[u8], format: DataFormat) -> Self {
        let normalized = normalize_text(bytes);
        if normalized.lossy {
            warn!(
                %format,
                encoding = %normalized.encoding,
                "serialized data decoded lossily"
            );
        }
        Self {
            text: normalized.text,
            format,
            encoding: normalized.encoding,
            lossy: normalized.lossy,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Serialize a graph in the given notation.
///
/// An empty graph yields empty text in both notations.
pub fn serialize_graph(
    graph: &Graph,
    format: DataFormat,
) -> Result<SerializedData, SerializationError> {
    let mut buffer = Vec::new();
    match format {
        DataFormat::NTriples => ntriples::write_ntriples(graph, &mut buffer)?,
        DataFormat::Turtle => turtle::write_turtle(graph, &mut buffer)?,
    }
    let text = normalize_strict(&buffer, TextEncoding::Utf8)?;
    debug!(%format, triples = graph.len(), bytes = text.len(), "serialized data graph");
    Ok(SerializedData {
        text,
        format,
        encoding: TextEncoding::Utf8,
        lossy: false,
    })
}

/// Reject terms that cannot appear in `position`.
pub(crate) fn check_position(term: &Term, position: TermPosition) -> Result<(), SerializationError> {
    let allowed = match (term, position) {
        (Term::Variable(_), _) => {
            return Err(SerializationError::UnsupportedTerm {
                position,
                term: term.to_string(),
            });
        }
        (Term::Iri(_), _) => true,
        (Term::BlankNode(_), TermPosition::Subject | TermPosition::Object) => true,
        (Term::Literal(_), TermPosition::Object) => true,
        _ => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(SerializationError::InvalidPosition {
            position,
            term: term.to_string(),
        })
    }
}

pub(crate) fn check_iri(iri: &str) -> Result<(), SerializationError> {
    let forbidden = |ch: char| {
        ch <= ' ' || matches!(ch, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\u{7f}')
    };
    if iri.is_empty() || iri.chars().any(forbidden) {
        return Err(SerializationError::InvalidIri {
            iri: iri.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_blank_label(label: &str) -> Result<(), SerializationError> {
    let valid = label
        .chars()
        .next()
        .is_some_and(|first| first.is_alphanumeric() || first == '_')
        && !label.ends_with('.')
        && label
            .chars()
            .all(|ch| ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(SerializationError::InvalidBlankNode {
            label: label.to_string(),
        })
    }
}

/// Validate a language tag and return it lowercased.
pub(crate) fn language_tag(tag: &str) -> Result<String, SerializationError> {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_alphabetic()));
    let rest_ok = parts.all(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_alphanumeric()));
    if primary_ok && rest_ok {
        Ok(tag.to_ascii_lowercase())
    } else {
        Err(SerializationError::InvalidLanguageTag {
            tag: tag.to_string(),
        })
    }
}

/// Append a quoted, escaped string literal.
pub(crate) fn push_quoted(out: &mut String, lexical: &str) {
    out.push('"');
    for ch in lexical.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            ch if ch < ' ' || ch == '\u{7f}' => {
                out.push_str(&format!("\\u{:04X}", u32::from(ch)));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

/// Datatype to print for a literal. `xsd:string` is implied and left out.
pub(crate) fn explicit_datatype(literal: &Literal) -> Option<&str> {
    literal
        .datatype
        .as_deref()
        .filter(|datatype| *datatype != rdfv_model::vocab::XSD_STRING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_uses_short_and_unicode_escapes() {
        let mut out = String::new();
        push_quoted(&mut out, "a\"b\\c\nd\te\u{1}f\u{7f}\u{8}");
        assert_eq!(out, r#""a\"b\\c\nd\te\u0001f\u007F\b""#);
    }

    #[test]
    fn iri_checks_reject_forbidden_characters() {
        assert!(check_iri("http://example.org/a").is_ok());
        assert!(check_iri("").is_err());
        assert!(check_iri("http://example.org/a b").is_err());
        assert!(check_iri("http://example.org/{x}").is_err());
    }

    #[test]
    fn blank_labels_and_language_tags() {
        assert!(check_blank_label("b0").is_ok());
        assert!(check_blank_label("a.b").is_ok());
        assert!(check_blank_label("a.").is_err());
        assert!(check_blank_label("-a").is_err());
        assert_eq!(language_tag("en-US").ok().as_deref(), Some("en-us"));
        assert!(language_tag("en--us").is_err());
        assert!(language_tag("").is_err());
    }

    #[test]
    fn positions_are_enforced() {
        let literal = Term::literal("x");
        assert!(check_position(&literal, TermPosition::Object).is_ok());
        assert!(matches!(
            check_position(&literal, TermPosition::Subject),
            Err(SerializationError::InvalidPosition { .. })
        ));
        assert!(matches!(
            check_position(&Term::blank("b"), TermPosition::Predicate),
            Err(SerializationError::InvalidPosition { .. })
        ));
        assert!(matches!(
            check_position(&Term::Variable("v".into()), TermPosition::Object),
            Err(SerializationError::UnsupportedTerm { .. })
        ));
    }

    #[test]
    fn native_bytes_use_fallback_chain() {
        let data = SerializedData::from_native_bytes(b"\"caf\xE9\"", DataFormat::NTriples);
        assert_eq!(data.text(), "\"café\"");
        assert_eq!(data.encoding, TextEncoding::Windows1252);
        assert!(data.lossy);
    }
}
