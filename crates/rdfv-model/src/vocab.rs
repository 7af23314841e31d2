//! Diagnostic vocabulary used by processor graphs.
//!
//! A diagnostic subject carries its severity as an `rdf:type` class, its
//! message as `dc:description`, and optional context through a handful of
//! pointer and HTTP predicates.

use crate::diagnostic::{ContextKey, Severity};

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFA_NS: &str = "http://www.w3.org/ns/rdfa#";
pub const DC_NS: &str = "http://purl.org/dc/terms/";
pub const PTR_NS: &str = "http://www.w3.org/2009/pointers#";
pub const HT_NS: &str = "http://www.w3.org/2006/http#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

pub const RDFA_ERROR: &str = "http://www.w3.org/ns/rdfa#Error";
pub const RDFA_WARNING: &str = "http://www.w3.org/ns/rdfa#Warning";
pub const RDFA_INFO: &str = "http://www.w3.org/ns/rdfa#Info";
pub const RDFA_CONTEXT: &str = "http://www.w3.org/ns/rdfa#context";

pub const DC_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
pub const DC_DATE: &str = "http://purl.org/dc/terms/date";

pub const PTR_EXPRESSION: &str = "http://www.w3.org/2009/pointers#expression";
pub const PTR_LINE_NUMBER: &str = "http://www.w3.org/2009/pointers#lineNumber";
pub const PTR_CHAR_NUMBER: &str = "http://www.w3.org/2009/pointers#charNumber";

pub const HT_RESPONSE_CODE: &str = "http://www.w3.org/2006/http#responseCode";
pub const HT_ABSOLUTE_URI: &str = "http://www.w3.org/2006/http#absoluteURI";

/// A diagnostic class and the severity it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticClass {
    pub iri: &'static str,
    pub severity: Severity,
    /// `false` for the three top-level severity classes.
    pub is_subclass: bool,
}

/// All diagnostic classes a processor graph may use.
pub const DIAGNOSTIC_CLASSES: &[DiagnosticClass] = &[
    DiagnosticClass {
        iri: RDFA_ERROR,
        severity: Severity::Error,
        is_subclass: false,
    },
    DiagnosticClass {
        iri: "http://www.w3.org/ns/rdfa#DocumentError",
        severity: Severity::Error,
        is_subclass: true,
    },
    DiagnosticClass {
        iri: RDFA_WARNING,
        severity: Severity::Warning,
        is_subclass: false,
    },
    DiagnosticClass {
        iri: "http://www.w3.org/ns/rdfa#VocabReferenceError",
        severity: Severity::Warning,
        is_subclass: true,
    },
    DiagnosticClass {
        iri: "http://www.w3.org/ns/rdfa#UnresolvedCURIE",
        severity: Severity::Warning,
        is_subclass: true,
    },
    DiagnosticClass {
        iri: "http://www.w3.org/ns/rdfa#UnresolvedTerm",
        severity: Severity::Warning,
        is_subclass: true,
    },
    DiagnosticClass {
        iri: "http://www.w3.org/ns/rdfa#PrefixRedefinition",
        severity: Severity::Warning,
        is_subclass: true,
    },
    DiagnosticClass {
        iri: RDFA_INFO,
        severity: Severity::Info,
        is_subclass: false,
    },
];

/// Predicates that contribute context fields, in lookup order.
pub const CONTEXT_PREDICATES: &[(&str, ContextKey)] = &[
    (DC_DATE, ContextKey::Date),
    (RDFA_CONTEXT, ContextKey::Context),
    (PTR_EXPRESSION, ContextKey::XPath),
    (PTR_LINE_NUMBER, ContextKey::Line),
    (PTR_CHAR_NUMBER, ContextKey::Column),
    (HT_RESPONSE_CODE, ContextKey::HttpResponse),
    (HT_ABSOLUTE_URI, ContextKey::RequestUri),
];

/// Look up a diagnostic class by IRI.
pub fn diagnostic_class(iri: &str) -> Option<&'static DiagnosticClass> {
    DIAGNOSTIC_CLASSES.iter().find(|class| class.iri == iri)
}

/// Look up the context key carried by a predicate.
pub fn context_key(predicate: &str) -> Option<ContextKey> {
    CONTEXT_PREDICATES
        .iter()
        .find(|(iri, _)| *iri == predicate)
        .map(|(_, key)| *key)
}

/// Local part of an IRI (after the last `#` or `/`).
pub fn local_name(iri: &str) -> &str {
    iri.rsplit(['#', '/']).next().unwrap_or(iri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subclasses_imply_parent_severity() {
        let class = diagnostic_class("http://www.w3.org/ns/rdfa#PrefixRedefinition")
            .expect("known class");
        assert_eq!(class.severity, Severity::Warning);
        assert!(class.is_subclass);
        assert_eq!(diagnostic_class(RDFA_ERROR).map(|c| c.severity), Some(Severity::Error));
        assert!(diagnostic_class("http://example.org/Other").is_none());
    }

    #[test]
    fn local_name_strips_namespace() {
        assert_eq!(local_name(RDFA_WARNING), "Warning");
        assert_eq!(local_name(DC_DESCRIPTION), "description");
        assert_eq!(local_name("plain"), "plain");
    }

    #[test]
    fn context_keys_resolve() {
        assert_eq!(context_key(PTR_LINE_NUMBER), Some(ContextKey::Line));
        assert_eq!(context_key(DC_DESCRIPTION), None);
    }
}
