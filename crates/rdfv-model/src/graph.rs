//! In-memory RDF graph types.
//!
//! These types are the hand-off format between the extraction collaborator
//! and the report engine. The store keeps set semantics and remembers the
//! arrival index of every triple, so consumers can order their output by an
//! explicit first-seen index instead of trusting iteration order.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A literal value with optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI, if any.
    pub datatype: Option<String>,
    /// Language tag, if any.
    pub language: Option<String>,
}

impl Literal {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }
}

/// A node or value in a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Term {
    Iri(String),
    BlankNode(String),
    Literal(Literal),
    /// Query variable. Some graph engines can hold these, but no textual
    /// triple notation can express them.
    Variable(String),
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Self::Iri(value.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Self::BlankNode(label.into())
    }

    pub fn literal(lexical: impl Into<String>) -> Self {
        Self::Literal(Literal::plain(lexical))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Human-facing value: the IRI, the `_:label`, or the literal's lexical form.
    pub fn display_value(&self) -> String {
        match self {
            Self::Iri(iri) => iri.clone(),
            Self::BlankNode(label) => format!("_:{label}"),
            Self::Literal(literal) => literal.lexical.clone(),
            Self::Variable(name) => format!("?{name}"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(label) => write!(f, "_:{label}"),
            Self::Literal(literal) => {
                write!(f, "\"{}\"", literal.lexical)?;
                if let Some(language) = &literal.language {
                    write!(f, "@{language}")
                } else if let Some(datatype) = &literal.datatype {
                    write!(f, "^^<{datatype}>")
                } else {
                    Ok(())
                }
            }
            Self::Variable(name) => write!(f, "?{name}"),
        }
    }
}

/// A single subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// A triple together with its arrival index in the store.
#[derive(Debug, Clone, Copy)]
pub struct IndexedTriple<'a> {
    pub index: usize,
    pub triple: &'a Triple,
}

/// A set of triples.
///
/// Iteration yields triples in arrival order, but that order is a property
/// of how the collaborator filled the store. Whether the upstream engine
/// guarantees it is unverified, so ordering-sensitive consumers sort by
/// [`IndexedTriple::index`] explicitly.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` when the triple was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Convenience wrapper around [`Graph::insert`].
    pub fn add(&mut self, subject: Term, predicate: Term, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterate with explicit arrival indices.
    pub fn indexed(&self) -> impl Iterator<Item = IndexedTriple<'_>> {
        self.triples
            .iter()
            .enumerate()
            .map(|(index, triple)| IndexedTriple { index, triple })
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for triple in iter {
            graph.insert(triple);
        }
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut graph = Graph::new();
        let triple = Triple::new(
            Term::blank("a"),
            Term::iri("http://example.org/p"),
            Term::literal("x"),
        );
        assert!(graph.insert(triple.clone()));
        assert!(!graph.insert(triple.clone()));
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&triple));
    }

    #[test]
    fn indexed_follows_arrival_order() {
        let graph: Graph = ["c", "a", "b"]
            .into_iter()
            .map(|label| {
                Triple::new(
                    Term::blank(label),
                    Term::iri("http://example.org/p"),
                    Term::literal(label),
                )
            })
            .collect();
        let labels: Vec<(usize, String)> = graph
            .indexed()
            .map(|entry| (entry.index, entry.triple.subject.display_value()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (0, "_:c".to_string()),
                (1, "_:a".to_string()),
                (2, "_:b".to_string())
            ]
        );
    }

    #[test]
    fn display_renders_terms() {
        assert_eq!(Term::iri("http://x").to_string(), "<http://x>");
        assert_eq!(
            Term::Literal(Literal::lang("chat", "fr")).to_string(),
            "\"chat\"@fr"
        );
        assert_eq!(Term::Variable("v".into()).display_value(), "?v");
    }
}
