//! Turtle writer.
//!
//! Subjects are sorted by their canonical N-Triples form and written as one
//! block each. Within a block `rdf:type` comes first as `a`, then the other
//! predicates in canonical order.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use rdfv_model::vocab::RDF_TYPE;
use rdfv_model::{Graph, Term};

use crate::error::{SerializationError, TermPosition};
use crate::ntriples::push_term;
use crate::serialize::{
    check_blank_label, check_iri, explicit_datatype, language_tag, push_quoted,
};

/// Namespaces abbreviated in output, sorted by prefix.
const PREFIXES: &[(&str, &str)] = &[
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("og", "http://ogp.me/ns#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("schema", "http://schema.org/"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
];

const PREDICATE_SEPARATOR: &str = " ;\n    ";
const OBJECT_SEPARATOR: &str = " ,\n        ";

/// Sort key for predicates: `rdf:type` sorts before everything else.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum PredicateKey {
    Type,
    Other(String),
}

#[derive(Default)]
struct SubjectBlock {
    label: String,
    predicates: BTreeMap<PredicateKey, PredicateObjects>,
}

#[derive(Default)]
struct PredicateObjects {
    label: String,
    /// Canonical form to Turtle form.
    objects: BTreeMap<String, String>,
}

pub(crate) fn write_turtle<W: Write>(graph: &Graph, out: &mut W) -> Result<(), SerializationError> {
    let mut used = BTreeSet::new();
    let mut blocks: BTreeMap<String, SubjectBlock> = BTreeMap::new();

    for triple in graph.iter() {
        let subject_key = canonical(&triple.subject, TermPosition::Subject)?;
        let predicate_key = canonical(&triple.predicate, TermPosition::Predicate)?;
        let object_key = canonical(&triple.object, TermPosition::Object)?;

        let block = blocks.entry(subject_key).or_default();
        if block.label.is_empty() {
            block.label = term_label(&triple.subject, TermPosition::Subject, &mut used)?;
        }
        let key = if triple.predicate.as_iri() == Some(RDF_TYPE) {
            PredicateKey::Type
        } else {
            PredicateKey::Other(predicate_key)
        };
        let entry = block.predicates.entry(key).or_default();
        if entry.label.is_empty() {
            entry.label = match triple.predicate.as_iri() {
                Some(RDF_TYPE) => "a".to_string(),
                _ => term_label(&triple.predicate, TermPosition::Predicate, &mut used)?,
            };
        }
        if !entry.objects.contains_key(&object_key) {
            let label = term_label(&triple.object, TermPosition::Object, &mut used)?;
            entry.objects.insert(object_key, label);
        }
    }

    let mut text = String::new();
    for (name, namespace) in PREFIXES {
        if used.contains(name) {
            text.push_str(&format!("@prefix {name}: <{namespace}> .\n"));
        }
    }
    for block in blocks.values() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&block.label);
        text.push(' ');
        let predicates: Vec<String> = block
            .predicates
            .values()
            .map(|entry| {
                let objects: Vec<&str> = entry.objects.values().map(String::as_str).collect();
                format!("{} {}", entry.label, objects.join(OBJECT_SEPARATOR))
            })
            .collect();
        text.push_str(&predicates.join(PREDICATE_SEPARATOR));
        text.push_str(" .\n");
    }
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn canonical(term: &Term, position: TermPosition) -> Result<String, SerializationError> {
    let mut out = String::new();
    push_term(&mut out, term, position)?;
    Ok(out)
}

/// Turtle form of an already validated term.
fn term_label(
    term: &Term,
    position: TermPosition,
    used: &mut BTreeSet<&'static str>,
) -> Result<String, SerializationError> {
    match term {
        Term::Iri(iri) => iri_label(iri, used),
        Term::BlankNode(label) => {
            check_blank_label(label)?;
            Ok(format!("_:{label}"))
        }
        Term::Literal(literal) => {
            let mut out = String::new();
            push_quoted(&mut out, &literal.lexical);
            if let Some(language) = &literal.language {
                out.push('@');
                out.push_str(&language_tag(language)?);
            } else if let Some(datatype) = explicit_datatype(literal) {
                out.push_str("^^");
                out.push_str(&iri_label(datatype, used)?);
            }
            Ok(out)
        }
        Term::Variable(_) => Err(SerializationError::UnsupportedTerm {
            position,
            term: term.to_string(),
        }),
    }
}

fn iri_label(iri: &str, used: &mut BTreeSet<&'static str>) -> Result<String, SerializationError> {
    check_iri(iri)?;
    for (name, namespace) in PREFIXES {
        if let Some(local) = iri.strip_prefix(*namespace)
            && is_safe_local(local)
        {
            used.insert(*name);
            return Ok(format!("{name}:{local}"));
        }
    }
    Ok(format!("<{iri}>"))
}

fn is_safe_local(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && local
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-'))
}
