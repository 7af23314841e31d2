//! Diagnostic record extraction.

use std::collections::HashMap;

use tracing::{debug, trace};

use rdfv_model::vocab::{self, DC_DESCRIPTION, RDF_TYPE};
use rdfv_model::{
    ContextField, ContextKey, DiagnosticRecord, Graph, IndexedTriple, Severity, Term,
};

/// Statements grouped under one subject.
struct SubjectEntry<'g> {
    subject: &'g Term,
    first_seen: usize,
    statements: Vec<IndexedTriple<'g>>,
}

/// Reconstruct diagnostic records from a processor graph.
///
/// One record is produced per distinct subject that has a message
/// (`dc:description`). Resolution rules:
///
/// - Severity comes from `rdf:type`. Subclasses such as
///   `rdfa:PrefixRedefinition` imply their parent severity and set the
///   record's kind. With several severities, the most severe wins.
/// - A subject with a message but no recognized severity is reported as
///   [`Severity::Info`]. This is a leniency policy, not an error.
/// - A subject with a severity but no non-blank message is malformed and
///   dropped.
/// - Subjects with neither (pointer nodes, HTTP response nodes) are skipped;
///   their fields are pulled into the record that references them through
///   `rdfa:context`.
///
/// Records are ordered by the arrival index of their subject's first
/// statement. The order is computed from explicit indices, never from the
/// store's iteration order.
pub fn extract_diagnostics(graph: &Graph) -> Vec<DiagnosticRecord> {
    let mut entries = index_subjects(graph);
    entries.sort_by_key(|entry| entry.first_seen);
    let lookup: HashMap<&Term, &SubjectEntry<'_>> =
        entries.iter().map(|entry| (entry.subject, entry)).collect();

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for entry in &entries {
        let (severity, kind) = resolve_severity(entry);
        let message = resolve_message(entry);
        let message = match (severity, message) {
            (_, Some(message)) => message,
            (Some(severity), None) => {
                debug!(
                    subject = %entry.subject,
                    %severity,
                    "dropping diagnostic without a message"
                );
                dropped += 1;
                continue;
            }
            (None, None) => continue,
        };
        let severity = severity.unwrap_or_else(|| {
            trace!(subject = %entry.subject, "no severity class, reporting as info");
            Severity::Info
        });
        records.push(DiagnosticRecord {
            subject: entry.subject.clone(),
            severity,
            kind,
            message,
            context: collect_context(entry, &lookup),
            first_seen: entry.first_seen,
        });
    }
    records.sort_by_key(|record| record.first_seen);
    debug!(
        statements = graph.len(),
        records = records.len(),
        dropped,
        "extracted diagnostics"
    );
    records
}

fn index_subjects(graph: &Graph) -> Vec<SubjectEntry<'_>> {
    let mut positions: HashMap<&Term, usize> = HashMap::new();
    let mut entries: Vec<SubjectEntry<'_>> = Vec::new();
    for indexed in graph.indexed() {
        let subject = &indexed.triple.subject;
        let slot = *positions.entry(subject).or_insert_with(|| {
            entries.push(SubjectEntry {
                subject,
                first_seen: indexed.index,
                statements: Vec::new(),
            });
            entries.len() - 1
        });
        let entry = &mut entries[slot];
        entry.first_seen = entry.first_seen.min(indexed.index);
        entry.statements.push(indexed);
    }
    for entry in &mut entries {
        entry.statements.sort_by_key(|statement| statement.index);
    }
    entries
}

fn resolve_severity(entry: &SubjectEntry<'_>) -> (Option<Severity>, Option<String>) {
    let mut severity: Option<Severity> = None;
    let mut kind: Option<String> = None;
    for statement in &entry.statements {
        let triple = statement.triple;
        if triple.predicate.as_iri() != Some(RDF_TYPE) {
            continue;
        }
        let Some(class_iri) = triple.object.as_iri() else {
            continue;
        };
        let Some(class) = vocab::diagnostic_class(class_iri) else {
            trace!(subject = %entry.subject, class = class_iri, "ignoring unknown class");
            continue;
        };
        severity = Some(match severity {
            Some(current) => current.most_severe(class.severity),
            None => class.severity,
        });
        if class.is_subclass && kind.is_none() {
            kind = Some(vocab::local_name(class.iri).to_string());
        }
    }
    (severity, kind)
}

fn resolve_message(entry: &SubjectEntry<'_>) -> Option<String> {
    entry.statements.iter().find_map(|statement| {
        let triple = statement.triple;
        if triple.predicate.as_iri() != Some(DC_DESCRIPTION) {
            return None;
        }
        let text = triple.object.as_literal()?.lexical.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}

fn collect_context(
    entry: &SubjectEntry<'_>,
    lookup: &HashMap<&Term, &SubjectEntry<'_>>,
) -> Vec<ContextField> {
    let mut fields = Vec::new();
    for statement in &entry.statements {
        let triple = statement.triple;
        let Some(key) = triple.predicate.as_iri().and_then(vocab::context_key) else {
            continue;
        };
        if key != ContextKey::Context {
            fields.push(ContextField::new(key, triple.object.display_value()));
            continue;
        }
        if matches!(triple.object, Term::Iri(_) | Term::Literal(_)) {
            fields.push(ContextField::new(key, triple.object.display_value()));
        }
        if triple.object == *entry.subject {
            continue;
        }
        if let Some(target) = lookup.get(&triple.object) {
            inline_target(target, &mut fields);
        }
    }
    fields
}

/// Pull the context predicates of a referenced node into the record.
/// Only one hop is followed.
fn inline_target(target: &SubjectEntry<'_>, fields: &mut Vec<ContextField>) {
    for statement in &target.statements {
        let triple = statement.triple;
        match triple.predicate.as_iri().and_then(vocab::context_key) {
            Some(ContextKey::Context) | None => {}
            Some(key) => fields.push(ContextField::new(key, triple.object.display_value())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfv_model::Literal;
    use rdfv_model::vocab::{PTR_LINE_NUMBER, RDFA_CONTEXT, RDFA_ERROR};

    fn iri(value: &str) -> Term {
        Term::iri(value)
    }

    #[test]
    fn first_seen_uses_earliest_statement() {
        let mut graph = Graph::new();
        graph.add(Term::blank("a"), iri(DC_DESCRIPTION), Term::literal("first"));
        graph.add(Term::blank("b"), iri(DC_DESCRIPTION), Term::literal("second"));
        graph.add(Term::blank("a"), iri(RDF_TYPE), iri(RDFA_ERROR));
        let records = extract_diagnostics(&graph);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_seen, 0);
        assert_eq!(records[0].severity, Severity::Error);
        assert_eq!(records[1].first_seen, 1);
        assert_eq!(records[1].severity, Severity::Info);
    }

    #[test]
    fn non_literal_description_is_not_a_message() {
        let mut graph = Graph::new();
        graph.add(Term::blank("a"), iri(RDF_TYPE), iri(RDFA_ERROR));
        graph.add(Term::blank("a"), iri(DC_DESCRIPTION), iri("http://example.org/msg"));
        assert!(extract_diagnostics(&graph).is_empty());
    }

    #[test]
    fn self_reference_does_not_loop() {
        let mut graph = Graph::new();
        graph.add(Term::blank("a"), iri(DC_DESCRIPTION), Term::literal("loop"));
        graph.add(Term::blank("a"), iri(RDFA_CONTEXT), Term::blank("a"));
        graph.add(
            Term::blank("a"),
            iri(PTR_LINE_NUMBER),
            Term::Literal(Literal::typed("3", "http://www.w3.org/2001/XMLSchema#integer")),
        );
        let records = extract_diagnostics(&graph);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].context, vec![ContextField::new(ContextKey::Line, "3")]);
    }
}
