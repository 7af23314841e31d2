//! Property tests for record ordering.

use proptest::prelude::*;

use rdfv_model::vocab::{DC_DESCRIPTION, RDF_TYPE, RDFA_ERROR, RDFA_INFO, RDFA_WARNING};
use rdfv_model::{Graph, Severity, Term};
use rdfv_validate::{extract_diagnostics, group_by_severity};

/// (severity class: 0..3 known, 3 = untyped; has a message)
fn build_graph(layout: &[(u8, bool)]) -> Graph {
    let mut graph = Graph::new();
    for (idx, (class, has_message)) in layout.iter().enumerate() {
        let subject = Term::blank(format!("d{idx}"));
        let class_iri = match class {
            0 => Some(RDFA_ERROR),
            1 => Some(RDFA_WARNING),
            2 => Some(RDFA_INFO),
            _ => None,
        };
        if let Some(class_iri) = class_iri {
            graph.add(subject.clone(), Term::iri(RDF_TYPE), Term::iri(class_iri));
        }
        if *has_message {
            graph.add(subject, Term::iri(DC_DESCRIPTION), Term::literal(format!("m{idx}")));
        }
    }
    graph
}

fn expected_severity(class: u8) -> Severity {
    match class {
        0 => Severity::Error,
        1 => Severity::Warning,
        _ => Severity::Info,
    }
}

proptest! {
    #[test]
    fn groups_are_in_precedence_order(layout in prop::collection::vec((0u8..4, any::<bool>()), 0..40)) {
        let groups = group_by_severity(extract_diagnostics(&build_graph(&layout)));
        let severities: Vec<Severity> = groups.iter().map(|group| group.severity).collect();
        let mut sorted = severities.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(&severities, &sorted);
        prop_assert!(groups.iter().all(|group| !group.records.is_empty()));
        for group in &groups {
            prop_assert!(group.records.iter().all(|record| record.severity == group.severity));
        }
    }

    #[test]
    fn order_within_severity_is_first_appearance(layout in prop::collection::vec((0u8..4, any::<bool>()), 0..40)) {
        let groups = group_by_severity(extract_diagnostics(&build_graph(&layout)));
        for group in &groups {
            let expected: Vec<String> = layout
                .iter()
                .enumerate()
                .filter(|(_, (class, has_message))| *has_message && expected_severity(*class) == group.severity)
                .map(|(idx, _)| format!("m{idx}"))
                .collect();
            let actual: Vec<String> = group.records.iter().map(|record| record.message.clone()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn extraction_is_idempotent_and_drops_messageless(layout in prop::collection::vec((0u8..4, any::<bool>()), 0..40)) {
        let graph = build_graph(&layout);
        let first = extract_diagnostics(&graph);
        let second = extract_diagnostics(&graph);
        prop_assert_eq!(&first, &second);
        let with_message = layout.iter().filter(|(_, has_message)| *has_message).count();
        prop_assert_eq!(first.len(), with_message);
    }
}
