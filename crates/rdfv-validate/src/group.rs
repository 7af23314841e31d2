//! Severity classification.

use rdfv_model::{DiagnosticGroup, DiagnosticRecord, Severity};

/// Partition records into severity groups.
///
/// Groups come out in display precedence (Error, Warning, Info) and keep
/// the input order within each severity. Severities with no records are
/// left out, so an empty input yields no groups.
pub fn group_by_severity(records: Vec<DiagnosticRecord>) -> Vec<DiagnosticGroup> {
    let mut buckets: [Vec<DiagnosticRecord>; 3] = Default::default();
    for record in records {
        buckets[record.severity.index()].push(record);
    }
    Severity::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, records)| !records.is_empty())
        .map(|(severity, records)| DiagnosticGroup { severity, records })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfv_model::Term;

    fn record(severity: Severity, message: &str, first_seen: usize) -> DiagnosticRecord {
        DiagnosticRecord {
            subject: Term::blank(format!("n{first_seen}")),
            severity,
            kind: None,
            message: message.to_string(),
            context: Vec::new(),
            first_seen,
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_severity(Vec::new()).is_empty());
    }

    #[test]
    fn groups_follow_precedence_and_skip_empty() {
        let groups = group_by_severity(vec![
            record(Severity::Info, "note", 0),
            record(Severity::Error, "broken", 1),
            record(Severity::Info, "another note", 2),
        ]);
        let severities: Vec<Severity> = groups.iter().map(|g| g.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Info]);
        let infos: Vec<&str> = groups[1].records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(infos, vec!["note", "another note"]);
    }
}
