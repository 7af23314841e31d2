//! Tests for rdfv-model types.

use rdfv_model::{
    ContextField, ContextKey, DataFormat, DiagnosticGroup, DiagnosticRecord, DiagnosticSummary,
    DocumentSource, ExtractionRequest, HostLanguage, Severity, Term, ValidatorOptions,
};

fn record(severity: Severity, kind: Option<&str>, message: &str, first_seen: usize) -> DiagnosticRecord {
    DiagnosticRecord {
        subject: Term::blank(format!("d{first_seen}")),
        severity,
        kind: kind.map(str::to_string),
        message: message.to_string(),
        context: Vec::new(),
        first_seen,
    }
}

#[test]
fn severity_precedence_is_error_warning_info() {
    let mut severities = vec![Severity::Info, Severity::Error, Severity::Warning];
    severities.sort();
    assert_eq!(severities, Severity::ALL.to_vec());
    assert_eq!(Severity::Info.most_severe(Severity::Error), Severity::Error);
    assert_eq!(Severity::Warning.most_severe(Severity::Info), Severity::Warning);
    for (position, severity) in Severity::ALL.into_iter().enumerate() {
        assert_eq!(severity.index(), position);
    }
}

#[test]
fn context_keys_serialize_as_labels() {
    for key in [
        ContextKey::Date,
        ContextKey::Context,
        ContextKey::XPath,
        ContextKey::Line,
        ContextKey::Column,
        ContextKey::HttpResponse,
        ContextKey::RequestUri,
    ] {
        let json = serde_json::to_string(&key).expect("serialize key");
        assert_eq!(json, format!("\"{}\"", key.label()));
        let back: ContextKey = serde_json::from_str(&json).expect("deserialize key");
        assert_eq!(back, key);
    }
}

#[test]
fn severity_serializes_lowercase() {
    let json = serde_json::to_string(&Severity::Warning).expect("serialize severity");
    assert_eq!(json, "\"warning\"");
}

#[test]
fn summary_counts_groups() {
    let groups = vec![
        DiagnosticGroup {
            severity: Severity::Error,
            records: vec![
                record(Severity::Error, None, "Missing @property", 0),
                record(Severity::Error, None, "Bad CURIE", 3),
            ],
        },
        DiagnosticGroup {
            severity: Severity::Info,
            records: vec![record(Severity::Info, None, "Note", 5)],
        },
    ];
    let summary = DiagnosticSummary::from_groups(&groups);
    assert_eq!(summary.error_count, 2);
    assert_eq!(summary.warning_count, 0);
    assert_eq!(summary.info_count, 1);
    assert_eq!(summary.total, 3);
    assert!(summary.has_errors());
}

#[test]
fn kind_counts_fall_back_to_severity_label() {
    let group = DiagnosticGroup {
        severity: Severity::Warning,
        records: vec![
            record(Severity::Warning, Some("PrefixRedefinition"), "a", 0),
            record(Severity::Warning, None, "b", 1),
            record(Severity::Warning, Some("PrefixRedefinition"), "c", 2),
        ],
    };
    let counts = group.kind_counts();
    assert_eq!(counts.get("PrefixRedefinition"), Some(&2));
    assert_eq!(counts.get("Warning"), Some(&1));
}

#[test]
fn context_value_returns_first_match() {
    let mut rec = record(Severity::Error, None, "Bad CURIE", 0);
    rec.context = vec![
        ContextField::new(ContextKey::Line, "12"),
        ContextField::new(ContextKey::Column, "4"),
        ContextField::new(ContextKey::Line, "13"),
    ];
    assert_eq!(rec.context_value(ContextKey::Line), Some("12"));
    assert_eq!(rec.context_value(ContextKey::XPath), None);
}

#[test]
fn host_language_parsing_falls_back_to_xml() {
    assert_eq!(HostLanguage::from_form_value("XHTML"), HostLanguage::Xhtml);
    assert_eq!(HostLanguage::from_form_value("html"), HostLanguage::Html);
    assert_eq!(HostLanguage::from_form_value(" svg "), HostLanguage::Svg);
    assert_eq!(HostLanguage::from_form_value("atom"), HostLanguage::Atom);
    assert_eq!(HostLanguage::from_form_value("rss"), HostLanguage::Xml);
    assert_eq!(HostLanguage::Html.media_type(), "text/html");
}

#[test]
fn data_format_parses_aliases() {
    assert_eq!("nt".parse::<DataFormat>().unwrap(), DataFormat::NTriples);
    assert_eq!("Turtle".parse::<DataFormat>().unwrap(), DataFormat::Turtle);
    assert!("rdfxml".parse::<DataFormat>().is_err());
}

#[test]
fn options_deserialize_through_lenient_parsers() {
    let options: ValidatorOptions =
        serde_json::from_str(r#"{"host_language": "XHTML", "data_format": "n-triples"}"#)
            .expect("deserialize options");
    assert_eq!(options.host_language, Some(HostLanguage::Xhtml));
    assert_eq!(options.data_format, DataFormat::NTriples);

    let options: ValidatorOptions = serde_json::from_str(r#"{"host_language": "rss"}"#)
        .expect("deserialize options");
    assert_eq!(options.host_language, Some(HostLanguage::Xml));

    let error = serde_json::from_str::<ValidatorOptions>(r#"{"data_format": "rdfxml"}"#)
        .expect_err("unknown format");
    assert!(error.to_string().contains("unknown data format: rdfxml"));

    let json = serde_json::to_string(&ValidatorOptions::new().with_data_format(DataFormat::NTriples))
        .expect("serialize options");
    assert!(json.contains(r#""data_format":"ntriples""#));
}

#[test]
fn request_base_follows_source() {
    let options = ValidatorOptions::new().with_rdfa_lite(true);
    let uri = ExtractionRequest::new(
        DocumentSource::Uri("http://example.org/doc".to_string()),
        options.clone(),
    );
    assert_eq!(uri.base, "http://example.org/doc");
    assert!(uri.options.rdfa_lite);

    let text = ExtractionRequest::new(DocumentSource::Text("<p/>".to_string()), options);
    assert_eq!(text.base, "");
    assert_eq!(text.source.label(), "text input");
}

#[test]
fn options_default_from_empty_json() {
    let options: ValidatorOptions = serde_json::from_str("{}").expect("deserialize options");
    assert_eq!(options, ValidatorOptions::default());
    assert_eq!(options.data_format, DataFormat::Turtle);
    assert!(options.media_type().is_none());
}
