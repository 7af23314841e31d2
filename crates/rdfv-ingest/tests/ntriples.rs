//! Integration tests for the N-Triples reader and the dump extractor.

use std::fs;

use rdfv_ingest::{DumpExtractor, GraphExtractor, IngestError, parse_ntriples, read_ntriples};
use rdfv_model::{DocumentSource, ExtractionRequest, Literal, Term, ValidatorOptions};

#[test]
fn parses_terms_and_skips_comments() {
    let text = r#"# processor graph
_:d1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/ns/rdfa#Error> .

_:d1 <http://purl.org/dc/terms/description> "Bad CURIE" .
_:d1 <http://purl.org/dc/terms/date> "2013-03-18T12:28:28"^^<http://www.w3.org/2001/XMLSchema#dateTime> .
<http://example.org/a> <http://example.org/label> "chat"@fr . # trailing comment
"#;
    let graph = parse_ntriples(text).expect("parse");
    assert_eq!(graph.len(), 4);
    let triples: Vec<_> = graph.iter().collect();
    assert_eq!(triples[0].subject, Term::blank("d1"));
    assert_eq!(triples[1].object, Term::literal("Bad CURIE"));
    assert_eq!(
        triples[2].object,
        Term::Literal(Literal::typed(
            "2013-03-18T12:28:28",
            "http://www.w3.org/2001/XMLSchema#dateTime"
        ))
    );
    assert_eq!(triples[3].object, Term::Literal(Literal::lang("chat", "fr")));
}

#[test]
fn decodes_string_escapes() {
    let text = r#"_:a <http://example.org/p> "line\none \"quoted\" tab\t é \U0001F600" ."#;
    let graph = parse_ntriples(text).expect("parse");
    let triple = graph.iter().next().expect("one triple");
    assert_eq!(
        triple.object,
        Term::literal("line\none \"quoted\" tab\t é 😀")
    );
}

#[test]
fn blank_node_followed_by_terminator() {
    let graph = parse_ntriples("<http://example.org/s> <http://example.org/p> _:b1.").expect("parse");
    let triple = graph.iter().next().expect("one triple");
    assert_eq!(triple.object, Term::blank("b1"));
}

#[test]
fn duplicate_lines_collapse() {
    let line = "<http://example.org/s> <http://example.org/p> \"v\" .\n";
    let graph = parse_ntriples(&line.repeat(3)).expect("parse");
    assert_eq!(graph.len(), 1);
}

#[test]
fn reports_line_numbers() {
    let text = "<http://example.org/s> <http://example.org/p> \"v\" .\n\"literal\" <http://example.org/p> \"v\" .\n";
    match parse_ntriples(text) {
        Err(IngestError::Syntax { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("subject"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn rejects_missing_terminator_and_trailing_content() {
    assert!(parse_ntriples("<http://a> <http://b> <http://c>").is_err());
    assert!(parse_ntriples("<http://a> <http://b> <http://c> . extra").is_err());
    assert!(parse_ntriples("<http://a> _:p <http://c> .").is_err());
    assert!(parse_ntriples("<http://a b> <http://b> <http://c> .").is_err());
}

#[test]
fn rejects_signed_or_short_unicode_escapes() {
    for text in [
        r#"<http://a> <http://b> "\u+041" ."#,
        r#"<http://a> <http://b> "\U+0000041" ."#,
        r#"<http://a\u-041> <http://b> <http://c> ."#,
        r#"<http://a> <http://b> "\u00G1" ."#,
    ] {
        match parse_ntriples(text) {
            Err(IngestError::Syntax { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected syntax error for {text}, got {other:?}"),
        }
    }
    let graph = parse_ntriples(r#"<http://a> <http://b> "\u0041" ."#).unwrap();
    assert_eq!(graph.len(), 1);
}

#[test]
fn reads_latin1_dump_through_normalization() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.nt");
    fs::write(&path, b"<http://example.org/s> <http://example.org/p> \"caf\xE9\" .\n").expect("write");
    let graph = read_ntriples(&path).expect("read");
    let triple = graph.iter().next().expect("one triple");
    assert_eq!(triple.object, Term::literal("café"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = read_ntriples(&dir.path().join("absent.nt")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn dump_extractor_loads_both_graphs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let processor = dir.path().join("processor.nt");
    let data = dir.path().join("data.nt");
    fs::write(
        &processor,
        "_:d <http://purl.org/dc/terms/description> \"Deprecated attribute\" .\n",
    )
    .expect("write processor graph");
    fs::write(&data, "").expect("write data graph");

    let extractor = DumpExtractor::new(&processor, &data);
    let request = ExtractionRequest::new(
        DocumentSource::Uri("http://example.org/doc.html".to_string()),
        ValidatorOptions::default(),
    );
    let graphs = extractor.extract(&request).expect("extract");
    assert_eq!(graphs.processor_graph.len(), 1);
    assert!(graphs.default_graph.is_empty());
}

#[test]
fn dump_extractor_surfaces_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let processor = dir.path().join("processor.nt");
    fs::write(&processor, "not n-triples\n").expect("write");
    let extractor = DumpExtractor::new(&processor, dir.path().join("data.nt"));
    let request = ExtractionRequest::new(DocumentSource::Text("<p/>".into()), ValidatorOptions::default());
    let err = extractor.extract(&request).unwrap_err();
    assert!(matches!(err, IngestError::Parse { .. }));
    assert!(err.to_string().contains("processor.nt"));
}
