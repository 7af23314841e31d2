//! N-Triples writer.

use std::io::Write;

use rdfv_model::{Graph, Term, Triple};

use crate::error::{SerializationError, TermPosition};
use crate::serialize::{
    check_blank_label, check_iri, check_position, explicit_datatype, language_tag, push_quoted,
};

/// Write one line per triple. Lines are sorted so the output does not depend
/// on the store's arrival order.
pub(crate) fn write_ntriples<W: Write>(graph: &Graph, out: &mut W) -> Result<(), SerializationError> {
    let mut lines = graph
        .iter()
        .map(triple_line)
        .collect::<Result<Vec<_>, _>>()?;
    lines.sort();
    for line in &lines {
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

fn triple_line(triple: &Triple) -> Result<String, SerializationError> {
    let mut line = String::new();
    push_term(&mut line, &triple.subject, TermPosition::Subject)?;
    line.push(' ');
    push_term(&mut line, &triple.predicate, TermPosition::Predicate)?;
    line.push(' ');
    push_term(&mut line, &triple.object, TermPosition::Object)?;
    line.push_str(" .\n");
    Ok(line)
}

/// Append the canonical N-Triples form of a term.
pub(crate) fn push_term(
    out: &mut String,
    term: &Term,
    position: TermPosition,
) -> Result<(), SerializationError> {
    check_position(term, position)?;
    match term {
        Term::Iri(iri) => push_iri(out, iri)?,
        Term::BlankNode(label) => {
            check_blank_label(label)?;
            out.push_str("_:");
            out.push_str(label);
        }
        Term::Literal(literal) => {
            push_quoted(out, &literal.lexical);
            if let Some(language) = &literal.language {
                out.push('@');
                out.push_str(&language_tag(language)?);
            } else if let Some(datatype) = explicit_datatype(literal) {
                out.push_str("^^");
                push_iri(out, datatype)?;
            }
        }
        // Rejected by check_position.
        Term::Variable(_) => {}
    }
    Ok(())
}

fn push_iri(out: &mut String, iri: &str) -> Result<(), SerializationError> {
    check_iri(iri)?;
    out.push('<');
    out.push_str(iri);
    out.push('>');
    Ok(())
}
