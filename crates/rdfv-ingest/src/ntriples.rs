//! N-Triples reader.
//!
//! Reads the line-oriented dumps an extraction run leaves behind. One triple
//! per line; blank lines and `#` comments are skipped.

use std::fs;
use std::path::Path;

use tracing::debug;

use rdfv_model::{Graph, Literal, Term, Triple};

use crate::encoding::normalize_text;
use crate::error::{IngestError, Result};

/// Read an N-Triples file into a graph.
pub fn read_ntriples(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let normalized = normalize_text(&bytes);
    let graph = parse_ntriples(&normalized.text).map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;
    debug!(
        path = %path.display(),
        triples = graph.len(),
        encoding = %normalized.encoding,
        "loaded graph"
    );
    Ok(graph)
}

/// Parse N-Triples text into a graph.
pub fn parse_ntriples(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut cursor = Cursor::new(line, line_no);
        cursor.skip_ws();
        if cursor.at_end() || cursor.peek() == Some('#') {
            continue;
        }
        let subject = cursor.subject()?;
        cursor.skip_ws();
        let predicate = cursor.predicate()?;
        cursor.skip_ws();
        let object = cursor.object()?;
        cursor.skip_ws();
        cursor.expect('.')?;
        cursor.skip_ws();
        if !cursor.at_end() && cursor.peek() != Some('#') {
            return Err(IngestError::syntax(line_no, "unexpected content after '.'"));
        }
        graph.insert(Triple::new(subject, predicate, object));
    }
    Ok(graph)
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self { text, pos: 0, line }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn next_char(&mut self) -> Result<char> {
        self.bump()
            .ok_or_else(|| IngestError::syntax(self.line, "unexpected end of line"))
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.bump() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(IngestError::syntax(
                self.line,
                format!("expected '{expected}', found '{ch}'"),
            )),
            None => Err(IngestError::syntax(
                self.line,
                format!("expected '{expected}', found end of line"),
            )),
        }
    }

    fn subject(&mut self) -> Result<Term> {
        match self.peek() {
            Some('<') => self.iri(),
            Some('_') => self.blank_node(),
            _ => Err(IngestError::syntax(
                self.line,
                "subject must be an IRI or blank node",
            )),
        }
    }

    fn predicate(&mut self) -> Result<Term> {
        match self.peek() {
            Some('<') => self.iri(),
            _ => Err(IngestError::syntax(self.line, "predicate must be an IRI")),
        }
    }

    fn object(&mut self) -> Result<Term> {
        match self.peek() {
            Some('<') => self.iri(),
            Some('_') => self.blank_node(),
            Some('"') => self.literal(),
            _ => Err(IngestError::syntax(
                self.line,
                "object must be an IRI, blank node or literal",
            )),
        }
    }

    fn iri(&mut self) -> Result<Term> {
        self.expect('<')?;
        let mut iri = String::new();
        loop {
            match self.next_char()? {
                '>' => break,
                '\\' => iri.push(self.unicode_escape()?),
                ch @ (' ' | '<' | '"') => {
                    return Err(IngestError::syntax(
                        self.line,
                        format!("invalid character '{ch}' in IRI"),
                    ));
                }
                ch => iri.push(ch),
            }
        }
        Ok(Term::Iri(iri))
    }

    fn blank_node(&mut self) -> Result<Term> {
        self.expect('_')?;
        self.expect(':')?;
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.') {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
        // A trailing '.' is the statement terminator, not part of the label.
        while self.pos > start && self.text[..self.pos].ends_with('.') {
            self.pos -= 1;
        }
        let label = &self.text[start..self.pos];
        if label.is_empty() {
            return Err(IngestError::syntax(self.line, "empty blank node label"));
        }
        Ok(Term::BlankNode(label.to_string()))
    }

    fn literal(&mut self) -> Result<Term> {
        self.expect('"')?;
        let mut lexical = String::new();
        loop {
            match self.next_char()? {
                '"' => break,
                '\\' => lexical.push(self.string_escape()?),
                ch => lexical.push(ch),
            }
        }
        match self.peek() {
            Some('@') => {
                self.pos += 1;
                let start = self.pos;
                while matches!(self.peek(), Some(ch) if ch.is_ascii_alphanumeric() || ch == '-') {
                    self.pos += 1;
                }
                let language = &self.text[start..self.pos];
                if language.is_empty() {
                    return Err(IngestError::syntax(self.line, "empty language tag"));
                }
                Ok(Term::Literal(Literal::lang(lexical, language)))
            }
            Some('^') => {
                self.pos += 1;
                self.expect('^')?;
                let Term::Iri(datatype) = self.iri()? else {
                    return Err(IngestError::syntax(self.line, "datatype must be an IRI"));
                };
                Ok(Term::Literal(Literal::typed(lexical, datatype)))
            }
            _ => Ok(Term::Literal(Literal::plain(lexical))),
        }
    }

    fn string_escape(&mut self) -> Result<char> {
        if matches!(self.peek(), Some('u' | 'U')) {
            return self.unicode_escape();
        }
        match self.next_char()? {
            't' => Ok('\t'),
            'b' => Ok('\u{8}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            'f' => Ok('\u{c}'),
            '"' => Ok('"'),
            '\'' => Ok('\''),
            '\\' => Ok('\\'),
            other => Err(IngestError::syntax(
                self.line,
                format!("unknown escape '\\{other}'"),
            )),
        }
    }

    fn unicode_escape(&mut self) -> Result<char> {
        let width = match self.next_char()? {
            'u' => 4,
            'U' => 8,
            other => {
                return Err(IngestError::syntax(
                    self.line,
                    format!("unknown escape '\\{other}'"),
                ));
            }
        };
        let mut hex = String::with_capacity(width);
        for _ in 0..width {
            hex.push(self.next_char()?);
        }
        if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(IngestError::syntax(
                self.line,
                format!("invalid escape digits '{hex}'"),
            ));
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| IngestError::syntax(self.line, format!("invalid code point '{hex}'")))
    }
}
