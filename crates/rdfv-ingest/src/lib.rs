//! Graph ingestion for the RDFa validation report engine.
//!
//! This crate sits on the input boundary:
//!
//! - [`encoding`]: normalizes byte buffers of unknown encoding to UTF-8
//! - [`ntriples`]: reads N-Triples dumps into [`rdfv_model::Graph`]
//! - [`extract`]: the extraction collaborator trait and a dump-backed implementation

pub mod encoding;
pub mod error;
pub mod extract;
pub mod ntriples;

pub use encoding::{NormalizedText, TextEncoding, normalize_strict, normalize_text};
pub use error::{EncodingError, IngestError, Result};
pub use extract::{DumpExtractor, ExtractedGraphs, GraphExtractor};
pub use ntriples::{parse_ntriples, read_ntriples};
