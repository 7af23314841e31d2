//! Core types for the RDFa validation report engine.
//!
//! - [`graph`]: terms, triples and the insertion-indexed graph store
//! - [`vocab`]: the processor-graph diagnostic vocabulary
//! - [`diagnostic`]: severities, records, groups and summaries
//! - [`options`]: request and option types handed to the collaborator

pub mod diagnostic;
pub mod error;
pub mod graph;
pub mod options;
pub mod vocab;

pub use diagnostic::{
    ContextField, ContextKey, DiagnosticGroup, DiagnosticRecord, DiagnosticSummary, Severity,
};
pub use error::{ModelError, Result};
pub use graph::{Graph, IndexedTriple, Literal, Term, Triple};
pub use options::{DataFormat, DocumentSource, ExtractionRequest, HostLanguage, ValidatorOptions};
