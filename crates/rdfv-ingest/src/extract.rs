//! The extraction collaborator seam.
//!
//! Turning a document into a default graph and a processor graph is the job
//! of an external extractor. The report engine only sees its output, through
//! [`GraphExtractor`].

use std::path::PathBuf;

use tracing::{debug, info_span};

use rdfv_model::{ExtractionRequest, Graph};

use crate::error::Result;
use crate::ntriples::read_ntriples;

/// The two graphs produced by one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractedGraphs {
    /// Extracted data.
    pub default_graph: Graph,
    /// Diagnostics raised while extracting.
    pub processor_graph: Graph,
}

/// An extraction process that turns a document into graphs.
///
/// Implementations are synchronous and may be slow. Failures are reported as
/// errors; the caller turns them into a failure report.
pub trait GraphExtractor {
    fn extract(&self, request: &ExtractionRequest) -> Result<ExtractedGraphs>;
}

/// Collaborator backed by N-Triples dumps of a previous extraction run.
#[derive(Debug, Clone)]
pub struct DumpExtractor {
    processor_graph: PathBuf,
    default_graph: PathBuf,
}

impl DumpExtractor {
    pub fn new(processor_graph: impl Into<PathBuf>, default_graph: impl Into<PathBuf>) -> Self {
        Self {
            processor_graph: processor_graph.into(),
            default_graph: default_graph.into(),
        }
    }
}

impl GraphExtractor for DumpExtractor {
    fn extract(&self, request: &ExtractionRequest) -> Result<ExtractedGraphs> {
        let span = info_span!("extract", source = %request.source.label());
        let _guard = span.enter();
        debug!(
            base = %request.base,
            media_type = request.options.media_type().unwrap_or("sniffed"),
            rdfa_lite = request.options.rdfa_lite,
            embedded_rdf = request.options.embedded_rdf,
            vocab_expansion = request.options.vocab_expansion,
            "reading extraction dumps"
        );
        let processor_graph = read_ntriples(&self.processor_graph)?;
        let default_graph = read_ntriples(&self.default_graph)?;
        Ok(ExtractedGraphs {
            default_graph,
            processor_graph,
        })
    }
}
