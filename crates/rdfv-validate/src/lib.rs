//! Diagnostic interpretation for processor graphs.
//!
//! [`extract_diagnostics`] rebuilds one [`DiagnosticRecord`] per diagnostic
//! subject; [`group_by_severity`] buckets them for display.
//!
//! [`DiagnosticRecord`]: rdfv_model::DiagnosticRecord

mod extract;
mod group;

pub use extract::extract_diagnostics;
pub use group::group_by_severity;

use rdfv_model::{DiagnosticGroup, Graph};

/// Extract and group the diagnostics of a processor graph in one pass.
pub fn interpret_processor_graph(graph: &Graph) -> Vec<DiagnosticGroup> {
    group_by_severity(extract_diagnostics(graph))
}
