//! One validation run: extraction, interpretation, assembly, rendering.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use rdfv_ingest::GraphExtractor;
use rdfv_model::ExtractionRequest;
use rdfv_report::{
    FailureReport, RenderError, ReportBuilder, ReportDocument, render_failure_html,
    render_failure_json, render_html, render_json, serialize_graph,
};
use rdfv_validate::interpret_processor_graph;

use crate::config::ReportFormat;

/// Exit code for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit code when the report holds Error records or lost its data region.
pub const EXIT_ISSUES: i32 = 1;
/// Exit code for a failure report or a setup error.
pub const EXIT_FAILURE: i32 = 2;

/// What a run produced.
#[derive(Debug)]
pub enum ValidationOutcome {
    Report(ReportDocument),
    /// The extraction collaborator failed; no graphs were interpreted.
    Failure(FailureReport),
}

impl ValidationOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Report(document) if document.summary().has_errors() || document.is_partial() => {
                EXIT_ISSUES
            }
            Self::Report(_) => EXIT_OK,
            Self::Failure(_) => EXIT_FAILURE,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String, RenderError> {
        match (self, format) {
            (Self::Report(document), ReportFormat::Html) => render_html(document),
            (Self::Report(document), ReportFormat::Json) => render_json(document),
            (Self::Failure(report), ReportFormat::Html) => render_failure_html(report),
            (Self::Failure(report), ReportFormat::Json) => render_failure_json(report),
        }
    }
}

/// Run the extractor and assemble a fresh report for `request`.
///
/// Collaborator errors become a [`ValidationOutcome::Failure`]. A data graph
/// that cannot be serialized still yields a report with its diagnostics.
pub fn run_validation(
    request: &ExtractionRequest,
    extractor: &dyn GraphExtractor,
) -> ValidationOutcome {
    let span = info_span!("report", source = %request.source.label());
    let _guard = span.enter();

    let graphs = match extractor.extract(request) {
        Ok(graphs) => graphs,
        Err(err) => {
            error!(error = %err, "extraction failed");
            return ValidationOutcome::Failure(FailureReport::new(&err, request));
        }
    };

    let format = request.options.data_format;
    let groups = interpret_processor_graph(&graphs.processor_graph);
    let data = serialize_graph(&graphs.default_graph, format);
    let document = ReportBuilder::new()
        .with_source(request.source.label())
        .with_data_format(format)
        .with_groups(groups)
        .with_data(data)
        .build();

    let summary = document.summary();
    info!(
        errors = summary.error_count,
        warnings = summary.warning_count,
        info = summary.info_count,
        data_triples = graphs.default_graph.len(),
        partial = document.is_partial(),
        "validation report assembled"
    );
    ValidationOutcome::Report(document)
}

/// Write rendered output to `path`, or stdout when `None`.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("write report to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
