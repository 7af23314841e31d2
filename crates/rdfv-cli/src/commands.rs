use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::debug;

use rdfv_cli::config::{ConfigOverrides, ReportConfig, ReportFormat};
use rdfv_cli::pipeline::{ValidationOutcome, run_validation, write_output};
use rdfv_ingest::{DumpExtractor, normalize_text};
use rdfv_model::vocab::{CONTEXT_PREDICATES, DIAGNOSTIC_CLASSES, local_name};
use rdfv_model::{DocumentSource, ExtractionRequest};

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;

/// A finished `report` run.
pub struct ReportRun {
    pub outcome: ValidationOutcome,
    pub format: ReportFormat,
    /// Where the report was written; `None` for stdout.
    pub output: Option<PathBuf>,
}

pub fn run_report(args: &ReportArgs) -> Result<ReportRun> {
    let config = ReportConfig::load_optional(args.config.as_deref())?
        .with_overrides(&overrides_from_args(args));
    let source = document_source(args)?;
    let request = ExtractionRequest::new(source, config.options.clone());
    debug!(
        format = %config.format,
        data_format = %request.options.data_format,
        "starting report"
    );

    let extractor = DumpExtractor::new(&args.processor_graph, &args.data_graph);
    let outcome = run_validation(&request, &extractor);
    let rendered = outcome
        .render(config.format)
        .context("render report")?;
    write_output(&rendered, args.output.as_deref())?;

    Ok(ReportRun {
        outcome,
        format: config.format,
        output: args.output.clone(),
    })
}

pub fn run_vocab() -> Result<()> {
    let mut classes = Table::new();
    classes.set_header(vec!["Class", "Severity", "Subclass"]);
    apply_table_style(&mut classes);
    for class in DIAGNOSTIC_CLASSES {
        classes.add_row(vec![
            local_name(class.iri).to_string(),
            class.severity.label().to_string(),
            if class.is_subclass { "yes" } else { "-" }.to_string(),
        ]);
    }
    println!("{classes}");

    let mut predicates = Table::new();
    predicates.set_header(vec!["Predicate", "Context key"]);
    apply_table_style(&mut predicates);
    for (predicate, key) in CONTEXT_PREDICATES {
        predicates.add_row(vec![predicate.to_string(), key.label().to_string()]);
    }
    println!("{predicates}");
    Ok(())
}

fn overrides_from_args(args: &ReportArgs) -> ConfigOverrides {
    ConfigOverrides {
        format: args.format.map(Into::into),
        host_language: args.host_language.map(Into::into),
        rdfa_lite: args.rdfa_lite,
        embedded_rdf: args.embedded_rdf,
        vocab_expansion: args.vocab_expansion,
        data_format: args.data_format.map(Into::into),
    }
}

fn document_source(args: &ReportArgs) -> Result<DocumentSource> {
    if let Some(uri) = &args.uri {
        return Ok(DocumentSource::Uri(uri.clone()));
    }
    if let Some(path) = &args.upload {
        let bytes = fs::read(path).with_context(|| format!("read upload {}", path.display()))?;
        return Ok(DocumentSource::Uploaded {
            name: file_name(path),
            bytes,
        });
    }
    if let Some(path) = &args.text {
        let bytes = fs::read(path).with_context(|| format!("read text {}", path.display()))?;
        return Ok(DocumentSource::Text(normalize_text(&bytes).text));
    }
    anyhow::bail!("one of --uri, --upload or --text is required")
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
