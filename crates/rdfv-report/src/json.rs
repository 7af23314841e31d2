//! JSON rendering of report documents and failure reports.

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde::Serialize;

use rdfv_model::{ContextField, DiagnosticSummary, Severity};

use crate::document::{DataRegion, ReportDocument};
use crate::error::Result;
use crate::failure::{FailureReport, RequestDetails};

pub const REPORT_SCHEMA: &str = "rdfv.validation-report";
pub const FAILURE_SCHEMA: &str = "rdfv.failure-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    source: &'a str,
    summary: DiagnosticSummary,
    groups: Vec<GroupJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<DataJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_error: Option<String>,
}

#[derive(Serialize)]
struct GroupJson<'a> {
    severity: Severity,
    count: usize,
    kinds: BTreeMap<String, usize>,
    messages: Vec<MessageJson<'a>>,
}

#[derive(Serialize)]
struct MessageJson<'a> {
    subject: String,
    kind: Option<&'a str>,
    message: &'a str,
    context: &'a [ContextField],
}

#[derive(Serialize)]
struct DataJson<'a> {
    format: &'static str,
    encoding: String,
    lossy: bool,
    text: &'a str,
}

#[derive(Serialize)]
struct FailurePayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    error_chain: &'a [String],
    request: &'a RequestDetails,
    media_type: Option<&'a str>,
}

/// Render a report as pretty-printed JSON with a trailing newline.
pub fn render_json(document: &ReportDocument) -> Result<String> {
    let (data, data_error) = match document.data() {
        DataRegion::Serialized(data) => (
            Some(DataJson {
                format: data.format.label(),
                encoding: data.encoding.to_string(),
                lossy: data.lossy,
                text: data.text(),
            }),
            None,
        ),
        DataRegion::Unavailable(error) => (None, Some(error.to_string())),
    };
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: document
            .generated_at()
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        source: document.source(),
        summary: document.summary(),
        groups: document
            .groups()
            .iter()
            .map(|group| GroupJson {
                severity: group.severity,
                count: group.len(),
                kinds: group.kind_counts(),
                messages: group
                    .records
                    .iter()
                    .map(|record| MessageJson {
                        subject: record.subject.display_value(),
                        kind: record.kind.as_deref(),
                        message: &record.message,
                        context: &record.context,
                    })
                    .collect(),
            })
            .collect(),
        data,
        data_error,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    Ok(format!("{json}\n"))
}

/// Render a failure report as JSON.
pub fn render_failure_json(report: &FailureReport) -> Result<String> {
    let payload = FailurePayload {
        schema: FAILURE_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: report
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        error_chain: &report.error_chain,
        request: &report.request,
        media_type: report.media_type.as_deref(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    Ok(format!("{json}\n"))
}
