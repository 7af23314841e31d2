//! The report document and its per-request builder.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use rdfv_model::{
    ContextField, DataFormat, DiagnosticGroup, DiagnosticRecord, DiagnosticSummary, Severity,
};

use crate::error::SerializationError;
use crate::serialize::SerializedData;

/// Diagnostics in display order. Always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRegion {
    groups: Vec<DiagnosticGroup>,
}

impl MessageRegion {
    pub fn groups(&self) -> &[DiagnosticGroup] {
        &self.groups
    }

    /// Records across all groups, Error first, then Warning, then Info.
    pub fn records(&self) -> impl Iterator<Item = &DiagnosticRecord> {
        self.groups.iter().flat_map(|group| group.records.iter())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.groups.iter().map(DiagnosticGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of serializing the default graph.
#[derive(Debug)]
pub enum DataRegion {
    Serialized(SerializedData),
    /// Serialization failed; the diagnostics are still reported.
    Unavailable(SerializationError),
}

/// One rendered diagnostic: severity, message and context in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportEntry<'a> {
    pub severity: Severity,
    pub kind: Option<&'a str>,
    pub message: &'a str,
    pub context: &'a [ContextField],
}

/// The assembled report for one request.
#[derive(Debug)]
pub struct ReportDocument {
    source: String,
    generated_at: DateTime<Utc>,
    data_format: DataFormat,
    messages: MessageRegion,
    data: DataRegion,
}

impl ReportDocument {
    /// Label of the validated document: its URI, "uploaded file" or "text input".
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn data_format(&self) -> DataFormat {
        self.data_format
    }

    pub fn messages(&self) -> &MessageRegion {
        &self.messages
    }

    pub fn groups(&self) -> &[DiagnosticGroup] {
        self.messages.groups()
    }

    pub fn entries(&self) -> impl Iterator<Item = ReportEntry<'_>> {
        self.messages.records().map(|record| ReportEntry {
            severity: record.severity,
            kind: record.kind.as_deref(),
            message: &record.message,
            context: &record.context,
        })
    }

    pub fn summary(&self) -> DiagnosticSummary {
        DiagnosticSummary::from_groups(self.messages.groups())
    }

    pub fn data(&self) -> &DataRegion {
        &self.data
    }

    pub fn serialized_data(&self) -> Option<&SerializedData> {
        match &self.data {
            DataRegion::Serialized(data) => Some(data),
            DataRegion::Unavailable(_) => None,
        }
    }

    pub fn data_error(&self) -> Option<&SerializationError> {
        match &self.data {
            DataRegion::Serialized(_) => None,
            DataRegion::Unavailable(error) => Some(error),
        }
    }

    /// The data region failed; only diagnostics are available.
    pub fn is_partial(&self) -> bool {
        self.data_error().is_some()
    }
}

/// Builds a fresh [`ReportDocument`] for each request.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    source: Option<String>,
    generated_at: Option<DateTime<Utc>>,
    data_format: DataFormat,
    groups: Vec<DiagnosticGroup>,
    data: Option<DataRegion>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Notation for the data region when no data is supplied or it failed.
    pub fn with_data_format(mut self, format: DataFormat) -> Self {
        self.data_format = format;
        self
    }

    /// Diagnostic groups. Groups are put in severity precedence order,
    /// groups sharing a severity are merged, and empty groups are dropped.
    pub fn with_groups(mut self, groups: Vec<DiagnosticGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_data(mut self, data: Result<SerializedData, SerializationError>) -> Self {
        self.data = Some(match data {
            Ok(data) => {
                self.data_format = data.format;
                DataRegion::Serialized(data)
            }
            Err(error) => DataRegion::Unavailable(error),
        });
        self
    }

    pub fn build(self) -> ReportDocument {
        let data = self
            .data
            .unwrap_or_else(|| DataRegion::Serialized(SerializedData::empty(self.data_format)));
        if let DataRegion::Unavailable(error) = &data {
            warn!(%error, "data region unavailable, reporting diagnostics only");
        }
        let messages = MessageRegion {
            groups: normalize_groups(self.groups),
        };
        debug!(
            records = messages.len(),
            groups = messages.groups.len(),
            "assembled report"
        );
        ReportDocument {
            source: self.source.unwrap_or_default(),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            data_format: self.data_format,
            messages,
            data,
        }
    }
}

/// Assemble a report from grouped diagnostics and the data serialization outcome.
pub fn assemble_report(
    groups: Vec<DiagnosticGroup>,
    data: Result<SerializedData, SerializationError>,
) -> ReportDocument {
    ReportBuilder::new().with_groups(groups).with_data(data).build()
}

fn normalize_groups(groups: Vec<DiagnosticGroup>) -> Vec<DiagnosticGroup> {
    let mut buckets: [Vec<DiagnosticRecord>; 3] = Default::default();
    for group in groups {
        buckets[group.severity.index()].extend(group.records);
    }
    Severity::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, records)| !records.is_empty())
        .map(|(severity, records)| DiagnosticGroup { severity, records })
        .collect()
}
