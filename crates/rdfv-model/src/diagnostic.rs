use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Term;

/// Diagnostic severity, declared in display precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// All severities in display precedence order.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warning, Severity::Info];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    /// Position in [`Severity::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Return whichever of the two severities is more severe.
    pub fn most_severe(self, other: Severity) -> Severity {
        self.min(other)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of context attached to a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextKey {
    Date,
    Context,
    XPath,
    Line,
    Column,
    #[serde(rename = "http response")]
    HttpResponse,
    #[serde(rename = "request uri")]
    RequestUri,
}

impl ContextKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Context => "context",
            Self::XPath => "xpath",
            Self::Line => "line",
            Self::Column => "column",
            Self::HttpResponse => "http response",
            Self::RequestUri => "request uri",
        }
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labeled piece of context, e.g. `line: 12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextField {
    pub key: ContextKey,
    pub value: String,
}

impl ContextField {
    pub fn new(key: ContextKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// One diagnostic reconstructed from a processor graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Diagnostic subject (usually a blank node).
    pub subject: Term,
    /// Exactly one severity.
    pub severity: Severity,
    /// Local name of the most specific diagnostic class, e.g. `PrefixRedefinition`.
    pub kind: Option<String>,
    /// Non-empty message text.
    pub message: String,
    /// Context fields in insertion order.
    pub context: Vec<ContextField>,
    /// Arrival index of the subject's first statement.
    pub first_seen: usize,
}

impl DiagnosticRecord {
    /// Value of the first context field with the given key.
    pub fn context_value(&self, key: ContextKey) -> Option<&str> {
        self.context
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    /// Secondary grouping key: the kind, or the severity label when absent.
    pub fn kind_label(&self) -> &str {
        self.kind.as_deref().unwrap_or(self.severity.label())
    }
}

/// Records sharing one severity, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticGroup {
    pub severity: Severity,
    pub records: Vec<DiagnosticRecord>,
}

impl DiagnosticGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records by secondary key.
    pub fn kind_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.kind_label().to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Aggregate counts across groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
    pub total: usize,
}

impl DiagnosticSummary {
    pub fn from_groups(groups: &[DiagnosticGroup]) -> Self {
        let mut summary = Self::default();
        for group in groups {
            let count = group.len();
            match group.severity {
                Severity::Error => summary.error_count += count,
                Severity::Warning => summary.warning_count += count,
                Severity::Info => summary.info_count += count,
            }
            summary.total += count;
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
