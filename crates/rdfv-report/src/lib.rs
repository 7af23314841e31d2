//! Report assembly and rendering for RDFa validation runs.
//!
//! - [`serialize_graph`]: default graph to N-Triples or Turtle text
//! - [`ReportBuilder`] / [`assemble_report`]: diagnostics plus data into a [`ReportDocument`]
//! - [`render_html`] / [`render_json`]: presentation of a finished document
//! - [`FailureReport`]: what the caller renders when extraction itself failed

mod common;
mod document;
mod error;
mod failure;
mod html;
mod json;
mod ntriples;
mod serialize;
mod turtle;

pub use document::{
    DataRegion, MessageRegion, ReportBuilder, ReportDocument, ReportEntry, assemble_report,
};
pub use error::{RenderError, Result, SerializationError, TermPosition};
pub use failure::{FailureReport, RequestDetails, render_failure_html};
pub use html::render_html;
pub use json::{
    FAILURE_SCHEMA, REPORT_SCHEMA, REPORT_SCHEMA_VERSION, render_failure_json, render_json,
};
pub use serialize::{SerializedData, serialize_graph};
