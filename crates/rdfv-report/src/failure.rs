//! Failure reports for runs where the extraction collaborator gave up.
//!
//! These are not report documents: no graphs exist to interpret. The page
//! shows the error chain and echoes the request so the user can retry.

use std::error::Error;

use chrono::{DateTime, Utc};
use serde::Serialize;

use rdfv_model::{DocumentSource, ExtractionRequest};

use crate::common::{
    empty_element, end_element, finish_page, new_page_writer, start_element, write_page_end,
    write_page_head, write_text, write_text_element,
};
use crate::error::Result;

const FAILURE_TITLE: &str = "Error in RDFa validation processing";

/// Request as received, echoed on the failure page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestDetails {
    Uri { uri: String },
    Upload { name: String },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Outermost error first.
    pub error_chain: Vec<String>,
    pub request: RequestDetails,
    pub media_type: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl FailureReport {
    pub fn new(error: &(dyn Error + 'static), request: &ExtractionRequest) -> Self {
        let mut error_chain = vec![error.to_string()];
        let mut source = error.source();
        while let Some(cause) = source {
            error_chain.push(cause.to_string());
            source = cause.source();
        }
        let request_details = match &request.source {
            DocumentSource::Uri(uri) => RequestDetails::Uri { uri: uri.clone() },
            DocumentSource::Uploaded { name, .. } => RequestDetails::Upload { name: name.clone() },
            DocumentSource::Text(text) => RequestDetails::Text { text: text.clone() },
        };
        Self {
            error_chain,
            request: request_details,
            media_type: request.options.media_type().map(str::to_string),
            generated_at: Utc::now(),
        }
    }

    /// Error chain as one block of text, one cause per line.
    pub fn error_text(&self) -> String {
        self.error_chain.join("\n")
    }
}

/// Render the failure page.
pub fn render_failure_html(report: &FailureReport) -> Result<String> {
    let mut writer = new_page_writer()?;
    write_page_head(&mut writer, FAILURE_TITLE)?;
    write_text_element(&mut writer, "h1", FAILURE_TITLE)?;
    write_text_element(&mut writer, "pre", &report.error_text())?;
    write_text_element(&mut writer, "h1", "Validator request details")?;

    start_element(&mut writer, "dl", &[])?;
    match &report.request {
        RequestDetails::Text { text } if !text.trim().is_empty() => {
            write_text_element(&mut writer, "dt", "Text input:")?;
            start_element(&mut writer, "dd", &[])?;
            for (idx, line) in text.lines().enumerate() {
                if idx > 0 {
                    empty_element(&mut writer, "br", &[])?;
                }
                write_text(&mut writer, line)?;
            }
            end_element(&mut writer, "dd")?;
        }
        RequestDetails::Text { .. } => {}
        RequestDetails::Upload { name } => {
            write_text_element(&mut writer, "dt", "Uploaded file")?;
            write_text_element(&mut writer, "dd", name)?;
        }
        RequestDetails::Uri { uri } => {
            write_text_element(&mut writer, "dt", "URI received:")?;
            write_text_element(&mut writer, "dd", uri)?;
        }
    }
    if let Some(media_type) = &report.media_type {
        write_text_element(&mut writer, "dt", "Media Type:")?;
        write_text_element(&mut writer, "dd", media_type)?;
    }
    end_element(&mut writer, "dl")?;

    write_page_end(&mut writer)?;
    finish_page(writer)
}
