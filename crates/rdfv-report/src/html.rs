//! HTML rendering of a report document.

use std::io::Write;

use quick_xml::Writer;

use rdfv_model::DiagnosticRecord;

use crate::common::{
    empty_element, end_element, finish_page, new_page_writer, start_element, write_page_end,
    write_page_head, write_text_element, write_text_element_with_attrs,
};
use crate::document::{DataRegion, ReportDocument};
use crate::error::Result;

const PAGE_TITLE: &str = "RDFa 1.1 Validator results";

/// Render a report as a standalone HTML page.
///
/// The `Message` container is written even when there are no diagnostics.
pub fn render_html(document: &ReportDocument) -> Result<String> {
    let mut writer = new_page_writer()?;
    write_page_head(&mut writer, PAGE_TITLE)?;
    write_text_element_with_attrs(
        &mut writer,
        "h1",
        &[("id", "title"), ("class", "title")],
        "RDFa Validation results",
    )?;
    if !document.source().is_empty() {
        write_text_element_with_attrs(
            &mut writer,
            "p",
            &[("class", "source")],
            &format!("Source: {}", document.source()),
        )?;
    }

    write_text_element(&mut writer, "h2", "Validator messages")?;
    start_element(&mut writer, "div", &[("id", "Message")])?;
    for record in document.messages().records() {
        write_record(&mut writer, record)?;
    }
    end_element(&mut writer, "div")?;

    write_text_element(
        &mut writer,
        "h2",
        &format!(
            "Generated RDF content in {} format",
            document.data_format().label()
        ),
    )?;
    start_element(&mut writer, "div", &[("id", "data")])?;
    match document.data() {
        DataRegion::Serialized(data) => {
            write_text_element_with_attrs(&mut writer, "pre", &[("id", "output")], data.text())?;
        }
        DataRegion::Unavailable(error) => {
            write_text_element_with_attrs(
                &mut writer,
                "pre",
                &[("id", "output"), ("class", "error")],
                &format!("The generated data could not be serialized: {error}"),
            )?;
        }
    }
    end_element(&mut writer, "div")?;

    empty_element(&mut writer, "hr", &[])?;
    write_text_element(
        &mut writer,
        "address",
        &format!(
            "Generated {}",
            document.generated_at().date_naive().format("%Y-%m-%d")
        ),
    )?;
    write_page_end(&mut writer)?;
    finish_page(writer)
}

fn write_record<W: Write>(writer: &mut Writer<W>, record: &DiagnosticRecord) -> Result<()> {
    let label = record.severity.label();
    write_text_element_with_attrs(
        writer,
        "p",
        &[("class", label)],
        &format!("{label}: {}", record.message),
    )?;
    if record.context.is_empty() {
        return Ok(());
    }
    start_element(writer, "ul", &[("class", "context")])?;
    for field in &record.context {
        write_text_element(writer, "li", &format!("{}: {}", field.key, field.value))?;
    }
    end_element(writer, "ul")
}
