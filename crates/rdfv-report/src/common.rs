//! Shared markup helpers for the HTML renderers.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// Indentation step for rendered pages.
const INDENT: usize = 2;

pub(crate) fn new_page_writer() -> Result<Writer<Vec<u8>>> {
    let mut buffer = Vec::new();
    buffer.write_all(b"<!DOCTYPE html>\n")?;
    Ok(Writer::new_with_indent(buffer, b' ', INDENT))
}

pub(crate) fn finish_page(writer: Writer<Vec<u8>>) -> Result<String> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8(bytes)?)
}

pub(crate) fn start_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<()> {
    let mut start = BytesStart::new(name);
    for attribute in attributes {
        start.push_attribute(*attribute);
    }
    writer.write_event(Event::Start(start))?;
    Ok(())
}

pub(crate) fn end_element<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub(crate) fn empty_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<()> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

pub(crate) fn write_text<W: Write>(writer: &mut Writer<W>, text: &str) -> Result<()> {
    writer.write_event(Event::Text(BytesText::new(text)))?;
    Ok(())
}

pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    write_text_element_with_attrs(writer, name, &[], text)
}

/// Write `<name attrs>text</name>` on one line. A text event is always
/// written, so an empty `<pre>` does not pick up indentation whitespace.
pub(crate) fn write_text_element_with_attrs<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    start_element(writer, name, attributes)?;
    write_text(writer, text)?;
    end_element(writer, name)
}

/// Open `<html>`, write the head with `title`, and open `<body>`.
pub(crate) fn write_page_head<W: Write>(writer: &mut Writer<W>, title: &str) -> Result<()> {
    start_element(writer, "html", &[("lang", "en")])?;
    start_element(writer, "head", &[])?;
    empty_element(writer, "meta", &[("charset", "utf-8")])?;
    write_text_element(writer, "title", title)?;
    end_element(writer, "head")?;
    start_element(writer, "body", &[])
}

/// Close `<body>` and `<html>`.
pub(crate) fn write_page_end<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    end_element(writer, "body")?;
    end_element(writer, "html")
}
