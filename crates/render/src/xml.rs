// ABOUTME: Shared quick-xml writer helpers for the Atom and RSS renderers.
// ABOUTME: Text elements are escaped by the writer; callers pass plain strings.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::RenderError;

/// Writes `<name>text</name>` with the text escaped.
pub(crate) fn text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), RenderError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(RenderError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(RenderError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(RenderError::xml)?;
    Ok(())
}

/// Writes an opening tag for `name`.
pub(crate) fn open<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), RenderError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(RenderError::xml)
}

/// Writes the closing tag for `name`.
pub(crate) fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), RenderError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(RenderError::xml)
}

/// Finishes the document and returns it as a UTF-8 string.
pub(crate) fn into_string(writer: Writer<Vec<u8>>) -> Result<String, RenderError> {
    String::from_utf8(writer.into_inner()).map_err(RenderError::xml)
}
