use crate::error::ReportError;
use crate::model::{InstanceNode, UtilizationReport};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

pub const ROOT_ELEMENT: &str = "UtilizationReport";
pub const INSTANCE_ELEMENT: &str = "Instance";

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), ReportError> {
    writer
        .write_event(event)
        .map_err(|e| ReportError::Xml(format!("write error: {e}")))
}

fn write_instance<W: std::io::Write>(writer: &mut Writer<W>, node: &InstanceNode) -> Result<(), ReportError> {
    write_event(writer, Event::Start(BytesStart::new(INSTANCE_ELEMENT)))?;
    for (tag, value) in node.instance.fields() {
        if value.is_empty() {
            write_event(writer, Event::Empty(BytesStart::new(tag)))?;
        } else {
            write_event(writer, Event::Start(BytesStart::new(tag)))?;
            write_event(writer, Event::Text(BytesText::new(value)))?;
            write_event(writer, Event::End(BytesEnd::new(tag)))?;
        }
    }
    for child in &node.children {
        write_instance(writer, child)?;
    }
    write_event(writer, Event::End(BytesEnd::new(INSTANCE_ELEMENT)))
}

/// Serialize the hierarchy as an indented (2 spaces) UTF-8 XML document.
pub fn to_xml_string(report: &UtilizationReport) -> Result<String, ReportError> {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

    write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    if report.is_empty() {
        write_event(&mut writer, Event::Empty(BytesStart::new(ROOT_ELEMENT)))?;
    } else {
        write_event(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
        for node in &report.instances {
            write_instance(&mut writer, node)?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    }

    let mut output = buffer.into_inner();
    output.push(b'\n');
    String::from_utf8(output).map_err(|e| ReportError::Xml(e.to_string()))
}
