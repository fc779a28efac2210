//! Hierarchical resource-utilization report parsing.
//!
//! Turns the boxed, indentation-nested utilization table emitted by the
//! implementation tools into an instance tree and writes it out as XML
//! (and optionally JSON).

pub mod error;
pub mod hierarchy;
pub mod model;
pub mod table;
pub mod xml;

pub use error::ReportError;
pub use hierarchy::parse_report;
pub use model::{Instance, InstanceNode, UtilizationReport};
pub use table::render_table;
pub use xml::to_xml_string;

use std::fs;
use std::path::Path;

/// Where the report lands when the caller does not say otherwise.
pub const DEFAULT_OUTPUT: &str = "build/utilization_report.xml";

pub fn read_report<P: AsRef<Path>>(path: P) -> Result<UtilizationReport, ReportError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReportError::Read { path: path.to_path_buf(), source })?;
    Ok(parse_report(&text))
}

/// Write the XML rendition. The parent directory must already exist.
pub fn write_xml<P: AsRef<Path>>(report: &UtilizationReport, path: P) -> Result<(), ReportError> {
    let path = path.as_ref();
    let s = to_xml_string(report)?;
    fs::write(path, s).map_err(|source| ReportError::Write { path: path.to_path_buf(), source })
}

pub fn write_json<P: AsRef<Path>>(report: &UtilizationReport, path: P) -> Result<(), ReportError> {
    let path = path.as_ref();
    let s = report.to_json_string()?;
    fs::write(path, s).map_err(|source| ReportError::Write { path: path.to_path_buf(), source })
}
