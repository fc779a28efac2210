//! Fixed-width, pipe-delimited table handling for hierarchical utilization
//! reports.
//!
//! A report table looks like:
//!
//! ```text
//! +-------------+--------+------------+-----
//! | top         |  (top) |      1,234 | ...
//! |   u_core    |   core |        567 | ...
//! +-------------+--------+------------+-----
//! ```
//!
//! Nesting depth is the indentation of the instance cell, counted in raw
//! characters including the cell's padding space.

use crate::model::{Instance, UtilizationReport};
use tracing::debug;

/// Minimum number of `|`-separated parts for a line to be a data row:
/// leading empty part, eleven columns, trailing part.
pub const MIN_ROW_PARTS: usize = 13;
/// Minimum trimmed fields once the leading empty part is dropped.
pub const MIN_ROW_FIELDS: usize = 12;

/// A qualifying data row: its raw indentation and parsed cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub indent: usize,
    pub instance: Instance,
}

fn is_border(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 2
        && t.starts_with('+')
        && t.ends_with('+')
        && t.contains('-')
        && t.chars().all(|c| c == '+' || c == '-')
}

/// Text between the first border line and the end of the last occurrence of
/// that same border string, both inclusive. `None` when no border exists.
pub fn table_region(text: &str) -> Option<&str> {
    let border = text.lines().map(str::trim).find(|l| is_border(l))?;
    let start = text.find(border)?;
    let end = text.rfind(border)? + border.len();
    Some(&text[start..end])
}

/// Split one line into a data row, or `None` for separators and rows with
/// too few columns.
pub fn parse_row(line: &str) -> Option<TableRow> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < MIN_ROW_PARTS {
        return None;
    }
    let raw_name = parts[1];
    let indent = raw_name.chars().take_while(|c| c.is_whitespace()).count();
    let fields: Vec<&str> = parts[1..].iter().map(|p| p.trim()).collect();
    if fields.len() < MIN_ROW_FIELDS {
        return None;
    }
    let instance = Instance {
        name: fields[0].to_string(),
        module: fields[1].to_string(),
        total_luts: fields[2].to_string(),
        logic_luts: fields[3].to_string(),
        lutrams: fields[4].to_string(),
        srls: fields[5].to_string(),
        ffs: fields[6].to_string(),
        ramb36: fields[7].to_string(),
        ramb18: fields[8].to_string(),
        uram: fields[9].to_string(),
        dsp_blocks: fields[10].to_string(),
    };
    Some(TableRow { indent, instance })
}

/// All data rows of the table region, in input order. The opening border
/// line is never a row.
pub fn rows(text: &str) -> Vec<TableRow> {
    let Some(region) = table_region(text) else {
        debug!("no table border found; report will be empty");
        return Vec::new();
    };
    region
        .lines()
        .skip(1)
        .filter_map(|line| {
            let row = parse_row(line);
            match &row {
                Some(r) => debug!(instance = %r.instance.name, indent = r.indent, "table row"),
                None => debug!(line, "skipping non-data line"),
            }
            row
        })
        .collect()
}

/// Render a report back into a boxed table, one row per instance in
/// pre-order. Depth `d` is indented `2 * (d - 1) + 1` characters, so parsing
/// the output reproduces the same hierarchy.
pub fn render_table(report: &UtilizationReport) -> String {
    let rows: Vec<[String; 11]> = report
        .iter()
        .map(|(depth, node)| {
            let f = node.instance.fields();
            let mut cells: [String; 11] = Default::default();
            cells[0] = format!("{}{}", " ".repeat(2 * (depth - 1)), f[0].1);
            for (cell, (_, value)) in cells.iter_mut().zip(f.iter()).skip(1) {
                *cell = value.to_string();
            }
            cells
        })
        .collect();

    let mut widths = [0usize; 11];
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let border: String = widths
        .iter()
        .fold(String::from("+"), |acc, w| acc + &"-".repeat(w + 2) + "+");

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push('|');
        for (i, (cell, w)) in row.iter().zip(widths.iter()).enumerate() {
            if i < 2 {
                out.push_str(&format!(" {cell:<w$} |"));
            } else {
                out.push_str(&format!(" {cell:>w$} |"));
            }
        }
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}
