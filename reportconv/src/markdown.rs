//! Markdown rendering of a report document

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::{ReportDocument, ReportRow};

const TABLE_HEADER: [&str; 2] = ["Test", "Result"];

/// Minimum column width, so the separator row stays valid
const MIN_COLUMN_WIDTH: usize = 3;

/// Makes a value safe to put in a table cell. Backslashes go first so
/// the ones added for pipes are not doubled.
fn escape_cell(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('\\', "\\\\")
        .replace('|', "\\|")
}

fn write_row(w: &mut impl Write, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let cell = cells.get(i).map_or("", String::as_str);
            format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width())))
        })
        .join(" | ");
    writeln!(w, "| {} |", line)?;
    Ok(())
}

/// Writes the Test/Result table. Rows wider than two columns widen the
/// table; missing cells are left empty.
pub fn write_table(rows: &[ReportRow], w: &mut impl Write) -> Result<()> {
    let header = TABLE_HEADER.map(String::from);
    let body = rows
        .iter()
        .map(|row| row.cells().iter().map(|c| escape_cell(c)).collect_vec())
        .collect_vec();

    let columns = body
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or_default()
        .max(header.len());
    let mut widths = vec![MIN_COLUMN_WIDTH; columns];
    for cells in std::iter::once(header.as_slice()).chain(body.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.width());
        }
    }

    write_row(w, &header, &widths)?;
    writeln!(
        w,
        "| {} |",
        widths.iter().map(|&width| "-".repeat(width)).join(" | ")
    )?;
    for cells in &body {
        write_row(w, cells, &widths)?;
    }
    Ok(())
}

/// Writes the complete document: title, info lines and the table
pub fn write(doc: &ReportDocument, w: &mut impl Write) -> Result<()> {
    write!(w, "# {}\n\n", doc.title)?;
    for line in &doc.info {
        write!(w, "{}\n\n", line)?;
    }
    write_table(&doc.rows, w)
}

pub fn save_file(doc: &ReportDocument, filename: &Path) -> Result<()> {
    let f = File::create(filename)
        .with_context(|| format!("Cannot create {}", filename.display()))?;
    let mut w = BufWriter::new(f);
    write(doc, &mut w)?;
    w.flush()?;
    Ok(())
}
