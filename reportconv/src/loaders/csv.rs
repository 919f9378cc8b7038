//! CSV reports, rows passed through as-is

use super::ReportLoader;
use crate::ReportRow;

use anyhow::{Context, Result};
use log::*;

/// Fields that cause a row to be left out of the table.
/// 'testname' marks the header row.
const DROP_FIELDS: [&str; 2] = ["SKIP", "testname"];

/// Reads CSV rows without a header, any column count.
///
/// Blank lines are skipped by the reader, so they never show up as empty
/// table rows.
pub struct CsvLoader {}

impl ReportLoader for CsvLoader {
    fn load(text: &str) -> Result<Vec<ReportRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = vec![];
        for (idx, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("Cannot parse CSV row {}", idx + 1))?;
            if record.iter().any(|f| DROP_FIELDS.contains(&f)) {
                debug!("Dropping row: {:?}", record);
                continue;
            }
            rows.push(ReportRow::Raw(record.iter().map(str::to_string).collect()));
        }
        Ok(rows)
    }
}
