mod csv;
mod junit;

pub use self::csv::CsvLoader;
pub use junit::JunitLoader;

use anyhow::Result;

use crate::format::ReportFormat;
use crate::ReportRow;

/// A loader to read a specific report format and transform it into table rows
pub trait ReportLoader {
    fn load(text: &str) -> Result<Vec<ReportRow>>;
}

/// Loads a report of an already resolved format
pub fn load_report(format: ReportFormat, text: &str) -> Result<Vec<ReportRow>> {
    match format {
        ReportFormat::Junit => JunitLoader::load(text),
        ReportFormat::Csv => CsvLoader::load(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        let rows = load_report(ReportFormat::Csv, "t1,PASS\n").unwrap();
        assert_eq!(rows, vec![ReportRow::Raw(vec!["t1".into(), "PASS".into()])]);

        let rows = load_report(
            ReportFormat::Junit,
            r#"<?xml version="1.0"?><testsuite><testcase name="t1"><passed/></testcase></testsuite>"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
