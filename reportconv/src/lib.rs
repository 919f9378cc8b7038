pub mod convert;
pub mod error;
pub mod format;
pub mod loaders;
pub mod markdown;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Outcome of a single test, as reported by the source file
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TestResult {
    #[strum(to_string = "PASS")]
    Pass,
    #[strum(to_string = "FAIL")]
    Fail,
    #[strum(to_string = "SKIP")]
    Skip,
    /// Outcome element was not one we know about
    #[strum(to_string = "??")]
    Unknown,
}

impl TestResult {
    /// Maps a JUnit outcome element tag to a result
    pub fn from_outcome_tag(tag: &str) -> Self {
        match tag {
            "failure" => Self::Fail,
            "skipped" => Self::Skip,
            "passed" => Self::Pass,
            _ => Self::Unknown,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub name: String,
    pub result: TestResult,
}

/// A single row of the output table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    /// Classified test from a structured (JUnit) report
    Record(TestRecord),
    /// CSV row, passed through as parsed. Column count is not checked.
    Raw(Vec<String>),
}

impl ReportRow {
    /// Gets the table cells for this row
    pub fn cells(&self) -> Vec<String> {
        match self {
            Self::Record(r) => vec![r.name.clone(), r.result.to_string()],
            Self::Raw(fields) => fields.clone(),
        }
    }
}

impl From<TestRecord> for ReportRow {
    fn from(value: TestRecord) -> Self {
        Self::Record(value)
    }
}

/// The Markdown output document
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub info: Vec<String>,
    pub rows: Vec<ReportRow>,
}

/// Row counts of a converted report
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub passed: usize,
    pub failed: usize,
    pub unknown: usize,
    pub raw: usize,
}

impl ReportSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            match row {
                ReportRow::Record(r) => match r.result {
                    TestResult::Pass => summary.passed += 1,
                    TestResult::Fail => summary.failed += 1,
                    // Never stored, but count it as unknown rather than lose it
                    TestResult::Unknown | TestResult::Skip => summary.unknown += 1,
                },
                ReportRow::Raw(_) => summary.raw += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.unknown + self.raw
    }
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows ({} passed, {} failed, {} unknown, {} unclassified)",
            self.total(),
            self.passed,
            self.failed,
            self.unknown,
            self.raw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_tags() {
        assert_eq!(TestResult::from_outcome_tag("failure"), TestResult::Fail);
        assert_eq!(TestResult::from_outcome_tag("skipped"), TestResult::Skip);
        assert_eq!(TestResult::from_outcome_tag("passed"), TestResult::Pass);
        assert_eq!(TestResult::from_outcome_tag("error"), TestResult::Unknown);
        assert_eq!(TestResult::from_outcome_tag("system-out"), TestResult::Unknown);
    }

    #[test]
    fn result_strings() {
        assert_eq!(TestResult::Pass.to_string(), "PASS");
        assert_eq!(TestResult::Fail.to_string(), "FAIL");
        assert_eq!(TestResult::Unknown.to_string(), "??");
    }

    #[test]
    fn row_cells() {
        let rec = ReportRow::from(TestRecord {
            name: "t1".to_string(),
            result: TestResult::Unknown,
        });
        assert_eq!(rec.cells(), vec!["t1", "??"]);

        let raw = ReportRow::Raw(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(raw.cells(), vec!["a", "b", "c"]);
    }

    #[test]
    fn summary_counts() {
        let rows = vec![
            ReportRow::from(TestRecord {
                name: "a".into(),
                result: TestResult::Pass,
            }),
            ReportRow::from(TestRecord {
                name: "b".into(),
                result: TestResult::Fail,
            }),
            ReportRow::from(TestRecord {
                name: "c".into(),
                result: TestResult::Pass,
            }),
            ReportRow::Raw(vec!["d".into(), "PASS".into()]),
        ];
        let summary = ReportSummary::from_rows(&rows);
        assert_eq!(
            summary,
            ReportSummary {
                passed: 2,
                failed: 1,
                unknown: 0,
                raw: 1
            }
        );
        assert_eq!(summary.total(), 4);
    }
}
