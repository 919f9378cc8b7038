//! Report format detection

use std::path::Path;

use strum::Display;

/// Supported input report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, clap::ValueEnum)]
pub enum ReportFormat {
    /// JUnit-style XML
    #[strum(to_string = "JUnit XML")]
    Junit,
    /// Comma-separated values
    #[strum(to_string = "CSV")]
    Csv,
}

impl ReportFormat {
    /// Sniffs the format from the first line of the file and its name.
    /// Returns None if neither matches.
    pub fn detect(source: &Path, first_line: &str) -> Option<Self> {
        if first_line.starts_with("<?xml") {
            return Some(Self::Junit);
        }
        // Plain suffix match on the name, not an extension check
        if source.to_string_lossy().ends_with("csv") {
            return Some(Self::Csv);
        }
        None
    }
}

/// Gets the first line of a text, without the line terminator
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_xml_by_content() {
        assert_eq!(
            ReportFormat::detect(Path::new("report.txt"), "<?xml version=\"1.0\"?>"),
            Some(ReportFormat::Junit)
        );
        // Content wins over the file name
        assert_eq!(
            ReportFormat::detect(Path::new("report.csv"), "<?xml version=\"1.0\"?>"),
            Some(ReportFormat::Junit)
        );
    }

    #[test]
    fn detect_csv_by_name() {
        assert_eq!(
            ReportFormat::detect(Path::new("out/report.csv"), "testname,result"),
            Some(ReportFormat::Csv)
        );
        assert_eq!(
            ReportFormat::detect(Path::new("reportcsv"), "a,b"),
            Some(ReportFormat::Csv)
        );
    }

    #[test]
    fn detect_unknown() {
        assert_eq!(ReportFormat::detect(Path::new("report.txt"), "hello"), None);
        assert_eq!(ReportFormat::detect(Path::new("report.CSV"), "a,b"), None);
        // Leading whitespace defeats the XML sniff
        assert_eq!(
            ReportFormat::detect(Path::new("report.xml"), " <?xml version=\"1.0\"?>"),
            None
        );
    }

    #[test]
    fn first_line_of_text() {
        assert_eq!(first_line("one\r\ntwo\n"), "one");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line(""), "");
    }
}
