use thiserror::Error;

/// Structural problems in a JUnit report. These abort the conversion.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("Expected root element 'testsuite', found '{0}'")]
    UnexpectedRoot(String),

    #[error("Expected 'testcase' element in testsuite, found '{0}'")]
    UnexpectedChild(String),

    #[error("Testcase is missing the 'name' attribute")]
    MissingName,

    /// Testcase has no child element to take the outcome from
    #[error("Testcase '{0}' has no outcome element")]
    MissingOutcome(String),

    #[error("Document has no root element")]
    EmptyDocument,

    #[error("Unexpected content before the root element")]
    LeadingContent,

    #[error("Unexpected content after the root element")]
    TrailingContent,

    #[error("Document ended inside an open element")]
    Unterminated,
}
