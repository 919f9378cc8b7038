//! JUnit-style XML reports
//!
//! Expected layout:
//! ```xml
//! <testsuite>
//!   <testcase name="..."><passed/></testcase>
//!   <testcase name="..."><failure>...</failure></testcase>
//!   <testcase name="..."><skipped/></testcase>
//! </testsuite>
//! ```
//! Only the first child element of a testcase decides its outcome.

use super::ReportLoader;
use crate::error::ReportError;
use crate::{ReportRow, TestRecord, TestResult};

use anyhow::{bail, Context, Result};
use log::*;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

pub struct JunitLoader {}

/// Testcase that is still open while reading
struct PendingCase {
    name: String,
    outcome: Option<TestResult>,
}

#[derive(Default)]
struct JunitParser {
    rows: Vec<ReportRow>,
    depth: usize,
    root_seen: bool,
    case: Option<PendingCase>,
}

fn tag_name(tag: &BytesStart) -> String {
    String::from_utf8_lossy(tag.name().as_ref()).into_owned()
}

impl JunitParser {
    fn open(&mut self, tag: &BytesStart) -> Result<()> {
        match self.depth {
            0 => {
                if self.root_seen {
                    bail!(ReportError::TrailingContent);
                }
                let name = tag_name(tag);
                if name != "testsuite" {
                    bail!(ReportError::UnexpectedRoot(name));
                }
                self.root_seen = true;
            }
            1 => {
                let name = tag_name(tag);
                if name != "testcase" {
                    bail!(ReportError::UnexpectedChild(name));
                }
                let Some(attr) = tag.try_get_attribute("name")? else {
                    bail!(ReportError::MissingName);
                };
                self.case = Some(PendingCase {
                    name: attr.unescape_value()?.into_owned(),
                    outcome: None,
                });
            }
            2 => {
                if let Some(case) = self.case.as_mut() {
                    if case.outcome.is_none() {
                        case.outcome = Some(TestResult::from_outcome_tag(&tag_name(tag)));
                    }
                }
            }
            _ => (),
        }
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let Some(depth) = self.depth.checked_sub(1) else {
            bail!("Unmatched end tag");
        };
        self.depth = depth;
        if depth != 1 {
            return Ok(());
        }

        let Some(case) = self.case.take() else {
            return Ok(());
        };
        let Some(result) = case.outcome else {
            bail!(ReportError::MissingOutcome(case.name));
        };
        if result == TestResult::Skip {
            debug!("Skipping {}", case.name);
            return Ok(());
        }
        self.rows.push(
            TestRecord {
                name: case.name,
                result,
            }
            .into(),
        );
        Ok(())
    }

    fn finish(self) -> Result<Vec<ReportRow>> {
        if self.depth > 0 {
            bail!(ReportError::Unterminated);
        }
        if !self.root_seen {
            bail!(ReportError::EmptyDocument);
        }
        Ok(self.rows)
    }
}

impl ReportLoader for JunitLoader {
    fn load(text: &str) -> Result<Vec<ReportRow>> {
        let mut reader = Reader::from_str(text);
        reader.trim_text(true);

        let mut parser = JunitParser::default();
        loop {
            let pos = reader.buffer_position();
            let event = reader
                .read_event()
                .with_context(|| format!("Malformed XML near byte {}", pos))?;
            match event {
                Event::Start(tag) => parser.open(&tag)?,
                Event::Empty(tag) => {
                    parser.open(&tag)?;
                    parser.close()?;
                }
                Event::End(_) => parser.close()?,
                // Whitespace-only text never gets here, trim_text drops it
                Event::Text(_) | Event::CData(_) if parser.depth == 0 => {
                    if parser.root_seen {
                        bail!(ReportError::TrailingContent);
                    }
                    bail!(ReportError::LeadingContent);
                }
                Event::Eof => break,
                _ => (),
            }
        }
        parser.finish()
    }
}
