//! Report to Markdown conversion

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::*;

use crate::format::{first_line, ReportFormat};
use crate::loaders::load_report;
use crate::{markdown, ReportDocument, ReportSummary};

pub const DEFAULT_TITLE: &str = "results";

/// Settings for a single conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub source: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub info: Vec<String>,
    /// Forces the input format instead of detecting it
    pub format: Option<ReportFormat>,
    /// Also write the converted rows as JSON here
    pub json: Option<PathBuf>,
}

impl ConvertOptions {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            title: DEFAULT_TITLE.to_string(),
            info: vec![],
            format: None,
            json: None,
        }
    }
}

/// Reads and parses the source report into a document.
/// An unrecognized format is logged and yields a document without rows.
pub fn build_document(opts: &ConvertOptions) -> Result<ReportDocument> {
    info!("Processing {}...", opts.source.display());
    let text = fs::read_to_string(&opts.source)
        .with_context(|| format!("Cannot read {}", opts.source.display()))?;

    let format = opts
        .format
        .or_else(|| ReportFormat::detect(&opts.source, first_line(&text)));
    let rows = match format {
        Some(format) => {
            debug!("Reading {} as {}", opts.source.display(), format);
            load_report(format, &text)
                .with_context(|| format!("Cannot parse {} as {}", opts.source.display(), format))?
        }
        None => {
            error!("Unable to recognize : {}", first_line(&text));
            vec![]
        }
    };

    Ok(ReportDocument {
        title: opts.title.clone(),
        info: opts.info.clone(),
        rows,
    })
}

/// Converts the source report to Markdown. Nothing is written unless the
/// source parsed successfully.
pub fn convert(opts: &ConvertOptions) -> Result<ReportSummary> {
    let doc = build_document(opts)?;
    let summary = ReportSummary::from_rows(&doc.rows);
    info!("Converted {}", summary);

    info!("Writing {} ...", opts.output.display());
    markdown::save_file(&doc, &opts.output)?;

    if let Some(json) = opts.json.as_ref() {
        info!("Writing {} ...", json.display());
        fs::write(json, serde_json::to_string_pretty(&doc)?)
            .with_context(|| format!("Cannot write {}", json.display()))?;
    }

    info!("Done.");
    Ok(summary)
}
