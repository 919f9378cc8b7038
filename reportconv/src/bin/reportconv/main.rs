use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::*;

use reportconv::convert::{convert, ConvertOptions, DEFAULT_TITLE};
use reportconv::format::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    about = "Converts JUnit XML or CSV test reports to a Markdown table",
    long_about = None)]
struct Args {
    /// Test report to read
    source_file: PathBuf,

    /// Markdown file to write
    output_file: PathBuf,

    /// Title of the Markdown document
    #[arg(long, default_value = DEFAULT_TITLE)]
    name: String,

    /// Line of information to put under the title (repeatable)
    #[arg(long)]
    info: Vec<String>,

    /// Input format, detected from the file if not given
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Also write the converted rows as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl From<Args> for ConvertOptions {
    fn from(args: Args) -> Self {
        Self {
            source: args.source_file,
            output: args.output_file,
            title: args.name,
            info: args.info,
            format: args.format,
            json: args.json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();
    let args = Args::parse();
    debug!("{:?}", args);

    convert(&args.into())?;
    Ok(())
}
