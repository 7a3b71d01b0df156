// src/config.rs
use crate::error::AppError;
use crate::resolver::PageId;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Serialization format for the extracted records.
///
/// `csv` and `xml` are accepted on the command line but rejected at
/// delivery with `AppError::UnsupportedFormat` until they are implemented.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape the public start.me page at the given URL", long_about = None)]
pub struct CommandLineInput {
    /// Public start.me page URL (e.g., "https://start.me/p/rx6Qj8/some-page")
    pub url: String,

    /// Output file (defaults to <page-id>.json)
    #[arg(short = 'o', long = "out")]
    pub out_path: Option<String>,

    /// Save the raw response by the server next to the output file
    #[arg(short = 'k', long, default_value_t = false)]
    pub keep_temp: bool,

    /// Replay a previously saved raw response instead of fetching
    #[arg(long, default_value_t = false)]
    pub load_cached: bool,

    /// Pretty-printing of JSON output (the default)
    #[arg(short = 'p', long, overrides_with = "no_pretty")]
    pub pretty: bool,

    /// Disable pretty-printing of JSON output
    #[arg(long)]
    pub no_pretty: bool,

    /// Serialization format for the record list
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration — validated and ready to drive all stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub page_id: PageId,
    pub resource_url: url::Url,
    pub out_path: PathBuf,
    pub raw_path: PathBuf,
    pub keep_temp: bool,
    pub load_cached: bool,
    pub pretty: bool,
    pub format: OutputFormat,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input.
    ///
    /// URL validation happens here, before anything touches the network:
    /// nothing downstream is meaningful without a valid page identifier.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let page_id = PageId::from_url(&cli.url)?;
        let resource_url = crate::resolver::resource_url(&cli.url)?;

        let out_path = cli
            .out_path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", page_id)));

        let raw_path = raw_sibling_path(&out_path);

        Ok(PipelineConfig {
            page_id,
            resource_url,
            out_path,
            raw_path,
            keep_temp: cli.keep_temp,
            load_cached: cli.load_cached,
            // The flag pair overrides_with each other, so at most one of
            // the two is set; no flag at all means pretty.
            pretty: cli.pretty || !cli.no_pretty,
            format: cli.format,
        })
    }
}

/// Derives the raw-snapshot path: `out.json` → `out-raw.json`.
fn raw_sibling_path(out_path: &std::path::Path) -> PathBuf {
    let stem = out_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = out_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    out_path.with_file_name(format!("{}-raw{}", stem, ext))
}
