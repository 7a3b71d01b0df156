// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod error;
mod model;
mod normalizer;
mod output;
mod pipeline;
mod registry;
mod resolver;

use crate::config::{CommandLineInput, PipelineConfig};
use crate::error::AppError;
use crate::model::{PageDocument, Record};
use crate::pipeline::{PageSource, RecordExtractor, RecordSink};
use crate::registry::WidgetRegistry;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use serde::Deserialize;
use serde_json::Value;
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("startme2json.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: fetch → extract → deliver.
async fn execute_pipeline(config: &PipelineConfig) -> Result<(), AppError> {
    let pipeline = StartMeScrape::new(config);

    let raw = pipeline.fetch().await?;
    let document = PageDocument::deserialize(&raw)?;

    log::info!("Starting parse");
    let records = pipeline.extract(&document)?;
    log::info!("Finished parsing");

    pipeline.deliver(&records)?;
    pipeline.report_completion(&records);

    Ok(())
}

/// Orchestrates the retrieval, extraction, and delivery of page content.
struct StartMeScrape<'a> {
    config: &'a PipelineConfig,
    registry: WidgetRegistry,
}

impl<'a> StartMeScrape<'a> {
    fn new(config: &'a PipelineConfig) -> Self {
        Self {
            config,
            registry: WidgetRegistry::standard(),
        }
    }

    /// Reports completion to the user with record counts and destinations.
    fn report_completion(&self, records: &[Record]) {
        let links = records
            .iter()
            .filter(|r| matches!(r, Record::Link { .. }))
            .count();
        let notes = records
            .iter()
            .filter(|r| matches!(r, Record::Note { .. }))
            .count();
        let feeds = records
            .iter()
            .filter(|r| matches!(r, Record::Feed { .. }))
            .count();

        println!(
            "📄 Extracted {} record(s) from page {} ({} links, {} notes, {} feeds).",
            records.len(),
            self.config.page_id,
            links,
            notes,
            feeds
        );
        println!("✓ Records saved to {}", self.config.out_path.display());
        if self.config.keep_temp && !self.config.load_cached {
            println!("✓ Raw response saved to {}", self.config.raw_path.display());
        }
    }
}

#[async_trait::async_trait]
impl PageSource for StartMeScrape<'_> {
    async fn fetch(&self) -> Result<Value, AppError> {
        if self.config.load_cached {
            log::info!("Using cached version");
            return output::load_cached_page(&self.config.raw_path);
        }

        log::info!("Fetching {}", self.config.resource_url);
        let client = api::StartMeClient::new()?;
        let raw = client.fetch_page(&self.config.resource_url).await?;

        if self.config.keep_temp {
            output::write_raw_snapshot(&self.config.raw_path, &raw, self.config.pretty)?;
        }

        Ok(raw)
    }
}

impl RecordExtractor for StartMeScrape<'_> {
    fn extract(&self, document: &PageDocument) -> Result<Vec<Record>, AppError> {
        normalizer::normalize(document, &self.registry)
    }
}

impl RecordSink for StartMeScrape<'_> {
    fn deliver(&self, records: &[Record]) -> Result<(), AppError> {
        let rendered = output::render_records(records, self.config.format, self.config.pretty)?;
        output::write_output(&self.config.out_path, &rendered)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli)?;

    execute_pipeline(&config).await?;

    Ok(())
}
