//! Display utilities and output formatting for the ratefetch CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use ratefetch_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Output format for fetched series.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) fn extension(self) -> &'static str {
        OutputFormat::from(self).extension()
    }
}

/// Parse an optional `YYYY-MM-DD` command-line date.
pub(crate) fn parse_date(value: Option<&str>, what: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid {what} date: {s}"))
        })
        .transpose()
}

/// Spinner shown while a request is in flight.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Write a series to a file in the specified format.
pub(crate) fn write_series(series: &ObservedSeries, output: &Path, format: Format) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Cannot create {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    match OutputFormat::from(format) {
        OutputFormat::Csv => CsvFormatter::new().write_series(series, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new().write_series(series, &mut writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_series(series, &mut writer)?,
    }

    writer.flush()?;
    Ok(())
}

/// Print the last observation on or before `target`.
pub(crate) fn print_quote(series: &ObservedSeries, target: NaiveDate) -> Result<()> {
    let quote = series.at_or_before(target)?;
    println!("{}\t{}\t{}", quote.date, series.column(), quote.value);
    Ok(())
}
