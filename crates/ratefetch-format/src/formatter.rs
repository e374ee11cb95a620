//! Output format abstraction.

use ratefetch_types::{ObservedSeries, RateError};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON document format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FormatError> for RateError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Io(e) => Self::Io(e),
            FormatError::Json(e) => Self::Json(e),
            FormatError::UnknownFormat(name) => Self::Format(format!("Unknown format: {name}")),
        }
    }
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes a series to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_series<W: Write>(&self, series: &ObservedSeries, writer: W) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!(matches!(
            "parquet".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_output_format_extension() {
        for format in [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Ndjson] {
            assert_eq!(format.to_string(), format.extension());
        }
    }

    #[test]
    fn test_unknown_format_into_rate_error() {
        let err: RateError = FormatError::UnknownFormat("xls".to_string()).into();
        assert!(matches!(err, RateError::Format(_)));
    }
}
