//! Output formatters for the ratefetch exchange-rate fetcher.
//!
//! This crate provides formatters for writing an observed series
//! to various output formats:
//!
//! - [`CsvFormatter`] - CSV (or TSV) with a `Date` column and the value column
//! - [`JsonFormatter`] - JSON document or NDJSON observations

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratefetch/ratefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
