//! Core types for the ratefetch exchange-rate fetcher.
//!
//! This crate provides the data structures shared by the ratefetch crates:
//!
//! - [`DateRange`] - Inclusive calendar range with default resolution
//! - [`Observation`] - A single dated value
//! - [`ObservedSeries`] - Date-ordered series with one named value column
//! - [`SeriesCode`] - Banco Central do Brasil SGS series identifier
//! - [`EcbSeriesKey`] - European Central Bank exchange-rate series key
//! - [`float`] - Serde helpers keeping non-finite values readable in JSON

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratefetch/ratefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
pub mod float;
mod series;
mod series_key;

pub use date_range::{DEFAULT_LOOKBACK_DAYS, DateRange};
pub use error::{RateError, Result};
pub use series::{Observation, ObservedSeries};
pub use series_key::{EcbSeriesKey, SeriesCode};
