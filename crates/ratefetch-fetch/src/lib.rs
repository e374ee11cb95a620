//! HTTP client and response decoding for the ratefetch exchange-rate fetcher.
//!
//! This crate provides the acquisition pipeline, one per data source:
//!
//! - [`url`] - Endpoint constants and query parameter construction
//! - [`HttpClient`] - Blocking HTTP transport behind the [`Transport`] trait
//! - [`fetch_bcb`] / [`parse_bcb`] - Banco Central do Brasil JSON series
//! - [`fetch_ecb`] / [`parse_ecb`] - European Central Bank SDMX-ML series

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratefetch/ratefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bcb;
mod client;
mod ecb;
pub mod url;

pub use bcb::{BCB_COLUMN, BcbRequest, fetch_bcb, parse_bcb};
pub use client::{ClientConfig, DownloadError, HttpClient, Query, Response, Transport};
pub use ecb::{EcbRequest, fetch_ecb, parse_ecb};
