//! Fetch ECB and BCB exchange-rate series as date-indexed series.
//!
//! This is a facade crate that re-exports functionality from the ratefetch
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use ratefetch_lib::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::with_defaults()?;
//!
//!     let usd_eur = fetch_ecb(&client, &EcbRequest::pair("USD", "EUR"))?;
//!     let brl_usd = fetch_bcb(&client, BcbRequest::new(SeriesCode::USD_BUY))?;
//!
//!     if let Some(latest) = usd_eur.last() {
//!         let brl = brl_usd.at_or_before(latest.date)?;
//!         println!("{}: USD/EUR {} BRL/USD {}", latest.date, latest.value, brl.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratefetch/ratefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use ratefetch_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use ratefetch_fetch::{
    BcbRequest, ClientConfig, DownloadError, EcbRequest, HttpClient, Query, Response, Transport,
    fetch_bcb, fetch_ecb, parse_bcb, parse_ecb, url,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use ratefetch_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat};

// Re-export the declaration plan
#[cfg(feature = "declare")]
pub use ratefetch_declare::{
    CellRef, CellStore, CellValue, CellWrite, DeclarationPlan, DeclareError, MemoryWorkbook,
    declaration_range,
};

/// Prelude module for convenient imports.
///
/// ```
/// use ratefetch_lib::prelude::*;
/// ```
pub mod prelude {
    pub use ratefetch_types::{
        DateRange, EcbSeriesKey, Observation, ObservedSeries, RateError, Result, SeriesCode,
    };

    #[cfg(feature = "fetch")]
    pub use ratefetch_fetch::{
        BcbRequest, ClientConfig, EcbRequest, HttpClient, Transport, fetch_bcb, fetch_ecb,
    };

    #[cfg(feature = "format")]
    pub use ratefetch_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "declare")]
    pub use ratefetch_declare::{
        CellRef, CellStore, CellValue, DeclarationPlan, MemoryWorkbook, declaration_range,
    };
}
