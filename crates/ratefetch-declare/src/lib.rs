//! Income declaration cell plan for the ratefetch exchange-rate fetcher.
//!
//! - [`CellStore`] - Where cell values are written (a spreadsheet, usually)
//! - [`MemoryWorkbook`] - In-memory [`CellStore`] that can be saved as JSON
//! - [`DeclarationPlan`] - Every cell write of one tax year, computed up front

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ratefetch/ratefetch/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod plan;
mod workbook;

pub use cell::{CellRef, CellStore, CellValue};
pub use plan::{
    BANK_SHEET, CellWrite, DeclarationPlan, DeclareError, SALARY_FIRST_ROW, SALARY_SHEET,
    declaration_range,
};
pub use workbook::MemoryWorkbook;
