//! Spreadsheet cell addressing.

use chrono::NaiveDate;
use ratefetch_types::Result;
use serde::{Deserialize, Serialize};

/// A cell, addressed by 1-based row/column or by its A1 name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellRef {
    /// Row/column address.
    Grid {
        /// Sheet name.
        sheet: String,
        /// 1-based row.
        row: u32,
        /// 1-based column.
        column: u32,
    },
    /// Named address such as `B2`.
    Named {
        /// Sheet name.
        sheet: String,
        /// A1-style address.
        address: String,
    },
}

impl CellRef {
    /// Creates a row/column reference.
    #[must_use]
    pub fn grid(sheet: &str, row: u32, column: u32) -> Self {
        Self::Grid {
            sheet: sheet.to_string(),
            row,
            column,
        }
    }

    /// Creates a named reference.
    #[must_use]
    pub fn named(sheet: &str, address: &str) -> Self {
        Self::Named {
            sheet: sheet.to_string(),
            address: address.to_uppercase(),
        }
    }

    /// Returns the sheet name.
    #[must_use]
    pub fn sheet(&self) -> &str {
        match self {
            Self::Grid { sheet, .. } | Self::Named { sheet, .. } => sheet,
        }
    }

    /// Returns the A1-style address within the sheet.
    #[must_use]
    pub fn address(&self) -> String {
        match self {
            Self::Grid { row, column, .. } => format!("{}{row}", column_letters(*column)),
            Self::Named { address, .. } => address.clone(),
        }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}!{}", self.sheet(), self.address())
    }
}

/// Spreadsheet column letters for a 1-based column (1 = A, 27 = AA).
fn column_letters(mut column: u32) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        column = (column - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A value written into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// A calendar date.
    Date(NaiveDate),
    /// A number. Non-finite values are stored as strings.
    Number(#[serde(with = "ratefetch_types::float")] f64),
}

/// Destination of cell writes.
pub trait CellStore {
    /// Writes `value` into `cell`, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot accept the write.
    fn set(&mut self, cell: CellRef, value: CellValue) -> Result<()>;
}
