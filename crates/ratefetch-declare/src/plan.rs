//! Cell plan of the income declaration spreadsheets.
//!
//! The salary sheet holds one row per month of the tax year:
//!
//! | column | content |
//! |---|---|
//! | 2 | date of the last USD/EUR quote of the month |
//! | 3 | that USD/EUR quote |
//! | 4 | date of the last BRL/USD quote of the first half of the previous month |
//! | 5 | that BRL/USD quote |
//!
//! The bank sheet holds the last BRL/EUR quote of the previous year in
//! `B2`/`C2` and of the tax year in `B3`/`C3`.

use chrono::{Months, NaiveDate};
use ratefetch_types::{DateRange, Observation, ObservedSeries, RateError};
use thiserror::Error;
use tracing::debug;

use crate::{CellRef, CellStore, CellValue};

/// Sheet receiving the monthly salary conversion quotes.
pub const SALARY_SHEET: &str = "irpf";

/// Sheet receiving the year-end bank balance quotes.
pub const BANK_SHEET: &str = "Sheet1";

/// Salary sheet row holding January.
pub const SALARY_FIRST_ROW: u32 = 3;

/// BRL/USD quotes are taken from the first half of the month, up to this day.
const HALF_MONTH_DAY: u32 = 15;

/// Value column expected on the USD/EUR series.
const USD_EUR_COLUMN: &str = "USD/EUR";

/// Errors that can occur while building a declaration plan.
#[derive(Error, Debug)]
pub enum DeclareError {
    /// The tax year is outside the supported calendar.
    #[error("Unsupported tax year: {0}")]
    InvalidYear(i32),

    /// A series does not carry the expected value column.
    #[error("Expected a {expected} series, got {found}")]
    UnexpectedColumn {
        /// Expected column name.
        expected: &'static str,
        /// Column name of the series passed in.
        found: String,
    },

    /// A quote lookup or cell write failed.
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// Returns the range of quotes needed for `tax_year`.
///
/// Runs from 1 December of the previous year (for the January BRL/USD
/// quote) to 31 December of the tax year.
///
/// # Errors
///
/// Returns [`DeclareError::InvalidYear`] if the dates cannot be represented.
pub fn declaration_range(tax_year: i32) -> Result<DateRange, DeclareError> {
    Ok(DateRange {
        start: ymd(previous_year(tax_year)?, 12, 1)?,
        end: ymd(tax_year, 12, 31)?,
    })
}

/// One value to write into one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellWrite {
    /// Target cell.
    pub cell: CellRef,
    /// Value to write.
    pub value: CellValue,
}

/// All cell writes of one tax year.
///
/// Every lookup happens in [`DeclarationPlan::build`], so a plan either
/// exists in full or not at all and a spreadsheet is never left half
/// updated.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationPlan {
    tax_year: i32,
    writes: Vec<CellWrite>,
}

impl DeclarationPlan {
    /// Computes the cell writes for `tax_year`.
    ///
    /// `usd_eur` is the ECB USD/EUR series, `brl_usd` and `brl_eur` are the
    /// BCB dollar and euro series. All of them should cover
    /// [`declaration_range`].
    ///
    /// # Errors
    ///
    /// Returns [`DeclareError::UnexpectedColumn`] if `usd_eur` is not a
    /// USD/EUR series and a [`RateError::NotFound`] if a series has no
    /// quote on or before a required date.
    pub fn build(
        tax_year: i32,
        usd_eur: &ObservedSeries,
        brl_usd: &ObservedSeries,
        brl_eur: &ObservedSeries,
    ) -> Result<Self, DeclareError> {
        if usd_eur.column() != USD_EUR_COLUMN {
            return Err(DeclareError::UnexpectedColumn {
                expected: USD_EUR_COLUMN,
                found: usd_eur.column().to_string(),
            });
        }

        let prior_year = previous_year(tax_year)?;
        let mut writes = Vec::with_capacity(12 * 4 + 4);

        for (row, month) in (SALARY_FIRST_ROW..).zip(1..=12u32) {
            let usd = usd_eur.at_or_before(last_day_of_month(tax_year, month)?)?;

            let (year, prev_month) = if month == 1 {
                (prior_year, 12)
            } else {
                (tax_year, month - 1)
            };
            let brl = brl_usd.at_or_before(ymd(year, prev_month, HALF_MONTH_DAY)?)?;

            debug!(row, usd = ?usd, brl = ?brl, "salary row");
            push_quote(&mut writes, CellRef::grid(SALARY_SHEET, row, 2), CellRef::grid(SALARY_SHEET, row, 3), usd);
            push_quote(&mut writes, CellRef::grid(SALARY_SHEET, row, 4), CellRef::grid(SALARY_SHEET, row, 5), brl);
        }

        for (row, year) in [(2, prior_year), (3, tax_year)] {
            let eur = brl_eur.at_or_before(ymd(year, 12, 31)?)?;
            debug!(row, eur = ?eur, "bank row");
            push_quote(
                &mut writes,
                CellRef::named(BANK_SHEET, &format!("B{row}")),
                CellRef::named(BANK_SHEET, &format!("C{row}")),
                eur,
            );
        }

        Ok(Self { tax_year, writes })
    }

    /// Returns the tax year of this plan.
    #[must_use]
    pub const fn tax_year(&self) -> i32 {
        self.tax_year
    }

    /// Returns the planned writes, salary sheet first.
    #[must_use]
    pub fn writes(&self) -> &[CellWrite] {
        &self.writes
    }

    /// Writes every planned value into `store`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the store.
    pub fn apply<S: CellStore + ?Sized>(&self, store: &mut S) -> Result<(), DeclareError> {
        for write in &self.writes {
            store.set(write.cell.clone(), write.value)?;
        }
        Ok(())
    }
}

fn push_quote(writes: &mut Vec<CellWrite>, date_cell: CellRef, value_cell: CellRef, quote: Observation) {
    writes.push(CellWrite {
        cell: date_cell,
        value: CellValue::Date(quote.date),
    });
    writes.push(CellWrite {
        cell: value_cell,
        value: CellValue::Number(quote.value),
    });
}

fn previous_year(year: i32) -> Result<i32, DeclareError> {
    year.checked_sub(1).ok_or(DeclareError::InvalidYear(year))
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DeclareError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DeclareError::InvalidYear(year))
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, DeclareError> {
    ymd(year, month, 1)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(DeclareError::InvalidYear(year))
}
