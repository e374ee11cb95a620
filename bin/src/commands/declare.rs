//! Income declaration command.

use crate::display::spinner;
use anyhow::{Context, Result};
use ratefetch_lib::prelude::*;
use std::path::PathBuf;

/// Fetch the three declaration series and write the resulting cells.
pub(crate) fn declare(tax_year: i32, output: Option<PathBuf>, quiet: bool) -> Result<()> {
    let range = declaration_range(tax_year)?;
    let client = HttpClient::with_defaults()?;

    let progress = spinner(quiet, format!("Declaration quotes {range}"));

    let usd_eur = fetch_ecb(
        &client,
        &EcbRequest::pair("USD", "EUR").with_range(Some(range.start), Some(range.end)),
    )
    .context("Failed to fetch ECB USD/EUR")?;

    let brl_usd = fetch_bcb(
        &client,
        BcbRequest::new(SeriesCode::USD_BUY).with_range(Some(range.start), Some(range.end)),
    )
    .context("Failed to fetch BCB BRL/USD")?;

    let brl_eur = fetch_bcb(
        &client,
        BcbRequest::new(SeriesCode::EUR).with_range(Some(range.start), Some(range.end)),
    )
    .context("Failed to fetch BCB BRL/EUR")?;

    progress.finish_and_clear();

    // Nothing is written unless every cell could be computed.
    let plan = DeclarationPlan::build(tax_year, &usd_eur, &brl_usd, &brl_eur)?;
    let mut workbook = MemoryWorkbook::new();
    plan.apply(&mut workbook)?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("declaration-{tax_year}.json")));
    workbook
        .save(&output)
        .with_context(|| format!("Cannot write {}", output.display()))?;

    if !quiet {
        println!(
            "Wrote {} cells for tax year {} to: {}",
            workbook.len(),
            plan.tax_year(),
            output.display()
        );
    }

    Ok(())
}
