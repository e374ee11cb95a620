//! Series fetch commands.
//!
//! These commands fetch one series from the BCB or the ECB and either write
//! it to a file or print the last quote on or before a given date.

use crate::display::{Format, parse_date, print_quote, spinner, write_series};
use anyhow::{Context, Result};
use ratefetch_lib::prelude::*;
use std::path::PathBuf;

/// Fetch a BCB SGS series.
#[allow(clippy::too_many_arguments)]
pub(crate) fn bcb(
    series: u32,
    start_str: Option<&str>,
    end_str: Option<&str>,
    output: Option<PathBuf>,
    format: Format,
    at_str: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let request = BcbRequest::new(SeriesCode(series))
        .with_range(parse_date(start_str, "start")?, parse_date(end_str, "end")?);
    let at = parse_date(at_str, "lookup")?;
    let range = request.range();

    let client = HttpClient::with_defaults()?;
    let progress = spinner(quiet, format!("BCB series {series} {range}"));
    let result = fetch_bcb(&client, request);
    progress.finish_and_clear();
    let observed = result.with_context(|| format!("Failed to fetch BCB series {series}"))?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("bcb-{series}.{}", format.extension())));
    finish(&observed, at, output, format, quiet)
}

/// Fetch an ECB daily reference rate.
#[allow(clippy::too_many_arguments)]
pub(crate) fn ecb(
    currency: &str,
    base: &str,
    start_str: Option<&str>,
    end_str: Option<&str>,
    output: Option<PathBuf>,
    format: Format,
    at_str: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let request = EcbRequest::pair(currency, base)
        .with_range(parse_date(start_str, "start")?, parse_date(end_str, "end")?);
    let at = parse_date(at_str, "lookup")?;
    let range = request.range();

    let client = HttpClient::with_defaults()?;
    let progress = spinner(quiet, format!("ECB {} {range}", request.key));
    let result = fetch_ecb(&client, &request);
    progress.finish_and_clear();
    let observed = result.with_context(|| format!("Failed to fetch ECB series {}", request.key))?;

    let output = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "ecb-{}-{}.{}",
            request.key.currency,
            request.key.currency_denom,
            format.extension()
        ))
    });
    finish(&observed, at, output, format, quiet)
}

/// Print a lookup or write the whole series.
fn finish(
    observed: &ObservedSeries,
    at: Option<chrono::NaiveDate>,
    output: PathBuf,
    format: Format,
    quiet: bool,
) -> Result<()> {
    if let Some(target) = at {
        return print_quote(observed, target);
    }

    write_series(observed, &output, format)?;

    if !quiet {
        println!(
            "Wrote {} {} observations to: {}",
            observed.len(),
            observed.column(),
            output.display()
        );
    }

    Ok(())
}
