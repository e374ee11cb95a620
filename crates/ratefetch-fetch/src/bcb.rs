//! Banco Central do Brasil SGS series.

use chrono::NaiveDate;
use ratefetch_types::{DateRange, Observation, ObservedSeries, RateError, Result, SeriesCode};
use serde::Deserialize;
use tracing::info;

use crate::client::{Transport, fetch_body};
use crate::url::{BCB_DATE_FORMAT, bcb_query};

/// Value column of every BCB series.
pub const BCB_COLUMN: &str = "value";

/// Parameters of a BCB series request.
///
/// Missing bounds are resolved with [`DateRange::resolve`]; the series
/// defaults to [`SeriesCode::USD_BUY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BcbRequest {
    /// Start of the range (inclusive).
    pub start: Option<NaiveDate>,
    /// End of the range (inclusive).
    pub end: Option<NaiveDate>,
    /// SGS series to fetch.
    pub series: SeriesCode,
}

impl BcbRequest {
    /// Requests `series` over the default range.
    #[must_use]
    pub const fn new(series: SeriesCode) -> Self {
        Self {
            start: None,
            end: None,
            series,
        }
    }

    /// Sets the range bounds.
    #[must_use]
    pub const fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Resolves the concrete date range of this request.
    #[must_use]
    pub fn range(&self) -> DateRange {
        DateRange::resolve(self.start, self.end)
    }
}

/// Fetches a BCB series.
///
/// # Errors
///
/// Returns [`RateError::Request`] if the server does not answer 200,
/// [`RateError::Transport`] if the request cannot be sent and
/// [`RateError::Parse`] if the payload cannot be decoded.
pub fn fetch_bcb<T: Transport + ?Sized>(transport: &T, request: BcbRequest) -> Result<ObservedSeries> {
    let range = request.range();
    let body = fetch_body(transport, &bcb_query(request.series, range))?;
    let series = parse_bcb(&body)?;
    info!(
        series = %request.series,
        %range,
        observations = series.len(),
        "fetched BCB series"
    );
    Ok(series)
}

/// One record of the SGS JSON array.
#[derive(Debug, Deserialize)]
struct BcbRecord {
    data: String,
    valor: BcbValue,
}

/// SGS sends values as strings; numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BcbValue {
    Text(String),
    Number(f64),
}

impl BcbRecord {
    fn into_observation(self) -> Result<Observation> {
        let date = NaiveDate::parse_from_str(self.data.trim(), BCB_DATE_FORMAT)
            .map_err(|e| RateError::Parse(format!("invalid BCB date '{}': {e}", self.data)))?;
        let value = match self.valor {
            BcbValue::Number(v) => v,
            BcbValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| RateError::Parse(format!("invalid BCB value '{s}' on {date}: {e}")))?,
        };
        Ok(Observation::new(date, value))
    }
}

/// Decodes an SGS JSON payload into a series with column [`BCB_COLUMN`].
///
/// The payload must be a flat array of `{"data": "DD/MM/YYYY", "valor": "..."}`
/// records.
///
/// # Errors
///
/// Returns [`RateError::Parse`] on any other shape, on unparsable dates or
/// values, and on repeated dates.
pub fn parse_bcb(body: &str) -> Result<ObservedSeries> {
    let records: Vec<BcbRecord> = serde_json::from_str(body)
        .map_err(|e| RateError::Parse(format!("unexpected BCB payload: {e}")))?;

    let observations = records
        .into_iter()
        .map(BcbRecord::into_observation)
        .collect::<Result<Vec<_>>>()?;

    ObservedSeries::new(BCB_COLUMN, observations)
}
