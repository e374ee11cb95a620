//! European Central Bank exchange-rate series.
//!
//! The ECB data API answers with an SDMX-ML 2.1 generic data message:
//!
//! ```text
//! message:GenericData
//! └─ message:DataSet
//!    └─ generic:Series
//!       ├─ generic:SeriesKey
//!       │  └─ generic:Value id="CURRENCY" value="USD"   (one per dimension)
//!       └─ generic:Obs                                   (one per period)
//!          ├─ generic:ObsDimension value="2019-01-31"
//!          └─ generic:ObsValue value="1.1488"
//! ```
//!
//! Elements are matched by local name under their expected parent, so the
//! namespace prefixes chosen by the server do not matter.

use chrono::NaiveDate;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use ratefetch_types::{DateRange, EcbSeriesKey, Observation, ObservedSeries, RateError, Result};
use std::collections::HashMap;
use tracing::info;

use crate::client::{Transport, fetch_body};
use crate::url::ecb_query;

/// Parameters of an ECB series request.
///
/// Missing bounds are resolved with [`DateRange::resolve`]; the key
/// defaults to the daily USD/EUR reference rate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcbRequest {
    /// Start of the range (inclusive).
    pub start: Option<NaiveDate>,
    /// End of the range (inclusive).
    pub end: Option<NaiveDate>,
    /// Series to fetch.
    pub key: EcbSeriesKey,
}

impl EcbRequest {
    /// Requests the daily rate of `currency` against `currency_denom`.
    #[must_use]
    pub fn pair(currency: &str, currency_denom: &str) -> Self {
        Self {
            key: EcbSeriesKey::daily(currency, currency_denom),
            ..Self::default()
        }
    }

    /// Sets the range bounds.
    #[must_use]
    pub fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
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

/// Fetches an ECB exchange-rate series.
///
/// # Errors
///
/// Returns [`RateError::Request`] if the server does not answer 200,
/// [`RateError::Transport`] if the request cannot be sent and
/// [`RateError::Parse`] if the document cannot be decoded.
pub fn fetch_ecb<T: Transport + ?Sized>(transport: &T, request: &EcbRequest) -> Result<ObservedSeries> {
    let range = request.range();
    let body = fetch_body(transport, &ecb_query(&request.key, range))?;
    let series = parse_ecb(&body)?;
    info!(
        key = %request.key,
        %range,
        column = series.column(),
        observations = series.len(),
        "fetched ECB series"
    );
    Ok(series)
}

/// Decodes an SDMX-ML generic data message holding exactly one series.
///
/// The value column is named `<CURRENCY>/<CURRENCY_DENOM>` from the series
/// key. Daily (`YYYY-MM-DD`), monthly (`YYYY-MM`) and annual (`YYYY`)
/// periods are accepted; the latter two map to the first day of the period.
///
/// # Errors
///
/// Returns [`RateError::Parse`] if the XML is malformed, if the series or
/// its key is missing, if more than one series is present, if an
/// observation lacks its period or value, or if a period or value does not
/// parse.
pub fn parse_ecb(body: &str) -> Result<ObservedSeries> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);
    let mut decoder = Decoder::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                decoder.open(&e)?;
                decoder.path.push(local_name(&e));
            }
            Ok(Event::Empty(e)) => {
                decoder.open(&e)?;
                decoder.close(&local_name(&e))?;
            }
            Ok(Event::End(_)) => {
                if let Some(name) = decoder.path.pop() {
                    decoder.close(&name)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RateError::Parse(format!(
                    "malformed ECB XML at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    decoder.finish()
}

/// An observation whose children have not all been seen yet.
#[derive(Debug, Default)]
struct PendingObs {
    period: Option<String>,
    value: Option<String>,
}

/// Event-driven decoder state.
#[derive(Debug, Default)]
struct Decoder {
    path: Vec<String>,
    root_seen: bool,
    series_count: usize,
    key_seen: bool,
    key: HashMap<String, String>,
    pending: Option<PendingObs>,
    observations: Vec<Observation>,
}

impl Decoder {
    fn parent(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        let name = local_name(e);
        let parent = self.path.last().cloned();
        match (parent.as_deref(), name.as_str()) {
            (None, "GenericData") => self.root_seen = true,
            (None, other) => {
                return Err(RateError::Parse(format!(
                    "expected GenericData document, found <{other}>"
                )));
            }
            (Some("DataSet"), "Series") if self.path.len() == 2 => {
                self.series_count += 1;
                if self.series_count > 1 {
                    return Err(RateError::parse("ECB document holds more than one series"));
                }
            }
            (Some("Series"), "SeriesKey") => self.key_seen = true,
            (Some("SeriesKey"), "Value") => {
                let id = required_attr(e, "id")?;
                let value = required_attr(e, "value")?;
                self.key.insert(id, value);
            }
            (Some("Series"), "Obs") => self.pending = Some(PendingObs::default()),
            (Some("Obs"), "ObsDimension") => {
                let period = required_attr(e, "value")?;
                if let Some(pending) = self.pending.as_mut() {
                    pending.period = Some(period);
                }
            }
            (Some("Obs"), "ObsValue") => {
                let value = required_attr(e, "value")?;
                if let Some(pending) = self.pending.as_mut() {
                    pending.value = Some(value);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        if name != "Obs" || self.parent() != Some("Series") {
            return Ok(());
        }
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };

        let period = pending
            .period
            .ok_or_else(|| RateError::parse("ECB observation without ObsDimension"))?;
        let value = pending
            .value
            .ok_or_else(|| RateError::Parse(format!("ECB observation {period} without ObsValue")))?;

        let date = parse_period(&period)?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|e| RateError::Parse(format!("invalid ECB value '{value}' for {period}: {e}")))?;

        self.observations.push(Observation::new(date, value));
        Ok(())
    }

    fn finish(mut self) -> Result<ObservedSeries> {
        if !self.root_seen {
            return Err(RateError::parse("empty ECB document"));
        }
        if let Some(open) = self.path.last() {
            return Err(RateError::Parse(format!(
                "truncated ECB document: <{open}> is never closed"
            )));
        }
        if self.pending.is_some() {
            return Err(RateError::parse("truncated ECB document: unfinished Obs"));
        }
        if self.series_count == 0 {
            return Err(RateError::parse("ECB document holds no Series"));
        }
        if !self.key_seen {
            return Err(RateError::parse("ECB series has no SeriesKey"));
        }

        let currency = self.key_value("CURRENCY")?;
        let denom = self.key_value("CURRENCY_DENOM")?;
        ObservedSeries::new(format!("{currency}/{denom}"), self.observations)
    }

    fn key_value(&mut self, id: &str) -> Result<String> {
        self.key
            .remove(id)
            .ok_or_else(|| RateError::Parse(format!("ECB series key has no {id}")))
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn required_attr(e: &BytesStart<'_>, attr: &str) -> Result<String> {
    let element = local_name(e);
    let found = e
        .try_get_attribute(attr)
        .map_err(|err| RateError::Parse(format!("bad attributes on <{element}>: {err}")))?
        .ok_or_else(|| RateError::Parse(format!("<{element}> has no '{attr}' attribute")))?;
    found
        .unescape_value()
        .map(|v| v.into_owned())
        .map_err(|err| RateError::Parse(format!("bad '{attr}' on <{element}>: {err}")))
}

fn parse_period(period: &str) -> Result<NaiveDate> {
    let period = period.trim();
    NaiveDate::parse_from_str(period, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{period}-01-01"), "%Y-%m-%d"))
        .map_err(|_| RateError::Parse(format!("invalid ECB period '{period}'")))
}
