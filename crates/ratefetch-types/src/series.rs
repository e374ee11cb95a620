//! Date-indexed observation series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DateRange, RateError, Result};

/// A single observed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date.
    pub date: NaiveDate,
    /// Observed value.
    ///
    /// Non-finite values serialize as the strings `NaN`, `inf` and `-inf`.
    #[serde(with = "crate::float")]
    pub value: f64,
}

impl Observation {
    /// Creates a new observation.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A series of observations keyed by unique date, sorted ascending.
///
/// The series carries the name of its value column (`value` for BCB
/// series, `USD/EUR` style pairs for ECB series). It can only be built
/// through [`ObservedSeries::new`], which enforces the ordering and
/// uniqueness invariants, and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct ObservedSeries {
    column: String,
    observations: Vec<Observation>,
}

#[derive(Deserialize)]
struct RawSeries {
    column: String,
    observations: Vec<Observation>,
}

impl TryFrom<RawSeries> for ObservedSeries {
    type Error = RateError;

    fn try_from(raw: RawSeries) -> Result<Self> {
        Self::new(raw.column, raw.observations)
    }
}

impl ObservedSeries {
    /// Builds a series from observations in any order.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Parse`] if two observations share a date.
    pub fn new(
        column: impl Into<String>,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Result<Self> {
        let column = column.into();
        let mut observations: Vec<Observation> = observations.into_iter().collect();
        observations.sort_by_key(|obs| obs.date);

        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(RateError::Parse(format!(
                "duplicate {column} observation for {}",
                pair[0].date
            )));
        }

        Ok(Self {
            column,
            observations,
        })
    }

    /// Returns the value column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns all observations, oldest first.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Returns an iterator over the observations, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the oldest observation.
    #[must_use]
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Returns the most recent observation.
    #[must_use]
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Returns the observation dated exactly `date`.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&Observation> {
        self.observations
            .binary_search_by_key(&date, |obs| obs.date)
            .ok()
            .map(|idx| &self.observations[idx])
    }

    /// Returns the latest observation dated on or before `target`.
    ///
    /// Used to pick the last available quote when `target` falls on a
    /// weekend or holiday.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::NotFound`] if `target` precedes every observation.
    pub fn at_or_before(&self, target: NaiveDate) -> Result<Observation> {
        let idx = self.observations.partition_point(|obs| obs.date <= target);
        idx.checked_sub(1)
            .map(|i| self.observations[i])
            .ok_or_else(|| RateError::NotFound {
                column: self.column.clone(),
                date: target,
            })
    }

    /// Returns the observations that fall within `range`.
    ///
    /// An inverted range (start after end) selects nothing.
    #[must_use]
    pub fn between(&self, range: DateRange) -> &[Observation] {
        let lo = self.observations.partition_point(|obs| obs.date < range.start);
        let hi = self.observations.partition_point(|obs| obs.date <= range.end);
        &self.observations[lo..hi.max(lo)]
    }
}

impl<'a> IntoIterator for &'a ObservedSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_series() -> ObservedSeries {
        ObservedSeries::new(
            "value",
            vec![
                Observation::new(date(2019, 1, 7), 3.70),
                Observation::new(date(2019, 1, 2), 3.86),
                Observation::new(date(2019, 1, 4), 3.75),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_sorts_ascending() {
        let series = sample_series();
        let dates: Vec<_> = series.iter().map(|obs| obs.date).collect();
        assert_eq!(dates, vec![date(2019, 1, 2), date(2019, 1, 4), date(2019, 1, 7)]);
        assert_eq!(series.column(), "value");
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_new_rejects_duplicate_dates() {
        let result = ObservedSeries::new(
            "USD/EUR",
            vec![
                Observation::new(date(2019, 1, 2), 1.0),
                Observation::new(date(2019, 1, 2), 1.1),
            ],
        );
        assert!(matches!(result, Err(RateError::Parse(_))));
    }

    #[test]
    fn test_at_or_before_between_observations() {
        let series = sample_series();
        let obs = series.at_or_before(date(2019, 1, 5)).unwrap();
        assert_eq!(obs.date, date(2019, 1, 4));
        assert_relative_eq!(obs.value, 3.75);
    }

    #[test]
    fn test_at_or_before_exact_and_after_end() {
        let series = sample_series();
        assert_eq!(series.at_or_before(date(2019, 1, 4)).unwrap().date, date(2019, 1, 4));
        assert_eq!(series.at_or_before(date(2019, 3, 1)).unwrap().date, date(2019, 1, 7));
    }

    #[test]
    fn test_at_or_before_not_found() {
        let series = sample_series();
        let err = series.at_or_before(date(2019, 1, 1)).unwrap_err();
        assert!(matches!(err, RateError::NotFound { date: d, .. } if d == date(2019, 1, 1)));

        // The query does not consume or alter the series.
        assert_eq!(series.len(), 3);
        assert!(series.at_or_before(date(2019, 1, 2)).is_ok());
    }

    #[test]
    fn test_at_or_before_empty_series() {
        let series = ObservedSeries::new("value", Vec::new()).unwrap();
        assert!(series.is_empty());
        assert!(series.at_or_before(date(2019, 1, 1)).is_err());
    }

    #[test]
    fn test_get_and_between() {
        let series = sample_series();
        assert!(series.get(date(2019, 1, 3)).is_none());
        assert_relative_eq!(series.get(date(2019, 1, 2)).unwrap().value, 3.86);

        let range = DateRange::resolve_at(Some(date(2019, 1, 3)), Some(date(2019, 1, 7)), date(2020, 1, 1));
        let slice = series.between(range);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].date, date(2019, 1, 4));
    }

    #[test]
    fn test_between_inverted_range() {
        let series = sample_series();
        let inverted = DateRange {
            start: date(2019, 1, 6),
            end: date(2019, 1, 3),
        };
        assert!(series.between(inverted).is_empty());

        let outside = DateRange::single_day(date(2018, 6, 1));
        assert!(series.between(outside).is_empty());
    }

    #[test]
    fn test_json_round_trip_non_finite() {
        let series = ObservedSeries::new(
            "USD/EUR",
            vec![
                Observation::new(date(2019, 1, 2), f64::NAN),
                Observation::new(date(2019, 1, 3), f64::INFINITY),
                Observation::new(date(2019, 1, 4), 1.1348),
            ],
        )
        .unwrap();

        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains(r#""value":"NaN""#));
        assert!(!json.contains("null"));

        let back: ObservedSeries = serde_json::from_str(&json).unwrap();
        let values: Vec<f64> = back.iter().map(|obs| obs.value).collect();
        assert!(values[0].is_nan());
        assert!(values[1].is_infinite() && values[1].is_sign_positive());
        assert_relative_eq!(values[2], 1.1348);
    }

    #[test]
    fn test_json_round_trip() {
        let series = ObservedSeries::new(
            "USD/EUR",
            vec![
                Observation::new(date(2019, 1, 31), 1.1489),
                Observation::new(date(2019, 1, 2), 0.1 + 0.2),
            ],
        )
        .unwrap();

        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("\"column\":\"USD/EUR\""));
        assert!(json.contains("\"2019-01-02\""));

        let back: ObservedSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
        assert_eq!(back.first().unwrap().value.to_bits(), (0.1_f64 + 0.2).to_bits());
    }

    #[test]
    fn test_deserialize_revalidates() {
        let json = r#"{"column":"value","observations":[
            {"date":"2019-01-04","value":1.0},
            {"date":"2019-01-02","value":2.0}]}"#;
        let series: ObservedSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.first().unwrap().date, date(2019, 1, 2));

        let dup = r#"{"column":"value","observations":[
            {"date":"2019-01-02","value":1.0},
            {"date":"2019-01-02","value":2.0}]}"#;
        assert!(serde_json::from_str::<ObservedSeries>(dup).is_err());
    }
}
