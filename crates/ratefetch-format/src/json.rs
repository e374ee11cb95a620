//! JSON output format.

use ratefetch_types::ObservedSeries;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON document holding the column name and all observations.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL), one observation per line.
    Ndjson,
}

/// JSON formatter.
///
/// The document style can be read back with `serde_json` into an
/// [`ObservedSeries`].
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for document style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write>(
        &self,
        series: &ObservedSeries,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, series)?;
                } else {
                    serde_json::to_writer(&mut writer, series)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for obs in series {
                    serde_json::to_writer(&mut writer, obs)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use ratefetch_types::Observation;
    use std::io::Cursor;

    fn create_test_series() -> ObservedSeries {
        let date = |d| NaiveDate::from_ymd_opt(2019, 1, d).unwrap();
        ObservedSeries::new(
            "value",
            vec![
                Observation::new(date(4), 3.7626),
                Observation::new(date(2), 3.8589),
                Observation::new(date(3), 3.7677),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_json_document_round_trip() {
        let series = create_test_series();
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new().write_series(&series, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("{\"column\":\"value\""));

        let back: ObservedSeries = serde_json::from_str(&result).unwrap();
        assert_eq!(back, series);
        let dates: Vec<_> = back.iter().map(|o| o.date.to_string()).collect();
        assert_eq!(dates, vec!["2019-01-02", "2019-01-03", "2019-01-04"]);
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let mut output = Cursor::new(Vec::new());

        formatter.write_series(&create_test_series(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: Observation = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2019, 1, 2).unwrap());
        assert_relative_eq!(first.value, 3.8589);
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_non_finite_values_read_back() {
        let date = |d| NaiveDate::from_ymd_opt(2019, 1, d).unwrap();
        let series = ObservedSeries::new(
            "USD/EUR",
            vec![
                Observation::new(date(2), f64::NAN),
                Observation::new(date(3), 1.1348),
            ],
        )
        .unwrap();

        let mut document = Cursor::new(Vec::new());
        JsonFormatter::new().write_series(&series, &mut document).unwrap();
        let text = String::from_utf8(document.into_inner()).unwrap();
        assert!(!text.contains("null"));
        let back: ObservedSeries = serde_json::from_str(&text).unwrap();
        assert!(back.first().unwrap().value.is_nan());
        assert_relative_eq!(back.last().unwrap().value, 1.1348);

        let mut lines = Cursor::new(Vec::new());
        JsonFormatter::ndjson().write_series(&series, &mut lines).unwrap();
        let text = String::from_utf8(lines.into_inner()).unwrap();
        let first: Observation = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert!(first.value.is_nan());
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter.write_series(&create_test_series(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  ")); // Indentation
    }

    #[test]
    fn test_with_style() {
        let formatter = JsonFormatter::new().with_style(JsonStyle::Ndjson);
        assert_eq!(formatter.extension(), "ndjson");
    }
}
