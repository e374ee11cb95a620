//! CSV output format.

use ratefetch_types::ObservedSeries;
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes a `Date` column in ISO format followed by the series' value
/// column. Values use the shortest representation that parses back to the
/// same `f64`.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write>(
        &self,
        series: &ObservedSeries,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "Date{d}{}", series.column())?;
        }

        for obs in series {
            writeln!(writer, "{}{d}{}", obs.date, obs.value)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
