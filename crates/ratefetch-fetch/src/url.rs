//! Endpoint URLs and query construction.

use ratefetch_types::{DateRange, EcbSeriesKey, SeriesCode};

use crate::Query;

/// Base URL of the Banco Central do Brasil SGS series resource.
pub const BCB_BASE_URL: &str = "http://api.bcb.gov.br/dados/serie";

/// Base URL of the European Central Bank data resource.
pub const ECB_BASE_URL: &str = "https://sdw-wsrest.ecb.europa.eu/service/data";

/// ECB dataflow holding exchange rates.
pub const ECB_FLOW_REF: &str = "EXR";

/// Date format of BCB query parameters and response records.
pub const BCB_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date format of ECB query parameters.
pub const ECB_DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds the URL of a BCB series.
///
/// URL format: `{BCB_BASE_URL}/bcdata.sgs.{CODE}/dados`
///
/// # Example
///
/// ```
/// use ratefetch_fetch::url::bcb_series_url;
/// use ratefetch_types::SeriesCode;
///
/// let url = bcb_series_url(SeriesCode(10813));
/// assert_eq!(url, "http://api.bcb.gov.br/dados/serie/bcdata.sgs.10813/dados");
/// ```
#[must_use]
pub fn bcb_series_url(code: SeriesCode) -> String {
    format!("{BCB_BASE_URL}/bcdata.sgs.{code}/dados")
}

/// Builds the full BCB query for a series and date range.
#[must_use]
pub fn bcb_query(code: SeriesCode, range: DateRange) -> Query {
    Query::new(
        bcb_series_url(code),
        vec![
            ("formato", "json".to_string()),
            ("dataInicial", range.start.format(BCB_DATE_FORMAT).to_string()),
            ("dataFinal", range.end.format(BCB_DATE_FORMAT).to_string()),
        ],
    )
}

/// Builds the URL of an ECB exchange-rate series.
///
/// URL format: `{ECB_BASE_URL}/EXR/{KEY}`
///
/// # Example
///
/// ```
/// use ratefetch_fetch::url::ecb_series_url;
/// use ratefetch_types::EcbSeriesKey;
///
/// let url = ecb_series_url(&EcbSeriesKey::daily("CHF", "EUR"));
/// assert_eq!(url, "https://sdw-wsrest.ecb.europa.eu/service/data/EXR/D.CHF.EUR.SP00.A");
/// ```
#[must_use]
pub fn ecb_series_url(key: &EcbSeriesKey) -> String {
    format!("{ECB_BASE_URL}/{ECB_FLOW_REF}/{key}")
}

/// Builds the full ECB query for a series key and date range.
#[must_use]
pub fn ecb_query(key: &EcbSeriesKey, range: DateRange) -> Query {
    Query::new(
        ecb_series_url(key),
        vec![
            ("startPeriod", range.start.format(ECB_DATE_FORMAT).to_string()),
            ("endPeriod", range.end.format(ECB_DATE_FORMAT).to_string()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::resolve_at(
            NaiveDate::from_ymd_opt(2018, 12, 1),
            NaiveDate::from_ymd_opt(2019, 12, 31),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_bcb_query_params() {
        let query = bcb_query(SeriesCode::EUR, range());
        assert_eq!(query.url, "http://api.bcb.gov.br/dados/serie/bcdata.sgs.21620/dados");
        assert_eq!(
            query.params,
            vec![
                ("formato", "json".to_string()),
                ("dataInicial", "01/12/2018".to_string()),
                ("dataFinal", "31/12/2019".to_string()),
            ]
        );
    }

    #[test]
    fn test_bcb_full_url_encodes_slashes() {
        let url = bcb_query(SeriesCode::USD_BUY, range()).full_url().unwrap();
        assert_eq!(
            url,
            "http://api.bcb.gov.br/dados/serie/bcdata.sgs.10813/dados?formato=json&dataInicial=01%2F12%2F2018&dataFinal=31%2F12%2F2019"
        );
    }

    #[test]
    fn test_ecb_query_params() {
        let query = ecb_query(&EcbSeriesKey::default(), range());
        assert_eq!(
            query.full_url().unwrap(),
            "https://sdw-wsrest.ecb.europa.eu/service/data/EXR/D.USD.EUR.SP00.A?startPeriod=2018-12-01&endPeriod=2019-12-31"
        );
    }

    #[test]
    fn test_ecb_url_monthly_key() {
        let key = EcbSeriesKey {
            frequency: "M".to_string(),
            ..EcbSeriesKey::daily("GBP", "EUR")
        };
        assert!(ecb_series_url(&key).ends_with("/EXR/M.GBP.EUR.SP00.A"));
    }
}
