//! Remote series identifiers.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Banco Central do Brasil SGS series code.
///
/// Codes can be looked up in the SGS catalogue; the two used for the
/// income declaration are available as constants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct SeriesCode(pub u32);

impl SeriesCode {
    /// Exchange rate, free, United States dollar (buy).
    pub const USD_BUY: Self = Self(10813);
    /// Exchange rate, free, Euro (buy).
    pub const EUR: Self = Self(21620);
}

impl Default for SeriesCode {
    fn default() -> Self {
        Self::USD_BUY
    }
}

/// European Central Bank `EXR` series key.
///
/// Renders as `<frequency>.<currency>.<currency_denom>.<rate_type>.<variation>`,
/// e.g. `D.USD.EUR.SP00.A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcbSeriesKey {
    /// Sampling frequency (`D` daily, `M` monthly, `A` annual).
    pub frequency: String,
    /// Currency being measured.
    pub currency: String,
    /// Currency against which it is measured.
    pub currency_denom: String,
    /// Exchange rate type (`SP00` is the foreign exchange reference rate).
    pub rate_type: String,
    /// Series variation (`A` is the average or standardised measure).
    pub variation: String,
}

impl EcbSeriesKey {
    /// Daily reference rate of `currency` against `currency_denom`.
    #[must_use]
    pub fn daily(currency: &str, currency_denom: &str) -> Self {
        Self {
            currency: currency.to_uppercase(),
            currency_denom: currency_denom.to_uppercase(),
            ..Self::default()
        }
    }
}

impl Default for EcbSeriesKey {
    fn default() -> Self {
        Self {
            frequency: "D".to_string(),
            currency: "USD".to_string(),
            currency_denom: "EUR".to_string(),
            rate_type: "SP00".to_string(),
            variation: "A".to_string(),
        }
    }
}

impl std::fmt::Display for EcbSeriesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.frequency, self.currency, self.currency_denom, self.rate_type, self.variation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_code_default() {
        assert_eq!(SeriesCode::default(), SeriesCode(10813));
        assert_eq!(SeriesCode::EUR.to_string(), "21620");
        assert_eq!(u32::from(SeriesCode::USD_BUY), 10813);
    }

    #[test]
    fn test_ecb_key_default() {
        assert_eq!(EcbSeriesKey::default().to_string(), "D.USD.EUR.SP00.A");
    }

    #[test]
    fn test_ecb_key_daily_uppercases() {
        let key = EcbSeriesKey::daily("chf", "eur");
        assert_eq!(key.to_string(), "D.CHF.EUR.SP00.A");
    }
}
