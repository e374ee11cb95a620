//! Serde helpers for `f64` values that may be non-finite.
//!
//! JSON has no literal for `NaN` or infinities and `serde_json` writes them
//! as `null`, which cannot be read back into an `f64`. Use with
//! `#[serde(with = "ratefetch_types::float")]`: finite values stay plain
//! numbers, non-finite ones are written as `"NaN"`, `"inf"` or `"-inf"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `value` as a number, or as a string when it is not finite.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

/// Deserializes a number, or a string holding one (`NaN`, `inf`, `-inf`).
///
/// # Errors
///
/// Returns an error if the input is neither a number nor a numeric string.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid number '{text}'"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper(#[serde(with = "super")] f64);

    #[test]
    fn test_finite_stays_numeric() {
        assert_eq!(serde_json::to_string(&Wrapper(3.6678)).unwrap(), "3.6678");
        let back: Wrapper = serde_json::from_str("3.6678").unwrap();
        assert_eq!(back.0.to_bits(), 3.6678_f64.to_bits());
    }

    #[test]
    fn test_non_finite_as_strings() {
        assert_eq!(serde_json::to_string(&Wrapper(f64::NAN)).unwrap(), r#""NaN""#);
        assert_eq!(serde_json::to_string(&Wrapper(f64::INFINITY)).unwrap(), r#""inf""#);
        assert_eq!(
            serde_json::to_string(&Wrapper(f64::NEG_INFINITY)).unwrap(),
            r#""-inf""#
        );

        assert!(serde_json::from_str::<Wrapper>(r#""NaN""#).unwrap().0.is_nan());
        let neg: Wrapper = serde_json::from_str(r#""-inf""#).unwrap();
        assert!(neg.0.is_infinite() && neg.0.is_sign_negative());
    }

    #[test]
    fn test_rejects_null_and_text() {
        assert!(serde_json::from_str::<Wrapper>("null").is_err());
        assert!(serde_json::from_str::<Wrapper>(r#""abc""#).is_err());
    }
}
