//! The `decimal` primitive
//!
//! FHIR decimals are exact: `1.50` carries two digits of precision and must
//! be written back as `1.50`, not `1.5`. [`Decimal`] keeps the lexical form
//! it was read from and offers conversions for arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::{Error, Result};

/// A `decimal` value in its original spelling
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimal(Number);

impl Decimal {
    pub fn as_number(&self) -> &Number {
        &self.0
    }

    /// Nearest `f64`; loses the precision the value was written with
    pub fn to_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Exact value, keeping the scale (`1.50` has scale 2)
    ///
    /// `None` when the value does not fit in 96 bits.
    pub fn to_rust_decimal(&self) -> Option<rust_decimal::Decimal> {
        let text = self.0.to_string();
        if text.contains(['e', 'E']) {
            rust_decimal::Decimal::from_scientific(&text).ok()
        } else {
            text.parse().ok()
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim() != s {
            return Err(Error::invalid_primitive("decimal", s, "surrounding whitespace"));
        }
        serde_json::from_str::<Number>(s)
            .map(Decimal)
            .map_err(|err| Error::invalid_primitive("decimal", s, err.to_string()))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal(Number::from(value))
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal(Number::from(value))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(Number::from(value))
    }
}

impl TryFrom<f64> for Decimal {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .map(Decimal)
            .ok_or_else(|| Error::invalid_primitive("decimal", &value.to_string(), "not finite"))
    }
}

impl TryFrom<rust_decimal::Decimal> for Decimal {
    type Error = Error;

    fn try_from(value: rust_decimal::Decimal) -> Result<Self> {
        value.to_string().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_the_lexical_form() {
        for text in ["185", "1.50", "-0.001", "0.0", "1e2", "6.02E23", "123456789012345678901234567890.5"] {
            let value: Decimal = text.parse().unwrap();
            assert_eq!(value.to_string(), text);
            assert_eq!(serde_json::to_string(&value).unwrap(), text);
            let back: Decimal = serde_json::from_str(text).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn precision_is_significant() {
        let short: Decimal = "1.5".parse().unwrap();
        let long: Decimal = "1.50".parse().unwrap();
        assert_ne!(short, long);
        assert_eq!(short.to_f64(), long.to_f64());
    }

    #[test]
    fn survives_a_json_value() {
        let value: Decimal = serde_json::from_value(json!(185)).unwrap();
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(185));

        let text: serde_json::Value = serde_json::from_str("[1.50, 1e2]").unwrap();
        let values: Vec<Decimal> = serde_json::from_value(text.clone()).unwrap();
        assert_eq!(values[0].to_string(), "1.50");
        assert_eq!(serde_json::to_value(&values).unwrap(), text);
    }

    #[test]
    fn rejects_malformed_decimals() {
        for text in ["", " 1", "1 ", "1.", ".5", "01", "+1", "1,5", "NaN", "abc", "\"1\""] {
            let err = text.parse::<Decimal>().unwrap_err();
            assert!(matches!(err, Error::InvalidPrimitive { kind: "decimal", .. }), "{text}");
        }
        assert!(serde_json::from_value::<Decimal>(json!("1.5")).is_err());
    }

    #[test]
    fn converts_to_exact_arithmetic() {
        let value: Decimal = "1.50".parse().unwrap();
        let exact = value.to_rust_decimal().unwrap();
        assert_eq!(exact.scale(), 2);
        assert_eq!(exact.to_string(), "1.50");

        let scientific: Decimal = "1.5e2".parse().unwrap();
        assert_eq!(scientific.to_rust_decimal().unwrap(), rust_decimal::Decimal::from(150));

        let back = Decimal::try_from(exact).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn numeric_constructors() {
        assert_eq!(Decimal::from(72).to_string(), "72");
        assert_eq!(Decimal::try_from(72.5).unwrap().to_string(), "72.5");
        assert!(Decimal::try_from(f64::NAN).is_err());
    }
}
