//! System.Decimal
//!
//! Decimals keep the scale they were written with: `1.0` and `1.00` are
//! distinct values for equality but equivalent, and compare as equal.

use crate::system::{FpInteger, FpInteger64};
use fhirpath_diagnostics::{ParseError, ValueError};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The FHIRPath `System.Decimal` value, a fixed-point decimal
#[derive(Debug, Clone, Copy, Default)]
pub struct FpDecimal(Decimal);

impl FpDecimal {
    /// Create a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Parse a decimal literal: optional sign, digits, optional fraction.
    ///
    /// Exponent notation is rejected.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if !is_decimal_literal(input) {
            return Err(ParseError::new("Decimal", input).with_reason("invalid decimal syntax"));
        }
        Decimal::from_str_exact(input)
            .map(Self)
            .map_err(|e| ParseError::new("Decimal", input).with_reason(e))
    }

    /// Create a decimal from a float, or `None` for NaN and infinities
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).map(Self)
    }

    /// Get the underlying decimal
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Number of digits after the decimal point as stored
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Exact equality: same numeric value and same stored scale
    pub fn equal(&self, other: &Self) -> bool {
        self.0 == other.0 && self.0.scale() == other.0.scale()
    }

    /// FHIRPath equivalence.
    ///
    /// Both operands are truncated (not rounded) to the smaller of the two
    /// precisions before comparing.
    pub fn equivalent(&self, other: &Self) -> bool {
        let precision = self.scale().min(other.scale());
        self.0.trunc_with_scale(precision) == other.0.trunc_with_scale(precision)
    }

    /// Numeric ordering, independent of scale
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Convert to Integer, truncating toward zero
    pub fn to_integer(&self) -> Result<FpInteger, ValueError> {
        self.0
            .trunc()
            .to_i32()
            .map(FpInteger::new)
            .ok_or_else(|| ValueError::not_convertible(format!("System.Decimal {}", self.0), "System.Integer"))
    }

    /// Convert to Integer64, truncating toward zero
    pub fn to_integer64(&self) -> Result<FpInteger64, ValueError> {
        self.0
            .trunc()
            .to_i64()
            .map(FpInteger64::new)
            .ok_or_else(|| {
                ValueError::not_convertible(format!("System.Decimal {}", self.0), "System.Integer64")
            })
    }

    /// The decimal as a JSON number carrying the stored scale
    pub fn to_number(&self) -> serde_json::Result<serde_json::Number> {
        self.0.to_string().parse()
    }

    /// Nearest representable `f64`
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

/// `[+-]?[0-9]+(\.[0-9]+)?`
fn is_decimal_literal(input: &str) -> bool {
    let unsigned = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

impl PartialEq for FpDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for FpDecimal {}

impl fmt::Display for FpDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FpDecimal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for FpDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

// Structured form is a bare JSON numeral carrying the stored scale
impl Serialize for FpDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_number()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FpDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Self::parse(&number.to_string()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> FpDecimal {
        FpDecimal::parse(s).unwrap()
    }

    #[rstest]
    #[case("0", "0")]
    #[case("1.0", "1.0")]
    #[case("1.00", "1.00")]
    #[case("-3.140", "-3.140")]
    #[case("+2.5", "2.5")]
    fn test_parse_preserves_scale(#[case] input: &str, #[case] canonical: &str) {
        assert_eq!(dec(input).to_string(), canonical);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.")]
    #[case(".5")]
    #[case("1e5")]
    #[case("1.2.3")]
    #[case("1_000")]
    #[case("-")]
    fn test_parse_rejects(#[case] input: &str) {
        let err = FpDecimal::parse(input).unwrap_err();
        assert_eq!(err.kind, "Decimal");
        assert_eq!(err.input, input);
    }

    // Precision is bounded by the 96-bit mantissa: at most 28 fractional digits
    #[rstest]
    #[case("0.1234567890123456789012345678")]
    #[case("79228162514264337593543950335")]
    #[case("-79228162514264337593543950335")]
    fn test_parse_at_precision_bound(#[case] input: &str) {
        assert_eq!(dec(input).to_string(), input);
    }

    #[rstest]
    #[case("0.1234567890123456789012345678901")]
    #[case("1.00000000000000000000000000000")]
    #[case("123456789012345678901234567890.5")]
    fn test_parse_rejects_beyond_precision_bound(#[case] input: &str) {
        let err = FpDecimal::parse(input).unwrap_err();
        assert_eq!(err.kind, "Decimal");
        assert_eq!(err.input, input);
        assert!(err.reason.is_some());
    }

    #[test]
    fn test_to_number_keeps_scale() {
        assert_eq!(dec("2.500").to_number().unwrap().to_string(), "2.500");
        assert_eq!(dec("-7").to_number().unwrap().to_string(), "-7");
    }

    #[test]
    fn test_equal_includes_scale() {
        assert!(dec("1.0").equal(&dec("1.0")));
        assert!(!dec("1.00").equal(&dec("1.0")));
        assert_ne!(dec("1.00"), dec("1.0"));
    }

    #[test]
    fn test_compare_ignores_scale() {
        assert_eq!(dec("1.00").compare(&dec("1.0")), Ordering::Equal);
        assert_eq!(dec("1.05").compare(&dec("1.1")), Ordering::Less);
        assert_eq!(dec("-2").compare(&dec("-2.5")), Ordering::Greater);
    }

    #[rstest]
    #[case("1.0", "1.00", true)]
    #[case("1.05", "1.1", false)]
    #[case("1.19", "1.1", true)]
    #[case("1.9", "1", true)]
    #[case("-1.29", "-1.2", true)]
    #[case("2", "2.0", true)]
    #[case("2", "3.0", false)]
    fn test_equivalent_truncates(#[case] lhs: &str, #[case] rhs: &str, #[case] expected: bool) {
        assert_eq!(dec(lhs).equivalent(&dec(rhs)), expected);
        assert_eq!(dec(rhs).equivalent(&dec(lhs)), expected);
    }

    #[test]
    fn test_integer_conversion_truncates_toward_zero() {
        assert_eq!(dec("3.99").to_integer().unwrap(), FpInteger::new(3));
        assert_eq!(dec("-3.99").to_integer().unwrap(), FpInteger::new(-3));
        assert_eq!(dec("-0.5").to_integer64().unwrap(), FpInteger64::new(0));
    }

    #[test]
    fn test_integer_conversion_out_of_range() {
        let err = dec("2147483648.5").to_integer().unwrap_err();
        assert!(matches!(err, ValueError::NotConvertible { .. }));
        assert_eq!(dec("2147483648.5").to_integer64().unwrap(), FpInteger64::new(2147483648));
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(dec("0.25").to_f64(), 0.25);
        assert_eq!(dec("-12.5").to_f64(), -12.5);
        assert!(FpDecimal::from_f64(f64::NAN).is_none());
        assert_eq!(FpDecimal::from_f64(1.5).unwrap().compare(&dec("1.5")), Ordering::Equal);
    }

    #[test]
    fn test_structured_form_is_bare_numeral() {
        assert_eq!(serde_json::to_string(&dec("1.00")).unwrap(), "1.00");
        assert_eq!(serde_json::to_string(&dec("-0.5")).unwrap(), "-0.5");
        let decoded: FpDecimal = serde_json::from_str("12.340").unwrap();
        assert!(decoded.equal(&dec("12.340")));
        assert!(serde_json::from_str::<FpDecimal>("\"1.0\"").is_err());
    }
}
