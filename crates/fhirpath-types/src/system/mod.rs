//! FHIRPath System values
//!
//! The closed set of primitive value kinds of the `System` namespace, with
//! parsing, comparison, equivalence and conversion.

mod boolean;
mod decimal;
mod integer;
mod string;
mod system_type;

pub use boolean::FpBoolean;
pub use decimal::FpDecimal;
pub use integer::{FpInteger, FpInteger64};
pub use string::FpString;
pub use system_type::SystemType;

use fhirpath_diagnostics::{ParseError, ValueError};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A System value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemValue {
    /// Boolean value
    Boolean(FpBoolean),
    /// 32-bit integer value
    Integer(FpInteger),
    /// 64-bit integer value
    Integer64(FpInteger64),
    /// Fixed-point decimal value
    Decimal(FpDecimal),
    /// String value
    String(FpString),
}

impl SystemValue {
    /// Get the System type of this value
    pub fn system_type(&self) -> SystemType {
        match self {
            Self::Boolean(_) => SystemType::Boolean,
            Self::Integer(_) => SystemType::Integer,
            Self::Integer64(_) => SystemType::Integer64,
            Self::Decimal(_) => SystemType::Decimal,
            Self::String(_) => SystemType::String,
        }
    }

    /// Get the qualified type name (e.g. `System.Integer`)
    pub fn type_name(&self) -> &'static str {
        self.system_type().qualified_name()
    }

    /// Parse literal text as the given System type
    pub fn parse(kind: SystemType, text: &str) -> Result<Self, ParseError> {
        match kind {
            SystemType::Boolean => FpBoolean::parse(text).map(Self::Boolean),
            SystemType::Integer => FpInteger::parse(text).map(Self::Integer),
            SystemType::Integer64 => FpInteger64::parse(text).map(Self::Integer64),
            SystemType::Decimal => FpDecimal::parse(text).map(Self::Decimal),
            SystemType::String => FpString::parse(text).map(Self::String),
            other => Err(ParseError::new(other.name(), text).with_reason("no literal form for this type")),
        }
    }

    /// Strict equality. Decimals must also agree on scale.
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// FHIRPath equivalence.
    ///
    /// Integers and decimals are compared across kinds after widening to
    /// decimal. Other kinds must match.
    pub fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a.equivalent(b),
            _ => match (self.to_decimal(), other.to_decimal()) {
                (Some(a), Some(b)) => a.equivalent(&b),
                _ => false,
            },
        }
    }

    /// Ordering between two values, or `None` when they are not comparable.
    ///
    /// Booleans have no ordering.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.compare(*b)),
            (Self::Integer64(a), Self::Integer64(b)) => Some(a.compare(*b)),
            (Self::String(a), Self::String(b)) => Some(a.compare(b)),
            _ => match (self.to_decimal(), other.to_decimal()) {
                (Some(a), Some(b)) => Some(a.compare(&b)),
                _ => None,
            },
        }
    }

    /// Widen a numeric value to decimal
    pub fn to_decimal(&self) -> Option<FpDecimal> {
        match self {
            Self::Integer(v) => Some(v.to_decimal()),
            Self::Integer64(v) => Some(v.to_decimal()),
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Encode as JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode JSON text as the given System type
    pub fn from_json(kind: SystemType, text: &str) -> Result<Self, ValueError> {
        let decoded = match kind {
            SystemType::Boolean => serde_json::from_str(text).map(Self::Boolean),
            SystemType::Integer => serde_json::from_str(text).map(Self::Integer),
            SystemType::Integer64 => serde_json::from_str(text).map(Self::Integer64),
            SystemType::Decimal => serde_json::from_str(text).map(Self::Decimal),
            SystemType::String => serde_json::from_str(text).map(Self::String),
            other => return Err(ValueError::not_convertible("JSON", other.qualified_name())),
        };
        decoded.map_err(|e| ParseError::new(kind.name(), text).with_reason(e).into())
    }

    /// Get the boolean, if this is one
    pub fn as_boolean(&self) -> Option<FpBoolean> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the integer, if this is one
    pub fn as_integer(&self) -> Option<FpInteger> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the 64-bit integer, if this is one
    pub fn as_integer64(&self) -> Option<FpInteger64> {
        match self {
            Self::Integer64(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the decimal, if this is one
    pub fn as_decimal(&self) -> Option<FpDecimal> {
        match self {
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the string, if this is one
    pub fn as_string(&self) -> Option<&FpString> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for SystemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => fmt::Display::fmt(v, f),
            Self::Integer(v) => fmt::Display::fmt(v, f),
            Self::Integer64(v) => fmt::Display::fmt(v, f),
            Self::Decimal(v) => fmt::Display::fmt(v, f),
            Self::String(v) => fmt::Display::fmt(v, f),
        }
    }
}

// Untagged: the kind is carried by context, not by the encoding
impl Serialize for SystemValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Boolean(v) => v.serialize(serializer),
            Self::Integer(v) => v.serialize(serializer),
            Self::Integer64(v) => v.serialize(serializer),
            Self::Decimal(v) => v.serialize(serializer),
            Self::String(v) => v.serialize(serializer),
        }
    }
}

impl From<FpBoolean> for SystemValue {
    fn from(value: FpBoolean) -> Self {
        Self::Boolean(value)
    }
}

impl From<FpInteger> for SystemValue {
    fn from(value: FpInteger) -> Self {
        Self::Integer(value)
    }
}

impl From<FpInteger64> for SystemValue {
    fn from(value: FpInteger64) -> Self {
        Self::Integer64(value)
    }
}

impl From<FpDecimal> for SystemValue {
    fn from(value: FpDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<FpString> for SystemValue {
    fn from(value: FpString) -> Self {
        Self::String(value)
    }
}

impl From<bool> for SystemValue {
    fn from(value: bool) -> Self {
        Self::Boolean(FpBoolean::new(value))
    }
}

impl From<i32> for SystemValue {
    fn from(value: i32) -> Self {
        Self::Integer(FpInteger::new(value))
    }
}

impl From<i64> for SystemValue {
    fn from(value: i64) -> Self {
        Self::Integer64(FpInteger64::new(value))
    }
}

impl From<&str> for SystemValue {
    fn from(value: &str) -> Self {
        Self::String(FpString::new(value))
    }
}

impl From<String> for SystemValue {
    fn from(value: String) -> Self {
        Self::String(FpString::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(kind: SystemType, text: &str) -> SystemValue {
        SystemValue::parse(kind, text).unwrap()
    }

    #[test]
    fn test_parse_dispatches_on_kind() {
        assert_eq!(parse(SystemType::Boolean, "true"), SystemValue::from(true));
        assert_eq!(parse(SystemType::Integer, "-3"), SystemValue::from(-3));
        assert_eq!(parse(SystemType::Integer64, "-3"), SystemValue::from(-3_i64));
        assert_eq!(parse(SystemType::String, "'x'"), SystemValue::from("x"));
        assert_eq!(parse(SystemType::Decimal, "1.50").to_string(), "1.50");
    }

    #[test]
    fn test_parse_without_literal_form() {
        let err = SystemValue::parse(SystemType::Quantity, "4 'mg'").unwrap_err();
        assert_eq!(err.kind, "Quantity");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SystemValue::from(true).type_name(), "System.Boolean");
        assert_eq!(SystemValue::from(1_i64).type_name(), "System.Integer64");
        assert_eq!(parse(SystemType::Decimal, "1.0").system_type(), SystemType::Decimal);
    }

    #[test]
    fn test_numeric_equivalence_across_kinds() {
        let one = SystemValue::from(1);
        let one_point_oh = parse(SystemType::Decimal, "1.0");
        assert!(one.equivalent(&one_point_oh));
        assert!(!one.equal(&one_point_oh));
        assert!(!one.equivalent(&SystemValue::from("1")));
        assert!(!SystemValue::from(true).equivalent(&one));
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            SystemValue::from(1).compare(&SystemValue::from(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            parse(SystemType::Decimal, "2.5").compare(&SystemValue::from(2_i64)),
            Some(Ordering::Greater)
        );
        assert_eq!(SystemValue::from(true).compare(&SystemValue::from(false)), None);
        assert_eq!(SystemValue::from("a").compare(&SystemValue::from(1)), None);
    }

    #[test]
    fn test_json_encoding() {
        assert_eq!(SystemValue::from(true).to_json().unwrap(), "true");
        assert_eq!(SystemValue::from(-7).to_json().unwrap(), "-7");
        assert_eq!(parse(SystemType::Decimal, "0.10").to_json().unwrap(), "0.10");
        assert_eq!(SystemValue::from("hi").to_json().unwrap(), "\"hi\"");
    }

    #[test]
    fn test_json_decoding() {
        let decimal = SystemValue::from_json(SystemType::Decimal, "0.10").unwrap();
        assert_eq!(decimal, parse(SystemType::Decimal, "0.10"));
        assert_eq!(
            SystemValue::from_json(SystemType::String, "\"hi\"").unwrap(),
            SystemValue::from("hi")
        );

        let err = SystemValue::from_json(SystemType::Integer, "\"1\"").unwrap_err();
        assert!(matches!(err, ValueError::Parse(_)));
        let err = SystemValue::from_json(SystemType::Date, "\"2020\"").unwrap_err();
        assert!(matches!(err, ValueError::NotConvertible { .. }));
    }
}
