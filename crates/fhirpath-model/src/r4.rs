//! FHIR R4 primitive elements

use crate::element::{Element, ElementKind, Primitive};
use fhirpath_types::FpDecimal;
use serde_json::Value;

/// Primitive types whose value is a 32-bit integer
pub const INTEGER_TYPES: &[&str] = &["integer", "positiveInt", "unsignedInt"];

/// Primitive types whose value is a string
pub const STRING_TYPES: &[&str] = &[
    "string",
    "code",
    "id",
    "markdown",
    "uri",
    "url",
    "canonical",
    "oid",
    "uuid",
];

/// FHIR `boolean`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FhirBoolean {
    value: bool,
}

impl FhirBoolean {
    pub const fn new(value: bool) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> bool {
        self.value
    }
}

impl Element for FhirBoolean {
    fn type_name(&self) -> &str {
        "boolean"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Primitive
    }

    fn primitive(&self) -> Option<Primitive<'_>> {
        Some(Primitive::Boolean(self.value))
    }

    fn to_json(&self) -> Value {
        Value::Bool(self.value)
    }
}

/// FHIR `integer` and its constrained profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FhirInteger {
    type_name: &'static str,
    value: i32,
}

impl FhirInteger {
    /// Create an `integer` element
    pub const fn new(value: i32) -> Self {
        Self {
            type_name: "integer",
            value,
        }
    }

    /// Create a `positiveInt` element. Returns `None` unless `value > 0`.
    pub const fn positive_int(value: i32) -> Option<Self> {
        if value > 0 {
            Some(Self {
                type_name: "positiveInt",
                value,
            })
        } else {
            None
        }
    }

    /// Create an `unsignedInt` element. Returns `None` for negative values.
    pub const fn unsigned_int(value: i32) -> Option<Self> {
        if value >= 0 {
            Some(Self {
                type_name: "unsignedInt",
                value,
            })
        } else {
            None
        }
    }

    pub const fn value(&self) -> i32 {
        self.value
    }
}

impl Element for FhirInteger {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Primitive
    }

    fn primitive(&self) -> Option<Primitive<'_>> {
        Some(Primitive::Integer(self.value))
    }

    fn to_json(&self) -> Value {
        Value::from(self.value)
    }
}

/// FHIR `integer64`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FhirInteger64 {
    value: i64,
}

impl FhirInteger64 {
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl Element for FhirInteger64 {
    fn type_name(&self) -> &str {
        "integer64"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Primitive
    }

    fn primitive(&self) -> Option<Primitive<'_>> {
        Some(Primitive::Integer64(self.value))
    }

    // integer64 is carried as a JSON string in FHIR resources
    fn to_json(&self) -> Value {
        Value::String(self.value.to_string())
    }
}

/// FHIR `decimal`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FhirDecimal {
    value: FpDecimal,
}

impl FhirDecimal {
    pub const fn new(value: FpDecimal) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> FpDecimal {
        self.value
    }
}

impl Element for FhirDecimal {
    fn type_name(&self) -> &str {
        "decimal"
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Primitive
    }

    fn primitive(&self) -> Option<Primitive<'_>> {
        Some(Primitive::Decimal(self.value))
    }

    fn to_json(&self) -> Value {
        match self.value.to_number() {
            Ok(number) => Value::Number(number),
            Err(err) => {
                log::warn!("decimal {} encoded as a string: {}", self.value, err);
                Value::String(self.value.to_string())
            }
        }
    }
}

/// FHIR `string` and the primitive types derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FhirString {
    type_name: &'static str,
    value: String,
}

impl FhirString {
    /// Create a `string` element
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            type_name: "string",
            value: value.into(),
        }
    }

    /// Create an element of a string-derived type such as `code` or `uri`.
    ///
    /// Returns `None` when `type_name` is not string-like.
    pub fn with_type(type_name: &str, value: impl Into<String>) -> Option<Self> {
        STRING_TYPES
            .iter()
            .copied()
            .find(|name| *name == type_name)
            .map(|name| Self {
                type_name: name,
                value: value.into(),
            })
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Element for FhirString {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Primitive
    }

    fn primitive(&self) -> Option<Primitive<'_>> {
        Some(Primitive::String(&self.value))
    }

    fn to_json(&self) -> Value {
        Value::String(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_profiles() {
        assert_eq!(FhirInteger::positive_int(1).unwrap().type_name(), "positiveInt");
        assert!(FhirInteger::positive_int(0).is_none());
        assert_eq!(FhirInteger::unsigned_int(0).unwrap().type_name(), "unsignedInt");
        assert!(FhirInteger::unsigned_int(-1).is_none());
    }

    #[test]
    fn test_string_derived_types() {
        let code = FhirString::with_type("code", "final").unwrap();
        assert_eq!(code.type_name(), "code");
        assert_eq!(code.primitive(), Some(Primitive::String("final")));
        assert!(FhirString::with_type("boolean", "true").is_none());
    }

    #[test]
    fn test_json_forms() {
        assert_eq!(FhirBoolean::new(true).to_json(), Value::Bool(true));
        assert_eq!(FhirInteger::new(-4).to_json(), Value::from(-4));
        assert_eq!(FhirInteger64::new(9).to_json(), Value::String("9".into()));
        assert_eq!(FhirString::new("x").to_json(), Value::String("x".into()));
        let decimal = FhirDecimal::new(FpDecimal::parse("1.50").unwrap());
        assert_eq!(serde_json::to_string(&decimal.to_json()).unwrap(), "1.50");
    }

    #[test]
    fn test_decimal_json_is_a_number() {
        let small = FhirDecimal::new(FpDecimal::parse("-0.0000000000000000000000000010").unwrap());
        let json = small.to_json();
        assert!(json.is_number());
        assert_eq!(json.to_string(), "-0.0000000000000000000000000010");
    }
}
