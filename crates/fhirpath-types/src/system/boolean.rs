//! System.Boolean

use fhirpath_diagnostics::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The FHIRPath `System.Boolean` value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FpBoolean(bool);

impl FpBoolean {
    /// Create a boolean value
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Parse a boolean literal. Only `true` and `false` are accepted.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match input {
            "true" => Ok(Self(true)),
            "false" => Ok(Self(false)),
            _ => Err(ParseError::new("Boolean", input)),
        }
    }

    /// Return the inverse polarity
    pub const fn negate(self) -> Self {
        Self(!self.0)
    }

    /// Get the native value
    pub const fn value(self) -> bool {
        self.0
    }
}

impl fmt::Display for FpBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FpBoolean {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<bool> for FpBoolean {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<FpBoolean> for bool {
    fn from(value: FpBoolean) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    fn test_parse(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(FpBoolean::parse(input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("bad value")]
    #[case("b")]
    #[case("TRUE")]
    #[case("True")]
    #[case("FALSE")]
    #[case("False")]
    #[case("1")]
    #[case("0")]
    #[case("")]
    fn test_parse_rejects(#[case] input: &str) {
        let err = FpBoolean::parse(input).unwrap_err();
        assert_eq!(err.kind, "Boolean");
        assert_eq!(err.input, input);
    }

    #[test]
    fn test_negate() {
        assert_eq!(FpBoolean::new(true).negate(), FpBoolean::new(false));
        assert_eq!(FpBoolean::new(false).negate().negate(), FpBoolean::new(false));
    }

    #[test]
    fn test_structured_form() {
        assert_eq!(serde_json::to_string(&FpBoolean::new(true)).unwrap(), "true");
        let decoded: FpBoolean = serde_json::from_str("false").unwrap();
        assert_eq!(decoded, FpBoolean::new(false));
        assert_eq!(FpBoolean::new(false).to_string(), "false");
    }
}
