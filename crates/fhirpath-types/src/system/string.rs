//! System.String

use crate::escape;
use fhirpath_diagnostics::ParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The FHIRPath `System.String` value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FpString(String);

impl FpString {
    /// Create a string value from already-decoded text
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse a single-quoted string literal and decode its escapes
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let unquoted = input
            .strip_prefix('\'')
            .ok_or_else(|| ParseError::new("String", input).with_reason("missing prefix quote"))?;
        let unquoted = unquoted
            .strip_suffix('\'')
            .ok_or_else(|| ParseError::new("String", input).with_reason("missing suffix quote"))?;

        escape::unescape(unquoted)
            .map(Self)
            .map_err(|e| ParseError::new("String", input).with_reason(e))
    }

    /// Case- and whitespace-insensitive comparison.
    ///
    /// Only tab, newline and carriage return are folded to a space; runs of
    /// whitespace are not collapsed.
    pub fn equivalent(&self, other: &Self) -> bool {
        fold(&self.0) == fold(&other.0)
    }

    /// Ordinal ordering of the underlying text
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the native value
    pub fn value(&self) -> String {
        self.0.clone()
    }

    /// Consume into the native value
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

impl fmt::Display for FpString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FpString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for FpString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FpString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for FpString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("''", "")]
    #[case("'hello'", "hello")]
    #[case(r"'\n'", "\n")]
    #[case(r"'\\n'", r"\n")]
    #[case(r"'it\'s'", "it's")]
    #[case(r"'ABC'", "ABC")]
    #[case("'это'", "это")]
    fn test_parse(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(FpString::parse(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("hello", "missing prefix quote")]
    #[case("'hello", "missing suffix quote")]
    #[case("hello'", "missing prefix quote")]
    #[case("", "missing prefix quote")]
    #[case("'", "missing suffix quote")]
    fn test_parse_missing_quotes(#[case] input: &str, #[case] reason: &str) {
        let err = FpString::parse(input).unwrap_err();
        assert_eq!(err.kind, "String");
        assert_eq!(err.reason.as_deref(), Some(reason));
    }

    #[test]
    fn test_parse_bad_escape() {
        let err = FpString::parse(r"'\q'").unwrap_err();
        assert_eq!(err.input, r"'\q'");
        assert!(err.reason.is_some());
    }

    #[rstest]
    #[case("HELLO", "hello", true)]
    #[case("\t\r\nHELLO ", "   hello ", true)]
    #[case("a  b", "a b", false)]
    #[case("a\u{000B}b", "a b", false)]
    #[case("a\u{000C}b", "a b", false)]
    #[case("a\u{00A0}b", "a b", false)]
    #[case("a\u{2003}b", "a b", false)]
    #[case("hello", "world", false)]
    fn test_equivalent(#[case] lhs: &str, #[case] rhs: &str, #[case] expected: bool) {
        assert_eq!(FpString::new(lhs).equivalent(&FpString::new(rhs)), expected);
    }

    #[test]
    fn test_compare_is_ordinal() {
        assert_eq!(FpString::new("a").compare(&FpString::new("b")), Ordering::Less);
        assert_eq!(FpString::new("B").compare(&FpString::new("a")), Ordering::Less);
        assert_eq!(FpString::new("x").compare(&FpString::new("x")), Ordering::Equal);
    }

    #[test]
    fn test_display_is_raw_text() {
        assert_eq!(FpString::parse(r"'a\tb'").unwrap().to_string(), "a\tb");
        assert_eq!(serde_json::to_string(&FpString::new("a\"b")).unwrap(), r#""a\"b""#);
    }
}
