//! System.Integer and its 64-bit counterpart

use crate::system::FpDecimal;
use fhirpath_diagnostics::ParseError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The FHIRPath `System.Integer` value, a 32-bit signed integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FpInteger(i32);

impl FpInteger {
    /// Create an integer value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Parse a base-10 integer literal bounded to 32 bits
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        input
            .parse::<i32>()
            .map(Self)
            .map_err(|e| ParseError::new("Integer", input).with_reason(e))
    }

    /// Numeric ordering of the two values
    pub fn compare(self, other: Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Return the value with inverted sign, or `None` for `i32::MIN`
    pub const fn negate(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Get the native value
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Widen to a 64-bit integer
    pub const fn to_integer64(self) -> FpInteger64 {
        FpInteger64(self.0 as i64)
    }

    /// Convert to a decimal with scale 0
    pub fn to_decimal(self) -> FpDecimal {
        FpDecimal::new(Decimal::from(self.0))
    }
}

impl fmt::Display for FpInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FpInteger {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i32> for FpInteger {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// The FHIRPath `System.Integer64` value, a 64-bit signed integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FpInteger64(i64);

impl FpInteger64 {
    /// Create an integer value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a base-10 integer literal bounded to 64 bits
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        input
            .parse::<i64>()
            .map(Self)
            .map_err(|e| ParseError::new("Integer64", input).with_reason(e))
    }

    /// Numeric ordering of the two values
    pub fn compare(self, other: Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Return the value with inverted sign, or `None` for `i64::MIN`
    pub const fn negate(self) -> Option<Self> {
        match self.0.checked_neg() {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Get the native value
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Convert to a decimal with scale 0
    pub fn to_decimal(self) -> FpDecimal {
        FpDecimal::new(Decimal::from(self.0))
    }
}

impl fmt::Display for FpInteger64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FpInteger64 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for FpInteger64 {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<FpInteger> for FpInteger64 {
    fn from(value: FpInteger) -> Self {
        value.to_integer64()
    }
}
