//! FHIRPath value-layer error types

use crate::{ErrorCode, FP0001, FP0100, FP0101, FP0200};
use std::fmt;
use thiserror::Error;

/// Error returned when a literal fails to parse into a System type.
///
/// `reason` carries the underlying cause when one exists. Its text is for
/// diagnostics only and is not stable across releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Name of the System type that was requested (e.g. `Decimal`)
    pub kind: &'static str,
    /// The offending input text
    pub input: String,
    /// Underlying cause, if any
    pub reason: Option<String>,
}

impl ParseError {
    /// Create a parse error without an underlying cause
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            reason: None,
        }
    }

    /// Attach the underlying cause
    pub fn with_reason(mut self, reason: impl fmt::Display) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        FP0001
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} parse '{}'", self.kind.to_lowercase(), self.input)?;
        if let Some(reason) = &self.reason {
            write!(f, ": {}", reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Errors raised by collection and System value operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A collection with exactly one item was required
    #[error("collection is not singleton (length {length})")]
    NotSingleton { length: usize },

    /// The value's kind cannot be converted to the requested kind
    #[error("type {from} not convertible to {to}")]
    NotConvertible { from: String, to: String },

    /// Malformed literal text
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A value outside the permitted collection kinds was supplied
    #[error(
        "invalid input type {found}: inputs must be a FHIR element, System value or type descriptor"
    )]
    InvalidValueKind { found: String },
}

impl ValueError {
    /// Create a not-singleton error for a collection of the given length
    pub fn not_singleton(length: usize) -> Self {
        Self::NotSingleton { length }
    }

    /// Create a conversion error
    pub fn not_convertible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NotConvertible {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotSingleton { .. } => FP0100,
            Self::InvalidValueKind { .. } => FP0101,
            Self::NotConvertible { .. } => FP0200,
            Self::Parse(err) => err.code(),
        }
    }
}
