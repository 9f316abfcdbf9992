//! FHIRPath error codes following a structured numbering system
//!
//! Error code ranges:
//! - FP0001-FP0099: Literal parse errors
//! - FP0100-FP0199: Collection arity and construction errors
//! - FP0200-FP0299: Value conversion errors
//! - FP0300-FP0399: Collaborator errors (resolver, tracer)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a literal parse error (0001-0099)
    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a collection error (0100-0199)
    pub const fn is_collection_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a conversion error (0200-0299)
    pub const fn is_conversion_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a collaborator error (0300-0399)
    pub const fn is_collaborator_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FP{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(
        1,
        ErrorInfo::new("Invalid literal")
            .with_help("Check the literal against the syntax of the requested System type"),
    );

    map.insert(
        100,
        ErrorInfo::new("Collection is not a singleton")
            .with_help("The operation requires a collection with exactly one item"),
    );
    map.insert(
        101,
        ErrorInfo::new("Invalid collection value kind")
            .with_help("Collections may only hold FHIR elements, System values and type descriptors"),
    );

    map.insert(200, ErrorInfo::new("Value is not convertible"));

    map.insert(300, ErrorInfo::new("No resolver configured"));
    map.insert(301, ErrorInfo::new("Reference resolution failed"));
    map.insert(302, ErrorInfo::new("Trace output failed"));

    map
});

// Parse errors
pub const FP0001: ErrorCode = ErrorCode::new(1);

// Collection errors
pub const FP0100: ErrorCode = ErrorCode::new(100);
pub const FP0101: ErrorCode = ErrorCode::new(101);

// Conversion errors
pub const FP0200: ErrorCode = ErrorCode::new(200);

// Collaborator errors
pub const FP0300: ErrorCode = ErrorCode::new(300);
pub const FP0301: ErrorCode = ErrorCode::new(301);
pub const FP0302: ErrorCode = ErrorCode::new(302);
