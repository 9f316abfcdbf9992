//! FHIRPath diagnostics and error handling
//!
//! This crate provides the error taxonomy shared by the value layer:
//! - `ValueError`, the recoverable failures of collection and value operations
//! - `ParseError`, the payload of a failed literal parse
//! - `ErrorCode`, the stable code attached to every error kind

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for value-layer operations
pub type Result<T> = std::result::Result<T, ValueError>;
