//! FHIRPath type system
//!
//! This crate defines the value-level building blocks of FHIRPath:
//! - System types (Boolean, Integer, Integer64, Decimal, String) with their
//!   parse, comparison and equivalence rules
//! - The escape decoder used when reading string literals
//! - Reflection descriptors returned by type introspection

pub mod escape;
pub mod reflection;
pub mod system;

pub use reflection::*;
pub use system::*;
