//! FHIRPath value and type core for Rust
//!
//! This crate bundles the pieces an evaluator is built on:
//! - System value types with parsing, equality, equivalence and ordering
//! - Reflection descriptors (`SimpleTypeInfo`, `ClassInfo`, ...)
//! - The FHIR element seam and its conversion to System values
//! - Collections, namespaces and the evaluation context
//!
//! # Example
//!
//! ```
//! use fhirpath::{Collection, SystemType, SystemValue};
//!
//! let one = SystemValue::parse(SystemType::Integer, "1").unwrap();
//! let also_one = SystemValue::parse(SystemType::Decimal, "1.0").unwrap();
//! assert!(one.equivalent(&also_one));
//!
//! let c = Collection::of([one]);
//! assert!(c.is_singleton());
//! ```

pub use fhirpath_diagnostics as diagnostics;
pub use fhirpath_eval as eval;
pub use fhirpath_model as model;
pub use fhirpath_types as types;

// Convenience re-exports
pub use fhirpath_diagnostics::{ParseError, Result, ValueError};
pub use fhirpath_eval::{
    Collection, EvaluationContext, EvaluationContextBuilder, NamespaceRegistry, Value,
};
pub use fhirpath_model::{Element, ElementKind, JsonElement};
pub use fhirpath_types::{SystemType, SystemValue, TypeInfo};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
