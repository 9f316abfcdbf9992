//! FHIR element model for FHIRPath
//!
//! This crate provides:
//! - The `Element` trait through which externally owned FHIR data is seen
//! - Built-in R4 primitive elements
//! - A JSON-backed element for complex types and resources
//! - Conversion between elements and System values

pub mod convert;
pub mod element;
pub mod json;
pub mod r4;

pub use convert::*;
pub use element::*;
pub use json::*;
pub use r4::*;
