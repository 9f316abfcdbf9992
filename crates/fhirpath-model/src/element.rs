//! The element seam between FHIRPath and a FHIR object model

use fhirpath_types::FpDecimal;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an externally owned element
pub type ElementRef = Arc<dyn Element>;

/// Structural category of a FHIR type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Primitive data type (`boolean`, `string`, ...)
    Primitive,
    /// Complex data type (`HumanName`, `Coding`, ...)
    Complex,
    /// Backbone element declared inline in a resource
    Backbone,
    /// Resource without narrative (`Bundle`, `Binary`, `Parameters`)
    Resource,
    /// Resource deriving from DomainResource
    DomainResource,
}

impl ElementKind {
    /// Name of the FHIR base type for this kind
    pub const fn base_type(&self) -> &'static str {
        match self {
            Self::Primitive => "FHIR.PrimitiveType",
            Self::Complex => "FHIR.Element",
            Self::Backbone => "FHIR.BackboneElement",
            Self::Resource => "FHIR.Resource",
            Self::DomainResource => "FHIR.DomainResource",
        }
    }
}

/// Borrowed view of a primitive element's value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    Boolean(bool),
    Integer(i32),
    Integer64(i64),
    Decimal(FpDecimal),
    String(&'a str),
}

/// A value from an external FHIR object model
pub trait Element: fmt::Debug + Send + Sync {
    /// Declared FHIR type name (e.g. `boolean`, `Patient`)
    fn type_name(&self) -> &str;

    /// Structural category of the type
    fn kind(&self) -> ElementKind;

    /// Value of a primitive element, `None` for everything else
    fn primitive(&self) -> Option<Primitive<'_>> {
        None
    }

    /// JSON representation of the element
    fn to_json(&self) -> serde_json::Value;
}
