//! FHIRPath runtime values

use crate::namespace::{REGISTRY, RuntimeType};
use fhirpath_model::{Element, ElementRef, from_element};
use fhirpath_types::{FpBoolean, FpDecimal, FpInteger, FpInteger64, FpString, SystemValue, TypeInfo};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// A single item of a collection
#[derive(Debug, Clone)]
pub enum Value {
    /// Externally owned FHIR element
    Element(ElementRef),
    /// System value
    System(SystemValue),
    /// Reflection descriptor
    TypeInfo(TypeInfo),
}

impl Value {
    /// Wrap a FHIR element
    pub fn element(element: impl Element + 'static) -> Self {
        Self::Element(Arc::new(element))
    }

    /// Get the system value, if this is one
    pub fn as_system(&self) -> Option<&SystemValue> {
        match self {
            Self::System(v) => Some(v),
            _ => None,
        }
    }

    /// Get the element handle, if this is one
    pub fn as_element(&self) -> Option<&ElementRef> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Statically known shape of this value
    pub fn runtime_type(&self) -> RuntimeType {
        match self {
            Self::Element(e) => RuntimeType::Ref(Box::new(RuntimeType::Domain {
                name: e.type_name().to_string(),
                kind: e.kind(),
            })),
            Self::System(v) => RuntimeType::System(v.system_type()),
            Self::TypeInfo(info) => RuntimeType::Reflection(info.kind_name()),
        }
    }

    /// Namespace-qualified type name (e.g. `FHIR.Patient`, `System.Integer`)
    pub fn type_name(&self) -> String {
        let ty = self.runtime_type();
        REGISTRY
            .qualified_name(&ty)
            .unwrap_or_else(|| ty.to_string())
    }

    /// Convert an element to its System value where possible
    pub fn normalize(self) -> Self {
        normalize(self)
    }
}

/// Convert a FHIR element to its System value, leaving everything else
/// (including elements that do not convert) unchanged.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Element(element) => match from_element(element.as_ref()) {
            Ok(system) => Value::System(system),
            Err(err) => {
                log::trace!("keeping {} as element: {}", element.type_name(), err);
                Value::Element(element)
            }
        },
        other => other,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Element(a), Self::Element(b)) => Arc::ptr_eq(a, b),
            (Self::System(a), Self::System(b)) => a == b,
            (Self::TypeInfo(a), Self::TypeInfo(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Element(e) => e.to_json().serialize(serializer),
            Self::System(v) => v.serialize(serializer),
            Self::TypeInfo(info) => info.serialize(serializer),
        }
    }
}

impl From<ElementRef> for Value {
    fn from(value: ElementRef) -> Self {
        Self::Element(value)
    }
}

impl From<SystemValue> for Value {
    fn from(value: SystemValue) -> Self {
        Self::System(value)
    }
}

impl From<TypeInfo> for Value {
    fn from(value: TypeInfo) -> Self {
        Self::TypeInfo(value)
    }
}

macro_rules! impl_from_system {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::System(SystemValue::from(value))
                }
            }
        )*
    };
}

impl_from_system!(FpBoolean, FpInteger, FpInteger64, FpDecimal, FpString, bool, i32, i64, &str, String);
