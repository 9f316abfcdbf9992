//! JSON-backed FHIR elements

use crate::element::{Element, ElementKind, Primitive};
use crate::r4::{INTEGER_TYPES, STRING_TYPES};
use fhirpath_types::FpDecimal;
use serde_json::Value;
use thiserror::Error;

/// Resources that derive from Resource directly rather than DomainResource
const PLAIN_RESOURCES: &[&str] = &["Bundle", "Binary", "Parameters"];

/// Errors raised when wrapping JSON as an element
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonElementError {
    #[error("resource must be a JSON object")]
    NotAnObject,

    #[error("resource has no resourceType")]
    MissingResourceType,
}

/// An element backed by a `serde_json::Value`
#[derive(Debug, Clone, PartialEq)]
pub struct JsonElement {
    type_name: String,
    kind: ElementKind,
    value: Value,
}

impl JsonElement {
    /// Wrap a JSON value with an explicit FHIR type
    pub fn new(type_name: impl Into<String>, kind: ElementKind, value: Value) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            value,
        }
    }

    /// Wrap a resource, taking the type from its `resourceType` property
    pub fn resource(value: Value) -> Result<Self, JsonElementError> {
        let object = value.as_object().ok_or(JsonElementError::NotAnObject)?;
        let type_name = object
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or(JsonElementError::MissingResourceType)?
            .to_string();

        let kind = if PLAIN_RESOURCES.contains(&type_name.as_str()) {
            ElementKind::Resource
        } else {
            ElementKind::DomainResource
        };

        Ok(Self {
            type_name,
            kind,
            value,
        })
    }

    /// Borrow the underlying JSON
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Element for JsonElement {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn primitive(&self) -> Option<Primitive<'_>> {
        if self.kind != ElementKind::Primitive {
            return None;
        }
        let name = self.type_name.as_str();
        match &self.value {
            Value::Bool(b) if name == "boolean" => Some(Primitive::Boolean(*b)),
            Value::Number(n) if INTEGER_TYPES.contains(&name) => {
                n.as_i64().and_then(|v| i32::try_from(v).ok()).map(Primitive::Integer)
            }
            Value::Number(n) if name == "decimal" => {
                FpDecimal::parse(&n.to_string()).ok().map(Primitive::Decimal)
            }
            Value::String(s) if name == "integer64" => s.parse().ok().map(Primitive::Integer64),
            Value::String(s) if STRING_TYPES.contains(&name) => Some(Primitive::String(s)),
            _ => None,
        }
    }

    fn to_json(&self) -> Value {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_resource_kind_from_resource_type() {
        let patient = JsonElement::resource(json!({"resourceType": "Patient", "id": "p1"})).unwrap();
        assert_eq!(patient.type_name(), "Patient");
        assert_eq!(patient.kind(), ElementKind::DomainResource);

        let bundle = JsonElement::resource(json!({"resourceType": "Bundle"})).unwrap();
        assert_eq!(bundle.kind(), ElementKind::Resource);
    }

    #[test]
    fn test_resource_requires_resource_type() {
        assert_eq!(
            JsonElement::resource(json!({"id": "p1"})),
            Err(JsonElementError::MissingResourceType)
        );
        assert_eq!(
            JsonElement::resource(json!([1, 2])),
            Err(JsonElementError::NotAnObject)
        );
    }

    #[test]
    fn test_json_primitives() {
        let code = JsonElement::new("code", ElementKind::Primitive, json!("final"));
        assert_eq!(code.primitive(), Some(Primitive::String("final")));

        let count = JsonElement::new("unsignedInt", ElementKind::Primitive, json!(3));
        assert_eq!(count.primitive(), Some(Primitive::Integer(3)));

        let big = JsonElement::new("integer64", ElementKind::Primitive, json!("9000000000"));
        assert_eq!(big.primitive(), Some(Primitive::Integer64(9_000_000_000)));

        let overflow = JsonElement::new("integer", ElementKind::Primitive, json!(9_000_000_000_i64));
        assert_eq!(overflow.primitive(), None);
    }

    #[test]
    fn test_complex_elements_have_no_primitive() {
        let name = JsonElement::new("HumanName", ElementKind::Complex, json!({"family": "Doe"}));
        assert_eq!(name.primitive(), None);
        assert_eq!(name.to_json(), json!({"family": "Doe"}));
    }
}
