//! Reflection type descriptors
//!
//! Data returned by `type()` describing the shape of a type. Property names
//! follow the FHIRPath reflection model.

use crate::system::SystemType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type name as it appears in reflection output (e.g. `System.String`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSpecifier(pub String);

impl TypeSpecifier {
    /// Create a type specifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the type name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeSpecifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Descriptor for primitive types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleTypeInfo {
    pub namespace: String,
    pub name: String,
    pub base_type: TypeSpecifier,
}

/// A single element of a [`ClassInfo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfoElement {
    pub name: String,
    #[serde(rename = "type")]
    pub type_specifier: TypeSpecifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_one_based: Option<bool>,
}

/// Descriptor for class types (complex types and resources)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub namespace: String,
    pub name: String,
    pub base_type: TypeSpecifier,
    #[serde(default)]
    pub element: Vec<ClassInfoElement>,
}

/// Descriptor for collection types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTypeInfo {
    pub element_type: TypeSpecifier,
}

/// A single element of a [`TupleTypeInfo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleTypeInfoElement {
    pub name: String,
    #[serde(rename = "type")]
    pub type_specifier: TypeSpecifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_one_based: Option<bool>,
}

/// Descriptor for anonymous tuple types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleTypeInfo {
    #[serde(default)]
    pub element: Vec<TupleTypeInfoElement>,
}

/// Any reflection descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypeInfo {
    Simple(SimpleTypeInfo),
    Class(ClassInfo),
    List(ListTypeInfo),
    Tuple(TupleTypeInfo),
}

impl TypeInfo {
    /// Descriptor for a System type
    pub fn for_system(ty: SystemType) -> Self {
        Self::Simple(SimpleTypeInfo {
            namespace: "System".to_string(),
            name: ty.name().to_string(),
            base_type: TypeSpecifier::new(SystemType::Any.qualified_name()),
        })
    }

    /// Name of the descriptor kind (e.g. `ClassInfo`)
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Simple(_) => "SimpleTypeInfo",
            Self::Class(_) => "ClassInfo",
            Self::List(_) => "ListTypeInfo",
            Self::Tuple(_) => "TupleTypeInfo",
        }
    }
}

impl From<SimpleTypeInfo> for TypeInfo {
    fn from(value: SimpleTypeInfo) -> Self {
        Self::Simple(value)
    }
}

impl From<ClassInfo> for TypeInfo {
    fn from(value: ClassInfo) -> Self {
        Self::Class(value)
    }
}

impl From<ListTypeInfo> for TypeInfo {
    fn from(value: ListTypeInfo) -> Self {
        Self::List(value)
    }
}

impl From<TupleTypeInfo> for TypeInfo {
    fn from(value: TupleTypeInfo) -> Self {
        Self::Tuple(value)
    }
}
