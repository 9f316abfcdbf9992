//! Type namespaces
//!
//! A namespace groups types under a common prefix (`FHIR`, `System`) and
//! decides membership through capability markers. Classification is a static
//! table over [`RuntimeType`] variants.

use crate::value::Value;
use fhirpath_model::ElementKind;
use fhirpath_types::SystemType;
use std::fmt;

/// Statically known shape of a runtime value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    /// A type of the FHIR object model
    Domain { name: String, kind: ElementKind },
    /// A System type
    System(SystemType),
    /// A reflection descriptor kind (e.g. `ClassInfo`)
    Reflection(&'static str),
    /// Reference to another type
    Ref(Box<RuntimeType>),
    /// A type no namespace knows about
    Opaque(String),
}

impl RuntimeType {
    /// Strip any reference wrapping
    pub fn strip_refs(&self) -> &RuntimeType {
        let mut ty = self;
        while let Self::Ref(inner) = ty {
            ty = inner;
        }
        ty
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain { name, .. } => f.write_str(name),
            Self::System(ty) => f.write_str(ty.name()),
            Self::Reflection(kind) => f.write_str(kind),
            Self::Ref(inner) => write!(f, "&{}", inner),
            Self::Opaque(name) => f.write_str(name),
        }
    }
}

/// Capability a type must have to belong to a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// FHIR primitive or complex data type
    DomainElement,
    /// FHIR backbone element
    DomainBackbone,
    /// FHIR resource
    DomainResource,
    /// FHIR resource deriving from DomainResource
    DomainDomainResource,
    /// Any System type
    SystemAny,
    /// Reflection descriptor
    ReflectionInfo,
}

impl Capability {
    /// Check whether `ty` has this capability
    pub fn satisfied_by(&self, ty: &RuntimeType) -> bool {
        match (self, ty.strip_refs()) {
            (Self::DomainElement, RuntimeType::Domain { kind, .. }) => matches!(
                kind,
                ElementKind::Primitive | ElementKind::Complex | ElementKind::Backbone
            ),
            (Self::DomainBackbone, RuntimeType::Domain { kind, .. }) => *kind == ElementKind::Backbone,
            (Self::DomainResource, RuntimeType::Domain { kind, .. }) => matches!(
                kind,
                ElementKind::Resource | ElementKind::DomainResource
            ),
            (Self::DomainDomainResource, RuntimeType::Domain { kind, .. }) => {
                *kind == ElementKind::DomainResource
            }
            (Self::SystemAny, RuntimeType::System(_)) => true,
            (Self::ReflectionInfo, RuntimeType::Reflection(_)) => true,
            _ => false,
        }
    }
}

/// Function producing a type's short name within a namespace
pub type Namer = fn(&RuntimeType) -> String;

/// A named grouping of types
#[derive(Debug, Clone, Copy)]
pub struct Namespace {
    name: &'static str,
    namer: Namer,
    markers: &'static [Capability],
}

impl Namespace {
    /// Create a namespace
    pub const fn new(name: &'static str, namer: Namer, markers: &'static [Capability]) -> Self {
        Self {
            name,
            namer,
            markers,
        }
    }

    /// The namespace prefix
    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Check whether `ty` has at least one of this namespace's markers
    pub fn contains(&self, ty: &RuntimeType) -> bool {
        self.markers.iter().any(|marker| marker.satisfied_by(ty))
    }

    /// Name of `ty` without the namespace prefix
    pub fn name(&self, ty: &RuntimeType) -> String {
        (self.namer)(ty)
    }

    /// Name of `ty` with the namespace prefix
    pub fn qualified_name(&self, ty: &RuntimeType) -> String {
        format!("{}.{}", self.name, self.name(ty))
    }

    /// The first namespace, in the given order, that contains `ty`
    pub fn select<'a>(ty: &RuntimeType, namespaces: &[&'a Namespace]) -> Option<&'a Namespace> {
        namespaces.iter().copied().find(|ns| ns.contains(ty))
    }
}

impl PartialEq for Namespace {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Namespace {}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// Primitive names keep the capitalized style of the object model's type
// names (`Boolean`, not `boolean`).
fn fhir_name(ty: &RuntimeType) -> String {
    match ty.strip_refs() {
        RuntimeType::Domain {
            name,
            kind: ElementKind::Primitive,
        } => capitalize(name),
        other => other.to_string(),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn plain_name(ty: &RuntimeType) -> String {
    ty.strip_refs().to_string()
}

const FHIR_MARKERS: &[Capability] = &[
    Capability::DomainElement,
    Capability::DomainResource,
    Capability::DomainDomainResource,
    Capability::DomainBackbone,
];
const SYSTEM_MARKERS: &[Capability] = &[Capability::SystemAny];
const REFLECTION_MARKERS: &[Capability] = &[Capability::ReflectionInfo];

/// The standard FHIR, System and Reflection namespaces
#[derive(Debug, Clone, Copy)]
pub struct NamespaceRegistry {
    fhir: Namespace,
    system: Namespace,
    reflection: Namespace,
}

impl NamespaceRegistry {
    /// Create the standard registry
    pub const fn new() -> Self {
        Self {
            fhir: Namespace::new("FHIR", fhir_name, FHIR_MARKERS),
            system: Namespace::new("System", plain_name, SYSTEM_MARKERS),
            reflection: Namespace::new("Reflection", plain_name, REFLECTION_MARKERS),
        }
    }

    /// The FHIR namespace
    pub const fn fhir(&self) -> &Namespace {
        &self.fhir
    }

    /// The System namespace
    pub const fn system(&self) -> &Namespace {
        &self.system
    }

    /// The Reflection namespace
    pub const fn reflection(&self) -> &Namespace {
        &self.reflection
    }

    /// Namespace owning `ty`, if any
    pub fn select(&self, ty: &RuntimeType) -> Option<&Namespace> {
        Namespace::select(ty, &[&self.fhir, &self.system, &self.reflection])
    }

    /// Qualified name of `ty`, if a namespace owns it
    pub fn qualified_name(&self, ty: &RuntimeType) -> Option<String> {
        self.select(ty).map(|ns| ns.qualified_name(ty))
    }

    /// Namespace owning a value's type
    pub fn classify(&self, value: &Value) -> Option<&Namespace> {
        self.select(&value.runtime_type())
    }

    /// Qualified type name of a value
    pub fn qualified_type_name(&self, value: &Value) -> Option<String> {
        self.qualified_name(&value.runtime_type())
    }
}

/// The standard registry, built once
pub static REGISTRY: NamespaceRegistry = NamespaceRegistry::new();

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
