//! FHIRPath evaluation core
//!
//! This crate provides the runtime pieces every FHIRPath evaluation step
//! works with:
//!
//! - **Values**: the closed union of FHIR elements, System values and
//!   reflection descriptors
//! - **Collections**: ordered, immutable sequences of values with the
//!   singleton evaluation rules
//! - **Namespaces**: classification and naming of runtime types
//!   (`FHIR.Patient`, `System.String`)
//! - **Collaborators**: reference resolution, tracing and the environment
//!   store, bundled into an `EvaluationContext`
//!
//! # Example
//!
//! ```
//! use fhirpath_eval::{Collection, Value};
//!
//! let c = Collection::of([Value::from(42)]);
//! assert_eq!(c.singleton_boolean().unwrap(), Collection::boolean(true));
//! ```

pub mod collection;
pub mod context;
pub mod namespace;
pub mod resolver;
pub mod tracer;
pub mod value;

pub use collection::{AnyValue, Collection};
pub use context::{EvaluationContext, EvaluationContextBuilder, Environment};
pub use namespace::{Capability, Namespace, NamespaceRegistry, REGISTRY, RuntimeType};
pub use resolver::{NoopResolver, ResolveError, Resolver};
pub use tracer::{JsonTracer, LogTracer, NoopTracer, TraceError, Tracer};
pub use value::{Value, normalize};
