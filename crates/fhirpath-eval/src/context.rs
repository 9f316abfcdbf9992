//! Evaluation context for FHIRPath execution

use crate::collection::Collection;
use crate::resolver::{NoopResolver, Resolver};
use crate::tracer::{NoopTracer, Tracer};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Named environment values (`%name` in expressions)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    entries: IndexMap<String, Collection>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value, reporting whether it was present
    pub fn lookup(&self, name: &str) -> Option<&Collection> {
        self.entries.get(name)
    }

    /// Get a value, or an empty collection when absent
    pub fn get(&self, name: &str) -> Collection {
        self.lookup(name).cloned().unwrap_or_default()
    }

    /// Get a value, or `default` when absent
    pub fn get_or(&self, name: &str, default: Collection) -> Collection {
        self.lookup(name).cloned().unwrap_or(default)
    }

    /// Add or replace a single entry
    pub fn with_entry(mut self, name: impl Into<String>, value: Collection) -> Self {
        self.entries.insert(name.into(), value);
        self
    }

    /// Add or replace several entries; later entries win
    pub fn with_entries<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Collection)>,
        K: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Collection)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Look up `name` in an optional environment
pub fn lookup<'a>(env: Option<&'a Environment>, name: &str) -> Option<&'a Collection> {
    env.and_then(|env| env.lookup(name))
}

/// Get `name` from an optional environment, or an empty collection
pub fn get(env: Option<&Environment>, name: &str) -> Collection {
    lookup(env, name).cloned().unwrap_or_default()
}

/// Get `name` from an optional environment, or `default`
pub fn get_or(env: Option<&Environment>, name: &str, default: Collection) -> Collection {
    lookup(env, name).cloned().unwrap_or(default)
}

/// Configuration for a single evaluation
#[derive(Clone)]
pub struct EvaluationContext {
    /// Time used for `now()`, `today()` and `timeOfDay()`
    pub time: DateTime<Utc>,
    /// Receiver of `trace()` output
    pub tracer: Arc<dyn Tracer>,
    /// Resolver for `resolve()`
    pub resolver: Arc<dyn Resolver>,
    /// Environment values
    pub environment: Environment,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationContext {
    /// Create a context using the current time and no-op collaborators
    pub fn new() -> Self {
        EvaluationContextBuilder::new().build()
    }

    /// Create a context fixed at the given time
    pub fn with_time(time: DateTime<Utc>) -> Self {
        EvaluationContextBuilder::new().time(time).build()
    }

    /// Look up an environment value
    pub fn env(&self, name: &str) -> Option<&Collection> {
        self.environment.lookup(name)
    }
}

impl fmt::Debug for EvaluationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("time", &self.time)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Builder for [`EvaluationContext`]
#[derive(Default)]
pub struct EvaluationContextBuilder {
    time: Option<DateTime<Utc>>,
    tracer: Option<Arc<dyn Tracer>>,
    resolver: Option<Arc<dyn Resolver>>,
    environment: Environment,
}

impl EvaluationContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation time
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the tracer
    pub fn tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Set the resolver
    pub fn resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Add an environment value
    pub fn env(mut self, name: impl Into<String>, value: Collection) -> Self {
        self.environment = self.environment.with_entry(name, value);
        self
    }

    /// Replace the whole environment
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Build the context
    pub fn build(self) -> EvaluationContext {
        EvaluationContext {
            time: self.time.unwrap_or_else(Utc::now),
            tracer: self.tracer.unwrap_or_else(|| Arc::new(NoopTracer)),
            resolver: self.resolver.unwrap_or_else(|| Arc::new(NoopResolver)),
            environment: self.environment,
        }
    }
}
