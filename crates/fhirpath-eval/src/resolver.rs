//! Reference resolution
//!
//! The evaluator's `resolve()` function dereferences a reference string
//! (e.g. `Patient/123`) through a [`Resolver`].

use crate::value::Value;
use async_trait::async_trait;
use fhirpath_diagnostics::{ErrorCode, FP0300, FP0301};
use thiserror::Error;

/// Errors raised while resolving a reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no resolver configured")]
    NotConfigured,

    #[error("reference not found: {0}")]
    NotFound(String),

    #[error("failed to resolve '{reference}': {message}")]
    Failed { reference: String, message: String },
}

impl ResolveError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotConfigured => FP0300,
            Self::NotFound(_) | Self::Failed { .. } => FP0301,
        }
    }
}

/// Resolves references to FHIR resources
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve a reference to the value it points at
    async fn resolve(&self, reference: &str) -> Result<Value, ResolveError>;
}

/// Resolver used when none is configured; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl Resolver for NoopResolver {
    async fn resolve(&self, reference: &str) -> Result<Value, ResolveError> {
        log::debug!("cannot resolve '{}': no resolver configured", reference);
        Err(ResolveError::NotConfigured)
    }
}

/// Resolver test doubles
pub mod testing {
    use super::{ResolveError, Resolver};
    use crate::value::Value;
    use async_trait::async_trait;

    /// Resolver returning the same outcome for every reference
    #[derive(Debug, Clone)]
    pub struct FixedResolver {
        outcome: Result<Value, ResolveError>,
    }

    impl FixedResolver {
        /// Always resolve to `value`
        pub fn returning(value: impl Into<Value>) -> Self {
            Self {
                outcome: Ok(value.into()),
            }
        }

        /// Always fail with `error`
        pub fn failing(error: ResolveError) -> Self {
            Self { outcome: Err(error) }
        }
    }

    #[async_trait]
    impl Resolver for FixedResolver {
        async fn resolve(&self, _reference: &str) -> Result<Value, ResolveError> {
            self.outcome.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedResolver;
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_noop_resolver_is_not_configured() {
        let err = NoopResolver.resolve("Patient/1").await.unwrap_err();
        assert_eq!(err, ResolveError::NotConfigured);
        assert_eq!(err.to_string(), "no resolver configured");
        assert_eq!(err.code(), FP0300);
    }

    #[tokio::test]
    async fn test_fixed_resolver() {
        let resolver = FixedResolver::returning("resolved");
        assert_eq!(resolver.resolve("a").await.unwrap(), Value::from("resolved"));
        assert_eq!(resolver.resolve("b").await.unwrap(), Value::from("resolved"));

        let resolver = FixedResolver::failing(ResolveError::NotFound("Patient/9".to_string()));
        assert_eq!(
            resolver.resolve("Patient/9").await,
            Err(ResolveError::NotFound("Patient/9".to_string()))
        );
    }
}
