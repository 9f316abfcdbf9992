//! Trace output for the FHIRPath `trace()` function

use crate::collection::Collection;
use fhirpath_diagnostics::{ErrorCode, FP0302};
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{self, Write};
use thiserror::Error;

/// Errors raised while emitting a trace
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to encode trace '{label}': {source}")]
    Encode {
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write trace '{label}': {source}")]
    Write {
        label: String,
        #[source]
        source: io::Error,
    },
}

impl TraceError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        FP0302
    }
}

/// Receives the collections passed to `trace()`
pub trait Tracer: Send + Sync {
    /// Record `collection` under `label`
    fn trace(&self, label: &str, collection: &Collection) -> Result<(), TraceError>;
}

/// Tracer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn trace(&self, _label: &str, _collection: &Collection) -> Result<(), TraceError> {
        Ok(())
    }
}

/// Tracer writing each collection as one JSON document per trace call.
///
/// Output has the form `<label>: <json>` followed by a newline.
#[derive(Debug)]
pub struct JsonTracer<W> {
    writer: Mutex<W>,
    indent: Option<String>,
}

impl JsonTracer<io::Stdout> {
    /// Create a tracer writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonTracer<W> {
    /// Create a tracer writing compact JSON to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            indent: None,
        }
    }

    /// Pretty-print the JSON using `indent` for each nesting level
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn encode(&self, collection: &Collection) -> serde_json::Result<Vec<u8>> {
        match &self.indent {
            Some(indent) => {
                let mut buf = Vec::new();
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
                collection.serialize(&mut serializer)?;
                Ok(buf)
            }
            None => serde_json::to_vec(collection),
        }
    }
}

impl<W: Write + Send> Tracer for JsonTracer<W> {
    fn trace(&self, label: &str, collection: &Collection) -> Result<(), TraceError> {
        let json = self.encode(collection).map_err(|source| TraceError::Encode {
            label: label.to_string(),
            source,
        })?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}: {}", label, String::from_utf8_lossy(&json)).map_err(|source| {
            TraceError::Write {
                label: label.to_string(),
                source,
            }
        })
    }
}

/// Tracer emitting through the `log` facade at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, label: &str, collection: &Collection) -> Result<(), TraceError> {
        let json = serde_json::to_string(collection).map_err(|source| TraceError::Encode {
            label: label.to_string(),
            source,
        })?;
        log::debug!(target: "fhirpath::trace", "{}: {}", label, json);
        Ok(())
    }
}
