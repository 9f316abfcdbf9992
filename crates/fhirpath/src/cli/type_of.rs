//! `fhirpath type`: classify a FHIR resource or element from a JSON file

use crate::cli::output::{self, OutputFormat};
use anyhow::{Context, Result};
use fhirpath_eval::{REGISTRY, Value};
use fhirpath_model::{ElementKind, JsonElement};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

/// Type command configuration
#[derive(Debug, Clone)]
pub struct TypeConfig {
    pub file: PathBuf,
    /// FHIR type to wrap the JSON as; defaults to its `resourceType`
    pub as_type: Option<String>,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Read and decode a JSON file
pub fn load(path: &Path) -> Result<serde_json::Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

// Lower-case FHIR type names are primitives (`code`, `dateTime`)
fn element_kind(type_name: &str) -> ElementKind {
    if type_name.starts_with(|c: char| c.is_ascii_lowercase()) {
        ElementKind::Primitive
    } else {
        ElementKind::Complex
    }
}

/// Build the classification report for a JSON document
pub fn report(document: serde_json::Value, as_type: Option<&str>) -> Result<serde_json::Value> {
    let element = match as_type {
        Some(name) => JsonElement::new(name, element_kind(name), document),
        None => JsonElement::resource(document)?,
    };
    let value = Value::element(element);

    let namespace = REGISTRY.classify(&value).map(|ns| ns.as_str());
    let type_name = REGISTRY.qualified_type_name(&value);

    let normalized = value.normalize();
    let encoded = serde_json::to_value(&normalized).context("Failed to encode value")?;

    Ok(json!({
        "namespace": namespace,
        "type": type_name,
        "normalizedType": normalized.type_name(),
        "value": encoded,
    }))
}

/// Run the type command
pub fn type_of(config: TypeConfig) -> Result<()> {
    let document = load(&config.file)?;
    let report = report(document, config.as_type.as_deref())?;
    output::print_output(&report, config.format, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_kind_from_name() {
        assert_eq!(element_kind("code"), ElementKind::Primitive);
        assert_eq!(element_kind("HumanName"), ElementKind::Complex);
    }

    #[test]
    fn test_primitive_normalizes_to_system() {
        let report = report(json!("final"), Some("code")).unwrap();
        assert_eq!(report["type"], "FHIR.Code");
        assert_eq!(report["normalizedType"], "System.String");
        assert_eq!(report["value"], "final");
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = load(Path::new("/nonexistent/patient.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }
}
