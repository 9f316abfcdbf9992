//! `fhirpath parse`: parse a System literal

use crate::cli::output::{self, OutputFormat};
use anyhow::{Context, Result};
use fhirpath_types::{SystemType, SystemValue};
use serde_json::{Value, json};
use std::path::PathBuf;

/// Parse command configuration
#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub kind: SystemType,
    pub literal: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Build the report for a single literal
pub fn report(kind: SystemType, literal: &str) -> Result<Value> {
    let value = SystemValue::parse(kind, literal)?;
    log::debug!("parsed {:?} as {}", literal, value.type_name());

    let encoded = serde_json::to_value(&value)
        .with_context(|| format!("Failed to encode {} as JSON", value.type_name()))?;

    Ok(json!({
        "input": literal,
        "type": value.type_name(),
        "text": value.to_string(),
        "json": encoded,
    }))
}

/// Run the parse command
pub fn parse(config: ParseConfig) -> Result<()> {
    let report = report(config.kind, &config.literal)?;
    output::print_output(&report, config.format, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_keeps_decimal_scale() {
        let report = report(SystemType::Decimal, "1.50").unwrap();
        assert_eq!(report["type"], "System.Decimal");
        assert_eq!(report["text"], "1.50");
        assert_eq!(report["json"].to_string(), "1.50");
    }

    #[test]
    fn test_report_rejects_malformed_literal() {
        let err = report(SystemType::Boolean, "yes").unwrap_err();
        assert!(err.to_string().starts_with("boolean parse 'yes'"));
    }
}
