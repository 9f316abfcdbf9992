//! `fhirpath compare`: equality, equivalence and ordering of two literals

use crate::cli::output::{self, OutputFormat};
use anyhow::{Context, Result};
use fhirpath_types::{SystemType, SystemValue};
use serde_json::{Value, json};
use std::cmp::Ordering;
use std::path::PathBuf;

/// Compare command configuration
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub kind: SystemType,
    pub left: String,
    pub right: String,
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
}

/// Build the comparison report for two literals of the same kind
pub fn report(kind: SystemType, left: &str, right: &str) -> Result<Value> {
    let a = SystemValue::parse(kind, left).context("left operand")?;
    let b = SystemValue::parse(kind, right).context("right operand")?;

    let ordering = a.compare(&b).map(|ord| match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    });

    Ok(json!({
        "left": a.to_string(),
        "right": b.to_string(),
        "type": kind.qualified_name(),
        "equal": a.equal(&b),
        "equivalent": a.equivalent(&b),
        "ordering": ordering,
    }))
}

/// Run the compare command
pub fn compare(config: CompareConfig) -> Result<()> {
    let report = report(config.kind, &config.left, &config.right)?;
    output::print_output(&report, config.format, config.output_file.as_deref())
}
