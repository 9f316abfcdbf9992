//! Command-line interface modules

pub mod compare;
pub mod output;
pub mod parse;
pub mod type_of;

use anyhow::{Result, anyhow};
use fhirpath_types::SystemType;

/// Resolve a System type name given on the command line. Case-insensitive.
pub fn parse_kind(name: &str) -> Result<SystemType> {
    SystemType::ALL
        .into_iter()
        .find(|ty| ty.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("unknown System type '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_ignores_case() {
        assert_eq!(parse_kind("decimal").unwrap(), SystemType::Decimal);
        assert_eq!(parse_kind("Integer64").unwrap(), SystemType::Integer64);
        assert_eq!(
            parse_kind("Money").unwrap_err().to_string(),
            "unknown System type 'Money'"
        );
    }
}
