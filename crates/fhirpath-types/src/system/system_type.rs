//! FHIRPath System types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of the `System` namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    /// Any type (top type)
    Any,
    /// Boolean type
    Boolean,
    /// Integer type (32-bit signed)
    Integer,
    /// Integer64 type (64-bit signed)
    Integer64,
    /// Decimal type (fixed point)
    Decimal,
    /// String type
    String,
    /// Date type
    Date,
    /// DateTime type
    DateTime,
    /// Time type
    Time,
    /// Quantity type
    Quantity,
}

impl SystemType {
    /// Every System type, in declaration order
    pub const ALL: [SystemType; 10] = [
        Self::Any,
        Self::Boolean,
        Self::Integer,
        Self::Integer64,
        Self::Decimal,
        Self::String,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Quantity,
    ];

    /// Get the full qualified name
    pub const fn qualified_name(&self) -> &'static str {
        match self {
            Self::Any => "System.Any",
            Self::Boolean => "System.Boolean",
            Self::Integer => "System.Integer",
            Self::Integer64 => "System.Integer64",
            Self::Decimal => "System.Decimal",
            Self::String => "System.String",
            Self::Date => "System.Date",
            Self::DateTime => "System.DateTime",
            Self::Time => "System.Time",
            Self::Quantity => "System.Quantity",
        }
    }

    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Integer64 => "Integer64",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Time => "Time",
            Self::Quantity => "Quantity",
        }
    }

    /// Look up a System type by its simple name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Check whether `name` names a System type. Case-sensitive.
    pub fn is_type(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// Check if this type is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Integer64 | Self::Decimal)
    }

    /// Check if this type is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time)
    }

    /// Check if this type has a runtime value representation in this crate
    pub const fn has_value_kind(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::Integer | Self::Integer64 | Self::Decimal | Self::String
        )
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(SystemType::from_name("Boolean"), Some(SystemType::Boolean));
        assert_eq!(SystemType::from_name("DateTime"), Some(SystemType::DateTime));
        assert_eq!(SystemType::from_name("boolean"), None);
        assert_eq!(SystemType::from_name("Patient"), None);
    }

    #[test]
    fn test_is_type() {
        for name in ["Boolean", "Integer", "Any", "Date", "DateTime", "Decimal", "Quantity", "String", "Time"] {
            assert!(SystemType::is_type(name), "{name} should be a System type");
        }
        assert!(!SystemType::is_type("STRING"));
        assert!(!SystemType::is_type(""));
    }

    #[test]
    fn test_names() {
        assert_eq!(SystemType::Decimal.qualified_name(), "System.Decimal");
        assert_eq!(SystemType::Integer64.to_string(), "Integer64");
        assert!(SystemType::Integer64.is_numeric());
        assert!(!SystemType::String.is_numeric());
        assert!(SystemType::Time.is_temporal());
        assert!(!SystemType::Quantity.has_value_kind());
    }
}
