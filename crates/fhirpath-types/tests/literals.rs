//! Literal parsing and comparison tests for FHIRPath System values
//!
//! Covers:
//! - Boundary integers and decimal scale preservation
//! - String literal quoting and escapes
//! - Equality versus equivalence
//! - Canonical text stability

use fhirpath_types::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cmp::Ordering;

fn decimal(text: &str) -> FpDecimal {
    FpDecimal::parse(text).unwrap()
}

// === Decimal Equality and Equivalence ===

#[test]
fn test_decimal_equivalence_uses_smaller_precision() {
    assert!(decimal("1.0").equivalent(&decimal("1.00")));
    assert!(!decimal("1.05").equivalent(&decimal("1.1")));
}

#[test]
fn test_decimal_equality_is_scale_sensitive() {
    assert!(!decimal("1.00").equal(&decimal("1.0")));
    assert_eq!(decimal("1.00").compare(&decimal("1.0")), Ordering::Equal);
}

#[test]
fn test_decimal_text_keeps_trailing_zeros() {
    let value = SystemValue::parse(SystemType::Decimal, "12.5000").unwrap();
    assert_eq!(value.to_string(), "12.5000");
    assert_eq!(value.to_json().unwrap(), "12.5000");
}

// === String Literals ===

#[test]
fn test_string_literal_escapes() {
    assert_eq!(FpString::parse(r"'\n'").unwrap().as_str(), "\n");
    assert_eq!(FpString::parse(r"'\\n'").unwrap().as_str(), "\\n");
    assert_eq!(FpString::parse(r"'été'").unwrap().as_str(), "été");
}

#[test]
fn test_unquoted_string_fails() {
    let err = FpString::parse("hello").unwrap_err();
    assert_eq!(err.to_string(), "string parse 'hello': missing prefix quote");
}

#[test]
fn test_string_equivalence_folds_case_and_control_whitespace() {
    assert!(FpString::new("HELLO").equivalent(&FpString::new("hello")));
    assert!(FpString::new("\t\r\nHELLO ").equivalent(&FpString::new("   hello ")));
}

// === Error Reporting ===

#[test]
fn test_parse_error_names_kind_and_input() {
    let err = FpInteger::parse("12a").unwrap_err();
    assert!(err.to_string().starts_with("integer parse '12a': "));

    let err = FpBoolean::parse("TRUE").unwrap_err();
    assert_eq!(err.to_string(), "boolean parse 'TRUE'");
}

// === Properties ===

proptest! {
    #[test]
    fn prop_integer_text_is_canonical(n in any::<i32>()) {
        let value = FpInteger::new(n);
        prop_assert_eq!(FpInteger::parse(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn prop_integer64_text_is_canonical(n in any::<i64>()) {
        let value = FpInteger64::new(n);
        prop_assert_eq!(FpInteger64::parse(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn prop_decimal_equivalence_is_symmetric(
        a in -100_000i64..100_000,
        b in -100_000i64..100_000,
        sa in 0u32..5,
        sb in 0u32..5,
    ) {
        let x = FpDecimal::new(rust_decimal::Decimal::new(a, sa));
        let y = FpDecimal::new(rust_decimal::Decimal::new(b, sb));
        prop_assert_eq!(x.equivalent(&y), y.equivalent(&x));
        prop_assert!(x.equivalent(&x));
    }

    #[test]
    fn prop_string_literal_round_trips(s in "[a-zA-Z0-9 ]*") {
        let parsed = FpString::parse(&format!("'{s}'")).unwrap();
        prop_assert_eq!(parsed.as_str(), s.as_str());
    }
}
