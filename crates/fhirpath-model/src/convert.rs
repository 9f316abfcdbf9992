//! Conversion between FHIR elements and System values

use crate::element::{Element, ElementRef, Primitive};
use crate::r4::{FhirBoolean, FhirDecimal, FhirInteger, FhirInteger64, FhirString};
use fhirpath_diagnostics::ValueError;
use fhirpath_types::{FpBoolean, FpInteger, FpInteger64, FpString, SystemValue};
use std::sync::Arc;

/// Convert a primitive element into its System value.
///
/// Fails with `NotConvertible` naming the element's FHIR type for complex
/// elements and resources.
pub fn from_element(element: &dyn Element) -> Result<SystemValue, ValueError> {
    let value = match element.primitive() {
        Some(Primitive::Boolean(b)) => SystemValue::Boolean(FpBoolean::new(b)),
        Some(Primitive::Integer(i)) => SystemValue::Integer(FpInteger::new(i)),
        Some(Primitive::Integer64(i)) => SystemValue::Integer64(FpInteger64::new(i)),
        Some(Primitive::Decimal(d)) => SystemValue::Decimal(d),
        Some(Primitive::String(s)) => SystemValue::String(FpString::new(s)),
        None => {
            return Err(ValueError::not_convertible(
                format!("FHIR.{}", element.type_name()),
                "System value",
            ));
        }
    };
    Ok(value)
}

/// Convert a System value into the matching R4 primitive element
pub fn to_element(value: &SystemValue) -> ElementRef {
    match value {
        SystemValue::Boolean(b) => Arc::new(FhirBoolean::new(b.value())),
        SystemValue::Integer(i) => Arc::new(FhirInteger::new(i.value())),
        SystemValue::Integer64(i) => Arc::new(FhirInteger64::new(i.value())),
        SystemValue::Decimal(d) => Arc::new(FhirDecimal::new(*d)),
        SystemValue::String(s) => Arc::new(FhirString::new(s.as_str())),
    }
}
