//! FHIRPath collections
//!
//! A collection is both the input and the output of every evaluation step.
//! Collections are ordered, may hold duplicates and are never mutated in
//! place: every operation returns a new collection.

use crate::value::{Value, normalize};
use fhirpath_diagnostics::ValueError;
use fhirpath_model::ElementRef;
use fhirpath_types::{FpBoolean, FpDecimal, FpInteger, FpInteger64, FpString, SystemValue, TypeInfo};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::any::Any;
use std::ops::Index;

/// Ordered sequence of values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection(SmallVec<[Value; 1]>);

impl Collection {
    /// Create an empty collection
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Create a collection holding a single boolean
    pub fn boolean(value: bool) -> Self {
        Self::singleton_of(Value::from(value))
    }

    /// Create a collection from values
    pub fn of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    /// Create a collection holding exactly one value
    pub fn singleton_of(value: impl Into<Value>) -> Self {
        let mut items = SmallVec::new();
        items.push(value.into());
        Self(items)
    }

    /// Create a collection from type-erased values.
    ///
    /// Each input must be a [`Value`], a System value, a reflection
    /// descriptor or an element handle; anything else fails with
    /// `InvalidValueKind` naming the input's type.
    pub fn try_of_any<I>(values: I) -> Result<Self, ValueError>
    where
        I: IntoIterator<Item = AnyValue>,
    {
        values
            .into_iter()
            .map(value_from_any)
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }

    /// Like [`Collection::try_of_any`], but panics on an invalid input kind.
    ///
    /// # Panics
    ///
    /// Panics if any input is not a permitted collection value.
    pub fn of_any<I>(values: I) -> Self
    where
        I: IntoIterator<Item = AnyValue>,
    {
        match Self::try_of_any(values) {
            Ok(collection) => collection,
            Err(err) => panic!("{err}"),
        }
    }

    /// Concatenate collections, preserving order
    pub fn join<'a, I>(collections: I) -> Self
    where
        I: IntoIterator<Item = &'a Collection>,
    {
        let parts: SmallVec<[&Collection; 4]> = collections.into_iter().collect();
        let total = parts.iter().map(|c| c.len()).sum();
        let mut items = SmallVec::with_capacity(total);
        for part in parts {
            items.extend(part.0.iter().cloned());
        }
        Self(items)
    }

    /// Check if the collection has no values
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if the collection has exactly one value
    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the value at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Get the first value
    pub fn first(&self) -> Option<&Value> {
        self.0.first()
    }

    /// Get the last value
    pub fn last(&self) -> Option<&Value> {
        self.0.last()
    }

    /// Iterate over the values
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// The sole value, or `NotSingleton`
    pub fn singleton(&self) -> Result<&Value, ValueError> {
        match self.0.as_slice() {
            [value] => Ok(value),
            other => Err(ValueError::not_singleton(other.len())),
        }
    }

    /// Singleton evaluation of a collection as a condition.
    ///
    /// - empty yields empty
    /// - a single Boolean yields that Boolean
    /// - any other single value yields `true`
    /// - more than one value fails with `NotSingleton`
    pub fn singleton_boolean(&self) -> Result<Collection, ValueError> {
        if self.is_empty() {
            return Ok(Self::empty());
        }
        let value = self.normalized_singleton()?;
        match value.as_system() {
            Some(SystemValue::Boolean(b)) => Ok(Self::boolean(b.value())),
            _ => Ok(Self::boolean(true)),
        }
    }

    /// The sole value as a native boolean.
    ///
    /// Any non-Boolean value counts as `true`.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        let value = self.normalized_singleton()?;
        match value.as_system() {
            Some(SystemValue::Boolean(b)) => Ok(b.value()),
            _ => Ok(true),
        }
    }

    /// The sole value as a native string
    pub fn as_string(&self) -> Result<String, ValueError> {
        let value = self.normalized_singleton()?;
        match value {
            Value::System(SystemValue::String(s)) => Ok(s.into_inner()),
            other => Err(ValueError::not_convertible(other.type_name(), "string")),
        }
    }

    /// The sole value as a native 32-bit integer
    pub fn as_int32(&self) -> Result<i32, ValueError> {
        let value = self.normalized_singleton()?;
        match value.as_system() {
            Some(SystemValue::Integer(i)) => Ok(i.value()),
            _ => Err(ValueError::not_convertible(value.type_name(), "int32")),
        }
    }

    /// The sole value as a decimal
    pub fn as_decimal(&self) -> Result<FpDecimal, ValueError> {
        let value = self.normalized_singleton()?;
        match value.as_system() {
            Some(SystemValue::Decimal(d)) => Ok(*d),
            _ => Err(ValueError::not_convertible(value.type_name(), "decimal")),
        }
    }

    /// The sole value as the nearest `f64`
    pub fn as_f64(&self) -> Result<f64, ValueError> {
        self.as_decimal().map(|d| d.to_f64())
    }

    /// Convert every element to its System value where possible
    pub fn normalize(&self) -> Collection {
        Self(self.0.iter().cloned().map(normalize).collect())
    }

    /// Element-wise equality.
    ///
    /// Elements compare by handle identity and System values structurally.
    pub fn equal(&self, other: &Collection) -> bool {
        self == other
    }

    fn normalized_singleton(&self) -> Result<Value, ValueError> {
        self.singleton().cloned().map(normalize)
    }
}

/// A type-erased collection input that remembers its concrete type name
#[derive(Debug)]
pub struct AnyValue {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl AnyValue {
    /// Erase the type of `value`
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the erased type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

macro_rules! downcast_or_continue {
    ($value:ident, $($ty:ty),+ $(,)?) => {
        $(
            let $value = match $value.downcast::<$ty>() {
                Ok(v) => return Ok(Value::from(*v)),
                Err(other) => other,
            };
        )+
    };
}

fn value_from_any(input: AnyValue) -> Result<Value, ValueError> {
    let AnyValue { value, type_name } = input;
    downcast_or_continue!(
        value,
        Value,
        SystemValue,
        TypeInfo,
        ElementRef,
        FpBoolean,
        FpInteger,
        FpInteger64,
        FpDecimal,
        FpString,
    );
    Err(ValueError::InvalidValueKind {
        found: type_name.to_string(),
    })
}

impl Index<usize> for Collection {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Value>> for Collection {
    fn from(values: Vec<Value>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}

impl From<Value> for Collection {
    fn from(value: Value) -> Self {
        Self::singleton_of(value)
    }
}

impl IntoIterator for Collection {
    type Item = Value;
    type IntoIter = smallvec::IntoIter<[Value; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}
