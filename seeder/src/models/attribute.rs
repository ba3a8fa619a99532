//! Typed attribute values.
//!
//! OTLP attributes are a tagged union. [`AttributeValue`] makes the tag explicit
//! so booleans, integers, floats and strings never get confused for one another.

use crate::otlp::proto::common::v1::{any_value, AnyValue, KeyValue};
use std::fmt;

/// A typed attribute value.
///
/// The variant is picked by the `From` conversion the caller uses, so the
/// tag is decided at compile time:
///
/// ```
/// use seeder::models::AttributeValue;
///
/// assert_eq!(AttributeValue::from(true), AttributeValue::Bool(true));
/// assert_eq!(AttributeValue::from(42), AttributeValue::Int(42));
/// assert_eq!(AttributeValue::from(2.75), AttributeValue::Double(2.75));
/// assert_eq!(AttributeValue::from("x"), AttributeValue::String("x".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer value.
    Int(i64),
    /// Double precision floating point value.
    Double(f64),
    /// String value.
    String(String),
}

impl AttributeValue {
    /// Coerces any displayable value to a string attribute.
    #[must_use]
    pub fn display(value: impl fmt::Display) -> Self {
        Self::String(value.to_string())
    }

    /// Converts the value into its protocol `AnyValue` representation.
    #[must_use]
    pub fn into_any_value(self) -> AnyValue {
        let value = match self {
            Self::Bool(b) => any_value::Value::BoolValue(b),
            Self::Int(i) => any_value::Value::IntValue(i),
            Self::Double(d) => any_value::Value::DoubleValue(d),
            Self::String(s) => any_value::Value::StringValue(s),
        };
        AnyValue { value: Some(value) }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Double(f64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Builds a protocol key/value pair.
#[must_use]
pub fn kv(key: impl Into<String>, value: impl Into<AttributeValue>) -> KeyValue {
    KeyValue {
        key: key.into(),
        value: Some(value.into().into_any_value()),
    }
}

/// Converts an ordered list of attributes into protocol key/value pairs.
pub(crate) fn to_key_values(attributes: Vec<(String, AttributeValue)>) -> Vec<KeyValue> {
    attributes.into_iter().map(|(k, v)| kv(k, v)).collect()
}
