//! Semantic field values.
//!
//! Rules are defined per semantic kind rather than per Rust type: `min` and
//! `max` apply to any integer width, `minLen` and `email` to any text.

use serde_json::Value;
use std::fmt;

/// The semantic kind of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    Float,
    Bool,
    Text,
    Composite,
    Absent,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Text => "text",
            Kind::Composite => "composite",
            Kind::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// A read-only view of one field's runtime value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Any signed or unsigned integer; `i128` holds every std width.
    Integer(i128),
    Float(f64),
    Bool(bool),
    Text(&'a str),
    /// A sequence or map; only its length is visible to rules.
    Composite { len: usize },
    /// `None`, JSON `null` or a missing key.
    Absent,
}

impl<'a> FieldValue<'a> {
    /// The semantic kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            FieldValue::Integer(_) => Kind::Integer,
            FieldValue::Float(_) => Kind::Float,
            FieldValue::Bool(_) => Kind::Bool,
            FieldValue::Text(_) => Kind::Text,
            FieldValue::Composite { .. } => Kind::Composite,
            FieldValue::Absent => Kind::Absent,
        }
    }

    /// Check whether this is the zero value of its kind.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Integer(n) => *n == 0,
            FieldValue::Float(n) => *n == 0.0,
            FieldValue::Bool(b) => !b,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Composite { len } => *len == 0,
            FieldValue::Absent => true,
        }
    }

    /// Borrow a JSON value as a field value.
    ///
    /// Integral numbers become `Integer`; numbers with a fractional part or
    /// outside the `i64`/`u64` range become `Float`.
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Null => FieldValue::Absent,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Integer(i128::from(u))
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::Composite { len: items.len() },
            Value::Object(map) => FieldValue::Composite { len: map.len() },
        }
    }
}

/// Conversion of a record field into a [`FieldValue`].
///
/// The derive macro calls this on every annotated field, so a field type
/// must implement it to carry a `#[validate("...")]` attribute.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Integer(*self as i128)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue<'_> {
        (**self).to_field_value()
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.to_field_value(),
            None => FieldValue::Absent,
        }
    }
}

impl<T> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Composite { len: self.len() }
    }
}

impl ToFieldValue for Value {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::from_json(self)
    }
}
