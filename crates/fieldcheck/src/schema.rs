//! Runtime rule tables for untyped records.
//!
//! A [`Schema`] pairs field names with annotations so that values whose shape
//! is only known at runtime (decoded JSON) can go through the same rules as
//! derived records.

use crate::error::{Error, Result};
use crate::record::Field;
use crate::rules::check_arguments;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    pub rules: String,
}

/// Ordered list of `(field, annotation)` pairs.
///
/// ```
/// use fieldcheck::Schema;
///
/// let schema = Schema::new()
///     .field("name", "required,minLen=3")
///     .field("age", "required,min=18");
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<FieldRule>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; declaration order is report order.
    pub fn field(mut self, field: impl Into<String>, rules: impl Into<String>) -> Self {
        self.fields.push(FieldRule {
            field: field.into(),
            rules: rules.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.fields.iter()
    }

    /// Reject numeric rule arguments that do not parse as integers.
    ///
    /// Call once after building a schema to surface configuration mistakes
    /// up front instead of on the first request.
    pub fn check_arguments(&self) -> Result<()> {
        check_arguments(
            self.fields
                .iter()
                .map(|entry| (entry.field.as_str(), entry.rules.as_str())),
        )
    }

    /// Project a JSON object onto this schema's fields.
    ///
    /// Missing keys become [`FieldValue::Absent`]. Anything other than an
    /// object is a configuration error.
    pub fn bind<'a>(&'a self, value: &'a Value) -> Result<Vec<Field<'a>>> {
        let object = value.as_object().ok_or_else(|| Error::NotARecord {
            found: json_type(value).to_string(),
        })?;

        Ok(self
            .fields
            .iter()
            .map(|entry| Field {
                name: &entry.field,
                value: object
                    .get(&entry.field)
                    .map(FieldValue::from_json)
                    .unwrap_or(FieldValue::Absent),
                rules: &entry.rules,
            })
            .collect())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
