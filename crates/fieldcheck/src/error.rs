//! Validation error types and JSON error format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Result type alias for configurable validation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a single rule, before it is attached to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleError {
    /// The rule that failed (`required`, `min`, `maxLen`, ...)
    pub code: String,
    /// Human-readable reason
    pub message: String,
    /// Rule arguments and observed values
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, serde_json::Value>,
}

impl RuleError {
    /// Create a new rule error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter to the error.
    pub fn param(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.params.insert(key.into(), v);
        }
        self
    }

    /// Attach the rule error to a field.
    pub fn for_field(self, field: impl Into<String>) -> FieldError {
        FieldError {
            field: field.into(),
            code: self.code,
            message: self.message,
            params: if self.params.is_empty() {
                None
            } else {
                Some(self.params)
            },
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for RuleError {}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field name that failed validation
    pub field: String,
    /// The rule that failed
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional rule parameters (e.g. the `max` argument)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, serde_json::Value>>,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
            params: None,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field {}: {}", self.field, self.message)
    }
}

/// Internal error structure for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
    fields: Vec<FieldError>,
}

/// Wrapper for the error response format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

/// Validation report: every field violation found in one record.
///
/// Fields appear in the record's declaration order, at most once each.
/// Serializes to:
///
/// ```json
/// {
///   "error": {
///     "type": "validation_error",
///     "message": "Validation failed",
///     "fields": [{"field": "age", "code": "max", "message": "must be <= 100"}]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Collection of field-level validation errors
    pub fields: Vec<FieldError>,
    /// Summary message (default: "Validation failed")
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error with field errors.
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self {
            fields,
            message: "Validation failed".to_string(),
        }
    }

    /// Create a validation error for a single field.
    pub fn field(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(vec![FieldError::new(field, code, message)])
    }

    /// Check if there are any validation errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of field errors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Add a field error.
    pub fn add(&mut self, error: FieldError) {
        self.fields.push(error);
    }

    /// Get the error recorded for a field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Field names with errors, in report order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    /// Ok if no errors, Err otherwise.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} field error(s)", self.message, self.fields.len())
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let wrapper = ErrorWrapper {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: self.message.clone(),
                fields: self.fields.clone(),
            },
        };
        wrapper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ValidationError {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wrapper = ErrorWrapper::deserialize(deserializer)?;
        Ok(Self {
            fields: wrapper.error.fields,
            message: wrapper.error.message,
        })
    }
}

/// Errors from a configured [`Validator`](crate::Validator).
///
/// Configuration errors (`NotARecord`, `InvalidArgument`) are fatal to the
/// call and never mixed into a report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input was not a record (e.g. a JSON array where an object was expected).
    #[error("input must be a struct, got {found}")]
    NotARecord { found: String },

    /// A numeric rule argument did not parse as an integer (strict mode only).
    #[error("field '{field}': rule '{rule}' has non-integer argument '{argument}'")]
    InvalidArgument {
        field: String,
        rule: String,
        argument: String,
    },

    /// One or more fields violated their rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Check whether this is a configuration error rather than a report.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Validation(_))
    }

    /// The violation report, if this error carries one.
    pub fn report(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(report) => Some(report),
            _ => None,
        }
    }
}
