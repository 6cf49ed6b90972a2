//! # fieldcheck
//!
//! Declarative validation for structs. Fields carry a compact rule
//! annotation; the engine reads the annotation, applies each rule to the
//! field's value and returns every violation in one report.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck::Validate;
//!
//! #[derive(Validate)]
//! struct Avenger {
//!     #[validate("required,minLen=3,maxLen=50")]
//!     name: String,
//!     #[validate("required,min=18,max=100")]
//!     age: i32,
//!     #[validate("required,email")]
//!     email: String,
//! }
//!
//! let steve = Avenger {
//!     name: "Steve Rogers".into(),
//!     age: 105,
//!     email: "steve.rogers@avengers.com".into(),
//! };
//!
//! let report = steve.validate().unwrap_err();
//! assert_eq!(report.fields[0].field, "age");
//! assert_eq!(report.fields[0].message, "must be <= 100");
//! ```
//!
//! ## Rules
//!
//! Checked in this order; the first failing rule is the field's violation.
//!
//! - `required` - value is not the zero value of its kind (`0`, `""`, `false`, `None`)
//! - `min=N` / `max=N` - integer bounds, inclusive
//! - `minLen=N` / `maxLen=N` - text length in characters, inclusive
//! - `email` - text matches `local@domain.tld`
//!
//! Rules that do not fit the field's kind, and unknown rule names, are ignored.
//!
//! ## Error Format
//!
//! The report serializes to:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "validation_error",
//!     "message": "Validation failed",
//!     "fields": [
//!       {"field": "age", "code": "max", "message": "must be <= 100", "params": {"max": "100"}}
//!     ]
//!   }
//! }
//! ```

// Lets the derive's `::fieldcheck::` paths resolve inside this crate's own tests.
extern crate self as fieldcheck;

mod check;
mod config;
mod error;
mod record;
mod rules;
mod schema;
mod validate;
mod value;

pub use check::{check_field, is_valid_email};
pub use config::{ArgumentMode, ConfigError, Policy, ValidatorConfig, ENV_PREFIX};
pub use error::{Error, FieldError, Result, RuleError, ValidationError};
pub use record::{Field, Record};
pub use rules::{parse_rules, RuleMap, NUMERIC_RULES};
pub use schema::{FieldRule, Schema};
pub use validate::{collect, validate, Validate, Validator};
pub use value::{FieldValue, Kind, ToFieldValue};

pub use fieldcheck_macros::Validate;

/// Prelude module for validation
pub mod prelude {
    pub use crate::config::{Policy, ValidatorConfig};
    pub use crate::error::{Error, FieldError, ValidationError};
    pub use crate::record::{Field, Record};
    pub use crate::schema::Schema;
    pub use crate::validate::{Validate, Validator};
    pub use fieldcheck_macros::Validate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_to_json() {
        let error = ValidationError::new(vec![
            FieldError::new("email", "email", "must be a valid email"),
            FieldError::new("age", "max", "must be <= 100"),
        ]);

        let json = serde_json::to_string_pretty(&error).unwrap();
        assert!(json.contains("validation_error"));
        assert!(json.contains("email"));
        assert!(json.contains("age"));
    }
}
