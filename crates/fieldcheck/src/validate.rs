//! Validation trait and the record-level orchestrator.

use crate::check::check_field;
use crate::config::{ArgumentMode, Policy, ValidatorConfig};
use crate::error::{Error, FieldError, Result, ValidationError};
use crate::record::{Field, Record};
use crate::rules::{check_arguments, parse_rules};
use crate::schema::Schema;
use serde_json::Value;
use tracing::{debug, trace};

/// Trait for validatable records.
///
/// Implemented for every [`Record`], so `#[derive(Validate)]` is enough to
/// call `.validate()`. Uses the default policy: every field is checked and
/// unparsable numeric arguments compare against zero.
///
/// ## Example
///
/// ```rust
/// use fieldcheck::Validate;
///
/// #[derive(Validate)]
/// struct CreateUser {
///     #[validate("required,email")]
///     email: String,
///     #[validate("minLen=3,maxLen=20")]
///     username: String,
/// }
///
/// let user = CreateUser {
///     email: "not-an-email".to_string(),
///     username: "ab".to_string(),
/// };
///
/// let err = user.validate().unwrap_err();
/// assert_eq!(err.field_names(), vec!["email", "username"]);
/// ```
pub trait Validate: Record {
    /// Validate the record and return every violation on failure.
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate(self)
    }

    /// Validate and return the record if valid, error otherwise.
    fn validated(self) -> std::result::Result<Self, ValidationError>
    where
        Self: Sized,
    {
        Validate::validate(&self)?;
        Ok(self)
    }
}

impl<T: Record + ?Sized> Validate for T {}

/// Validate a record with the default configuration.
pub fn validate<R: Record + ?Sized>(record: &R) -> std::result::Result<(), ValidationError> {
    let fields = record.fields();
    Validator::default()
        .collect_violations(record.record_name(), &fields)
        .into_result()
}

/// Record validator with a fixed [`ValidatorConfig`].
///
/// Holds no per-call state; one instance can be shared across threads.
///
/// ```
/// use fieldcheck::{Schema, Validator, ValidatorConfig};
/// use serde_json::json;
///
/// let schema = Schema::new().field("age", "required,min=18,max=100");
/// let validator = Validator::new(ValidatorConfig::new());
///
/// let err = validator.validate_json(&schema, &json!({"age": 105})).unwrap_err();
/// assert_eq!(err.report().unwrap().fields[0].message, "must be <= 100");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a record.
    ///
    /// Returns `Error::Validation` with the violations in field order, or
    /// `Error::InvalidArgument` in strict mode when an annotation is broken.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Result<()> {
        let fields = record.fields();
        self.run(record.record_name(), &fields)
    }

    /// Validate a decoded JSON value against a schema.
    ///
    /// A non-object value is `Error::NotARecord`.
    pub fn validate_json(&self, schema: &Schema, value: &Value) -> Result<()> {
        let fields = schema.bind(value)?;
        self.run("json", &fields)
    }

    /// Validate a pre-built field list.
    pub fn validate_fields(&self, fields: &[Field<'_>]) -> Result<()> {
        self.run("fields", fields)
    }

    fn run(&self, record: &str, fields: &[Field<'_>]) -> Result<()> {
        if self.config.arguments == ArgumentMode::Strict {
            check_arguments(fields.iter().map(|f| (f.name, f.rules)))?;
        }

        self.collect_violations(record, fields)
            .into_result()
            .map_err(Error::Validation)
    }

    /// Check every annotated field, honouring the aggregation policy.
    fn collect_violations(&self, record: &str, fields: &[Field<'_>]) -> ValidationError {
        let mut report = ValidationError::new(Vec::new());

        for field in fields {
            if field.rules.is_empty() {
                continue;
            }

            let rules = parse_rules(field.rules);
            match check_field(&field.value, &rules) {
                Some(err) => {
                    trace!(record, field = field.name, code = %err.code, "field failed");
                    report.add(err.for_field(field.name));
                    if self.config.policy == Policy::FailFast {
                        break;
                    }
                }
                None => trace!(record, field = field.name, "field passed"),
            }
        }

        debug!(
            record,
            fields = fields.len(),
            violations = report.len(),
            "validation finished"
        );

        report
    }
}

/// Collect field errors from a closure-based check list.
///
/// Convenience for callers that mix derived rules with ad-hoc checks.
pub fn collect<I>(errors: I) -> std::result::Result<(), ValidationError>
where
    I: IntoIterator<Item = Option<FieldError>>,
{
    ValidationError::new(errors.into_iter().flatten().collect()).into_result()
}
