//! Per-field rule checks.

use crate::error::RuleError;
use crate::rules::RuleMap;
use crate::value::FieldValue;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // Syntactic approximation only; no RFC 5322 quoting, no DNS.
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
    })
}

/// Check whether a string matches the email grammar.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Parse a numeric rule argument, falling back to zero.
///
/// Strict callers reject such arguments before checking; see
/// [`RuleMap::unparsable_arguments`].
fn int_arg(argument: &str) -> i64 {
    argument.parse().unwrap_or(0)
}

/// Apply a field's rules to its value.
///
/// Rules run in a fixed order (`required`, `min`, `max`, `minLen`, `maxLen`,
/// `email`) and the first failure is returned. Rules that do not apply to
/// the value's kind, and unknown rule names, are skipped.
///
/// ```
/// use fieldcheck::{check_field, parse_rules, FieldValue};
///
/// let rules = parse_rules("required,min=18,max=100");
/// let err = check_field(&FieldValue::Integer(105), &rules).unwrap();
/// assert_eq!(err.message, "must be <= 100");
/// ```
pub fn check_field(value: &FieldValue<'_>, rules: &RuleMap<'_>) -> Option<RuleError> {
    if rules.contains("required") && value.is_zero() {
        return Some(RuleError::new("required", "is required"));
    }

    if let FieldValue::Integer(n) = *value {
        if let Some(arg) = rules.get("min") {
            if n < i128::from(int_arg(arg)) {
                return Some(
                    RuleError::new("min", format!("must be >= {}", arg)).param("min", arg),
                );
            }
        }
        if let Some(arg) = rules.get("max") {
            if n > i128::from(int_arg(arg)) {
                return Some(
                    RuleError::new("max", format!("must be <= {}", arg)).param("max", arg),
                );
            }
        }
    }

    if let FieldValue::Text(text) = *value {
        // Scalar values, not bytes: "héllo" has length 5.
        let len = text.chars().count() as i64;

        if let Some(arg) = rules.get("minLen") {
            if len < int_arg(arg) {
                return Some(
                    RuleError::new("minLen", format!("length must be >= {}", arg))
                        .param("minLen", arg)
                        .param("length", len),
                );
            }
        }
        if let Some(arg) = rules.get("maxLen") {
            if len > int_arg(arg) {
                return Some(
                    RuleError::new("maxLen", format!("length must be <= {}", arg))
                        .param("maxLen", arg)
                        .param("length", len),
                );
            }
        }
        if rules.contains("email") && !is_valid_email(text) {
            return Some(RuleError::new("email", "must be a valid email"));
        }
    }

    None
}
