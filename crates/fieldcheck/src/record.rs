//! Record introspection.

use crate::value::{FieldValue, ToFieldValue};

/// One field of a record as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a> {
    /// Field name reported in violations
    pub name: &'a str,
    /// Current value
    pub value: FieldValue<'a>,
    /// Raw rule annotation; empty means "no rules"
    pub rules: &'a str,
}

impl<'a> Field<'a> {
    /// Create a field from anything convertible to a [`FieldValue`].
    pub fn new<T>(name: &'a str, value: &'a T, rules: &'a str) -> Self
    where
        T: ToFieldValue + ?Sized,
    {
        Self {
            name,
            value: value.to_field_value(),
            rules,
        }
    }
}

/// A structured value with a fixed, ordered set of named fields.
///
/// Usually derived:
///
/// ```
/// use fieldcheck::{Record, Validate};
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate("required,email")]
///     email: String,
///     #[validate("min=18")]
///     age: u8,
///     nickname: String,
/// }
///
/// let signup = Signup { email: "a@b.co".into(), age: 30, nickname: String::new() };
/// // `nickname` has no rules, so the derive leaves it out.
/// assert_eq!(signup.fields().len(), 2);
/// assert!(signup.validate().is_ok());
/// ```
///
/// Implementing it by hand is the registration alternative to the derive:
/// return the fields in declaration order, each with its annotation. Fields
/// with an empty annotation are skipped by the validator.
pub trait Record {
    /// Type name used in log output.
    fn record_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn record_name(&self) -> &'static str {
        (**self).record_name()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}
