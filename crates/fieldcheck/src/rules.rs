//! Rule annotation parsing.
//!
//! An annotation is a comma-separated list of rule tokens. Each token is
//! either a flag (`required`, `email`) or a `name=value` pair (`min=18`).
//! The value is everything after the first `=`, so it may itself contain `=`.
//! There is no escaping: a literal `,` always starts a new token.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Rules whose argument must be an integer.
pub const NUMERIC_RULES: [&str; 4] = ["min", "max", "minLen", "maxLen"];

/// Mapping from rule name to rule argument, borrowed from one annotation.
///
/// Flag rules map to an empty argument. The map is built fresh for each
/// field check and never outlives the annotation it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMap<'a> {
    rules: HashMap<&'a str, &'a str>,
}

impl<'a> RuleMap<'a> {
    /// Create an empty rule map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, replacing any earlier argument for the same name.
    pub fn insert(&mut self, name: &'a str, argument: &'a str) {
        self.rules.insert(name, argument);
    }

    /// Get the argument of a rule, if the rule is present.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.rules.get(name).copied()
    }

    /// Check whether a rule is present, whatever its argument.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of distinct rule names.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules were parsed.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Numeric rules whose argument does not parse as an integer.
    ///
    /// Returned in check order so callers report the same rule every time.
    pub fn unparsable_arguments(&self) -> Vec<(&'a str, &'a str)> {
        NUMERIC_RULES
            .iter()
            .filter_map(|name| {
                let arg = self.get(name)?;
                arg.parse::<i64>().is_err().then_some((*name, arg))
            })
            .collect()
    }
}

/// Parse an annotation string into a [`RuleMap`].
///
/// Never fails. An empty token produces a rule with an empty name, which no
/// check ever looks up.
///
/// ```
/// use fieldcheck::parse_rules;
///
/// let rules = parse_rules("required,min=18,max=100");
/// assert!(rules.contains("required"));
/// assert_eq!(rules.get("min"), Some("18"));
/// ```
pub fn parse_rules(annotation: &str) -> RuleMap<'_> {
    let mut rules = RuleMap::new();
    for token in annotation.split(',') {
        match token.split_once('=') {
            Some((name, argument)) => rules.insert(name, argument),
            None => rules.insert(token, ""),
        }
    }
    rules
}

/// Fail on the first numeric rule argument that is not an integer.
///
/// Takes `(field name, annotation)` pairs and reports the first offending
/// field, with its rules in check order.
pub(crate) fn check_arguments<'a, I>(annotations: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (field, annotation) in annotations {
        let rules = parse_rules(annotation);
        if let Some((rule, argument)) = rules.unparsable_arguments().into_iter().next() {
            return Err(Error::InvalidArgument {
                field: field.to_string(),
                rule: rule.to_string(),
                argument: argument.to_string(),
            });
        }
    }
    Ok(())
}
