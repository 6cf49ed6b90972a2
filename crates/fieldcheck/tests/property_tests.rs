//! Property-based tests for the validation engine.

use fieldcheck::{check_field, parse_rules, Field, FieldValue, Validator};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Records whose fields carry no annotations always pass.
    #[test]
    fn no_rules_always_pass(
        n in any::<i64>(),
        s in ".{0,40}",
        b in any::<bool>(),
    ) {
        let fields = [
            Field::new("n", &n, ""),
            Field::new("s", s.as_str(), ""),
            Field::new("b", &b, ""),
        ];
        prop_assert!(Validator::default().validate_fields(&fields).is_ok());
    }

    // Integer inside [min, max] passes; outside names the violated bound.
    #[test]
    fn integer_range(
        min in -1000i64..1000,
        span in 0i64..1000,
        value in -3000i64..3000,
    ) {
        let max = min + span;
        let annotation = format!("min={},max={}", min, max);
        let rules = parse_rules(&annotation);
        let result = check_field(&FieldValue::Integer(value.into()), &rules);

        if value < min {
            let err = result.unwrap();
            prop_assert_eq!(err.code, "min");
            prop_assert_eq!(err.message, format!("must be >= {}", min));
        } else if value > max {
            let err = result.unwrap();
            prop_assert_eq!(err.code, "max");
            prop_assert_eq!(err.message, format!("must be <= {}", max));
        } else {
            prop_assert!(result.is_none());
        }
    }

    // Text length outside [minLen, maxLen] yields exactly one violation.
    #[test]
    fn text_length(
        min_len in 0usize..20,
        max_len in 0usize..20,
        text in "[a-zé]{0,30}",
    ) {
        let annotation = format!("minLen={},maxLen={}", min_len, max_len);
        let rules = parse_rules(&annotation);
        let len = text.chars().count();
        let result = check_field(&FieldValue::Text(&text), &rules);

        if len < min_len {
            prop_assert_eq!(result.unwrap().code, "minLen");
        } else if len > max_len {
            prop_assert_eq!(result.unwrap().code, "maxLen");
        } else {
            prop_assert!(result.is_none());
        }
    }

    // `required` depends only on the value being zero, not on other rules.
    #[test]
    fn required_independent_of_other_rules(
        value in any::<i32>(),
        extra in prop_oneof![Just(""), Just(",email"), Just(",minLen=100"), Just(",max=99999999999")],
    ) {
        let annotation = format!("required{}", extra);
        let rules = parse_rules(&annotation);
        let result = check_field(&FieldValue::Integer(value.into()), &rules);
        if value == 0 {
            prop_assert_eq!(result.unwrap().code, "required");
        } else {
            prop_assert!(result.is_none());
        }
    }

    // Report order follows field order whatever the failing rules are.
    #[test]
    fn report_follows_field_order(values in proptest::collection::vec(-5i64..5, 1..8)) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("f{}", i)).collect();
        let fields: Vec<Field<'_>> = names
            .iter()
            .zip(values.iter())
            .map(|(name, value)| Field::new(name.as_str(), value, "required,min=-2,max=2"))
            .collect();

        let expected: Vec<&str> = names
            .iter()
            .zip(values.iter())
            .filter(|(_, v)| **v == 0 || **v < -2 || **v > 2)
            .map(|(n, _)| n.as_str())
            .collect();

        match Validator::default().validate_fields(&fields) {
            Ok(()) => prop_assert!(expected.is_empty()),
            Err(err) => {
                let report = err.report().unwrap();
                prop_assert_eq!(report.field_names(), expected);
            }
        }
    }

    // The parser never fails and every `name=value` token survives.
    #[test]
    fn parser_total(tokens in proptest::collection::vec("[a-zA-Z]{1,6}(=[a-z0-9=]{0,5})?", 0..6)) {
        let annotation = tokens.join(",");
        let rules = parse_rules(&annotation);
        for token in &tokens {
            let name = token.split_once('=').map(|(n, _)| n).unwrap_or(token.as_str());
            prop_assert!(rules.contains(name));
            // Only the last duplicate survives.
            let last = tokens
                .iter()
                .rev()
                .find(|t| t.split_once('=').map(|(n, _)| n).unwrap_or(t.as_str()) == name)
                .unwrap();
            let last_arg = last.split_once('=').map(|(_, a)| a).unwrap_or("");
            prop_assert_eq!(rules.get(name), Some(last_arg));
        }
    }
}
