//! Integration tests for the Validate derive macro.
//!
//! These tests verify that the derive macro exposes annotated fields in
//! declaration order and that the generated records validate as expected.

use fieldcheck::{Error, FieldValue, Record, Validate, Validator, ValidatorConfig};

// Capitalised wire names come from `rename`.
#[derive(Debug, Validate)]
struct Avenger {
    #[validate(rules = "required,minLen=3,maxLen=50", rename = "Name")]
    name: String,
    #[validate(rules = "required,min=18,max=100", rename = "Age")]
    age: i64,
    #[validate(rules = "required,email", rename = "Email")]
    email: String,
    #[validate(rules = "maxLen=20", rename = "Rank")]
    rank: String,
    #[validate(rules = "min=1", rename = "Missions")]
    missions: u32,
}

fn steve() -> Avenger {
    Avenger {
        name: "Steve Rogers".to_string(),
        age: 105,
        email: "steve.rogers@avengers.com".to_string(),
        rank: "Captain".to_string(),
        missions: 10,
    }
}

#[test]
fn derive_end_to_end_single_age_violation() {
    let err = steve().validate().unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.fields[0].field, "Age");
    assert_eq!(err.fields[0].message, "must be <= 100");
    assert_eq!(err.fields[0].to_string(), "Field Age: must be <= 100");
}

#[test]
fn derive_fields_in_declaration_order() {
    let avenger = steve();
    let names: Vec<&str> = avenger.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Name", "Age", "Email", "Rank", "Missions"]);
    assert_eq!(avenger.record_name(), "Avenger");
}

#[test]
fn derive_field_values_carry_kinds() {
    let avenger = steve();
    let fields = avenger.fields();
    assert_eq!(fields[0].value, FieldValue::Text("Steve Rogers"));
    assert_eq!(fields[1].value, FieldValue::Integer(105));
    assert_eq!(fields[4].value, FieldValue::Integer(10));
    assert_eq!(fields[1].rules, "required,min=18,max=100");
}

#[test]
fn derive_valid_record_passes() {
    let avenger = Avenger { age: 99, ..steve() };
    assert!(avenger.validate().is_ok());
}

// Bare-string form, unannotated fields and optional values.
#[derive(Validate)]
struct Profile {
    #[validate("required")]
    name: String,
    #[validate("required,min=1")]
    age: i32,
    #[allow(dead_code)]
    bio: Vec<String>,
    #[validate("email")]
    backup_email: Option<String>,
}

#[test]
fn unannotated_fields_are_not_exposed() {
    let profile = Profile {
        name: "John Doe".to_string(),
        age: 30,
        bio: Vec::new(),
        backup_email: None,
    };
    let names: Vec<&str> = profile.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name", "age", "backup_email"]);
    assert!(profile.validate().is_ok());
}

#[test]
fn zero_values_fail_required() {
    let profile = Profile {
        name: String::new(),
        age: 0,
        bio: Vec::new(),
        backup_email: Some("nope".to_string()),
    };
    let err = profile.validate().unwrap_err();
    assert_eq!(err.field_names(), vec!["name", "age", "backup_email"]);
    assert_eq!(err.get("name").unwrap().message, "is required");
    assert_eq!(err.get("age").unwrap().message, "is required");
    assert_eq!(err.get("backup_email").unwrap().code, "email");
}

#[test]
fn negative_age_fails_min_not_required() {
    let profile = Profile {
        name: "x".to_string(),
        age: -5,
        bio: Vec::new(),
        backup_email: None,
    };
    let err = profile.validate().unwrap_err();
    assert_eq!(err.get("age").unwrap().code, "min");
}

// Multiple attributes are joined; later duplicates win.
#[derive(Validate)]
struct Layered {
    #[validate("min=1")]
    #[validate("min=10")]
    level: u8,
}

#[test]
fn repeated_attributes_are_joined() {
    let layered = Layered { level: 5 };
    assert_eq!(layered.fields()[0].rules, "min=1,min=10");
    let err = layered.validate().unwrap_err();
    assert_eq!(err.fields[0].message, "must be >= 10");
}

// Generic records keep their bounds.
#[derive(Validate)]
struct Wrapper<T: fieldcheck::ToFieldValue> {
    #[validate("required")]
    inner: T,
}

#[test]
fn generic_record() {
    assert!(Wrapper { inner: 3u16 }.validate().is_ok());
    assert!(Wrapper { inner: "" }.validate().is_err());
}

// Raw identifiers report their plain name.
#[derive(Validate)]
struct Tagged {
    #[validate("required")]
    r#type: String,
    #[validate(rules = "required", rename = "r#match")]
    r#match: String,
}

#[test]
fn raw_identifiers_are_unprefixed() {
    let tagged = Tagged {
        r#type: String::new(),
        r#match: String::new(),
    };
    assert_eq!(tagged.record_name(), "Tagged");
    assert_eq!(tagged.fields()[0].name, "type");
    // An explicit rename is taken verbatim.
    assert_eq!(tagged.fields()[1].name, "r#match");
    let err = tagged.validate().unwrap_err();
    assert_eq!(err.field_names(), vec!["type", "r#match"]);
}

#[test]
fn configured_validator_on_derived_record() {
    #[derive(Validate)]
    struct Broken {
        #[validate("maxLen=twenty")]
        title: String,
    }

    let record = Broken {
        title: "fine".to_string(),
    };
    // Lenient: "twenty" reads as 0, so any non-empty title is too long.
    assert!(record.validate().is_err());

    let err = Validator::new(ValidatorConfig::new().strict())
        .validate(&record)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { ref rule, .. } if rule == "maxLen"));
}
