//! Validation overhead benchmarks
//!
//! Benchmarks annotation parsing, single-field checks and whole-record
//! validation through both the derived and the JSON schema paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldcheck::{check_field, parse_rules, FieldValue, Schema, Validate, Validator};
use serde_json::json;

#[derive(Validate)]
struct Avenger {
    #[validate("required,minLen=3,maxLen=50")]
    name: String,
    #[validate("required,min=18,max=100")]
    age: i64,
    #[validate("required,email")]
    email: String,
    #[validate("maxLen=20")]
    rank: String,
    #[validate("min=1")]
    missions: i64,
}

fn avenger(age: i64) -> Avenger {
    Avenger {
        name: "Steve Rogers".to_string(),
        age,
        email: "steve.rogers@avengers.com".to_string(),
        rank: "Captain".to_string(),
        missions: 10,
    }
}

/// Benchmark annotation parsing
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rules");

    group.bench_function("single_flag", |b| {
        b.iter(|| parse_rules(black_box("required")))
    });

    group.bench_function("five_rules", |b| {
        b.iter(|| parse_rules(black_box("required,min=18,max=100,minLen=3,maxLen=50")))
    });

    group.finish();
}

/// Benchmark single-field checks
fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_field");

    let range = parse_rules("required,min=18,max=100");
    group.bench_function("integer_range", |b| {
        b.iter(|| check_field(black_box(&FieldValue::Integer(42)), &range))
    });

    let email = parse_rules("required,email");
    group.bench_function("email", |b| {
        b.iter(|| check_field(black_box(&FieldValue::Text("steve.rogers@avengers.com")), &email))
    });

    group.finish();
}

/// Benchmark whole-record validation
fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_record");

    let valid = avenger(99);
    group.bench_function("derived_valid", |b| {
        b.iter(|| black_box(&valid).validate())
    });

    let invalid = avenger(105);
    group.bench_function("derived_one_violation", |b| {
        b.iter(|| black_box(&invalid).validate())
    });

    let schema = Schema::new()
        .field("name", "required,minLen=3,maxLen=50")
        .field("age", "required,min=18,max=100")
        .field("email", "required,email")
        .field("rank", "maxLen=20")
        .field("missions", "min=1");
    let body = json!({
        "name": "Steve Rogers",
        "age": 99,
        "email": "steve.rogers@avengers.com",
        "rank": "Captain",
        "missions": 10
    });
    let validator = Validator::default();
    group.bench_function("json_schema", |b| {
        b.iter(|| validator.validate_json(&schema, black_box(&body)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_check, bench_record);
criterion_main!(benches);
