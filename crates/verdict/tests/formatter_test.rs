//! Value rendering and template interpolation.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use verdict::prelude::*;

const WORKING_DIR: &str = "/project";

struct WithToString;

impl fmt::Display for WithToString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("__toString")
    }
}

/// Nested `stdClass` objects, one `key: value` pair per level.
fn object_chain(keys: &[&str], leaf: &str) -> Value {
    keys.iter().rev().fold(Value::from(leaf), |inner, key| {
        Value::from(Object::new("stdClass").with_field(*key, inner))
    })
}

fn datetime(rfc3339: &str) -> Value {
    Value::from(DateTime::parse_from_rfc3339(rfc3339).unwrap())
}

fn formatter() -> Formatter {
    Formatter::new(3, 5).with_working_dir(WORKING_DIR)
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[rstest]
#[case::exception(
    Value::from(ErrorValue::new("Exception", "").at("/project/tests/formatter_test.rs", 39)),
    r#"`[exception] (Exception: { "message": "", "code": 0, "file": "tests/formatter_test.rs:39" })`"#
)]
#[case::object_three_levels(
    object_chain(&["foo", "bar", "baz"], "Here!"),
    r#"`[object] (stdClass: { "foo": [object] (stdClass: { "bar": [object] (stdClass: { "baz": "Here!" }) }) })`"#
)]
#[case::object_four_levels(
    object_chain(&["foo", "bar", "baz", "qux"], "Here!"),
    r#"`[object] (stdClass: { "foo": [object] (stdClass: { "bar": [object] (stdClass: { "baz": [object] (stdClass: ...) }) }) })`"#
)]
#[case::empty_object(Value::from(Object::new("stdClass")), "`[object] (stdClass: { })`")]
#[case::datetime(datetime("2017-03-05T15:20:05+00:00"), r#""2017-03-05T15:20:05+00:00""#)]
#[case::datetime_with_offset(datetime("2017-03-05T15:20:05+02:00"), r#""2017-03-05T15:20:05+02:00""#)]
#[case::datetime_utc(
    Value::from(Utc.with_ymd_and_hms(2017, 3, 5, 15, 20, 5).unwrap()),
    r#""2017-03-05T15:20:05+00:00""#
)]
#[case::traversable(
    Value::from(Traversable::list("ArrayIterator", 1..=3)),
    "`[traversable] (ArrayIterator: { 1, 2, 3 })`"
)]
#[case::traversable_map(
    Value::from(Traversable::map("ArrayObject", [("key", "value")])),
    r#"`[traversable] (ArrayObject: { "key": "value" })`"#
)]
#[case::stringable(Value::stringable(WithToString), r#""__toString""#)]
#[case::empty_list(Value::List(vec![]), "{ }")]
#[case::five_items(Value::from_iter(1..=5), "{ 1, 2, 3, 4, 5 }")]
#[case::nine_items(Value::from_iter(1..=9), "{ 1, 2, 3, 4, 5,  ...  }")]
#[case::map_three_levels(
    Value::from(json!({"foo": {"bar": {"baz": "Here!"}}})),
    r#"{ "foo": { "bar": { "baz": "Here!" } } }"#
)]
#[case::map_four_levels(
    Value::from(json!({"foo": {"bar": {"baz": {"qux": "Here!"}}}})),
    r#"{ "foo": { "bar": { "baz": ... } } }"#
)]
#[case::map_depth_truncation(
    Value::from(json!({"a": {"b": {"c": {"d": 1}}}})),
    r#"{ "a": { "b": { "c": ... } } }"#
)]
#[case::resource(Value::resource("stream"), "`[resource] (stream)`")]
#[case::float(Value::from(1.0), "1.0")]
#[case::infinity(Value::from(f64::INFINITY), "`INF`")]
#[case::negative_infinity(Value::from(f64::NEG_INFINITY), "`-INF`")]
#[case::nan(Value::from(f64::NAN), "`NaN`")]
#[case::true_(Value::from(true), "`true`")]
#[case::false_(Value::from(false), "`false`")]
#[case::string(Value::from("Something"), r#""Something""#)]
#[case::double_quotes(Value::from(r#"What "if""#), r#""What \"if\"""#)]
#[case::single_quotes(Value::from("What 'if'"), r#""What 'if'""#)]
#[case::integer(Value::from(42), "42")]
#[case::null(Value::Null, "null")]
fn test_normalizes_values(#[case] input: Value, #[case] expected: &str) {
    let actual = formatter().create(&input, &Properties::new(), "{{placeholder}}");

    assert_eq!(actual, expected);
}

#[test]
fn test_nested_kinds_are_not_quoted() {
    let input = Value::List(vec![
        Value::from(f64::INFINITY),
        Value::resource("stream"),
        Value::from(Object::new("User")),
        Value::from(Traversable::list("ArrayIterator", [1])),
    ]);

    assert_eq!(
        formatter().normalize(&input),
        "{ INF, [resource] (stream), [object] (User: { }), [traversable] (ArrayIterator: { 1 }) }"
    );
}

#[test]
fn test_object_fields_do_not_consume_depth() {
    let formatter = Formatter::new(1, 5);
    let object = Value::from(Object::new("User").with_field("tags", vec!["a"]));
    let list = Value::from(vec![vec!["a"]]);

    assert_eq!(formatter.normalize(&object), r#"`[object] (User: { "tags": ... })`"#);
    assert_eq!(formatter.normalize(&list), "{ ... }");
    assert_eq!(
        Formatter::new(2, 5).normalize(&object),
        r#"`[object] (User: { "tags": { "a" } })`"#
    );
}

#[test]
fn test_exception_fields_respect_depth() {
    let error = Value::from(ErrorValue::new("Exception", "boom"));

    assert_eq!(Formatter::new(1, 5).normalize(&error), "`[exception] (Exception: ...)`");
}

#[test]
fn test_exception_at_caller_location() {
    let (error, line) = (ErrorValue::new("RuntimeError", "boom").with_code(3), line!());

    let expected = format!(
        r#"`[exception] (RuntimeError: {{ "message": "boom", "code": 3, "file": "{}:{line}" }})`"#,
        file!()
    );
    assert_eq!(Formatter::new(3, 5).normalize(&Value::from(error)), expected);
}

#[test]
fn test_exception_from_std_error() {
    let parse_error = "x".parse::<i32>().unwrap_err();
    let error = ErrorValue::from_error(&parse_error).at("/project/src/main.rs", 7);

    assert_eq!(
        formatter().normalize(&Value::from(error)),
        r#"`[exception] (ParseIntError: { "message": "invalid digit found in string", "code": 0, "file": "src/main.rs:7" })`"#
    );
}

#[test]
fn test_breadth_truncation_has_single_marker() {
    let rendered = formatter().normalize(&Value::from_iter(1..=9));

    assert_eq!(rendered.matches("...").count(), 1);
    assert!(rendered.starts_with("{ 1, 2, 3, 4, 5, "));
    assert!(!rendered.contains(",  ..., "));
}

#[test]
fn test_exactly_max_children_has_no_marker() {
    let rendered = Formatter::new(3, 3).normalize(&Value::from_iter(1..=3));
    assert_eq!(rendered, "{ 1, 2, 3 }");
}

#[test]
fn test_json_values_convert_to_maps_and_lists() {
    let value = Value::from(json!({"alpha": [true, null, 2.5]}));
    assert_eq!(formatter().normalize(&value), r#"{ "alpha": { true, null, 2.5 } }"#);
}

#[test]
fn test_json_objects_render_in_document_order() {
    let value = Value::from(json!({"b": 1, "a": 2}));
    assert_eq!(formatter().normalize(&value), r#"{ "b": 1, "a": 2 }"#);

    let nested = Value::from(json!({"zeta": {"y": true, "x": null}, "alpha": []}));
    assert_eq!(
        formatter().normalize(&nested),
        r#"{ "zeta": { "y": true, "x": null }, "alpha": { } }"#
    );
}

// ============================================================================
// TEMPLATES
// ============================================================================

#[test]
fn test_placeholder_defaults_to_rendered_input() {
    let formatter = formatter();
    assert_eq!(formatter.create(&Value::from(42), &Properties::new(), "{{placeholder}}"), "42");
    assert_eq!(
        formatter.create(&Value::from("abc"), &Properties::new(), "{{placeholder}} is invalid"),
        r#""abc" is invalid"#
    );
}

#[test]
fn test_unknown_tokens_are_left_verbatim() {
    let actual = formatter().create(&Value::Null, &Properties::new(), "{{nope}} and {{placeholder}}");
    assert_eq!(actual, "{{nope}} and null");
}

#[test]
fn test_tokens_outside_identifier_syntax_are_ignored() {
    let mut properties = Properties::new();
    properties.insert("a-b".into(), Value::from(1));

    let actual = formatter().create(&Value::Null, &properties, "{{a-b}} {{ placeholder }} {placeholder}");
    assert_eq!(actual, "{{a-b}} {{ placeholder }} {placeholder}");
}

#[test]
fn test_supplied_string_placeholder_is_verbatim() {
    let mut properties = Properties::new();
    properties.insert("placeholder".into(), Value::from("Username"));

    let actual = formatter().create(&Value::from("a b"), &properties, "{{placeholder}} must not contain spaces");
    assert_eq!(actual, "Username must not contain spaces");
}

#[test]
fn test_supplied_non_string_placeholder_is_normalized() {
    let mut properties = Properties::new();
    properties.insert("placeholder".into(), Value::from(vec![1, 2]));

    let actual = formatter().create(&Value::from("ignored"), &properties, "{{placeholder}}");
    assert_eq!(actual, "{ 1, 2 }");
}

#[test]
fn test_other_string_properties_are_quoted() {
    let mut properties = Properties::new();
    properties.insert("name".into(), Value::from("alice"));
    properties.insert("ok".into(), Value::from(true));

    let actual = formatter().create(&Value::Null, &properties, "{{name}}/{{ok}}");
    assert_eq!(actual, r#""alice"/`true`"#);
}

#[test]
fn test_repeated_tokens() {
    let actual = formatter().create(&Value::from(1.5), &Properties::new(), "{{placeholder}}{{placeholder}}");
    assert_eq!(actual, "1.51.5");
}

#[test]
fn test_message_from_result() {
    let rule = Equals::new("expected");
    let input = Value::from("actual");
    let result = rule.validate(&input);

    insta::assert_snapshot!(
        formatter().message(&result, "{{placeholder}} must be equal to {{compare_to}}"),
        @r#""actual" must be equal to "expected""#
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_from_config() {
    let config: FormatterConfig = serde_json::from_value(json!({
        "max_depth": 1,
        "max_children": 2,
        "working_dir": WORKING_DIR,
    }))
    .unwrap();
    let formatter = Formatter::from_config(&config);

    assert_eq!(formatter.max_depth(), 1);
    assert_eq!(formatter.max_children(), 2);
    assert_eq!(formatter.working_dir(), Some(std::path::Path::new(WORKING_DIR)));
    assert_eq!(formatter.normalize(&Value::from_iter(1..=3)), "{ 1, 2,  ...  }");
}

#[test]
fn test_default_formatter_uses_default_config() {
    let formatter = Formatter::default();
    assert_eq!(formatter.max_depth(), FormatterConfig::DEFAULT_MAX_DEPTH);
    assert_eq!(formatter.max_children(), FormatterConfig::DEFAULT_MAX_CHILDREN);
    assert_eq!(formatter.working_dir(), None);
}
