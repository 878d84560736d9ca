//! Integration tests for guardrail-validation

use guardrail_validation::*;

fn arguments_with_y(value: &str) -> RequestArguments {
    let mut arguments = RequestArguments::new();
    arguments.insert("y", value);
    arguments
}

#[test]
fn test_positive_integer_proceeds() {
    let rule = NonZeroInt::new("y");
    assert_eq!(rule.check(&arguments_with_y("5")), ValidationOutcome::Proceed);
}

#[test]
fn test_zero_is_rejected() {
    let rule = NonZeroInt::new("y");
    assert_eq!(
        rule.check(&arguments_with_y("0")),
        ValidationOutcome::Reject("y cannot be 0".to_string())
    );
}

#[test]
fn test_non_integer_is_rejected() {
    let rule = NonZeroInt::new("y");
    assert_eq!(
        rule.check(&arguments_with_y("abc")),
        ValidationOutcome::Reject("y must be int".to_string())
    );
}

#[test]
fn test_missing_argument_is_rejected() {
    let rule = NonZeroInt::new("y");
    assert_eq!(
        rule.check(&RequestArguments::new()),
        ValidationOutcome::Reject("y must be int".to_string())
    );
}

#[test]
fn test_negative_integer_proceeds() {
    let rule = NonZeroInt::new("y");
    assert_eq!(
        rule.check(&arguments_with_y("-3")),
        ValidationOutcome::Proceed
    );
}

#[test]
fn test_leading_zeros_parse_to_seven() {
    let rule = NonZeroInt::new("y");
    assert_eq!(
        rule.check(&arguments_with_y("007")),
        ValidationOutcome::Proceed
    );
}

#[test]
fn test_check_is_idempotent() {
    let rule = NonZeroInt::new("y");
    let arguments = arguments_with_y("0");

    let first = rule.check(&arguments);
    let second = rule.check(&arguments);
    assert_eq!(first, second);
}

#[test]
fn test_untyped_numeric_value_coerces_to_text() {
    let rule = NonZeroInt::new("y");

    let mut arguments = RequestArguments::new();
    arguments.insert("y", 7);
    assert_eq!(rule.check(&arguments), ValidationOutcome::Proceed);

    arguments.insert("y", 0);
    assert_eq!(
        rule.check(&arguments),
        ValidationOutcome::Reject("y cannot be 0".to_string())
    );
}

#[test]
fn test_boolean_value_is_not_an_integer() {
    let rule = NonZeroInt::new("y");

    let mut arguments = RequestArguments::new();
    arguments.insert("y", true);
    assert_eq!(
        rule.check(&arguments),
        ValidationOutcome::Reject("y must be int".to_string())
    );
}

#[test]
fn test_null_value_is_treated_as_missing() {
    let rule = NonZeroInt::new("y");

    let mut arguments = RequestArguments::new();
    arguments.insert("y", serde_json::Value::Null);
    assert_eq!(
        rule.check(&arguments),
        ValidationOutcome::Reject("y must be int".to_string())
    );
}

#[test]
fn test_rule_set_proceeds_when_all_pass() {
    let set = RuleSet::new()
        .add(NonZeroInt::new("x"))
        .add(NonZeroInt::new("y"));

    let mut arguments = RequestArguments::new();
    arguments.insert("x", "4");
    arguments.insert("y", "2");

    assert_eq!(set.check(&arguments), ValidationOutcome::Proceed);
}
