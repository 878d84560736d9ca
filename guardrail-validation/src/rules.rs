// Argument rules

use crate::{RequestArguments, ValidationOutcome};

/// A rule over a request's bound arguments.
///
/// Checking is pure: the outcome is a function of the arguments alone, with
/// no I/O and no retained state, so a rule may be shared across requests.
pub trait ArgumentRule: Send + Sync {
    /// Check the rule against the arguments
    fn check(&self, arguments: &RequestArguments) -> ValidationOutcome;

    /// Rule name for log lines
    fn name(&self) -> &str;
}

/// Requires a named argument to parse as a non-zero 32-bit integer.
///
/// The textual form of the argument is parsed as a base-10 signed integer;
/// surrounding whitespace and a leading sign are accepted. An absent argument
/// rejects the same way as a malformed one.
pub struct NonZeroInt {
    param: String,
}

impl NonZeroInt {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }

    /// The parameter name this rule inspects
    pub fn param(&self) -> &str {
        &self.param
    }
}

impl ArgumentRule for NonZeroInt {
    fn check(&self, arguments: &RequestArguments) -> ValidationOutcome {
        let text = arguments.text_of(&self.param);
        let parsed = text.as_deref().and_then(|t| t.trim().parse::<i32>().ok());

        match parsed {
            None => ValidationOutcome::reject(format!("{} must be int", self.param)),
            Some(0) => ValidationOutcome::reject(format!("{} cannot be 0", self.param)),
            Some(_) => ValidationOutcome::Proceed,
        }
    }

    fn name(&self) -> &str {
        "non_zero_int"
    }
}

/// Ordered collection of rules; the first rejection wins
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn ArgumentRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the set
    pub fn add(mut self, rule: impl ArgumentRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl ArgumentRule for RuleSet {
    fn check(&self, arguments: &RequestArguments) -> ValidationOutcome {
        for rule in &self.rules {
            if let outcome @ ValidationOutcome::Reject(_) = rule.check(arguments) {
                return outcome;
            }
        }
        ValidationOutcome::Proceed
    }

    fn name(&self) -> &str {
        "rule_set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arguments_with(name: &str, value: &str) -> RequestArguments {
        let mut arguments = RequestArguments::new();
        arguments.insert(name, value);
        arguments
    }

    #[test]
    fn test_nonzero_integer_proceeds() {
        let rule = NonZeroInt::new("y");
        assert!(rule.check(&arguments_with("y", "5")).is_proceed());
        assert!(rule.check(&arguments_with("y", "-3")).is_proceed());
    }

    #[test]
    fn test_zero_rejects() {
        let rule = NonZeroInt::new("y");
        assert_eq!(
            rule.check(&arguments_with("y", "0")),
            ValidationOutcome::Reject("y cannot be 0".to_string())
        );
    }

    #[test]
    fn test_malformed_rejects() {
        let rule = NonZeroInt::new("y");
        assert_eq!(
            rule.check(&arguments_with("y", "abc")),
            ValidationOutcome::Reject("y must be int".to_string())
        );
    }

    #[test]
    fn test_absent_rejects_as_malformed() {
        let rule = NonZeroInt::new("y");
        assert_eq!(
            rule.check(&RequestArguments::new()),
            ValidationOutcome::Reject("y must be int".to_string())
        );
    }

    #[test]
    fn test_leading_zeros_parse() {
        let rule = NonZeroInt::new("y");
        assert!(rule.check(&arguments_with("y", "007")).is_proceed());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        let rule = NonZeroInt::new("y");
        assert!(rule.check(&arguments_with("y", " 5 ")).is_proceed());
        assert_eq!(
            rule.check(&arguments_with("y", " 0 ")),
            ValidationOutcome::Reject("y cannot be 0".to_string())
        );
    }

    #[test]
    fn test_overflow_rejects_as_malformed() {
        let rule = NonZeroInt::new("y");
        assert_eq!(
            rule.check(&arguments_with("y", "2147483648")),
            ValidationOutcome::Reject("y must be int".to_string())
        );
    }

    #[test]
    fn test_other_entries_are_not_inspected() {
        let rule = NonZeroInt::new("y");
        let mut arguments = arguments_with("y", "5");
        arguments.insert("x", "not an int");
        assert!(rule.check(&arguments).is_proceed());
    }

    #[test]
    fn test_rule_set_first_rejection_wins() {
        let set = RuleSet::new()
            .add(NonZeroInt::new("x"))
            .add(NonZeroInt::new("y"));

        let mut arguments = RequestArguments::new();
        arguments.insert("x", "abc");
        arguments.insert("y", "0");

        assert_eq!(
            set.check(&arguments),
            ValidationOutcome::Reject("x must be int".to_string())
        );

        arguments.insert("x", "1");
        assert_eq!(
            set.check(&arguments),
            ValidationOutcome::Reject("y cannot be 0".to_string())
        );

        arguments.insert("y", "2");
        assert!(set.check(&arguments).is_proceed());
    }
}
