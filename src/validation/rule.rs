//! Per-field rules: a check paired with the message shown when it fails

use super::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use validator::ValidateEmail;

/// Stricter address shape on top of HTML5 syntax: no leading or doubled dot
/// in the local part, and a dotted domain ending in 2+ letters
const ADDRESS_PATTERN: &str =
    r"(?i)^(?:[A-Z0-9_'+\-]+\.)*[A-Z0-9_'+\-]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$";

static ADDRESS_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ADDRESS_PATTERN).expect("address pattern is valid"));

fn is_email(s: &str) -> bool {
    s.validate_email() && ADDRESS_SHAPE.is_match(s)
}

/// Predicate over a single coerced field value
pub type ValuePredicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// What a rule checks
#[derive(Clone)]
pub enum Check {
    /// Non-empty text, or a flag set to `true`
    Required,
    /// HTML5 email syntax with a dotted domain and a letters-only TLD
    Email,
    /// At least this many characters
    MinLength(usize),
    Custom(ValuePredicate),
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Required => write!(f, "Required"),
            Check::Email => write!(f, "Email"),
            Check::MinLength(n) => write!(f, "MinLength({n})"),
            Check::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl Check {
    fn passes(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Check::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Check::Required, FieldValue::Bool(b)) => *b,
            (Check::Email, FieldValue::Text(s)) => is_email(s),
            (Check::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= *min,
            (Check::Custom(predicate), value) => predicate(value),
            // Text checks never pass on a flag
            (Check::Email | Check::MinLength(_), FieldValue::Bool(_)) => false,
        }
    }
}

/// A check and its human-readable failure message
#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    message: String,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(Check::Required, message)
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(Check::Email, message)
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MinLength(min), message)
    }

    pub fn custom<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        Self::new(Check::Custom(Arc::new(predicate)), message)
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the value satisfies this rule
    pub fn passes(&self, value: &FieldValue) -> bool {
        self.check.passes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        let rule = Rule::required("required");
        assert!(rule.passes(&FieldValue::from("x")));
        assert!(!rule.passes(&FieldValue::from("")));
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        let rule = Rule::email("bad email");
        assert!(rule.passes(&FieldValue::from("USER@EXAMPLE.COM")));
        assert!(rule.passes(&FieldValue::from("o'brien@mail.example.org")));
        assert!(rule.passes(&FieldValue::from("first.last@sub-domain.io")));
    }

    #[test]
    fn test_email_requires_dotted_domain_with_tld() {
        let rule = Rule::email("bad email");
        assert!(!rule.passes(&FieldValue::from("john@doe")));
        assert!(!rule.passes(&FieldValue::from("john@doe.c")));
        assert!(!rule.passes(&FieldValue::from("john@doe.c0m")));
    }

    #[test]
    fn test_email_rejects_ip_literal() {
        let rule = Rule::email("bad email");
        assert!(!rule.passes(&FieldValue::from("john@[127.0.0.1]")));
    }

    #[test]
    fn test_email_rejects_misplaced_dots_in_local_part() {
        let rule = Rule::email("bad email");
        assert!(!rule.passes(&FieldValue::from(".john@doe.com")));
        assert!(!rule.passes(&FieldValue::from("john..doe@doe.com")));
        assert!(!rule.passes(&FieldValue::from("john.@doe.com")));
    }

    #[test]
    fn test_required_flag_must_be_true() {
        let rule = Rule::required("required");
        assert!(rule.passes(&FieldValue::Bool(true)));
        assert!(!rule.passes(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_required_does_not_trim() {
        let rule = Rule::required("required");
        assert!(rule.passes(&FieldValue::from(" ")));
    }

    #[test]
    fn test_email() {
        let rule = Rule::email("bad email");
        assert!(rule.passes(&FieldValue::from("user@example.com")));
        assert!(rule.passes(&FieldValue::from("user+tag@example.co.uk")));
        assert!(!rule.passes(&FieldValue::from("not-an-email")));
        assert!(!rule.passes(&FieldValue::from("@example.com")));
        assert!(!rule.passes(&FieldValue::from("user@")));
        assert!(!rule.passes(&FieldValue::from("")));
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::min_length(3, "too short");
        assert!(rule.passes(&FieldValue::from("abc")));
        assert!(!rule.passes(&FieldValue::from("ab")));
        // three characters, six bytes
        assert!(rule.passes(&FieldValue::from("äöü")));
    }

    #[test]
    fn test_text_checks_fail_on_flags() {
        assert!(!Rule::email("m").passes(&FieldValue::Bool(true)));
        assert!(!Rule::min_length(0, "m").passes(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_custom_predicate() {
        let rule = Rule::custom(|v| v.as_text() == Some("open sesame"), "wrong");
        assert!(rule.passes(&FieldValue::from("open sesame")));
        assert!(!rule.passes(&FieldValue::from("abracadabra")));
        assert_eq!(rule.message(), "wrong");
    }

    #[test]
    fn test_check_debug_hides_closure() {
        let rule = Rule::custom(|_| true, "m");
        assert_eq!(format!("{:?}", rule.check()), "Custom(..)");
    }
}
