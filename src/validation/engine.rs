//! The validation pass

use super::schema::FormSchema;
use super::value::{FieldErrors, FieldValues, Record};
use tracing::debug;

/// Outcome of validating a set of values against a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(Record),
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn record(&self) -> Option<&Record> {
        match self {
            ValidationResult::Valid(record) => Some(record),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }
}

/// Validate `values` against `schema`.
///
/// Per-field rules run first, in declaration order, and only the first
/// failing rule of a field is reported. Cross-field rules run only once
/// every field passed on its own; their errors go to the rule's target.
/// Values for names the schema does not declare are ignored.
pub fn validate(schema: &FormSchema, values: &FieldValues) -> ValidationResult {
    let mut record = Record::default();
    let mut errors = FieldErrors::default();

    for spec in schema.fields() {
        let value = spec.kind().coerce(values.get(spec.name()));
        if let Some(message) = spec.first_failure(&value) {
            errors.insert_first(spec.name(), message);
        }
        record.insert(spec.name(), value);
    }

    if errors.is_empty() {
        for rule in schema.cross_field_rules() {
            if !rule.holds(&record) {
                errors.insert_first(rule.target(), rule.message());
            }
        }
    }

    if errors.is_empty() {
        debug!(form = schema.name(), "form values are valid");
        ValidationResult::Valid(record)
    } else {
        debug!(
            form = schema.name(),
            invalid_fields = errors.len(),
            "form values are invalid"
        );
        ValidationResult::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CrossFieldRule, FieldSpec, FieldValue};
    use pretty_assertions::assert_eq;

    fn account_schema() -> FormSchema {
        FormSchema::builder("account")
            .field(FieldSpec::text("name").required("Name is required"))
            .field(FieldSpec::text("email").email("Bad email"))
            .field(FieldSpec::text("password").min_length(8, "Too short"))
            .field(FieldSpec::text("confirm"))
            .field(FieldSpec::boolean("terms").required("Accept the terms"))
            .cross_field(CrossFieldRule::fields_match("password", "confirm", "No match"))
            .build()
            .unwrap()
    }

    fn valid_values() -> FieldValues {
        FieldValues::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("password", "analytical")
            .with("confirm", "analytical")
            .with("terms", true)
    }

    #[test]
    fn test_valid_values_produce_full_record() {
        let result = validate(&account_schema(), &valid_values());
        let record = result.record().unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(record.text("name"), Some("Ada"));
        assert_eq!(record.flag("terms"), Some(true));
    }

    #[test]
    fn test_empty_required_field_is_the_only_error() {
        let values = valid_values().with("name", "");
        let result = validate(&account_schema(), &values);
        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_every_failing_field_reported_once() {
        let values = FieldValues::new().with("email", "nope");
        let result = validate(&account_schema(), &values);
        let errors: Vec<_> = result.errors().unwrap().iter().collect();
        assert_eq!(
            errors,
            vec![
                ("email", "Bad email"),
                ("name", "Name is required"),
                ("password", "Too short"),
                ("terms", "Accept the terms"),
            ]
        );
    }

    #[test]
    fn test_cross_field_error_goes_to_target() {
        let values = valid_values().with("confirm", "different");
        let result = validate(&account_schema(), &values);
        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirm"), Some("No match"));
        assert!(!errors.contains("password"));
    }

    #[test]
    fn test_cross_field_rules_skipped_while_fields_fail() {
        let values = valid_values()
            .with("confirm", "different")
            .with("name", "");
        let result = validate(&account_schema(), &values);
        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("name"));
        assert!(!errors.contains("confirm"));
    }

    #[test]
    fn test_first_failing_cross_field_rule_wins() {
        let schema = FormSchema::builder("pair")
            .field(FieldSpec::text("a"))
            .field(FieldSpec::text("b"))
            .cross_field(CrossFieldRule::new("b", "first", |_| false))
            .cross_field(CrossFieldRule::new("b", "second", |_| false))
            .build()
            .unwrap();
        let result = validate(&schema, &FieldValues::new());
        assert_eq!(result.errors().unwrap().get("b"), Some("first"));
    }

    #[test]
    fn test_undeclared_values_are_ignored() {
        let values = valid_values().with("nickname", "countess");
        let result = validate(&account_schema(), &values);
        let record = result.record().unwrap();
        assert!(record.get("nickname").is_none());
        assert_eq!(record.len(), 5);
    }

    #[test]
    fn test_values_are_coerced_to_declared_kind() {
        let values = valid_values().with("terms", "on");
        let result = validate(&account_schema(), &values);
        assert_eq!(
            result.record().unwrap().get("terms"),
            Some(&FieldValue::Bool(true))
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let schema = account_schema();
        let values = valid_values().with("email", "broken");
        let first = validate(&schema, &values);
        let second = validate(&schema, &values);
        assert_eq!(first, second);

        let values = valid_values();
        assert_eq!(validate(&schema, &values), validate(&schema, &values));
    }
}
