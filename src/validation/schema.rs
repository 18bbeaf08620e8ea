//! Form schemas: field specs plus cross-field rules

use super::rule::Rule;
use super::value::{FieldKind, FieldValue, Record};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("form '{form}' declares field '{field}' more than once")]
    DuplicateField { form: String, field: String },
    #[error("form '{form}' has a cross-field rule on undeclared field '{field}'")]
    UnknownField { form: String, field: String },
}

/// Constraint definition for one named input
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    required: Option<Rule>,
    rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: None,
            rules: Vec::new(),
        }
    }

    /// Create a text field
    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Create a boolean (checkbox) field
    pub fn boolean(name: &str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Mark the field required; this check always runs first
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(Rule::required(message));
        self
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::email(message))
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::min_length(min, message))
    }

    /// Append a rule after the ones already declared
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// All rules in evaluation order (required first)
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.required.iter().chain(self.rules.iter())
    }

    /// Message of the first rule the value fails, if any
    pub fn first_failure(&self, value: &FieldValue) -> Option<&str> {
        self.rules()
            .find(|rule| !rule.passes(value))
            .map(Rule::message)
    }
}

/// Predicate over the whole coerced record
pub type RecordPredicate = Arc<dyn Fn(&Record) -> bool + Send + Sync>;

/// A rule depending on more than one field, reported on `target`
#[derive(Clone)]
pub struct CrossFieldRule {
    target: String,
    message: String,
    fields: Vec<String>,
    predicate: RecordPredicate,
}

impl fmt::Debug for CrossFieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossFieldRule")
            .field("target", &self.target)
            .field("message", &self.message)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl CrossFieldRule {
    pub fn new<F>(target: &str, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        Self {
            target: target.to_string(),
            message: message.into(),
            fields: Vec::new(),
            predicate: Arc::new(predicate),
        }
    }

    /// `second` must equal `first`; the error lands on `second`
    pub fn fields_match(first: &str, second: &str, message: impl Into<String>) -> Self {
        let (a, b) = (first.to_string(), second.to_string());
        Self::new(second, message, move |record| record.get(&a) == record.get(&b))
            .depends_on(&[first, second])
    }

    /// Declare the fields the predicate reads so the schema can check them
    pub fn depends_on(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn holds(&self, record: &Record) -> bool {
        (self.predicate)(record)
    }
}

/// The complete set of field and cross-field rules for one form
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: Vec<FieldSpec>,
    cross_field_rules: Vec<CrossFieldRule>,
}

impl FormSchema {
    pub fn builder(name: &str) -> FormSchemaBuilder {
        FormSchemaBuilder {
            name: name.to_string(),
            fields: Vec::new(),
            cross_field_rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn cross_field_rules(&self) -> &[CrossFieldRule] {
        &self.cross_field_rules
    }
}

/// Collects fields and rules in declaration order
#[derive(Debug)]
pub struct FormSchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
    cross_field_rules: Vec<CrossFieldRule>,
}

impl FormSchemaBuilder {
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn cross_field(mut self, rule: CrossFieldRule) -> Self {
        self.cross_field_rules.push(rule);
        self
    }

    pub fn build(self) -> Result<FormSchema, SchemaError> {
        let mut seen = HashSet::new();
        for spec in &self.fields {
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    form: self.name.clone(),
                    field: spec.name.clone(),
                });
            }
        }

        for rule in &self.cross_field_rules {
            let referenced = std::iter::once(&rule.target).chain(rule.fields.iter());
            for field in referenced {
                if !seen.contains(field.as_str()) {
                    return Err(SchemaError::UnknownField {
                        form: self.name.clone(),
                        field: field.clone(),
                    });
                }
            }
        }

        Ok(FormSchema {
            name: self.name,
            fields: self.fields,
            cross_field_rules: self.cross_field_rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_runs_before_declared_rules() {
        let spec = FieldSpec::text("email")
            .email("bad email")
            .required("email required");
        assert_eq!(
            spec.first_failure(&FieldValue::from("")),
            Some("email required")
        );
        assert_eq!(
            spec.first_failure(&FieldValue::from("nope")),
            Some("bad email")
        );
        assert_eq!(spec.first_failure(&FieldValue::from("a@b.co")), None);
    }

    #[test]
    fn test_first_declared_failure_wins() {
        let spec = FieldSpec::text("code")
            .min_length(4, "too short")
            .rule(Rule::custom(|v| v.as_text() == Some("1234"), "wrong code"));
        assert_eq!(spec.first_failure(&FieldValue::from("12")), Some("too short"));
        assert_eq!(spec.first_failure(&FieldValue::from("9999")), Some("wrong code"));
    }

    #[test]
    fn test_field_without_rules_always_passes() {
        let spec = FieldSpec::text("nickname");
        assert!(!spec.is_required());
        assert_eq!(spec.first_failure(&FieldValue::from("")), None);
    }

    #[test]
    fn test_build_rejects_duplicate_fields() {
        let err = FormSchema::builder("dup")
            .field(FieldSpec::text("email"))
            .field(FieldSpec::text("email"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateField {
                form: "dup".to_string(),
                field: "email".to_string()
            }
        );
    }

    #[test]
    fn test_build_rejects_unknown_cross_field_target() {
        let err = FormSchema::builder("broken")
            .field(FieldSpec::text("password"))
            .cross_field(CrossFieldRule::fields_match("password", "confirm", "mismatch"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField { field, .. } if field == "confirm"));
    }

    #[test]
    fn test_build_rejects_unknown_dependency() {
        let err = FormSchema::builder("broken")
            .field(FieldSpec::text("confirm"))
            .cross_field(CrossFieldRule::fields_match("password", "confirm", "mismatch"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownField { field, .. } if field == "password"));
    }

    #[test]
    fn test_schema_keeps_declaration_order() {
        let schema = FormSchema::builder("order")
            .field(FieldSpec::text("b"))
            .field(FieldSpec::text("a"))
            .field(FieldSpec::boolean("c"))
            .build()
            .unwrap();
        let names: Vec<_> = schema.fields().iter().map(FieldSpec::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(schema.field("c").unwrap().kind(), FieldKind::Boolean);
        assert!(schema.field("d").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = SchemaError::DuplicateField {
            form: "sign-up".to_string(),
            field: "email".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "form 'sign-up' declares field 'email' more than once"
        );
    }
}
