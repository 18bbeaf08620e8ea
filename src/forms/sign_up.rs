//! Sign-up form definition

use crate::validation::{CrossFieldRule, FieldSpec, FormSchema, SchemaError};
use serde::Deserialize;

pub const FIRST_NAME_MESSAGE: &str = "First name is required";
pub const LAST_NAME_MESSAGE: &str = "Last name is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters long";
pub const TERMS_MESSAGE: &str = "You must accept the Terms of Service and Privacy Policy";
pub const MISMATCH_MESSAGE: &str = "Passwords do not match";

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Sign-up schema, including the password confirmation check
pub fn schema() -> Result<FormSchema, SchemaError> {
    FormSchema::builder("sign-up")
        .field(FieldSpec::text("firstName").required(FIRST_NAME_MESSAGE))
        .field(FieldSpec::text("lastName").required(LAST_NAME_MESSAGE))
        .field(FieldSpec::text("email").email(EMAIL_MESSAGE))
        .field(FieldSpec::text("password").min_length(MIN_PASSWORD_LENGTH, PASSWORD_MESSAGE))
        .field(FieldSpec::text("confirmPassword"))
        .field(FieldSpec::boolean("terms").required(TERMS_MESSAGE))
        .cross_field(CrossFieldRule::fields_match(
            "password",
            "confirmPassword",
            MISMATCH_MESSAGE,
        ))
        .build()
}

/// Typed view of a valid sign-up record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl SignUpData {
    pub fn success_message(&self) -> String {
        format!("Account for {} created successfully!", self.first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, FieldValue, FieldValues};
    use pretty_assertions::assert_eq;

    fn john() -> FieldValues {
        FieldValues::new()
            .with("firstName", "John")
            .with("lastName", "Doe")
            .with("email", "john@doe.com")
            .with("password", "password1")
            .with("confirmPassword", "password1")
            .with("terms", true)
    }

    #[test]
    fn test_end_to_end_valid_sign_up() {
        let result = validate(&schema().unwrap(), &john());
        let record = result.record().unwrap();

        let entries: Vec<_> = record.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("confirmPassword", &FieldValue::from("password1")),
                ("email", &FieldValue::from("john@doe.com")),
                ("firstName", &FieldValue::from("John")),
                ("lastName", &FieldValue::from("Doe")),
                ("password", &FieldValue::from("password1")),
                ("terms", &FieldValue::Bool(true)),
            ]
        );

        let data: SignUpData = record.deserialize().unwrap();
        assert_eq!(data.first_name, "John");
        assert!(data.terms);
        assert_eq!(data.success_message(), "Account for John created successfully!");
    }

    #[test]
    fn test_mismatch_lands_on_confirm_password() {
        let values = john()
            .with("password", "abcdefgh")
            .with("confirmPassword", "different");
        let result = validate(&schema().unwrap(), &values);
        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("confirmPassword"), Some(MISMATCH_MESSAGE));
        assert!(!errors.contains("password"));
    }

    #[test]
    fn test_each_empty_required_field_alone() {
        for field in ["firstName", "lastName"] {
            let values = john().with(field, "");
            let result = validate(&schema().unwrap(), &values);
            let errors = result.errors().unwrap();
            assert_eq!(errors.len(), 1, "only {field} should fail");
            assert!(errors.contains(field));
        }
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for email in [
            "john@doe",
            "john..doe@doe.com",
            "john@[127.0.0.1]",
            ".john@doe.com",
        ] {
            let result = validate(&schema().unwrap(), &john().with("email", email));
            let errors = result.errors().unwrap();
            assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE), "{email}");
        }
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let values = john().with("terms", false);
        let result = validate(&schema().unwrap(), &values);
        assert_eq!(result.errors().unwrap().get("terms"), Some(TERMS_MESSAGE));
    }

    #[test]
    fn test_short_password_reported_before_mismatch() {
        let values = john()
            .with("password", "short")
            .with("confirmPassword", "other");
        let result = validate(&schema().unwrap(), &values);
        let errors = result.errors().unwrap();
        assert_eq!(errors.get("password"), Some(PASSWORD_MESSAGE));
        assert!(!errors.contains("confirmPassword"));
    }
}
