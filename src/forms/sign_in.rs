//! Sign-in form definition

use crate::validation::{FieldSpec, FormSchema, SchemaError};
use serde::Deserialize;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password is required";

/// Sign-in schema: a valid email and a non-empty password
pub fn schema() -> Result<FormSchema, SchemaError> {
    FormSchema::builder("sign-in")
        .field(FieldSpec::text("email").email(EMAIL_MESSAGE))
        .field(FieldSpec::text("password").required(PASSWORD_MESSAGE))
        .build()
}

/// Typed view of a valid sign-in record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

impl SignInData {
    pub fn success_message(&self) -> String {
        format!("Signed in with email: {}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, FieldValues};

    #[test]
    fn test_valid_sign_in() {
        let values = FieldValues::new()
            .with("email", "user@example.com")
            .with("password", "x");
        let result = validate(&schema().unwrap(), &values);
        let data: SignInData = result.record().unwrap().deserialize().unwrap();
        assert_eq!(data.email, "user@example.com");
        assert_eq!(data.success_message(), "Signed in with email: user@example.com");
    }

    #[test]
    fn test_bad_email_message() {
        let values = FieldValues::new()
            .with("email", "not-an-email")
            .with("password", "x");
        let result = validate(&schema().unwrap(), &values);
        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn test_empty_form() {
        let result = validate(&schema().unwrap(), &FieldValues::new());
        let errors = result.errors().unwrap();
        assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE));
        assert_eq!(errors.get("password"), Some(PASSWORD_MESSAGE));
    }
}
