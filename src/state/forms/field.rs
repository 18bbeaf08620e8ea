//! Form field descriptors for rendering and input

use taskhub::forms::FormKind;
use taskhub::validation::FieldValues;

/// How a field takes input and is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Checkbox,
}

/// Represents a single form field on screen
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputKind,
}

impl FormField {
    const fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        input: InputKind,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            input,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        self.input == InputKind::Checkbox
    }

    /// Get the display value for rendering; passwords are masked
    pub fn display_value(&self, values: &FieldValues) -> String {
        match self.input {
            InputKind::Text | InputKind::Email => values.text(self.name).to_string(),
            InputKind::Password => "•".repeat(values.text(self.name).chars().count()),
            InputKind::Checkbox => {
                if values.flag(self.name) {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }
}

const SIGN_IN_FIELDS: &[FormField] = &[
    FormField::new("email", "Email", "Enter your email", InputKind::Email),
    FormField::new(
        "password",
        "Password",
        "Enter your password",
        InputKind::Password,
    ),
];

const SIGN_UP_FIELDS: &[FormField] = &[
    FormField::new("firstName", "First Name", "John", InputKind::Text),
    FormField::new("lastName", "Last Name", "Doe", InputKind::Text),
    FormField::new("email", "Email", "Enter your email", InputKind::Email),
    FormField::new(
        "password",
        "Password",
        "Create a password",
        InputKind::Password,
    ),
    FormField::new(
        "confirmPassword",
        "Confirm Password",
        "Confirm your password",
        InputKind::Password,
    ),
    FormField::new(
        "terms",
        "I agree to the Terms of Service and Privacy Policy",
        "",
        InputKind::Checkbox,
    ),
];

/// Fields of a form, in display order
pub fn fields_for(kind: FormKind) -> &'static [FormField] {
    match kind {
        FormKind::SignIn => SIGN_IN_FIELDS,
        FormKind::SignUp => SIGN_UP_FIELDS,
    }
}
