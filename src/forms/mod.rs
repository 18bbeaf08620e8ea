//! The TaskHub forms
//!
//! - `sign_in`: email and password
//! - `sign_up`: name, email, password with confirmation, terms

pub mod sign_in;
pub mod sign_up;

use crate::validation::{FormSchema, Record, SchemaError};
use sign_in::SignInData;
use sign_up::SignUpData;

/// Which form a screen hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SignIn,
    SignUp,
}

impl FormKind {
    pub fn schema(&self) -> Result<FormSchema, SchemaError> {
        match self {
            Self::SignIn => sign_in::schema(),
            Self::SignUp => sign_up::schema(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back to TaskHub",
            Self::SignUp => "Join Task Hub to manage your projects",
        }
    }

    /// Submit button label, depending on whether a submission is in flight
    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (Self::SignIn, false) => "Sign In",
            (Self::SignIn, true) => "Signing In...",
            (Self::SignUp, false) => "Create Account",
            (Self::SignUp, true) => "Creating Account...",
        }
    }

    /// The other form, for the "switch" link under each form
    pub fn other(&self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Don't have an account?", "Sign up"),
            Self::SignUp => ("Already have an account?", "Sign in"),
        }
    }

    /// Message shown once a submission of this form succeeds
    pub fn success_message(&self, record: &Record) -> Result<String, serde_json::Error> {
        match self {
            Self::SignIn => Ok(record.deserialize::<SignInData>()?.success_message()),
            Self::SignUp => Ok(record.deserialize::<SignUpData>()?.success_message()),
        }
    }
}
