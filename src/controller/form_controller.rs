//! Per-form state: current values, visible errors, submission flag

use super::submission::{settle, SubmissionState};
use crate::auth::SubmitHandler;
use crate::validation::{validate, FieldErrors, FieldValues, FormSchema, ValidationResult};
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;

/// Holds one form instance's values and drives its submissions
#[derive(Debug)]
pub struct FormController {
    schema: Arc<FormSchema>,
    values: FieldValues,
    errors: FieldErrors,
    state: SubmissionState,
    submit_count: u32,
}

impl FormController {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        Self {
            schema,
            values: FieldValues::new(),
            errors: FieldErrors::default(),
            state: SubmissionState::new(),
            submit_count: 0,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Errors from the last submit attempt (or re-validation after it)
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Handle on the submitting flag for observers
    pub fn state(&self) -> SubmissionState {
        self.state.clone()
    }

    /// Number of submit attempts since the form was created or reset
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn set_text(&mut self, field: &str, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.revalidate();
    }

    pub fn push_char(&mut self, field: &str, c: char) {
        self.values.push_char(field, c);
        self.revalidate();
    }

    pub fn pop_char(&mut self, field: &str) {
        self.values.pop_char(field);
        self.revalidate();
    }

    pub fn set_flag(&mut self, field: &str, value: bool) {
        self.values.set(field, value);
        self.revalidate();
    }

    pub fn toggle_flag(&mut self, field: &str) {
        self.values.toggle(field);
        self.revalidate();
    }

    /// Validate the current values without submitting
    pub fn validate(&self) -> ValidationResult {
        validate(&self.schema, &self.values)
    }

    /// Start a submission of the current values.
    ///
    /// The flag is raised before this returns. The future owns a snapshot
    /// of the values, so it can be spawned while the form keeps being
    /// rendered and edited. Pass its output to [`FormController::apply`].
    pub fn submit<H>(
        &mut self,
        handler: Arc<H>,
    ) -> impl Future<Output = Result<ValidationResult>> + Send + 'static
    where
        H: SubmitHandler + ?Sized + 'static,
    {
        self.submit_count += 1;
        let guard = self.state.begin();
        let schema = Arc::clone(&self.schema);
        let values = self.values.clone();
        async move { settle(guard, &schema, &values, handler.as_ref()).await }
    }

    /// Surface a settled result: invalid fields get their messages, a valid
    /// result clears them
    pub fn apply(&mut self, result: &ValidationResult) {
        match result {
            ValidationResult::Valid(_) => self.errors.clear(),
            ValidationResult::Invalid(errors) => self.errors = errors.clone(),
        }
    }

    /// Discard values, errors and the submit count
    pub fn reset(&mut self) {
        self.values = FieldValues::new();
        self.errors.clear();
        self.submit_count = 0;
    }

    // After the first attempt, errors follow every edit
    fn revalidate(&mut self) {
        if self.submit_count > 0 {
            let result = self.validate();
            self.apply(&result);
        }
    }
}
