//! Form state management for the sign-in and sign-up screens

use super::field::{fields_for, FormField};
use anyhow::Result;
use std::sync::Arc;
use taskhub::auth::SubmitHandler;
use taskhub::controller::FormController;
use taskhub::forms::FormKind;
use taskhub::validation::{FormSchema, SchemaError, ValidationResult};
use tokio::task::JoinHandle;

/// A submission running on its own task
pub type PendingSubmission = JoinHandle<Result<ValidationResult>>;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// One mounted sign-in or sign-up form
#[derive(Debug)]
pub struct AuthForm {
    pub kind: FormKind,
    pub controller: FormController,
    pub active_field_index: usize,
    schema: Arc<FormSchema>,
    pending: Option<PendingSubmission>,
}

impl AuthForm {
    pub fn new(kind: FormKind) -> Result<Self, SchemaError> {
        let schema = Arc::new(kind.schema()?);
        Ok(Self {
            kind,
            controller: FormController::new(Arc::clone(&schema)),
            active_field_index: 0,
            schema,
            pending: None,
        })
    }

    pub fn fields(&self) -> &'static [FormField] {
        fields_for(self.kind)
    }

    /// The field under the cursor; None when the submit button is focused
    pub fn active(&self) -> Option<&'static FormField> {
        self.fields().get(self.active_field_index)
    }

    /// Returns true if the submit button is currently focused
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == self.fields().len()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Type into the active field; space toggles a checkbox
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active() else {
            return;
        };
        if field.is_checkbox() {
            if c == ' ' {
                self.controller.toggle_flag(field.name);
            }
        } else {
            self.controller.push_char(field.name, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active().filter(|f| !f.is_checkbox()) {
            self.controller.pop_char(field.name);
        }
    }

    /// Spawn a submission of the current values.
    ///
    /// Returns false without doing anything while one is in flight; this is
    /// the disabled state of the submit button.
    pub fn start_submission(&mut self, handler: Arc<dyn SubmitHandler>) -> bool {
        if self.is_submitting() || self.pending.is_some() {
            return false;
        }
        self.pending = Some(tokio::spawn(self.controller.submit(handler)));
        true
    }

    pub fn submission_finished(&self) -> bool {
        self.pending.as_ref().is_some_and(JoinHandle::is_finished)
    }

    pub fn take_pending(&mut self) -> Option<PendingSubmission> {
        self.pending.take()
    }

    /// Unmount: forget values, errors and any in-flight submission.
    ///
    /// A running submission is detached, not cancelled; its result is
    /// dropped and its flag no longer belongs to this form.
    pub fn discard(&mut self) {
        self.pending = None;
        self.controller = FormController::new(Arc::clone(&self.schema));
        self.active_field_index = 0;
    }
}

impl Form for AuthForm {
    fn field_count(&self) -> usize {
        self.fields().len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields().len());
    }
}
