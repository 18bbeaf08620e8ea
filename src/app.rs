//! Application state and core logic

use crate::state::{AppState, AuthForm, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use taskhub::auth::{SimulatedAuth, SubmitHandler};
use taskhub::config::AppConfig;
use taskhub::forms::FormKind;
use taskhub::validation::ValidationResult;
use tokio::task::JoinError;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub sign_in: AuthForm,
    pub sign_up: AuthForm,
    sign_in_handler: Arc<dyn SubmitHandler>,
    sign_up_handler: Arc<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated auth service
    pub fn new(config: &AppConfig) -> Result<Self> {
        let handler = |kind| -> Arc<dyn SubmitHandler> {
            Arc::new(
                SimulatedAuth::new(kind, config.submit_delay())
                    .failing_with(config.simulated_failure),
            )
        };
        Self::with_handlers(handler(FormKind::SignIn), handler(FormKind::SignUp))
    }

    pub fn with_handlers(
        sign_in_handler: Arc<dyn SubmitHandler>,
        sign_up_handler: Arc<dyn SubmitHandler>,
    ) -> Result<Self> {
        Ok(Self {
            state: AppState::default(),
            sign_in: AuthForm::new(FormKind::SignIn)?,
            sign_up: AuthForm::new(FormKind::SignUp)?,
            sign_in_handler,
            sign_up_handler,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Form shown by the current view, if any
    pub fn current_form(&self) -> Option<&AuthForm> {
        match self.state.current_view {
            View::Landing => None,
            View::SignIn => Some(&self.sign_in),
            View::SignUp => Some(&self.sign_up),
        }
    }

    fn form_mut(&mut self, kind: FormKind) -> &mut AuthForm {
        match kind {
            FormKind::SignIn => &mut self.sign_in,
            FormKind::SignUp => &mut self.sign_up,
        }
    }

    fn current_kind(&self) -> Option<FormKind> {
        self.current_form().map(|f| f.kind)
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        self.state.status_message = None;
        self.state.current_view = view;
    }

    /// Leave a form: the instance is discarded
    fn leave_form(&mut self, kind: FormKind, to: View) {
        self.form_mut(kind).discard();
        self.navigate(to);
    }

    /// Handle key events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Success notice (modal)
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_notice();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::SignIn => self.handle_form_key(FormKind::SignIn, key),
            View::SignUp => self.handle_form_key(FormKind::SignUp, key),
        }
        Ok(())
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.navigate(View::SignIn),
            KeyCode::Char('u') | KeyCode::Char('g') | KeyCode::Enter => {
                self.navigate(View::SignUp)
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.leave_form(kind, View::Landing),
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.leave_form(kind, view_for(kind.other()))
            }
            KeyCode::Tab | KeyCode::Down => self.form_mut(kind).next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form_mut(kind).prev_field(),
            KeyCode::Enter => self.submit(kind),
            KeyCode::Backspace => self.form_mut(kind).backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form_mut(kind).input_char(c)
            }
            _ => {}
        }
    }

    /// Start a submission of the given form unless one is in flight
    fn submit(&mut self, kind: FormKind) {
        let handler = match kind {
            FormKind::SignIn => Arc::clone(&self.sign_in_handler),
            FormKind::SignUp => Arc::clone(&self.sign_up_handler),
        };
        if self.form_mut(kind).start_submission(handler) {
            self.state.status_message = None;
        } else {
            tracing::debug!(form = ?kind, "submit ignored while submitting");
        }
    }

    /// Settle submissions whose task has finished; does not block
    pub async fn poll_submissions(&mut self) {
        for kind in [FormKind::SignIn, FormKind::SignUp] {
            if self.form_mut(kind).submission_finished() {
                self.finish_submission(kind).await;
            }
        }
    }

    /// Wait for the form's pending submission and surface its outcome
    pub async fn finish_submission(&mut self, kind: FormKind) {
        if let Some(pending) = self.form_mut(kind).take_pending() {
            let outcome = pending.await;
            self.settle(kind, outcome);
        }
    }

    fn settle(&mut self, kind: FormKind, outcome: Result<Result<ValidationResult>, JoinError>) {
        match outcome {
            Ok(Ok(result)) => {
                self.form_mut(kind).controller.apply(&result);
                match &result {
                    ValidationResult::Valid(record) => match kind.success_message(record) {
                        Ok(message) => self.state.notice = Some(message),
                        Err(e) => self.push_error(format!("Unexpected form data: {e}")),
                    },
                    ValidationResult::Invalid(_) => {
                        self.state.status_message =
                            Some("Please fix the highlighted fields".to_string());
                    }
                }
            }
            Ok(Err(e)) => self.push_error(e.to_string()),
            Err(e) => {
                tracing::error!(form = ?kind, error = %e, "submission task failed");
                self.push_error(format!("Submission failed: {e}"));
            }
        }
    }

    /// Close the success notice, reset the form and go back home
    fn dismiss_notice(&mut self) {
        self.state.notice = None;
        if let Some(kind) = self.current_kind() {
            let form = self.form_mut(kind);
            form.controller.reset();
            form.active_field_index = 0;
        }
        self.navigate(View::Landing);
    }
}

fn view_for(kind: FormKind) -> View {
    match kind {
        FormKind::SignIn => View::SignIn,
        FormKind::SignUp => View::SignUp,
    }
}
