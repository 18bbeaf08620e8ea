//! Application state definitions

use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    SignIn,
    SignUp,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::SignIn | View::SignUp)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Submission errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
    /// Success notice shown in a dialog
    pub notice: Option<String>,
    /// One-line message in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
