//! Error dialog component

use super::base::Dialog;
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    Dialog {
        title: "Error",
        accent: Color::Red,
        message: error_message,
        max_width: 60,
    }
    .render(frame);
}
