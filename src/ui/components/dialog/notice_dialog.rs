//! Success notice shown after a form is accepted

use super::base::Dialog;
use ratatui::{style::Color, Frame};

pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    Dialog {
        title: "Success",
        accent: Color::Green,
        message,
        max_width: 60,
    }
    .render(frame);
}
