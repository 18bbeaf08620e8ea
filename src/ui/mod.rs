//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Landing => landing::draw(frame, main_area),
        View::SignIn | View::SignUp => {
            if let Some(form) = app.current_form() {
                forms::draw_auth_form(frame, main_area, form);
            }
        }
    }

    layout::draw_status_bar(frame, app);

    // Modal dialogs on top
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use taskhub::config::AppConfig;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn test_app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_landing_renders_hero() {
        let screen = render(&test_app());
        assert!(screen.contains("TaskHub"));
        assert!(screen.contains("Stay on Task,"));
        assert!(screen.contains("Team Collaboration"));
    }

    #[test]
    fn test_landing_footer_has_blurb_and_copyright() {
        let screen = render(&test_app());
        assert!(screen.contains("The ultimate task and project management solution"));
        assert!(screen.contains("All rights reserved."));
    }

    #[test]
    fn test_sign_up_renders_fields() {
        let mut app = test_app();
        app.state.current_view = View::SignUp;
        let screen = render(&app);
        assert!(screen.contains("Create Account"));
        assert!(screen.contains("First Name"));
        assert!(screen.contains("Confirm Password"));
        assert!(screen.contains("Already have an account?"));
    }

    #[test]
    fn test_field_error_is_rendered() {
        let mut app = test_app();
        app.state.current_view = View::SignIn;
        let result = app.sign_in.controller.validate();
        app.sign_in.controller.apply(&result);
        let screen = render(&app);
        assert!(screen.contains("Please enter a valid email address"));
        assert!(screen.contains("Password is required"));
    }

    #[test]
    fn test_error_dialog_on_top() {
        let mut app = test_app();
        app.push_error("Invalid email or password");
        let screen = render(&app);
        assert!(screen.contains("Invalid email or password"));
    }
}
