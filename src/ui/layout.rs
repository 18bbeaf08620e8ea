//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Brand color used for the logo and accents
pub const BRAND: Color = Color::LightCyan;

/// Split the screen into header and content, reserving the bottom line
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header with the logo and nav hints
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let nav = if app.state.current_view.is_form_view() {
        " Esc: Home "
    } else {
        " s: Sign In  u: Sign Up "
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(nav.len() as u16)])
        .split(area);

    let logo = Line::from(vec![
        Span::styled(" ▣ ", Style::default().fg(BRAND)),
        Span::styled(
            "TaskHub",
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(logo), chunks[0]);
    frame.render_widget(
        Paragraph::new(nav).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

/// Draw the status bar on the last line
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = Vec::new();
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(
            format!(" {msg} "),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::raw(" "));
    }

    let help = match app.state.current_view {
        View::Landing => "Enter: Get Started | q: Quit",
        View::SignIn | View::SignUp => {
            "Tab/↑↓: Field | Space: Toggle | Enter: Submit | Ctrl+O: Switch form | Ctrl+C: Quit"
        }
    };
    spans.push(Span::styled(help, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
