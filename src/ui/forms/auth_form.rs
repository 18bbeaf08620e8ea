//! Sign-in and sign-up form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::AuthForm;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::BRAND;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the form card
const FORM_WIDTH: u16 = 60;

/// Draw a form centered in `area`
pub fn draw_auth_form(frame: &mut Frame, area: Rect, form: &AuthForm) {
    let fields = form.fields();
    let height = 2 // borders
        + 3 // title, subtitle, blank
        + fields.len() as u16 * FIELD_HEIGHT
        + BUTTON_HEIGHT
        + 2; // blank, switch prompt

    let card = centered(area, FORM_WIDTH, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let heading = vec![
        Line::from(Span::styled(
            form.kind.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            form.kind.subtitle(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        chunks[0],
    );

    let controller = &form.controller;
    for (idx, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            field,
            controller.values(),
            controller.error(field.name),
            form.active_field_index == idx,
        );
    }

    let submitting = form.is_submitting();
    render_button(
        frame,
        chunks[fields.len() + 1],
        form.kind.submit_label(submitting),
        form.is_button_active(),
        !submitting,
    );

    let (prompt, link) = form.kind.switch_prompt();
    let switch = Line::from(vec![
        Span::styled(format!("{prompt} "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            link,
            Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (Ctrl+O)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), switch]).alignment(Alignment::Center),
        chunks[fields.len() + 2],
    );
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
