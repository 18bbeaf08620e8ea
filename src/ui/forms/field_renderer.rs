//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use taskhub::validation::FieldValues;

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its validation error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    values: &FieldValues,
    error: Option<&str>,
    is_active: bool,
) {
    let input_area = Rect {
        height: area.height.min(3),
        ..area
    };
    let error_area = Rect {
        y: area.y + input_area.height,
        height: area.height.saturating_sub(input_area.height),
        ..area
    };

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = field.display_value(values);
    let cursor = if is_active && !field.is_checkbox() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_checkbox() {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(display_value, style),
            Span::raw(" "),
            Span::raw(field.label),
        ])
    } else if display_value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(display_value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if !field.is_checkbox() {
        block = block.title(format!(" {} ", field.label));
    }

    frame.render_widget(Paragraph::new(content).block(block), input_area);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red),
            )),
            error_area,
        );
    }
}
