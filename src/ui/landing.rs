//! Marketing landing page

use super::layout::BRAND;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FEATURES: &[(&str, &str)] = &[
    (
        "Task Management",
        "Create, assign, and track tasks with ease. Never miss a deadline again.",
    ),
    (
        "Team Collaboration",
        "Work together seamlessly with real-time updates and communication.",
    ),
    (
        "Project Timeline",
        "Visualize project progress and stay on track with intuitive timelines.",
    ),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Hero
            Constraint::Min(6),    // Features
            Constraint::Length(3), // Footer
        ])
        .margin(1)
        .split(area);

    draw_hero(frame, chunks[0]);
    draw_features(frame, chunks[1]);

    draw_footer(frame, chunks[2]);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let blurb = Paragraph::new(
        "The ultimate task and project management solution for teams of all sizes. \
         Stay on task, stay ahead of your goals.",
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(blurb, rows[0]);

    let copyright = Paragraph::new("© 2025 TaskHub. All rights reserved.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(copyright, rows[1]);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Stay on Task,", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" Stay Ahead", Style::default().fg(BRAND)),
        ]),
        Line::from(""),
        Line::from("Streamline your workflow, collaborate with your team, and deliver projects"),
        Line::from("on time. TaskHub makes task and project management simple and efficient."),
        Line::from(""),
        Line::from(Span::styled(
            " Get Started → ",
            Style::default()
                .fg(Color::Black)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_features(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (column, (title, description)) in columns.iter().zip(FEATURES) {
        let block = Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let card = Paragraph::new(*description)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(card, *column);
    }
}
