//! Shared dialog frame

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Columns of padding inside the border, both sides combined
const PADDING: u16 = 2;

/// What a dialog shows and in which color
pub struct Dialog<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Body text; `\n` starts a new paragraph
    pub message: &'a str,
    pub max_width: u16,
}

impl Dialog<'_> {
    /// Render the dialog centered in the frame with a dismiss hint
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let max_width = self.max_width.min(area.width);
        let lines = wrap_text(self.message, max_width.saturating_sub(PADDING + 2) as usize);

        let content_width = lines
            .iter()
            .map(|l| l.chars().count())
            .chain([self.title.chars().count(), DISMISS_HINT_WIDTH])
            .max()
            .unwrap_or(0) as u16;
        let width = (content_width + PADDING + 2).min(max_width);
        // title, blank, body, blank, hint, borders
        let height = (lines.len() as u16 + 6).min(area.height);

        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, dialog_area);

        let mut content = vec![
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        content.extend(lines.into_iter().map(Line::from));
        content.push(Line::from(""));
        content.push(dismiss_hint());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .padding(Padding::horizontal(PADDING / 2))
            .style(Style::default().bg(Color::Black));
        let paragraph = Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, dialog_area);
    }
}

const DISMISS_HINT_WIDTH: usize = "Press Enter or Esc to dismiss".len();

fn dismiss_hint() -> Line<'static> {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ])
}

/// Greedy word wrap on char counts
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_short_message() {
        assert_eq!(
            wrap_text("Invalid email or password", 40),
            vec!["Invalid email or password".to_string()]
        );
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("An account with email a@b.co already exists", 20);
        assert_eq!(
            lines,
            vec![
                "An account with".to_string(),
                "email a@b.co already".to_string(),
                "exists".to_string(),
            ]
        );
    }

    #[test]
    fn test_wrap_keeps_paragraphs() {
        let lines = wrap_text("first\n\nsecond", 40);
        assert_eq!(
            lines,
            vec!["first".to_string(), String::new(), "second".to_string()]
        );
    }
}
