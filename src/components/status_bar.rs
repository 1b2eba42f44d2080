// ABOUTME: Bottom status bar showing connection state, endpoint and line count

use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;
use crate::stream::ConnectionState;

/// One-line summary of the connection and buffer.
pub struct StatusBarComponent;

impl StatusBarComponent {
    /// Create the component
    pub fn new() -> Self {
        Self
    }

    /// Draw into `frame`
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let status_color = match state.connection {
            ConnectionState::Connecting => Color::Yellow,
            ConnectionState::Open => Color::Green,
            ConnectionState::Closed => Color::Red,
            ConnectionState::Offline => Color::Gray,
        };

        let mut spans = vec![
            Span::styled(
                format!("{} {}", state.connection.indicator(), state.connection),
                Style::default().fg(status_color),
            ),
            Span::raw("  "),
            Span::styled(
                state.endpoint.as_deref().unwrap_or("local echo").to_string(),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("  | {} lines", state.lines.len())),
        ];

        if !state.is_following() {
            spans.push(Span::styled(
                format!("  | scrolled {}", state.scroll_offset),
                Style::default().fg(Color::Yellow),
            ));
        }

        spans.push(Span::styled(
            "  | [F1]help [End]follow [Esc]quit",
            Style::default().fg(Color::DarkGray),
        ));

        let status = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(status, area);
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
