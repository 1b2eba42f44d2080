// ABOUTME: Terminal-styled scrollback of forwarded log lines with an input prompt

use ansi_to_tui::IntoText;
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::app::AppState;

const PROMPT: &str = "$ ";

/// "Forwarded Logs" scrollback with the input prompt.
pub struct TerminalViewComponent;

impl TerminalViewComponent {
    /// Create the component
    pub fn new() -> Self {
        Self
    }

    /// Draw into `frame`
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .title(" Forwarded Logs ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().fg(Color::White).bg(Color::Black));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Scrollback
                Constraint::Length(1), // Prompt
            ])
            .split(inner);

        self.render_scrollback(frame, chunks[0], state);
        self.render_prompt(frame, chunks[1], state);
    }

    fn render_scrollback(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let lines = Self::visible_lines(state.lines.lines(), state.scroll_offset, area.height);
        let text: Vec<Line> = lines.iter().map(|line| Self::styled_line(line)).collect();

        frame.render_widget(Paragraph::new(text), area);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let prompt = Line::from(vec![
            Span::styled(
                PROMPT,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(state.input.as_str()),
        ]);
        let column = Self::cursor_column(&prompt, area.width);
        frame.render_widget(Paragraph::new(prompt), area);

        if !state.help_visible && area.width > 0 {
            frame.set_cursor(area.x.saturating_add(column), area.y);
        }
    }

    /// Cell just past the rendered prompt, clamped to the last cell of a `width`-wide row.
    /// Wide characters occupy two cells.
    fn cursor_column(prompt: &Line, width: u16) -> u16 {
        let typed = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
        typed.min(width.saturating_sub(1))
    }

    /// The slice of `lines` that fits in `height` rows, `offset` lines above the tail.
    pub fn visible_lines(lines: &[String], offset: usize, height: u16) -> &[String] {
        let end = lines.len().saturating_sub(offset);
        let start = end.saturating_sub(usize::from(height));
        &lines[start..end]
    }

    /// Render ANSI colors embedded in a log line, falling back to the raw text.
    fn styled_line(raw: &str) -> Line<'static> {
        if !raw.contains('\x1b') {
            return Line::raw(raw.to_string());
        }

        match raw.as_bytes().into_text() {
            Ok(text) => Line::from(
                text.lines
                    .into_iter()
                    .flat_map(|line| line.spans)
                    .collect::<Vec<_>>(),
            ),
            Err(e) => {
                debug!("Failed to parse ANSI sequences: {}", e);
                Line::raw(raw.to_string())
            }
        }
    }
}

impl Default for TerminalViewComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_visible_lines_follow_tail() {
        let lines = numbered(10);
        assert_eq!(TerminalViewComponent::visible_lines(&lines, 0, 3), &["8", "9", "10"]);
    }

    #[test]
    fn test_visible_lines_with_offset() {
        let lines = numbered(10);
        assert_eq!(TerminalViewComponent::visible_lines(&lines, 2, 3), &["6", "7", "8"]);
        assert_eq!(TerminalViewComponent::visible_lines(&lines, 9, 3), &["1"]);
    }

    #[test]
    fn test_visible_lines_short_buffer() {
        let lines = numbered(2);
        assert_eq!(TerminalViewComponent::visible_lines(&lines, 0, 10), &["1", "2"]);
        assert!(TerminalViewComponent::visible_lines(&[], 0, 10).is_empty());
        assert!(TerminalViewComponent::visible_lines(&lines, 5, 10).is_empty());
    }

    #[test]
    fn test_ansi_colors_are_stripped_from_text() {
        let line = TerminalViewComponent::styled_line("\x1b[31merror\x1b[0m: boom");
        let content: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(content, "error: boom");

        let error_span = line.spans.iter().find(|span| span.content == "error").unwrap();
        assert_eq!(error_span.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_cursor_column_counts_display_cells() {
        let ascii = Line::from(vec![Span::raw(PROMPT), Span::raw("ab")]);
        assert_eq!(TerminalViewComponent::cursor_column(&ascii, 80), 4);

        let wide = Line::from(vec![Span::raw(PROMPT), Span::raw("日本")]);
        assert_eq!(TerminalViewComponent::cursor_column(&wide, 80), 6);

        let accented = Line::from(vec![Span::raw(PROMPT), Span::raw("e\u{301}")]);
        assert_eq!(TerminalViewComponent::cursor_column(&accented, 80), 3);
    }

    #[test]
    fn test_cursor_column_is_clamped_to_row() {
        let long = Line::from(vec![Span::raw(PROMPT), Span::raw("日本語のログ")]);
        assert_eq!(TerminalViewComponent::cursor_column(&long, 5), 4);
        assert_eq!(TerminalViewComponent::cursor_column(&long, 0), 0);
    }

    #[test]
    fn test_plain_line_is_unchanged() {
        let line = TerminalViewComponent::styled_line("plain text");
        assert_eq!(line, Line::raw("plain text"));
    }
}
