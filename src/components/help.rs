// ABOUTME: Help overlay component displaying keyboard shortcuts and the clear command

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

/// Popup listing key bindings.
pub struct HelpComponent;

impl HelpComponent {
    /// Create the component
    pub fn new() -> Self {
        Self
    }

    /// Draw into `frame`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Scrollback:").style(heading),
            ListItem::new("  ↑/↓        Scroll one line"),
            ListItem::new("  PgUp/PgDn  Scroll one page"),
            ListItem::new("  Home       Jump to first line"),
            ListItem::new("  End        Follow new lines"),
            ListItem::new(""),
            ListItem::new("Prompt:").style(heading),
            ListItem::new("  Enter      Echo the typed line"),
            ListItem::new("  clear      Erase the scrollback"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  F1         Toggle this help"),
            ListItem::new("  Esc        Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press F1 or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
