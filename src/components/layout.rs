// ABOUTME: Main layout component placing the log terminal above the status bar

use ratatui::prelude::*;

use crate::app::AppState;
use super::{HelpComponent, StatusBarComponent, TerminalViewComponent};

/// Arranges the log terminal, status bar and help overlay.
pub struct LayoutComponent {
    terminal_view: TerminalViewComponent,
    status_bar: StatusBarComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    /// Create the component
    pub fn new() -> Self {
        Self {
            terminal_view: TerminalViewComponent::new(),
            status_bar: StatusBarComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Draw into `frame`
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Log terminal
                Constraint::Length(3),  // Status bar
            ])
            .split(frame.size());

        self.terminal_view.render(frame, main_chunks[0], state);
        self.status_bar.render(frame, main_chunks[1], state);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
