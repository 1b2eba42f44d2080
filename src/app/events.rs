// ABOUTME: Event handling system mapping keyboard input to log view actions

use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown
pub const PAGE_SCROLL: usize = 10;

/// Actions a key press can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Leave the application
    Quit,
    /// Show or hide help
    ToggleHelp,
    /// Type a character at the prompt
    InputChar(char),
    /// Delete the last prompt character
    InputBackspace,
    /// Submit the prompt line
    SubmitInput,
    /// Scroll toward older lines
    ScrollUp(usize),
    /// Scroll toward newer lines
    ScrollDown(usize),
    /// Jump to the oldest line
    ScrollToTop,
    /// Follow the tail
    ScrollToBottom,
}

/// Maps crossterm key events to [`AppEvent`]s and applies them.
pub struct EventHandler;

impl EventHandler {
    /// Translate a key press; `None` for keys with no meaning in the current view
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::F(1) | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::F(1) => Some(AppEvent::ToggleHelp),
            KeyCode::Enter => Some(AppEvent::SubmitInput),
            KeyCode::Backspace => Some(AppEvent::InputBackspace),
            KeyCode::Up => Some(AppEvent::ScrollUp(1)),
            KeyCode::Down => Some(AppEvent::ScrollDown(1)),
            KeyCode::PageUp => Some(AppEvent::ScrollUp(PAGE_SCROLL)),
            KeyCode::PageDown => Some(AppEvent::ScrollDown(PAGE_SCROLL)),
            KeyCode::Home => Some(AppEvent::ScrollToTop),
            KeyCode::End => Some(AppEvent::ScrollToBottom),
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(AppEvent::InputChar(ch))
            }
            _ => None,
        }
    }

    /// Apply an event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::InputChar(ch) => state.push_input_char(ch),
            AppEvent::InputBackspace => state.input_backspace(),
            AppEvent::SubmitInput => state.submit_input(),
            AppEvent::ScrollUp(amount) => state.scroll_up(amount),
            AppEvent::ScrollDown(amount) => state.scroll_down(amount),
            AppEvent::ScrollToTop => state.scroll_to_top(),
            AppEvent::ScrollToBottom => state.scroll_to_bottom(),
        }
    }
}
