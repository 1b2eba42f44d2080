// ABOUTME: UI components for the log browser including the log terminal, status bar and help

/// F1 help overlay
pub mod help;
/// Top-level screen layout
pub mod layout;
/// Connection status bar
pub mod status_bar;
/// Scrollback and prompt
pub mod terminal_view;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use status_bar::StatusBarComponent;
pub use terminal_view::TerminalViewComponent;
