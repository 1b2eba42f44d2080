// ABOUTME: Log view application state, line buffer and input handling

/// Ordered line buffer and the `clear` command
pub mod buffer;
/// Keyboard event mapping
pub mod events;
/// View state and the app owning the stream
pub mod state;

pub use buffer::{LineBuffer, Submission, CLEAR_COMMAND};
pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState};
