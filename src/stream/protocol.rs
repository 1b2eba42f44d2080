// ABOUTME: Events and framing for the inbound log stream
// A frame is one text message that may carry several newline-separated lines

use std::fmt;

/// Lifecycle of the single log stream as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake in progress
    Connecting,
    /// Frames may arrive
    Open,
    /// Terminal for this run; the stream is never reopened.
    Closed,
    /// No stream was opened (local echo only)
    Offline,
}

impl ConnectionState {
    /// Lowercase name shown in the status bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Offline => "offline",
        }
    }

    /// Single-glyph marker for the state
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Connecting => "◐",
            Self::Open => "●",
            Self::Closed => "○",
            Self::Offline => "◌",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Events delivered from the socket task to the UI loop, in socket order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Handshake completed
    Opened,
    /// One text message, possibly holding several lines
    Frame(String),
    /// Sent exactly once, for a clean close and a failure alike.
    Closed,
}

/// Split a frame on `\n`, dropping empty segments.
pub fn split_lines(payload: &str) -> impl Iterator<Item = &str> {
    payload.split('\n').filter(|segment| !segment.is_empty())
}
