// ABOUTME: Ordered line buffer backing the scrollback
// Appends stream frames line by line and handles locally submitted input

use crate::stream::split_lines;

/// Local input that empties the buffer instead of being appended.
pub const CLEAR_COMMAND: &str = "clear";

/// What a prompt submission did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// One line was added
    Appended,
    /// The buffer was emptied
    Cleared,
}

/// Chronological list of displayed lines. Grows without bound until cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer seeded with a single welcome line
    pub fn with_welcome(welcome: impl Into<String>) -> Self {
        Self {
            lines: vec![welcome.into()],
        }
    }

    /// Handle a line typed at the prompt.
    ///
    /// The text is appended verbatim unless it is exactly [`CLEAR_COMMAND`].
    pub fn submit(&mut self, text: &str) -> Submission {
        if text == CLEAR_COMMAND {
            self.clear();
            Submission::Cleared
        } else {
            self.lines.push(text.to_string());
            Submission::Appended
        }
    }

    /// Append the non-empty lines of a frame in order, returning how many were added.
    pub fn append_frame(&mut self, payload: &str) -> usize {
        let before = self.lines.len();
        self.lines.extend(split_lines(payload).map(str::to_string));
        self.lines.len() - before
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in chronological order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True after a clear, or before anything arrived
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
