// ABOUTME: Application state for the log view and the app wrapper owning the stream
// All mutation happens on the UI loop; the socket task only sends events

use crate::app::buffer::{LineBuffer, Submission};
use crate::config::Config;
use crate::stream::{ConnectionState, LogStream, StreamEvent};
use tracing::{debug, info, warn};

/// Everything the log view renders. Mutated only on the UI loop.
#[derive(Debug)]
pub struct AppState {
    /// Scrollback contents
    pub lines: LineBuffer,
    /// Text typed at the prompt but not yet submitted
    pub input: String,
    /// Connection state shown in the status bar
    pub connection: ConnectionState,
    /// Stream URL, `None` in offline mode
    pub endpoint: Option<String>,
    /// Lines between the bottom of the view and the newest line; 0 follows the tail
    pub scroll_offset: usize,
    /// Whether the help overlay is shown
    pub help_visible: bool,
    /// Set once the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// State for a view attached to `endpoint`, or a local-echo view when `None`.
    pub fn new(welcome: impl Into<String>, endpoint: Option<String>) -> Self {
        let connection = if endpoint.is_some() {
            ConnectionState::Connecting
        } else {
            ConnectionState::Offline
        };

        Self {
            lines: LineBuffer::with_welcome(welcome),
            input: String::new(),
            connection,
            endpoint,
            scroll_offset: 0,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Apply one event from the log stream
    pub fn handle_stream_event(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Opened => {
                info!("Connected");
                self.connection = ConnectionState::Open;
            }
            StreamEvent::Closed => {
                warn!("Closed");
                self.connection = ConnectionState::Closed;
            }
            StreamEvent::Frame(payload) => {
                let appended = self.lines.append_frame(&payload);
                debug!("Received data ({} lines): {}", appended, payload);
                // Keep a scrolled-back view anchored on the same lines
                if self.scroll_offset > 0 {
                    self.scroll_offset += appended;
                }
            }
        }
    }

    /// Append a typed character to the prompt
    pub fn push_input_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Delete the last prompt character
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the prompt contents to the line buffer, including an empty prompt.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        match self.lines.submit(&text) {
            Submission::Cleared => {
                debug!("Scrollback cleared");
                self.scroll_offset = 0;
            }
            Submission::Appended => {
                self.scroll_offset = 0;
            }
        }
    }

    fn max_scroll_offset(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Move the view toward older lines
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.max_scroll_offset());
    }

    /// Move the view toward newer lines
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Show the oldest line
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = self.max_scroll_offset();
    }

    /// Follow the tail again
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// True when new lines scroll into view
    pub const fn is_following(&self) -> bool {
        self.scroll_offset == 0
    }

    /// Show or hide the help overlay
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Ask the UI loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// The log view together with the stream feeding it.
pub struct App {
    /// View state drawn each frame
    pub state: AppState,
    stream: Option<LogStream>,
}

impl App {
    /// Build the app from configuration, opening the stream unless `offline`.
    /// Must be called from within a tokio runtime when a stream is opened.
    pub fn from_config(config: &Config, offline: bool) -> Self {
        if offline {
            info!("Starting in offline mode, no stream will be opened");
            return Self::with_stream(AppState::new(config.welcome.clone(), None), None);
        }

        let stream = LogStream::connect(config.url.clone());
        let state = AppState::new(config.welcome.clone(), Some(config.url.clone()));
        Self::with_stream(state, Some(stream))
    }

    /// Assemble an app from an existing state and optional stream
    pub fn with_stream(state: AppState, stream: Option<LogStream>) -> Self {
        Self { state, stream }
    }

    /// Apply every queued stream event. Returns true when the state changed.
    pub fn tick(&mut self) -> bool {
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };

        let mut changed = false;
        while let Some(event) = stream.try_next_event() {
            self.state.handle_stream_event(event);
            changed = true;
        }
        changed
    }

    /// Close the stream if it is still connecting or open.
    pub async fn shutdown(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            if stream.state() != ConnectionState::Closed {
                stream.close().await;
            }
        }
    }
}
