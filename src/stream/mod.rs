// ABOUTME: Log stream module for the single WebSocket connection feeding the scrollback
// Provides the connection handle, its events and the newline framing of text frames

/// Socket task and its handle
pub mod client;
/// Stream events, connection states and line framing
pub mod protocol;

pub use client::LogStream;
pub use protocol::{split_lines, ConnectionState, StreamEvent};
