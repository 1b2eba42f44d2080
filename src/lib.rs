// ABOUTME: Library crate for the log browser exposing public API for testing and external use

//! Terminal log browser that tails newline-delimited text frames from a WebSocket endpoint.

/// View state, line buffer and keyboard handling
pub mod app;
/// ratatui components drawing the log view
pub mod components;
/// Configuration file and command line settings
pub mod config;
/// Library error type
pub mod error;
/// The WebSocket log stream
pub mod stream;
