// ABOUTME: Integration tests for the log stream against a local WebSocket server
// Covers frame delivery order, server close, refused connections and client teardown

use futures_util::{SinkExt, StreamExt};
use log_browser::app::{App, AppState};
use log_browser::config::WELCOME_MESSAGE;
use log_browser::stream::{ConnectionState, LogStream, StreamEvent};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tokio_tungstenite::{accept_async, tungstenite::Message};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Accept one client, push `frames`, then close from the server side.
async fn spawn_pushing_server(frames: Vec<&'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        for frame in frames {
            ws.send(Message::Text(frame.to_string())).await.unwrap();
        }
        ws.close(None).await.unwrap();
        while let Some(Ok(_)) = ws.next().await {}
    });

    format!("ws://{addr}/ws")
}

/// Accept one client and report every message it sends until the socket ends.
async fn spawn_recording_server() -> (String, oneshot::Receiver<Vec<Message>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (done_tx, done_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        let mut received = Vec::new();
        while let Some(Ok(msg)) = ws.next().await {
            received.push(msg);
        }
        let _ = done_tx.send(received);
    });

    (format!("ws://{addr}/ws"), done_rx)
}

async fn collect_until_closed(stream: &mut LogStream) -> Vec<StreamEvent> {
    let mut events = Vec::new();
    loop {
        let event = timeout(TEST_TIMEOUT, stream.next_event())
            .await
            .expect("stream event within timeout")
            .expect("stream reports Closed before ending");
        let closed = event == StreamEvent::Closed;
        events.push(event);
        if closed {
            return events;
        }
    }
}

#[tokio::test]
async fn test_frames_arrive_in_order_then_close() {
    let url = spawn_pushing_server(vec!["a\nb\n\nc", "d\n"]).await;
    let mut stream = LogStream::connect(url.clone());
    assert_eq!(stream.state(), ConnectionState::Connecting);
    assert_eq!(stream.url(), url);

    let events = collect_until_closed(&mut stream).await;
    assert_eq!(
        events,
        vec![
            StreamEvent::Opened,
            StreamEvent::Frame("a\nb\n\nc".to_string()),
            StreamEvent::Frame("d\n".to_string()),
            StreamEvent::Closed,
        ]
    );
    assert_eq!(stream.state(), ConnectionState::Closed);

    let mut state = AppState::new(WELCOME_MESSAGE, Some(url));
    for event in events {
        state.handle_stream_event(event);
    }
    assert_eq!(state.lines.lines(), &[WELCOME_MESSAGE, "a", "b", "c", "d"]);
    assert_eq!(state.connection, ConnectionState::Closed);
}

#[tokio::test]
async fn test_close_before_any_frame_keeps_seeded_buffer() {
    let url = spawn_pushing_server(Vec::new()).await;
    let mut stream = LogStream::connect(url.clone());

    let events = collect_until_closed(&mut stream).await;
    assert_eq!(events, vec![StreamEvent::Opened, StreamEvent::Closed]);

    let mut state = AppState::new(WELCOME_MESSAGE, Some(url));
    for event in events {
        state.handle_stream_event(event);
    }
    assert_eq!(state.lines.lines(), &[WELCOME_MESSAGE]);
}

#[tokio::test]
async fn test_refused_connection_only_reports_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut stream = LogStream::connect(format!("ws://{addr}/ws"));
    let events = collect_until_closed(&mut stream).await;

    assert_eq!(events, vec![StreamEvent::Closed]);
    assert!(timeout(TEST_TIMEOUT, stream.next_event()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_client_close_sends_only_the_close_handshake() {
    let (url, done_rx) = spawn_recording_server().await;
    let mut stream = LogStream::connect(url);

    let opened = timeout(TEST_TIMEOUT, stream.next_event()).await.unwrap();
    assert_eq!(opened, Some(StreamEvent::Opened));

    stream.close().await;

    let received = timeout(TEST_TIMEOUT, done_rx).await.unwrap().unwrap();
    assert_eq!(received.len(), 1);
    assert!(matches!(received[0], Message::Close(_)));

    let closed = timeout(TEST_TIMEOUT, stream.next_event()).await.unwrap();
    assert_eq!(closed, Some(StreamEvent::Closed));
}

#[tokio::test]
async fn test_dropping_the_stream_closes_the_socket() {
    let (url, done_rx) = spawn_recording_server().await;
    let mut stream = LogStream::connect(url);

    let opened = timeout(TEST_TIMEOUT, stream.next_event()).await.unwrap();
    assert_eq!(opened, Some(StreamEvent::Opened));

    drop(stream);

    let received = timeout(TEST_TIMEOUT, done_rx).await.unwrap().unwrap();
    assert!(matches!(received.last(), Some(Message::Close(_))));
}

#[tokio::test]
async fn test_app_tick_applies_queued_frames() {
    let url = spawn_pushing_server(vec!["first\nsecond"]).await;
    let stream = LogStream::connect(url.clone());
    let mut app = App::with_stream(AppState::new(WELCOME_MESSAGE, Some(url)), Some(stream));

    let deadline = tokio::time::Instant::now() + TEST_TIMEOUT;
    while app.state.connection != ConnectionState::Closed {
        assert!(tokio::time::Instant::now() < deadline, "stream never closed");
        app.tick();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(app.state.lines.lines(), &[WELCOME_MESSAGE, "first", "second"]);
    assert!(!app.tick());
    app.shutdown().await;
}

#[tokio::test]
async fn test_app_shutdown_closes_open_stream() {
    let (url, done_rx) = spawn_recording_server().await;
    let stream = LogStream::connect(url.clone());
    let mut app = App::with_stream(AppState::new(WELCOME_MESSAGE, Some(url)), Some(stream));

    let deadline = tokio::time::Instant::now() + TEST_TIMEOUT;
    while app.state.connection != ConnectionState::Open {
        assert!(tokio::time::Instant::now() < deadline, "stream never opened");
        app.tick();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    app.shutdown().await;

    let received = timeout(TEST_TIMEOUT, done_rx).await.unwrap().unwrap();
    assert!(matches!(received.last(), Some(Message::Close(_))));
}
