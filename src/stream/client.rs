// ABOUTME: WebSocket client owning the one connection to the log relay
// Opens the socket once, forwards open/frame/close events and never reconnects

use crate::stream::protocol::{ConnectionState, StreamEvent};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};
use tokio_tungstenite::{connect_async, tungstenite};
use tracing::{debug, error, info, warn};

/// How long a close handshake may take before the task is abandoned.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(2);

/// Handle to the single log stream connection.
///
/// Dropping the handle requests a close whether the socket is still
/// connecting or already open. Use [`LogStream::close`] to also wait for
/// the socket task to finish.
pub struct LogStream {
    url: String,
    state: ConnectionState,
    events: mpsc::UnboundedReceiver<StreamEvent>,
    close_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl LogStream {
    /// Spawn the connection task. Must be called from within a tokio runtime.
    pub fn connect(url: impl Into<String>) -> Self {
        let url = url.into();
        info!("Opening log stream to {}", url);

        let (event_tx, events) = mpsc::unbounded_channel();
        let (close_tx, close_rx) = oneshot::channel();
        let handle = tokio::spawn(Self::connection_handler(url.clone(), event_tx, close_rx));

        Self {
            url,
            state: ConnectionState::Connecting,
            events,
            close_tx: Some(close_tx),
            handle: Some(handle),
        }
    }

    async fn connection_handler(
        url: String,
        event_tx: mpsc::UnboundedSender<StreamEvent>,
        close_rx: oneshot::Receiver<()>,
    ) {
        match Self::run(&url, &event_tx, close_rx).await {
            Ok(()) => info!("Log stream from {} ended", url),
            Err(e) => error!("Log stream from {} failed: {}", url, e),
        }

        // The receiver may already be gone when the view was torn down first.
        let _ = event_tx.send(StreamEvent::Closed);
    }

    async fn run(
        url: &str,
        event_tx: &mpsc::UnboundedSender<StreamEvent>,
        mut close_rx: oneshot::Receiver<()>,
    ) -> Result<(), tungstenite::Error> {
        let (ws_stream, response) = tokio::select! {
            result = connect_async(url) => result?,
            _ = &mut close_rx => {
                info!("Close requested while still connecting to {}", url);
                return Ok(());
            }
        };

        info!("Connected to {}", url);
        debug!("WebSocket response status: {:?}", response.status());
        if event_tx.send(StreamEvent::Opened).is_err() {
            return Ok(());
        }

        let (mut ws_sender, mut ws_receiver) = ws_stream.split();

        loop {
            tokio::select! {
                _ = &mut close_rx => {
                    info!("Closing log stream to {}", url);
                    ws_sender.send(tungstenite::Message::Close(None)).await?;
                    // Wait for the server's half of the handshake.
                    let drain = async { while let Some(Ok(_)) = ws_receiver.next().await {} };
                    if timeout(CLOSE_TIMEOUT, drain).await.is_err() {
                        warn!("Server did not acknowledge close within {:?}", CLOSE_TIMEOUT);
                    }
                    return Ok(());
                }

                msg = ws_receiver.next() => match msg {
                    Some(Ok(tungstenite::Message::Text(text))) => {
                        debug!("Received frame ({} bytes)", text.len());
                        if event_tx.send(StreamEvent::Frame(text)).is_err() {
                            return Ok(());
                        }
                    }
                    Some(Ok(tungstenite::Message::Close(frame))) => {
                        info!("WebSocket closed by server: {:?}", frame);
                        return Ok(());
                    }
                    Some(Ok(_)) => {
                        // Binary, Ping and Pong frames carry no log lines
                    }
                    Some(Err(e)) => return Err(e),
                    None => return Ok(()),
                },
            }
        }
    }

    /// Endpoint this stream was opened against
    pub fn url(&self) -> &str {
        &self.url
    }

    /// State as of the last event taken from the stream
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// Take the next event if one is already queued, without waiting.
    pub fn try_next_event(&mut self) -> Option<StreamEvent> {
        let event = self.events.try_recv().ok()?;
        self.observe(&event);
        Some(event)
    }

    /// Wait for the next event. Returns `None` once the socket task is gone
    /// and every event has been taken.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        let event = self.events.recv().await?;
        self.observe(&event);
        Some(event)
    }

    fn observe(&mut self, event: &StreamEvent) {
        match event {
            StreamEvent::Opened => self.state = ConnectionState::Open,
            StreamEvent::Closed => self.state = ConnectionState::Closed,
            StreamEvent::Frame(_) => {}
        }
    }

    fn request_close(&mut self) -> bool {
        match self.close_tx.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    /// Close the socket and wait for its task to finish.
    ///
    /// Events already queued, including the final `Closed`, stay available
    /// through [`LogStream::next_event`].
    pub async fn close(&mut self) {
        if self.request_close() {
            debug!("Close requested for {}", self.url);
        }

        if let Some(handle) = self.handle.take() {
            let abort = handle.abort_handle();
            match timeout(CLOSE_TIMEOUT + Duration::from_millis(500), handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("Log stream task failed: {}", e),
                Err(_) => {
                    warn!("Log stream task did not stop in time, aborting");
                    abort.abort();
                }
            }
        }
    }
}

impl Drop for LogStream {
    fn drop(&mut self) {
        if self.request_close() {
            debug!("Log stream to {} dropped while {}", self.url, self.state);
        }
    }
}
