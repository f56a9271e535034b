//! Polling chat feed.
//!
//! [`ChatFeed`] opens one [`ChatWindow`] per booking conversation. Each window
//! owns a background task that refetches the full transcript on a fixed
//! interval and replaces the local copy wholesale; there is no incremental
//! merge and no push channel. Sending a message triggers an immediate refresh
//! on top of the regular cadence. Closing the window cancels the task, and a
//! fetch that was already in flight at that point is discarded rather than
//! applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, mpsc};
use tokio_util::sync::CancellationToken;
use walkies_core::chat::{ChatMessage, NewChatMessage, sort_transcript};
use walkies_core::error::{Result, WalkiesError};
use walkies_core::gateway::ChatGateway;
use walkies_core::ids::BookingId;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Invoked with a fresh copy of the transcript after every applied refresh.
pub type MessagesCallback = Arc<dyn Fn(Vec<ChatMessage>) + Send + Sync>;

pub struct ChatFeed {
    gateway: Arc<dyn ChatGateway>,
    poll_interval: Duration,
}

impl ChatFeed {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self {
            gateway,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Overrides the polling cadence. Tests use short intervals.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Opens the conversation for one booking and starts polling it.
    ///
    /// The first fetch happens immediately; afterwards the transcript is
    /// refetched every interval until the window is closed or dropped. The
    /// callback observes every applied transcript in order.
    pub fn subscribe(&self, booking_id: BookingId, on_messages: MessagesCallback) -> Arc<ChatWindow> {
        let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);
        let window = Arc::new(ChatWindow {
            booking_id: booking_id.clone(),
            gateway: self.gateway.clone(),
            transcript: RwLock::new(Vec::new()),
            draft: RwLock::new(String::new()),
            sending: AtomicBool::new(false),
            refresh_tx,
            cancel: CancellationToken::new(),
        });

        // The task holds the window weakly so that dropping the last user
        // handle stops the poll as surely as an explicit close().
        let poller = Arc::downgrade(&window);
        let cancel = window.cancel.clone();
        let poll_interval = self.poll_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(poll_interval);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!(booking_id = %booking_id, "Chat feed stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        let Some(window) = poller.upgrade() else { break };
                        window.refresh(&on_messages).await;
                    }
                    Some(()) = refresh_rx.recv() => {
                        let Some(window) = poller.upgrade() else { break };
                        window.refresh(&on_messages).await;
                    }
                }
            }
        });

        window
    }
}

/// One open conversation: the polled transcript plus the draft being typed.
pub struct ChatWindow {
    booking_id: BookingId,
    gateway: Arc<dyn ChatGateway>,
    transcript: RwLock<Vec<ChatMessage>>,
    draft: RwLock<String>,
    sending: AtomicBool,
    refresh_tx: mpsc::Sender<()>,
    cancel: CancellationToken,
}

impl ChatWindow {
    pub fn booking_id(&self) -> &BookingId {
        &self.booking_id
    }

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    pub async fn set_draft(&self, text: impl Into<String>) {
        *self.draft.write().await = text.into();
    }

    pub async fn draft(&self) -> String {
        self.draft.read().await.clone()
    }

    /// True while a send is in flight; the UI disables the send control.
    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::SeqCst)
    }

    /// Sends the current draft.
    ///
    /// A blank draft is rejected locally without a network call. On success
    /// the draft is cleared and an immediate transcript refresh is queued; on
    /// failure the draft stays intact so the user can retry.
    pub async fn send_draft(&self) -> Result<()> {
        let content = self.draft.read().await.trim().to_string();
        if content.is_empty() {
            return Err(WalkiesError::validation("Message cannot be empty"));
        }
        if self.sending.swap(true, Ordering::SeqCst) {
            return Err(WalkiesError::validation("A message is already being sent"));
        }

        let outcome = self
            .gateway
            .send_message(&NewChatMessage {
                booking_id: self.booking_id.clone(),
                content,
            })
            .await;
        self.sending.store(false, Ordering::SeqCst);

        match outcome {
            Ok(_) => {
                self.draft.write().await.clear();
                // Full refetch instead of a local append, same as the poll.
                let _ = self.refresh_tx.try_send(());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(booking_id = %self.booking_id, "Failed to send message: {}", e);
                Err(e)
            }
        }
    }

    /// Stops the polling task. Idempotent; `Drop` calls it too.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn refresh(&self, on_messages: &MessagesCallback) {
        let fetched = self.gateway.fetch_messages(&self.booking_id).await;
        // The window may have been closed while the fetch was in flight; a
        // late result must not resurrect the transcript.
        if self.cancel.is_cancelled() {
            return;
        }
        match fetched {
            Ok(mut messages) => {
                sort_transcript(&mut messages);
                *self.transcript.write().await = messages.clone();
                on_messages(messages);
            }
            Err(e) => {
                tracing::warn!(booking_id = %self.booking_id, "Chat poll failed: {}", e);
            }
        }
    }
}

impl Drop for ChatWindow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
