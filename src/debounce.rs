use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::trace;

/// Trailing-edge debouncer for committed query changes.
///
/// Each `call` cancels the pending delivery (if any) and schedules the given
/// query to be sent on the channel after `delay` of quiescence. In a burst of
/// calls only the last one is ever delivered; the event loop owns the
/// receiving end.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tx: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration, tx: UnboundedSender<String>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    pub fn call(&mut self, query: String) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        trace!(?query, "debounce scheduled");
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(query);
        }));
    }

    /// Drop any pending delivery without replacing it. Used when a clear
    /// action supersedes an in-flight keystroke burst.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
