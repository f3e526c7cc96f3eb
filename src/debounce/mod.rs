use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Delivers only the last scheduled value, once `window` passes with no newer
/// one. A new `schedule` aborts the pending delivery instead of queueing.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    tx: Option<mpsc::UnboundedSender<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(window: Duration, tx: mpsc::UnboundedSender<T>) -> Self {
        Self {
            window,
            tx: Some(tx),
            pending: None,
        }
    }

    /// Returns false once the debouncer has been closed.
    pub fn schedule(&mut self, value: T) -> bool {
        let Some(tx) = self.tx.clone() else {
            return false;
        };
        self.cancel();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let _ = tx.send(value);
        }));
        true
    }

    /// Aborts the pending delivery; true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    /// Drops this side's sender. The channel closes after the pending
    /// delivery, if any, has gone out.
    pub fn close(&mut self) {
        self.tx = None;
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
