//! Debounced delivery of input values.
//!
//! A [`Debouncer`] owns at most one pending deferred invocation. Every call to
//! [`Debouncer::schedule`] cancels the pending one and arms a new timer, so a burst of
//! keystrokes produces a single delivery once the input has been quiet for the whole
//! window. Fired values arrive on the receiver returned by [`Debouncer::new`].
//! Dropping the debouncer cancels whatever is still pending.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Quiescence window used for free-text search input.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// One cancellable deferred-invocation handle for a single input field.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<CancellationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer and the receiver its fired values are delivered on.
    #[must_use]
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Quiescence window this debouncer waits for.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending invocation with `value`, delivered after the window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => {
                    trace!("Debounced invocation superseded");
                }
                () = tokio::time::sleep(delay) => {
                    // Receiver gone means the owning view was torn down
                    if tx.send(value).is_err() {
                        trace!("Debounced value dropped, receiver closed");
                    }
                }
            }
        });

        self.pending = Some(token);
    }

    /// Cancels the pending invocation, if any. Already-delivered values are unaffected.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    /// Returns true while an armed invocation has not been cancelled or replaced.
    ///
    /// The flag is not cleared when the timer fires, so it only reflects whether
    /// `cancel` was called since the last `schedule`.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}
