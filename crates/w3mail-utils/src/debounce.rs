//! Trailing-edge debouncing for async work.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::trace;

/// Runs only the most recent of a burst of calls.
///
/// Clones share state, so a clone handed to another task debounces against
/// the original.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    /// Creates a debouncer that waits `delay` of quiet before running.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Configured quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the quiet period, then runs `future` unless a newer call
    /// arrived meanwhile. Superseded calls return `None` without running.
    pub async fn call<F: Future>(&self, future: F) -> Option<F::Output> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            trace!(ticket, "Debounced call superseded");
            return None;
        }
        Some(future.await)
    }

    /// Invalidates every pending call.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn only_last_call_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let (first, second) = tokio::join!(
            debouncer.call(async { "first" }),
            debouncer.call(async { "second" })
        );
        assert_eq!(first, None);
        assert_eq!(second, Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_calls_all_run() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        assert_eq!(debouncer.call(async { 1 }).await, Some(1));
        assert_eq!(debouncer.call(async { 2 }).await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_state() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let other = debouncer.clone();
        let (a, b) = tokio::join!(debouncer.call(async { 1 }), other.call(async { 2 }));
        assert_eq!((a, b), (None, Some(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(100));
        let canceller = debouncer.clone();
        let (result, ()) = tokio::join!(debouncer.call(async { 1 }), async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });
        assert_eq!(result, None);
    }
}
