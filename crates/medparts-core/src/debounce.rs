use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays a callback until input has been quiet for a fixed interval.
///
/// Each [`Debouncer::call`] replaces any still-pending invocation, so only
/// the last callback in a burst of keystrokes fires. A callback whose delay
/// has already elapsed runs to completion; there is no cancellation of
/// in-flight work, matching the single-threaded event model this mirrors.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    /// Schedules `callback` to run after the quiet interval, aborting any
    /// previously scheduled callback that has not started yet.
    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Drops the pending invocation without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
