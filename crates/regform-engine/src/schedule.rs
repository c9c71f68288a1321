//! Debounced, cancellable scheduling for search input
//!
//! Each keystroke schedules a deferred search after a quiet period; a newer
//! keystroke cancels whatever was pending. Last write wins — a burst of
//! typing runs the search once, for the final query.

use regform_locations::LocationResolver;
use regform_types::LocationRecord;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Quiet period between the last keystroke and the search it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Handle to one scheduled call; cancel it before it fires to stop it.
#[derive(Debug)]
pub struct CancelHandle {
    handle: JoinHandle<()>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Run `f` once after `delay`, unless the returned handle is cancelled
/// first.
pub fn schedule<F>(delay: Duration, f: F) -> CancelHandle
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        f();
    });
    CancelHandle { handle }
}

/// Collapses a burst of calls into one deferred execution.
///
/// Dropping the debouncer cancels whatever is still pending, so a torn-down
/// owner never runs a late callback.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<CancelHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `f`, cancelling any previously scheduled call first.
    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.pending = Some(schedule(self.delay, f));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Consumer of a delivered result list.
pub type SearchSink = Arc<dyn Fn(Vec<LocationRecord>) + Send + Sync>;

/// Debounced location search: keystrokes in, at most one deferred index
/// search out, results delivered to the sink.
pub struct SearchScheduler {
    resolver: LocationResolver,
    debounce: Debouncer,
    sink: SearchSink,
}

impl SearchScheduler {
    pub fn new(resolver: LocationResolver, sink: SearchSink) -> Self {
        Self::with_delay(resolver, sink, SEARCH_DEBOUNCE)
    }

    pub fn with_delay(resolver: LocationResolver, sink: SearchSink, delay: Duration) -> Self {
        Self {
            resolver,
            debounce: Debouncer::new(delay),
            sink,
        }
    }

    /// Record a keystroke: cancel the pending search, schedule a new one
    /// for the full current query.
    pub fn keystroke(&mut self, query: impl Into<String>) {
        let query = query.into();
        let resolver = self.resolver.clone();
        let sink = Arc::clone(&self.sink);
        debug!(%query, "search scheduled");
        self.debounce.call(move || {
            let hits = resolver.search(&query);
            sink(hits);
        });
    }

    /// Cancel without scheduling a replacement (selection made, session
    /// closing).
    pub fn cancel_pending(&mut self) {
        self.debounce.cancel();
    }
}
