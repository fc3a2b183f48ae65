//! Single-shot timer seam for the success window.
//!
//! The engine never sleeps on its own; it asks a [`Scheduler`] for one
//! deferred callback per success window. [`TokioScheduler`] backs that with
//! a spawned task, while [`ManualScheduler`] queues callbacks so tests and
//! synchronous hosts can fire them deterministically.

use std::sync::Mutex;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Type alias for boxed one-shot timer callbacks.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled callback.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Cancel the callback if it has not fired yet.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check whether the callback was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Provider of single-shot deferred callbacks.
pub trait Scheduler: Send + Sync {
    /// Schedule `callback` to run once after `delay`.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle;
}

/// Scheduler backed by the Tokio runtime.
///
/// Spawns one task per timer that races the delay against cancellation.
/// Must be called from within a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    /// Create a new Tokio-backed scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let token = CancellationToken::new();
        let task_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => callback(),
                _ = task_token.cancelled() => {}
            }
        });
        TimerHandle::new(token)
    }
}

/// Entry queued by a [`ManualScheduler`].
struct PendingTimer {
    delay: Duration,
    callback: TimerCallback,
    token: CancellationToken,
}

/// Scheduler that queues callbacks until the host fires them.
///
/// Nothing runs in the background: `fire_next()` and `fire_all()` stand in
/// for the passage of time, which keeps controller behavior fully
/// deterministic without a runtime.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use formwork::schedule::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// scheduler.schedule(Duration::from_secs(3), Box::new(|| {}));
/// assert_eq!(scheduler.pending(), 1);
/// assert!(scheduler.fire_next());
/// assert_eq!(scheduler.pending(), 0);
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<Vec<PendingTimer>>,
}

impl ManualScheduler {
    /// Create a new empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued callbacks that are not cancelled.
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .map(|guard| {
                guard
                    .iter()
                    .filter(|timer| !timer.token.is_cancelled())
                    .count()
            })
            .unwrap_or(0)
    }

    /// Delays of the queued, uncancelled callbacks, in schedule order.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.queue
            .lock()
            .map(|guard| {
                guard
                    .iter()
                    .filter(|timer| !timer.token.is_cancelled())
                    .map(|timer| timer.delay)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fire the oldest queued callback.
    ///
    /// Cancelled entries are discarded without running. Returns `true` if a
    /// callback ran. The callback runs outside the queue lock, so it may
    /// schedule again through the same scheduler.
    pub fn fire_next(&self) -> bool {
        loop {
            let next = {
                let Ok(mut guard) = self.queue.lock() else {
                    return false;
                };
                if guard.is_empty() {
                    return false;
                }
                guard.remove(0)
            };
            if next.token.is_cancelled() {
                continue;
            }
            (next.callback)();
            return true;
        }
    }

    /// Fire every queued callback in order.
    ///
    /// Returns how many callbacks ran.
    pub fn fire_all(&self) -> usize {
        let mut fired = 0;
        while self.fire_next() {
            fired += 1;
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> TimerHandle {
        let token = CancellationToken::new();
        if let Ok(mut guard) = self.queue.lock() {
            guard.push(PendingTimer {
                delay,
                callback,
                token: token.clone(),
            });
        }
        TimerHandle::new(token)
    }
}
