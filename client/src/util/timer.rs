//! Cancellable one-shot and repeating browser timers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components schedule the login delay, the chat reply delay, and the header
//! clock through these helpers and cancel the returned [`TaskHandle`] in
//! `on_cleanup`. A cancelled task never runs its callback again.
//!
//! Outside the `hydrate` build there is no event loop, so scheduling only
//! hands back a live handle and the callback never fires.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared liveness flag for a scheduled task.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    alive: Arc<AtomicBool>,
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the task. Returns `true` only for the call that actually
    /// cancelled it. A fired one-shot task cancels itself, so it reports
    /// inactive afterwards.
    pub fn cancel(&self) -> bool {
        self.alive.swap(false, Ordering::Relaxed)
    }
}

/// Run `callback` once after `delay` unless the handle is cancelled first.
pub fn spawn_after<F>(delay: Duration, callback: F) -> TaskHandle
where
    F: FnOnce() + 'static,
{
    let handle = TaskHandle::new();
    #[cfg(feature = "hydrate")]
    {
        let task = handle.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if task.cancel() {
                callback();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, callback);
    }
    handle
}

/// Run `callback` every `period` until the handle is cancelled.
pub fn spawn_every<F>(period: Duration, callback: F) -> TaskHandle
where
    F: Fn() + 'static,
{
    let handle = TaskHandle::new();
    #[cfg(feature = "hydrate")]
    {
        let task = handle.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !task.is_active() {
                    break;
                }
                callback();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, callback);
    }
    handle
}
