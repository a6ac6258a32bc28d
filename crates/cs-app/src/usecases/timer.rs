//! Per-screen scheduled tasks.
//!
//! Each recurring or delayed callback of a controller lives in a named
//! [`TaskSlot`]. A slot holds at most one task: starting a new one aborts the
//! old, and dropping the slot aborts whatever is left.

use std::future::Future;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub struct TaskSlot {
    name: &'static str,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl TaskSlot {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            handle: Mutex::new(None),
        }
    }

    /// Installs `handle`, aborting the task it supersedes.
    pub fn replace(&self, handle: JoinHandle<()>) {
        let mut guard = self.lock();
        if let Some(existing) = guard.replace(handle) {
            existing.abort();
            debug!(task = self.name, "scheduled task superseded");
        } else {
            debug!(task = self.name, "scheduled task started");
        }
    }

    /// Aborts the current task, if any. Returns whether one was running.
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.abort();
                debug!(task = self.name, "scheduled task cancelled");
                was_running
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.handle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }
}

/// Calls `on_tick` every `period`, first after one full period.
///
/// Each tick runs as its own task so aborting the loop never cuts a dispatch
/// in half. A tick that overruns its period is handled per `missed`:
/// `Delay` shifts the schedule back, `Skip` keeps it on the original grid.
/// The loop ends when the token is cancelled, the owner is dropped, or
/// `on_tick` resolves to `false`.
pub fn spawn_repeating<C, F, Fut>(
    owner: Weak<C>,
    token: CancellationToken,
    period: Duration,
    missed: MissedTickBehavior,
    on_tick: F,
) -> JoinHandle<()>
where
    C: Send + Sync + 'static,
    F: Fn(Arc<C>) -> Fut + Send + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(missed);
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }
            let Some(owner) = owner.upgrade() else { break };
            match tokio::spawn(on_tick(owner)).await {
                Ok(true) => {}
                _ => break,
            }
        }
    })
}

/// Calls `on_fire` once after `delay` unless cancelled first.
pub fn spawn_delayed<C, F, Fut>(
    owner: Weak<C>,
    token: CancellationToken,
    delay: Duration,
    on_fire: F,
) -> JoinHandle<()>
where
    C: Send + Sync + 'static,
    F: FnOnce(Arc<C>) -> Fut + Send + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => return,
            _ = sleep(delay) => {}
        }
        if let Some(owner) = owner.upgrade() {
            // Detached for the same reason as in `spawn_repeating`.
            let _ = tokio::spawn(on_fire(owner)).await;
        }
    })
}
