use std::future::Future;
use std::sync::Mutex as StdMutex;

use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;

use super::ControllerError;

/// One mounted instance of a screen.
///
/// The token is cancelled on unmount; anything holding a `Mount` checks it
/// before touching state.
#[derive(Debug, Clone)]
pub struct Mount<Id> {
    pub id: Id,
    pub token: CancellationToken,
}

impl<Id> Mount<Id> {
    /// Runs a remote call unless the mount is torn down first.
    pub async fn run<T>(&self, call: impl Future<Output = T>) -> Result<T, ControllerError> {
        tokio::select! {
            _ = self.token.cancelled() => Err(ControllerError::Unmounted),
            out = call => Ok(out),
        }
    }
}

/// Shared screen context containing state, mount lifecycle and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `mount`.
/// - `dispatch_lock`: serializes dispatch so transition + actions run as a unit.
/// - `mount`: short, synchronous; guards mount/unmount and every state commit,
///   so no commit can land after an unmount returns.
pub struct ScreenContext<S, Id> {
    state: watch::Sender<S>,
    mount: StdMutex<Option<Mount<Id>>>,
    dispatch_lock: Mutex<()>,
}

impl<S, Id> ScreenContext<S, Id>
where
    S: Clone,
    Id: Clone,
{
    pub fn new(initial_state: S) -> Self {
        let (state, _) = watch::channel(initial_state);
        Self {
            state,
            mount: StdMutex::new(None),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn get_state(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.subscribe()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Replaces any previous mount and resets state.
    ///
    /// The previous mount is cancelled before waiting for the dispatch lock so
    /// an in-flight call on it gives the lock up promptly.
    pub async fn mount(&self, id: Id, initial_state: S) -> Mount<Id> {
        if let Some(previous) = self.lock_mount().take() {
            previous.token.cancel();
        }
        let _guard = self.acquire_dispatch_lock().await;
        let mount = Mount {
            id,
            token: CancellationToken::new(),
        };
        let mut slot = self.lock_mount();
        if let Some(previous) = slot.replace(mount.clone()) {
            previous.token.cancel();
        }
        self.state.send_replace(initial_state);
        mount
    }

    /// Cancels the current mount. Returns it if there was one.
    pub fn unmount(&self) -> Option<Mount<Id>> {
        let mount = self.lock_mount().take();
        if let Some(mount) = &mount {
            mount.token.cancel();
        }
        mount
    }

    pub fn current_mount(&self) -> Result<Mount<Id>, ControllerError> {
        self.lock_mount().clone().ok_or(ControllerError::NotMounted)
    }

    /// Publishes `state` unless `mount` has been torn down meanwhile.
    pub fn commit(&self, mount: &Mount<Id>, state: S) -> Result<(), ControllerError> {
        let _slot = self.lock_mount();
        if mount.token.is_cancelled() {
            return Err(ControllerError::Unmounted);
        }
        self.state.send_replace(state);
        Ok(())
    }

    fn lock_mount(&self) -> std::sync::MutexGuard<'_, Option<Mount<Id>>> {
        self.mount
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
