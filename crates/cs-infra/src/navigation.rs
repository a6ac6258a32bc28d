//! Navigation sink for hosts without a real navigator.

use std::sync::Mutex;

use async_trait::async_trait;
use cs_core::ports::{NavigationPort, NavigationTarget};
use tracing::info;

/// Logs every navigation request and keeps the history.
#[derive(Default)]
pub struct LoggingNavigator {
    history: Mutex<Vec<NavigationTarget>>,
}

impl LoggingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<NavigationTarget> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<NavigationTarget> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<NavigationTarget>> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl NavigationPort for LoggingNavigator {
    async fn navigate(&self, target: NavigationTarget) -> anyhow::Result<()> {
        match &target {
            NavigationTarget::CaptureReview(payload) => info!(
                image = %payload.image,
                crop_stage = ?payload.crop_stage,
                trigger = ?payload.trigger,
                "navigate: capture review"
            ),
            NavigationTarget::Home { profile } => {
                info!(farmer = %profile.name, "navigate: home")
            }
            NavigationTarget::ExternalUrl(url) => info!(url = %url, "navigate: external url"),
        }
        self.lock().push(target);
        Ok(())
    }
}
