//! # Application runtime
//!
//! Owns one controller per screen plus the locale context, built once at
//! startup and shared with the host for the life of the process.

use std::sync::Arc;

use cs_app::usecases::{CaptureController, RegistrationController};
use cs_core::capture::CropStage;
use cs_core::config::AppConfig;
use cs_core::ports::NavigationPort;
use cs_core::LocaleContext;
use tracing::info;

use super::wiring::{wire_dependencies, AppDeps};

pub struct AppRuntime {
    config: AppConfig,
    registration: Arc<RegistrationController>,
    capture: Arc<CaptureController>,
    locale: Arc<LocaleContext>,
}

impl AppRuntime {
    /// Build the runtime over the simulated adapters.
    pub fn new(config: AppConfig, navigation: Arc<dyn NavigationPort>) -> Self {
        let deps = wire_dependencies(&config, navigation);
        Self::with_deps(config, deps)
    }

    /// Build the runtime over caller-supplied adapters.
    pub fn with_deps(config: AppConfig, deps: AppDeps) -> Self {
        let registration =
            RegistrationController::new(config.registration.to_policy(), deps.registration);
        let capture = CaptureController::new(config.capture.to_policy(), deps.capture);
        let locale = Arc::new(LocaleContext::new(
            config.locale.default_language,
            deps.localization,
        ));
        info!(
            language = config.locale.default_language.code(),
            "cropsure runtime ready"
        );
        Self {
            config,
            registration,
            capture,
            locale,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registration(&self) -> Arc<RegistrationController> {
        self.registration.clone()
    }

    pub fn capture(&self) -> Arc<CaptureController> {
        self.capture.clone()
    }

    pub fn locale(&self) -> Arc<LocaleContext> {
        self.locale.clone()
    }

    /// Crop stage preselected on the capture screen.
    pub fn default_crop_stage(&self) -> CropStage {
        self.config.capture.default_crop_stage
    }

    /// Tears down both screens. Timers and in-flight calls stop touching state.
    pub fn shutdown(&self) {
        self.registration.unmount();
        self.capture.unmount();
        info!("cropsure runtime shut down");
    }
}
