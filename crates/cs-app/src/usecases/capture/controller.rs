//! Capture guidance controller.
//!
//! Samples the readiness sensors once per interval, runs the auto-capture
//! countdown, and hands a captured photo to the review screen.

use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, info_span, warn, Instrument};

use cs_core::capture::{
    CaptureAction, CaptureEvent, CaptureGuidanceState, CapturePayload, CapturePolicy,
    CaptureStateMachine, CaptureTrigger, CropStage,
};
use cs_core::ids::{CaptureSessionId, ImageRef};
use cs_core::ports::{
    CameraPort, ClockPort, GeolocationPort, NavigationPort, NavigationTarget, SensorSamplerPort,
};

use crate::usecases::context::{Mount, ScreenContext};
use crate::usecases::timer::{spawn_repeating, TaskSlot};
use crate::usecases::ControllerError;

#[derive(Clone)]
pub struct CaptureDeps {
    pub camera: Arc<dyn CameraPort>,
    pub sensors: Arc<dyn SensorSamplerPort>,
    pub geolocation: Arc<dyn GeolocationPort>,
    pub navigation: Arc<dyn NavigationPort>,
    pub clock: Arc<dyn ClockPort>,
}

type CaptureMount = Mount<CaptureSessionId>;

pub struct CaptureController {
    machine: CaptureStateMachine,
    deps: CaptureDeps,
    context: ScreenContext<CaptureGuidanceState, CaptureSessionId>,
    sampler: TaskSlot,
    countdown: TaskSlot,
    weak_self: Weak<Self>,
}

impl CaptureController {
    pub fn new(policy: CapturePolicy, deps: CaptureDeps) -> Arc<Self> {
        Arc::new_cyclic(|weak_self| Self {
            machine: CaptureStateMachine::new(policy),
            deps,
            context: ScreenContext::new(CaptureGuidanceState::new(CropStage::Vegetative)),
            sampler: TaskSlot::new("capture.sampler"),
            countdown: TaskSlot::new("capture.countdown"),
            weak_self: weak_self.clone(),
        })
    }

    /// Mounts the screen for one photo of `crop_stage` and starts sampling.
    pub async fn mount(&self, crop_stage: CropStage) -> Result<CaptureSessionId, ControllerError> {
        self.cancel_timers();
        let id = CaptureSessionId::new();
        let mount = self
            .context
            .mount(id.clone(), CaptureGuidanceState::new(crop_stage))
            .await;
        info!(session_id = %id, ?crop_stage, "capture screen mounted");
        self.dispatch_for(&mount, CaptureEvent::Activate).await?;
        Ok(id)
    }

    /// Dismisses the screen: the sampling loop and any countdown stop for good.
    pub fn unmount(&self) {
        if let Some(mount) = self.context.unmount() {
            info!(session_id = %mount.id, "capture screen unmounted");
        }
        self.cancel_timers();
    }

    /// Screen left the foreground: stop sampling and any countdown, keep the mount.
    pub async fn pause(&self) -> Result<CaptureGuidanceState, ControllerError> {
        self.dispatch(CaptureEvent::Deactivate).await
    }

    /// Screen is back in front (or returned from review for a retake).
    pub async fn resume(&self) -> Result<CaptureGuidanceState, ControllerError> {
        self.dispatch(CaptureEvent::Activate).await
    }

    pub fn state(&self) -> CaptureGuidanceState {
        self.context.get_state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CaptureGuidanceState> {
        self.context.subscribe()
    }

    pub fn sampling_active(&self) -> bool {
        self.sampler.is_active()
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown.is_active()
    }

    /// Takes one sensor sample and re-evaluates auto-capture readiness.
    pub async fn sample_sensors(&self) -> Result<CaptureGuidanceState, ControllerError> {
        let reading = self.deps.sensors.sample();
        self.dispatch(CaptureEvent::SensorsSampled { reading }).await
    }

    pub async fn capture(
        &self,
        trigger: CaptureTrigger,
    ) -> Result<CaptureGuidanceState, ControllerError> {
        self.dispatch(CaptureEvent::CaptureRequested { trigger })
            .await
    }

    pub async fn toggle_camera_facing(&self) -> Result<CaptureGuidanceState, ControllerError> {
        self.dispatch(CaptureEvent::ToggleCameraFacing).await
    }

    pub async fn cycle_flash_mode(&self) -> Result<CaptureGuidanceState, ControllerError> {
        self.dispatch(CaptureEvent::CycleFlashMode).await
    }

    pub async fn dismiss_alert(&self) -> Result<CaptureGuidanceState, ControllerError> {
        self.dispatch(CaptureEvent::DismissAlert).await
    }

    async fn dispatch(
        &self,
        event: CaptureEvent,
    ) -> Result<CaptureGuidanceState, ControllerError> {
        let mount = self.context.current_mount()?;
        self.dispatch_for(&mount, event).await
    }

    async fn dispatch_for(
        &self,
        mount: &CaptureMount,
        event: CaptureEvent,
    ) -> Result<CaptureGuidanceState, ControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!(
            "usecase.capture.dispatch",
            session_id = %mount.id,
            event = event.kind()
        );
        async {
            let mut current = self.context.get_state();
            let mut pending_events = VecDeque::from([event]);

            while let Some(event) = pending_events.pop_front() {
                if mount.token.is_cancelled() {
                    return Err(ControllerError::Unmounted);
                }
                let event_name = event.kind();
                let countdown_before = current.auto_capture_countdown;
                let (next, actions) = self.machine.transition(current, event);
                if countdown_before != next.auto_capture_countdown {
                    debug!(
                        event = event_name,
                        from = ?countdown_before,
                        to = ?next.auto_capture_countdown,
                        "auto-capture countdown"
                    );
                }
                self.context.commit(mount, next.clone())?;
                current = next;

                for action in actions {
                    debug!(?action, "capture executing action");
                    if let Some(follow_up) = self.execute(mount, action, &current).await? {
                        pending_events.push_back(follow_up);
                    }
                }
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute(
        &self,
        mount: &CaptureMount,
        action: CaptureAction,
        state: &CaptureGuidanceState,
    ) -> Result<Option<CaptureEvent>, ControllerError> {
        let follow_up = match action {
            CaptureAction::StartSampling => {
                self.start_sampling(mount);
                None
            }
            CaptureAction::StopSampling => {
                self.sampler.cancel();
                None
            }
            CaptureAction::StartCountdown => {
                self.start_countdown(mount);
                None
            }
            CaptureAction::StopCountdown => {
                self.countdown.cancel();
                None
            }
            CaptureAction::Capture { trigger, settings } => {
                info!(?trigger, ?settings, "capturing photo");
                match mount.run(self.deps.camera.capture(settings)).await? {
                    Ok(image) => Some(CaptureEvent::CaptureSucceeded { image, trigger }),
                    Err(err) => {
                        error!(?trigger, error = %err, "capture failed");
                        Some(CaptureEvent::CaptureFailed)
                    }
                }
            }
            CaptureAction::HandOff { image, trigger } => {
                self.hand_off(mount, image, trigger, state).await?
            }
        };
        Ok(follow_up)
    }

    async fn hand_off(
        &self,
        mount: &CaptureMount,
        image: ImageRef,
        trigger: CaptureTrigger,
        state: &CaptureGuidanceState,
    ) -> Result<Option<CaptureEvent>, ControllerError> {
        let position = match mount.run(self.deps.geolocation.current_position()).await? {
            Ok(position) => position,
            Err(err) => {
                warn!(error = %err, "location unavailable, handing off without coordinates");
                None
            }
        };
        let payload = CapturePayload {
            image,
            crop_stage: state.crop_stage,
            latitude: position.map(|p| p.latitude),
            longitude: position.map(|p| p.longitude),
            captured_at_ms: self.deps.clock.now_ms(),
            trigger,
        };
        info!(image = %payload.image, has_location = position.is_some(), "handing off capture");
        let target = NavigationTarget::CaptureReview(payload);
        match mount.run(self.deps.navigation.navigate(target)).await? {
            Ok(()) => Ok(None),
            Err(err) => {
                error!(error = %err, "navigation to capture review failed");
                Ok(Some(CaptureEvent::HandOffFailed))
            }
        }
    }

    fn start_sampling(&self, mount: &CaptureMount) {
        let tick_mount = mount.clone();
        self.sampler.replace(spawn_repeating(
            self.weak_self.clone(),
            mount.token.clone(),
            self.machine.policy().sample_interval,
            MissedTickBehavior::Delay,
            move |controller: Arc<Self>| {
                let reading = controller.deps.sensors.sample();
                Self::dispatch_detached(
                    controller,
                    tick_mount.clone(),
                    CaptureEvent::SensorsSampled { reading },
                )
            },
        ));
    }

    fn start_countdown(&self, mount: &CaptureMount) {
        let tick_mount = mount.clone();
        self.countdown.replace(spawn_repeating(
            self.weak_self.clone(),
            mount.token.clone(),
            self.machine.policy().countdown_interval,
            MissedTickBehavior::Delay,
            move |controller: Arc<Self>| {
                Self::dispatch_detached(controller, tick_mount.clone(), CaptureEvent::CountdownTick)
            },
        ));
    }

    /// Timer entry point. Resolves to whether the timer should keep running.
    fn dispatch_detached(
        controller: Arc<Self>,
        mount: CaptureMount,
        event: CaptureEvent,
    ) -> BoxFuture<'static, bool> {
        Box::pin(async move {
            match controller.dispatch_for(&mount, event).await {
                Ok(_) => true,
                Err(err) => {
                    debug!(error = %err, "timer dispatch dropped");
                    false
                }
            }
        })
    }

    fn cancel_timers(&self) {
        self.sampler.cancel();
        self.countdown.cancel();
    }
}
