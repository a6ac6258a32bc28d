//! Registration flow controller.
//!
//! Drives [`RegistrationStateMachine`] and runs the side effects it asks for:
//! remote calls through the ports, the OTP window ticker and the delayed
//! hand-off to the home screen.

use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info, info_span, warn, Instrument};

use cs_core::ids::RegistrationSessionId;
use cs_core::ports::{
    FarmerLookupPort, NavigationPort, NavigationTarget, OtpServicePort, RegistrationSubmitPort,
};
use cs_core::registration::validation::mask_phone;
use cs_core::registration::{
    RegistrationAction, RegistrationEvent, RegistrationPolicy, RegistrationSession,
    RegistrationStateMachine,
};

use crate::usecases::context::{Mount, ScreenContext};
use crate::usecases::timer::{spawn_delayed, spawn_repeating, TaskSlot};
use crate::usecases::ControllerError;

const OTP_TICK: Duration = Duration::from_secs(1);

/// Ports the registration screen talks to.
#[derive(Clone)]
pub struct RegistrationDeps {
    pub otp: Arc<dyn OtpServicePort>,
    pub farmer_lookup: Arc<dyn FarmerLookupPort>,
    pub submit: Arc<dyn RegistrationSubmitPort>,
    pub navigation: Arc<dyn NavigationPort>,
}

type RegistrationMount = Mount<RegistrationSessionId>;

pub struct RegistrationController {
    machine: RegistrationStateMachine,
    deps: RegistrationDeps,
    context: ScreenContext<RegistrationSession, RegistrationSessionId>,
    otp_countdown: TaskSlot,
    home_navigation: TaskSlot,
    weak_self: Weak<Self>,
}

impl RegistrationController {
    pub fn new(policy: RegistrationPolicy, deps: RegistrationDeps) -> Arc<Self> {
        let machine = RegistrationStateMachine::new(policy);
        let initial = machine.initial_session();
        Arc::new_cyclic(|weak_self| Self {
            machine,
            deps,
            context: ScreenContext::new(initial),
            otp_countdown: TaskSlot::new("registration.otp_countdown"),
            home_navigation: TaskSlot::new("registration.home_navigation"),
            weak_self: weak_self.clone(),
        })
    }

    /// Starts a fresh session. Any previous session is discarded.
    pub async fn mount(&self) -> RegistrationSessionId {
        self.cancel_timers();
        let id = RegistrationSessionId::new();
        self.context
            .mount(id.clone(), self.machine.initial_session())
            .await;
        info!(session_id = %id, "registration screen mounted");
        id
    }

    /// Tears the session down. No timer or in-flight call touches state afterwards.
    pub fn unmount(&self) {
        if let Some(mount) = self.context.unmount() {
            info!(session_id = %mount.id, "registration screen unmounted");
        }
        self.cancel_timers();
    }

    pub fn state(&self) -> RegistrationSession {
        self.context.get_state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RegistrationSession> {
        self.context.subscribe()
    }

    pub fn session_id(&self) -> Option<RegistrationSessionId> {
        self.context.current_mount().ok().map(|mount| mount.id)
    }

    pub fn otp_countdown_active(&self) -> bool {
        self.otp_countdown.is_active()
    }

    pub async fn submit_phone(
        &self,
        phone: impl Into<String>,
    ) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::SubmitPhone {
            phone: phone.into(),
        })
        .await
    }

    pub async fn submit_otp(
        &self,
        code: impl Into<String>,
    ) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::SubmitOtp { code: code.into() })
            .await
    }

    pub async fn resend_otp(&self) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::ResendOtp).await
    }

    pub async fn submit_external_id(
        &self,
        external_id: impl Into<String>,
    ) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::SubmitExternalId {
            external_id: external_id.into(),
        })
        .await
    }

    /// Escape hatch after a "not found" lookup: opens the scheme's own portal.
    pub async fn open_external_registration(
        &self,
    ) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::OpenExternalRegistration)
            .await
    }

    pub async fn complete_registration(&self) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::CompleteRegistration)
            .await
    }

    pub async fn go_to_previous_step(&self) -> Result<RegistrationSession, ControllerError> {
        self.dispatch(RegistrationEvent::GoBack).await
    }

    async fn dispatch(
        &self,
        event: RegistrationEvent,
    ) -> Result<RegistrationSession, ControllerError> {
        let mount = self.context.current_mount()?;
        self.dispatch_for(&mount, event).await
    }

    async fn dispatch_for(
        &self,
        mount: &RegistrationMount,
        event: RegistrationEvent,
    ) -> Result<RegistrationSession, ControllerError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!(
            "usecase.registration.dispatch",
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
                let from = current.step;
                let event_name = event.kind();
                let (next, actions) = self.machine.transition(current, event);
                if from != next.step {
                    info!(from = ?from, to = ?next.step, event = event_name, "registration step transition");
                }
                if let Some(err) = &next.error {
                    debug!(error = %err, surface = ?err.surface(), "registration error shown");
                }
                self.context.commit(mount, next.clone())?;
                current = next;

                for action in actions {
                    if let Some(follow_up) = self.execute(mount, action).await? {
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
        mount: &RegistrationMount,
        action: RegistrationAction,
    ) -> Result<Option<RegistrationEvent>, ControllerError> {
        let follow_up = match action {
            RegistrationAction::SendOtp { phone } => {
                match mount.run(self.deps.otp.send(&phone)).await? {
                    Ok(()) => {
                        info!(phone = %mask_phone(&phone), "otp sent");
                        Some(RegistrationEvent::OtpDelivered)
                    }
                    Err(err) => {
                        warn!(phone = %mask_phone(&phone), error = %err, "otp send failed");
                        Some(RegistrationEvent::OtpDeliveryFailed)
                    }
                }
            }
            RegistrationAction::VerifyOtp { phone, code } => {
                match mount.run(self.deps.otp.verify(&phone, &code)).await? {
                    Ok(true) => Some(RegistrationEvent::OtpAccepted),
                    Ok(false) => {
                        info!(phone = %mask_phone(&phone), "otp rejected");
                        Some(RegistrationEvent::OtpRejected)
                    }
                    Err(err) => {
                        warn!(error = %err, "otp verification failed");
                        Some(RegistrationEvent::OtpVerificationFailed)
                    }
                }
            }
            RegistrationAction::StartOtpCountdown { window_secs } => {
                self.start_otp_countdown(mount, window_secs);
                None
            }
            RegistrationAction::StopOtpCountdown => {
                self.otp_countdown.cancel();
                None
            }
            RegistrationAction::LookupExternalId { external_id } => {
                match mount.run(self.deps.farmer_lookup.lookup(&external_id)).await? {
                    Ok(Some(profile)) => {
                        info!(external_id = %external_id, "pmfby id validated");
                        Some(RegistrationEvent::ProfileFound { profile })
                    }
                    Ok(None) => {
                        info!(external_id = %external_id, "pmfby id not found");
                        Some(RegistrationEvent::ProfileNotFound)
                    }
                    Err(err) => {
                        warn!(external_id = %external_id, error = %err, "pmfby lookup failed");
                        Some(RegistrationEvent::LookupFailed)
                    }
                }
            }
            RegistrationAction::OpenExternalUrl { url } => {
                let target = NavigationTarget::ExternalUrl(url.clone());
                if let Err(err) = mount.run(self.deps.navigation.navigate(target)).await? {
                    warn!(url = %url, error = %err, "failed to open external registration");
                }
                None
            }
            RegistrationAction::SubmitRegistration { submission } => {
                match mount.run(self.deps.submit.submit(&submission)).await? {
                    Ok(()) => {
                        info!(external_id = %submission.external_id, "registration submitted");
                        Some(RegistrationEvent::RegistrationAccepted)
                    }
                    Err(err) => {
                        error!(error = %err, "registration submission failed");
                        Some(RegistrationEvent::RegistrationFailed)
                    }
                }
            }
            RegistrationAction::ScheduleHomeNavigation { delay } => {
                let mount = mount.clone();
                self.home_navigation.replace(spawn_delayed(
                    self.weak_self.clone(),
                    mount.token.clone(),
                    delay,
                    move |controller: Arc<Self>| {
                        Self::dispatch_detached(controller, mount, RegistrationEvent::HomeNavigationDue)
                    },
                ));
                None
            }
            RegistrationAction::NavigateHome { profile } => {
                let target = NavigationTarget::Home { profile };
                match mount.run(self.deps.navigation.navigate(target)).await? {
                    Ok(()) => info!(session_id = %mount.id, "registration complete, navigated home"),
                    Err(err) => error!(error = %err, "navigation to home failed"),
                }
                // The session ends with the hand-off.
                if self.context.unmount().is_some() {
                    self.otp_countdown.cancel();
                }
                None
            }
        };
        Ok(follow_up)
    }

    /// Ticks on a fixed grid and reads the window off its deadline, so time
    /// spent waiting behind a remote call is not lost.
    fn start_otp_countdown(&self, mount: &RegistrationMount, window_secs: u32) {
        let tick_mount = mount.clone();
        let deadline = Instant::now() + Duration::from_secs(u64::from(window_secs));
        self.otp_countdown.replace(spawn_repeating(
            self.weak_self.clone(),
            mount.token.clone(),
            OTP_TICK,
            MissedTickBehavior::Skip,
            move |controller: Arc<Self>| {
                Self::dispatch_detached(
                    controller,
                    tick_mount.clone(),
                    RegistrationEvent::OtpCountdownTick {
                        remaining_secs: secs_until(deadline),
                    },
                )
            },
        ));
    }

    /// Timer entry point. Resolves to whether the timer should keep running.
    fn dispatch_detached(
        controller: Arc<Self>,
        mount: RegistrationMount,
        event: RegistrationEvent,
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
        self.otp_countdown.cancel();
        self.home_navigation.cancel();
    }
}

/// Whole seconds left until `deadline`, rounded up.
fn secs_until(deadline: Instant) -> u32 {
    let left = deadline.saturating_duration_since(Instant::now());
    let secs = left.as_secs() + u64::from(left.subsec_nanos() > 0);
    u32::try_from(secs).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use mockall::mock;
    use tokio::time::sleep;

    use cs_core::registration::{
        FarmerProfile, LimitExceededError, PendingRequest, RegistrationError,
        RegistrationStep, RegistrationSubmission, RemoteError, ValidationError,
    };

    mock! {
        Otp {}

        #[async_trait]
        impl OtpServicePort for Otp {
            async fn send(&self, phone: &str) -> anyhow::Result<()>;
            async fn verify(&self, phone: &str, code: &str) -> anyhow::Result<bool>;
        }
    }

    struct FakeOtp {
        accepted: &'static str,
        latency: Duration,
        sent: StdMutex<Vec<String>>,
    }

    impl FakeOtp {
        fn new(latency: Duration) -> Self {
            Self {
                accepted: "123456",
                latency,
                sent: StdMutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OtpServicePort for FakeOtp {
        async fn send(&self, phone: &str) -> anyhow::Result<()> {
            sleep(self.latency).await;
            self.sent.lock().unwrap().push(phone.to_string());
            Ok(())
        }

        async fn verify(&self, _phone: &str, code: &str) -> anyhow::Result<bool> {
            sleep(self.latency).await;
            Ok(code == self.accepted)
        }
    }

    #[derive(Default)]
    struct FakeRegistry {
        profiles: HashMap<String, FarmerProfile>,
    }

    #[async_trait]
    impl FarmerLookupPort for FakeRegistry {
        async fn lookup(&self, external_id: &str) -> anyhow::Result<Option<FarmerProfile>> {
            Ok(self.profiles.get(external_id).cloned())
        }
    }

    #[derive(Default)]
    struct RecordingSubmit {
        submissions: StdMutex<Vec<RegistrationSubmission>>,
    }

    #[async_trait]
    impl RegistrationSubmitPort for RecordingSubmit {
        async fn submit(&self, submission: &RegistrationSubmission) -> anyhow::Result<()> {
            self.submissions.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        targets: StdMutex<Vec<NavigationTarget>>,
    }

    impl RecordingNavigator {
        fn targets(&self) -> Vec<NavigationTarget> {
            self.targets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NavigationPort for RecordingNavigator {
        async fn navigate(&self, target: NavigationTarget) -> anyhow::Result<()> {
            self.targets.lock().unwrap().push(target);
            Ok(())
        }
    }

    const KNOWN_ID: &str = "PMFBY2024000001";

    fn profile() -> FarmerProfile {
        FarmerProfile {
            name: "Ramesh Kumar".to_string(),
            relative_name: "Suresh Kumar".to_string(),
            state: "Maharashtra".to_string(),
            district: "Pune".to_string(),
            village: "Wagholi".to_string(),
            land_area: "2.5 acres".to_string(),
            crops: vec!["Wheat".to_string(), "Soybean".to_string()],
        }
    }

    struct Harness {
        controller: Arc<RegistrationController>,
        otp: Arc<FakeOtp>,
        submit: Arc<RecordingSubmit>,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness_with_latency(latency: Duration) -> Harness {
        let otp = Arc::new(FakeOtp::new(latency));
        let mut registry = FakeRegistry::default();
        registry.profiles.insert(KNOWN_ID.to_string(), profile());
        let submit = Arc::new(RecordingSubmit::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let controller = RegistrationController::new(
            RegistrationPolicy::default(),
            RegistrationDeps {
                otp: otp.clone(),
                farmer_lookup: Arc::new(registry),
                submit: submit.clone(),
                navigation: navigator.clone(),
            },
        );
        Harness {
            controller,
            otp,
            submit,
            navigator,
        }
    }

    fn harness() -> Harness {
        harness_with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn operations_before_mount_are_rejected() {
        let h = harness();
        let result = h.controller.submit_phone("9876543210").await;
        assert_eq!(result, Err(ControllerError::NotMounted));
        assert!(h.otp.sent().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn valid_phone_sends_otp_and_starts_window() {
        let h = harness();
        h.controller.mount().await;

        let state = h.controller.submit_phone("98765 43210").await.unwrap();

        assert_eq!(state.step, RegistrationStep::OtpVerification);
        assert!(state.otp_sent);
        assert_eq!(state.otp_window_secs_remaining, 60);
        assert_eq!(state.phone_number, "9876543210");
        assert_eq!(h.otp.sent(), vec!["9876543210".to_string()]);
        assert!(h.controller.otp_countdown_active());
    }

    #[tokio::test]
    async fn invalid_phone_never_reaches_otp_service() {
        let mut otp = MockOtp::new();
        otp.expect_send().never();
        let controller = RegistrationController::new(
            RegistrationPolicy::default(),
            RegistrationDeps {
                otp: Arc::new(otp),
                farmer_lookup: Arc::new(FakeRegistry::default()),
                submit: Arc::new(RecordingSubmit::default()),
                navigation: Arc::new(RecordingNavigator::default()),
            },
        );
        controller.mount().await;

        let state = controller.submit_phone("12345").await.unwrap();

        assert_eq!(state.step, RegistrationStep::PhoneEntry);
        assert_eq!(
            state.error,
            Some(RegistrationError::Validation(ValidationError::InvalidPhone))
        );
    }

    #[tokio::test]
    async fn otp_service_failure_surfaces_banner_error() {
        let mut otp = MockOtp::new();
        otp.expect_send()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("gateway unavailable")));
        let controller = RegistrationController::new(
            RegistrationPolicy::default(),
            RegistrationDeps {
                otp: Arc::new(otp),
                farmer_lookup: Arc::new(FakeRegistry::default()),
                submit: Arc::new(RecordingSubmit::default()),
                navigation: Arc::new(RecordingNavigator::default()),
            },
        );
        controller.mount().await;

        let state = controller.submit_phone("9876543210").await.unwrap();

        assert_eq!(state.step, RegistrationStep::PhoneEntry);
        assert_eq!(
            state.error,
            Some(RegistrationError::Remote(RemoteError::OtpSendFailed))
        );
        assert!(!state.is_busy());
        assert!(!controller.otp_countdown_active());
    }

    #[tokio::test(start_paused = true)]
    async fn window_counts_down_then_resend_unlocks() {
        let h = harness();
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();

        let locked = h.controller.resend_otp().await.unwrap();
        assert_eq!(
            locked.error,
            Some(RegistrationError::Validation(ValidationError::ResendLocked))
        );
        assert_eq!(h.otp.sent().len(), 1);

        sleep(Duration::from_millis(10_500)).await;
        assert_eq!(h.controller.state().otp_window_secs_remaining, 50);

        sleep(Duration::from_secs(51)).await;
        let expired = h.controller.state();
        assert_eq!(expired.otp_window_secs_remaining, 0);
        assert!(expired.can_resend());
        assert!(!h.controller.otp_countdown_active());

        let resent = h.controller.resend_otp().await.unwrap();
        assert_eq!(resent.resend_count, 1);
        assert_eq!(resent.otp_window_secs_remaining, 60);
        assert_eq!(resent.error, None);
        assert_eq!(h.otp.sent().len(), 2);
        assert!(h.controller.otp_countdown_active());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_otp_checks_do_not_stretch_the_window() {
        let h = harness_with_latency(Duration::from_millis(1500));
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();
        let window_opened = Instant::now();

        for _ in 0..4 {
            let state = h.controller.submit_otp("111111").await.unwrap();
            assert_eq!(
                state.error,
                Some(RegistrationError::Remote(RemoteError::OtpRejected))
            );
        }
        assert_eq!(window_opened.elapsed(), Duration::from_secs(6));

        tokio::time::sleep_until(window_opened + Duration::from_millis(20_500)).await;
        assert_eq!(h.controller.state().otp_window_secs_remaining, 40);

        tokio::time::sleep_until(window_opened + Duration::from_millis(60_500)).await;
        let expired = h.controller.state();
        assert_eq!(expired.otp_window_secs_remaining, 0);
        assert!(expired.can_resend());
    }

    #[tokio::test(start_paused = true)]
    async fn resend_stops_at_limit() {
        let h = harness();
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();

        for _ in 0..3 {
            sleep(Duration::from_secs(61)).await;
            h.controller.resend_otp().await.unwrap();
        }
        sleep(Duration::from_secs(61)).await;
        let state = h.controller.resend_otp().await.unwrap();

        assert_eq!(state.resend_count, 3);
        assert_eq!(
            state.error,
            Some(RegistrationError::LimitExceeded(
                LimitExceededError::ResendLimitReached { max: 3 }
            ))
        );
        assert_eq!(h.otp.sent().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_otp_stays_on_verification_step() {
        let h = harness();
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();

        let state = h.controller.submit_otp("000000").await.unwrap();

        assert_eq!(state.step, RegistrationStep::OtpVerification);
        assert_eq!(
            state.error,
            Some(RegistrationError::Remote(RemoteError::OtpRejected))
        );
        assert!(h.controller.otp_countdown_active());
    }

    #[tokio::test(start_paused = true)]
    async fn completed_registration_navigates_home_after_delay() {
        let h = harness();
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();

        let verified = h.controller.submit_otp("123456").await.unwrap();
        assert_eq!(verified.step, RegistrationStep::ExternalIdValidation);
        assert!(!h.controller.otp_countdown_active());

        let validated = h
            .controller
            .submit_external_id("pmfby2024000001")
            .await
            .unwrap();
        assert!(validated.external_id_validated);
        assert_eq!(validated.external_id, KNOWN_ID);
        assert_eq!(validated.profile, Some(profile()));

        let complete = h.controller.complete_registration().await.unwrap();
        assert_eq!(complete.step, RegistrationStep::Complete);
        assert_eq!(
            h.submit.submissions.lock().unwrap().clone(),
            vec![RegistrationSubmission {
                phone_number: "9876543210".to_string(),
                external_id: KNOWN_ID.to_string(),
                profile: profile(),
            }]
        );
        assert!(h.navigator.targets().is_empty());

        sleep(Duration::from_millis(2_500)).await;

        assert_eq!(
            h.navigator.targets(),
            vec![NavigationTarget::Home { profile: profile() }]
        );
        assert!(h.controller.session_id().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_external_id_offers_portal() {
        let h = harness();
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();
        h.controller.submit_otp("123456").await.unwrap();

        let state = h
            .controller
            .submit_external_id("PMFBY9999999999")
            .await
            .unwrap();
        assert_eq!(
            state.error,
            Some(RegistrationError::Remote(RemoteError::ExternalIdNotFound))
        );

        let blocked = h.controller.complete_registration().await.unwrap();
        assert_eq!(
            blocked.error,
            Some(RegistrationError::Validation(
                ValidationError::ExternalIdNotValidated
            ))
        );

        h.controller.open_external_registration().await.unwrap();
        assert_eq!(
            h.navigator.targets(),
            vec![NavigationTarget::ExternalUrl(
                "https://pmfby.gov.in/farmerRegistrationForm".to_string()
            )]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn going_back_from_otp_resets_the_window() {
        let h = harness();
        h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();
        sleep(Duration::from_millis(5_500)).await;

        let state = h.controller.go_to_previous_step().await.unwrap();

        assert_eq!(state.step, RegistrationStep::PhoneEntry);
        assert!(!state.otp_sent);
        assert_eq!(state.otp_window_secs_remaining, 60);
        assert_eq!(state.phone_number, "9876543210");
        assert!(!h.controller.otp_countdown_active());
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_during_send_discards_the_result() {
        let h = harness_with_latency(Duration::from_secs(5));
        h.controller.mount().await;

        let controller = h.controller.clone();
        let in_flight = tokio::spawn(async move { controller.submit_phone("9876543210").await });
        sleep(Duration::from_secs(1)).await;

        let before = h.controller.state();
        assert_eq!(before.pending, Some(PendingRequest::SendOtp));
        h.controller.unmount();

        assert_eq!(in_flight.await.unwrap(), Err(ControllerError::Unmounted));
        sleep(Duration::from_secs(10)).await;
        assert_eq!(h.controller.state(), before);
        assert!(h.otp.sent().is_empty());
        assert!(!h.controller.otp_countdown_active());
        assert_eq!(
            h.controller.submit_otp("123456").await,
            Err(ControllerError::NotMounted)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn remount_starts_a_fresh_session() {
        let h = harness();
        let first = h.controller.mount().await;
        h.controller.submit_phone("9876543210").await.unwrap();

        let second = h.controller.mount().await;

        assert_ne!(first, second);
        assert_eq!(h.controller.state(), RegistrationSession::default());
        assert!(!h.controller.otp_countdown_active());
    }
}
