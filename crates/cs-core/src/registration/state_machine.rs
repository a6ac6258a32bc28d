//! Registration state machine.
//!
//! Pure transition function for the phone → OTP → PMFBY → complete flow.

use super::validation::{
    is_valid_external_id, is_valid_otp, is_valid_phone, normalize_external_id, normalize_phone,
};
use super::{
    LimitExceededError, PendingRequest, RegistrationAction, RegistrationError, RegistrationEvent,
    RegistrationPolicy, RegistrationSession, RegistrationStep, RegistrationSubmission, RemoteError,
    ValidationError,
};

/// Pure registration state machine: no side effects, actions are returned.
#[derive(Debug, Clone, Default)]
pub struct RegistrationStateMachine {
    policy: RegistrationPolicy,
}

type Transition = (RegistrationSession, Vec<RegistrationAction>);

impl RegistrationStateMachine {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Fresh session for a newly mounted screen.
    pub fn initial_session(&self) -> RegistrationSession {
        RegistrationSession::new(&self.policy)
    }

    pub fn transition(
        &self,
        mut session: RegistrationSession,
        event: RegistrationEvent,
    ) -> Transition {
        use RegistrationEvent as E;
        use RegistrationStep as S;

        match (session.step, event) {
            (S::PhoneEntry, E::SubmitPhone { phone }) if !session.is_busy() => {
                let digits = normalize_phone(&phone);
                if !is_valid_phone(&digits) {
                    return fail(session, ValidationError::InvalidPhone);
                }
                session.phone_number = digits.clone();
                session.error = None;
                session.pending = Some(PendingRequest::SendOtp);
                (session, vec![RegistrationAction::SendOtp { phone: digits }])
            }
            (S::PhoneEntry | S::OtpVerification, E::OtpDelivered)
                if session.pending == Some(PendingRequest::SendOtp) =>
            {
                session.pending = None;
                session.step = S::OtpVerification;
                session.otp_sent = true;
                session.otp_window_secs_remaining = self.policy.otp_window_secs;
                session.error = None;
                let window_secs = session.otp_window_secs_remaining;
                (session, vec![RegistrationAction::StartOtpCountdown { window_secs }])
            }
            (S::PhoneEntry | S::OtpVerification, E::OtpDeliveryFailed)
                if session.pending == Some(PendingRequest::SendOtp) =>
            {
                session.pending = None;
                fail(session, RemoteError::OtpSendFailed)
            }

            (S::OtpVerification, E::SubmitOtp { code }) if !session.is_busy() => {
                session.otp_code = code.trim().to_string();
                if !is_valid_otp(&session.otp_code) {
                    return fail(session, ValidationError::InvalidOtp);
                }
                session.error = None;
                session.pending = Some(PendingRequest::VerifyOtp);
                let action = RegistrationAction::VerifyOtp {
                    phone: session.phone_number.clone(),
                    code: session.otp_code.clone(),
                };
                (session, vec![action])
            }
            (S::OtpVerification, E::OtpAccepted)
                if session.pending == Some(PendingRequest::VerifyOtp) =>
            {
                session.pending = None;
                session.step = S::ExternalIdValidation;
                session.error = None;
                (session, vec![RegistrationAction::StopOtpCountdown])
            }
            (S::OtpVerification, E::OtpRejected)
                if session.pending == Some(PendingRequest::VerifyOtp) =>
            {
                session.pending = None;
                fail(session, RemoteError::OtpRejected)
            }
            (S::OtpVerification, E::OtpVerificationFailed)
                if session.pending == Some(PendingRequest::VerifyOtp) =>
            {
                session.pending = None;
                fail(session, RemoteError::OtpVerifyFailed)
            }
            (S::OtpVerification, E::ResendOtp) if !session.is_busy() => {
                if session.resend_exhausted() {
                    return fail(
                        session,
                        LimitExceededError::ResendLimitReached {
                            max: self.policy.max_otp_resends,
                        },
                    );
                }
                if session.otp_window_secs_remaining > 0 {
                    return fail(session, ValidationError::ResendLocked);
                }
                session.resend_count += 1;
                session.otp_code.clear();
                session.otp_window_secs_remaining = 0;
                session.error = None;
                session.pending = Some(PendingRequest::SendOtp);
                let phone = session.phone_number.clone();
                (
                    session,
                    vec![
                        RegistrationAction::StopOtpCountdown,
                        RegistrationAction::SendOtp { phone },
                    ],
                )
            }
            (S::OtpVerification, E::OtpCountdownTick { remaining_secs })
                if session.otp_countdown_running() =>
            {
                // A late tick never hands time back.
                session.otp_window_secs_remaining =
                    remaining_secs.min(session.otp_window_secs_remaining);
                if session.otp_window_secs_remaining == 0 {
                    (session, vec![RegistrationAction::StopOtpCountdown])
                } else {
                    (session, Vec::new())
                }
            }

            (S::ExternalIdValidation, E::SubmitExternalId { external_id })
                if !session.is_busy() && !session.external_id_validated =>
            {
                session.external_id = normalize_external_id(&external_id);
                if !is_valid_external_id(&session.external_id) {
                    return fail(session, ValidationError::InvalidExternalId);
                }
                session.error = None;
                session.pending = Some(PendingRequest::LookupExternalId);
                let action = RegistrationAction::LookupExternalId {
                    external_id: session.external_id.clone(),
                };
                (session, vec![action])
            }
            (S::ExternalIdValidation, E::ProfileFound { profile })
                if session.pending == Some(PendingRequest::LookupExternalId) =>
            {
                session.pending = None;
                session.profile = Some(profile);
                session.external_id_validated = true;
                session.error = None;
                (session, Vec::new())
            }
            (S::ExternalIdValidation, E::ProfileNotFound)
                if session.pending == Some(PendingRequest::LookupExternalId) =>
            {
                session.pending = None;
                fail(session, RemoteError::ExternalIdNotFound)
            }
            (S::ExternalIdValidation, E::LookupFailed)
                if session.pending == Some(PendingRequest::LookupExternalId) =>
            {
                session.pending = None;
                fail(session, RemoteError::LookupFailed)
            }
            (S::ExternalIdValidation, E::OpenExternalRegistration) => {
                let url = self.policy.external_registration_url.clone();
                (session, vec![RegistrationAction::OpenExternalUrl { url }])
            }

            (S::ExternalIdValidation, E::CompleteRegistration) if !session.is_busy() => {
                let profile = match (&session.profile, session.external_id_validated) {
                    (Some(profile), true) => profile.clone(),
                    _ => return fail(session, ValidationError::ExternalIdNotValidated),
                };
                session.error = None;
                session.pending = Some(PendingRequest::SubmitRegistration);
                let submission = RegistrationSubmission {
                    phone_number: session.phone_number.clone(),
                    external_id: session.external_id.clone(),
                    profile,
                };
                (
                    session,
                    vec![RegistrationAction::SubmitRegistration { submission }],
                )
            }
            (S::ExternalIdValidation, E::RegistrationAccepted)
                if session.pending == Some(PendingRequest::SubmitRegistration) =>
            {
                session.pending = None;
                session.step = S::Complete;
                session.error = None;
                let delay = self.policy.home_navigation_delay;
                (
                    session,
                    vec![RegistrationAction::ScheduleHomeNavigation { delay }],
                )
            }
            (S::ExternalIdValidation, E::RegistrationFailed)
                if session.pending == Some(PendingRequest::SubmitRegistration) =>
            {
                session.pending = None;
                fail(session, RemoteError::SubmissionFailed)
            }
            (S::Complete, E::HomeNavigationDue) => match session.profile.clone() {
                Some(profile) => (session, vec![RegistrationAction::NavigateHome { profile }]),
                None => (session, Vec::new()),
            },

            (S::OtpVerification, E::GoBack) => {
                session.step = S::PhoneEntry;
                session.otp_code.clear();
                session.otp_sent = false;
                session.otp_window_secs_remaining = self.policy.otp_window_secs;
                session.error = None;
                session.pending = None;
                (session, vec![RegistrationAction::StopOtpCountdown])
            }
            (S::ExternalIdValidation, E::GoBack) => {
                session.step = S::OtpVerification;
                session.error = None;
                session.pending = None;
                let actions = if session.otp_countdown_running() {
                    vec![RegistrationAction::StartOtpCountdown {
                        window_secs: session.otp_window_secs_remaining,
                    }]
                } else {
                    Vec::new()
                };
                (session, actions)
            }

            (_, _event) => (session, Vec::new()),
        }
    }
}

fn fail(mut session: RegistrationSession, error: impl Into<RegistrationError>) -> Transition {
    session.error = Some(error.into());
    (session, Vec::new())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::registration::FarmerProfile;

    fn machine() -> RegistrationStateMachine {
        RegistrationStateMachine::default()
    }

    fn profile() -> FarmerProfile {
        FarmerProfile {
            name: "Ramesh Patil".into(),
            relative_name: "Suresh Patil".into(),
            state: "Maharashtra".into(),
            district: "Pune".into(),
            village: "Baramati".into(),
            land_area: "2.5 acres".into(),
            crops: vec!["Wheat".into(), "Soybean".into()],
        }
    }

    fn at_otp_step(sm: &RegistrationStateMachine) -> RegistrationSession {
        let session = sm.initial_session();
        let (session, _) = sm.transition(
            session,
            RegistrationEvent::SubmitPhone {
                phone: "9876543210".into(),
            },
        );
        let (session, _) = sm.transition(session, RegistrationEvent::OtpDelivered);
        session
    }

    fn at_id_step(sm: &RegistrationStateMachine) -> RegistrationSession {
        let session = at_otp_step(sm);
        let (session, _) = sm.transition(
            session,
            RegistrationEvent::SubmitOtp {
                code: "123456".into(),
            },
        );
        let (session, _) = sm.transition(session, RegistrationEvent::OtpAccepted);
        session
    }

    fn drain_window(sm: &RegistrationStateMachine, mut session: RegistrationSession) -> RegistrationSession {
        while session.otp_window_secs_remaining > 0 {
            let remaining_secs = session.otp_window_secs_remaining - 1;
            session = sm
                .transition(session, RegistrationEvent::OtpCountdownTick { remaining_secs })
                .0;
        }
        session
    }

    #[test]
    fn submit_phone_invalid_sets_inline_error_without_transition() {
        let sm = machine();
        let (next, actions) = sm.transition(
            sm.initial_session(),
            RegistrationEvent::SubmitPhone {
                phone: "12345".into(),
            },
        );
        assert_eq!(next.step, RegistrationStep::PhoneEntry);
        assert_eq!(
            next.error,
            Some(RegistrationError::Validation(ValidationError::InvalidPhone))
        );
        assert!(next.pending.is_none());
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_phone_valid_requests_otp_then_advances_on_delivery() {
        let sm = machine();
        let (pending, actions) = sm.transition(
            sm.initial_session(),
            RegistrationEvent::SubmitPhone {
                phone: "98765 43210".into(),
            },
        );
        assert_eq!(pending.step, RegistrationStep::PhoneEntry);
        assert_eq!(pending.pending, Some(PendingRequest::SendOtp));
        assert_eq!(
            actions,
            vec![RegistrationAction::SendOtp {
                phone: "9876543210".into()
            }]
        );

        let (next, actions) = sm.transition(pending, RegistrationEvent::OtpDelivered);
        assert_eq!(next.step, RegistrationStep::OtpVerification);
        assert!(next.otp_sent);
        assert_eq!(next.otp_window_secs_remaining, 60);
        assert_eq!(
            actions,
            vec![RegistrationAction::StartOtpCountdown { window_secs: 60 }]
        );
    }

    #[test]
    fn otp_delivery_failure_keeps_step_and_shows_banner() {
        let sm = machine();
        let (pending, _) = sm.transition(
            sm.initial_session(),
            RegistrationEvent::SubmitPhone {
                phone: "9876543210".into(),
            },
        );
        let (next, actions) = sm.transition(pending, RegistrationEvent::OtpDeliveryFailed);
        assert_eq!(next.step, RegistrationStep::PhoneEntry);
        assert_eq!(
            next.error,
            Some(RegistrationError::Remote(RemoteError::OtpSendFailed))
        );
        assert!(next.pending.is_none());
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_result_events_are_ignored() {
        let sm = machine();
        let session = sm.initial_session();
        let (next, actions) = sm.transition(session.clone(), RegistrationEvent::OtpDelivered);
        assert_eq!(next, session);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_otp_wrong_length_is_validation_error() {
        let sm = machine();
        let (next, actions) = sm.transition(
            at_otp_step(&sm),
            RegistrationEvent::SubmitOtp {
                code: "12345".into(),
            },
        );
        assert_eq!(next.step, RegistrationStep::OtpVerification);
        assert_eq!(
            next.error,
            Some(RegistrationError::Validation(ValidationError::InvalidOtp))
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn otp_rejection_is_remote_error_and_does_not_advance() {
        let sm = machine();
        let (pending, actions) = sm.transition(
            at_otp_step(&sm),
            RegistrationEvent::SubmitOtp {
                code: "654321".into(),
            },
        );
        assert_eq!(
            actions,
            vec![RegistrationAction::VerifyOtp {
                phone: "9876543210".into(),
                code: "654321".into()
            }]
        );
        let (next, _) = sm.transition(pending, RegistrationEvent::OtpRejected);
        assert_eq!(next.step, RegistrationStep::OtpVerification);
        assert_eq!(
            next.error,
            Some(RegistrationError::Remote(RemoteError::OtpRejected))
        );
    }

    #[test]
    fn otp_accept_moves_to_external_id_and_stops_countdown() {
        let sm = machine();
        let (pending, _) = sm.transition(
            at_otp_step(&sm),
            RegistrationEvent::SubmitOtp {
                code: "123456".into(),
            },
        );
        let (next, actions) = sm.transition(pending, RegistrationEvent::OtpAccepted);
        assert_eq!(next.step, RegistrationStep::ExternalIdValidation);
        assert_eq!(actions, vec![RegistrationAction::StopOtpCountdown]);
    }

    #[test]
    fn countdown_tick_stops_at_zero() {
        let sm = machine();
        let mut session = at_otp_step(&sm);
        session.otp_window_secs_remaining = 2;

        let tick = |remaining_secs| RegistrationEvent::OtpCountdownTick { remaining_secs };

        let (session, actions) = sm.transition(session, tick(1));
        assert_eq!(session.otp_window_secs_remaining, 1);
        assert!(actions.is_empty());

        let (session, actions) = sm.transition(session, tick(0));
        assert_eq!(session.otp_window_secs_remaining, 0);
        assert_eq!(actions, vec![RegistrationAction::StopOtpCountdown]);

        let (session, actions) = sm.transition(session, tick(0));
        assert_eq!(session.otp_window_secs_remaining, 0);
        assert!(actions.is_empty());
    }

    #[test]
    fn countdown_tick_catches_up_but_never_adds_time() {
        let sm = machine();
        let mut session = at_otp_step(&sm);
        session.otp_window_secs_remaining = 58;

        let (session, actions) = sm.transition(
            session,
            RegistrationEvent::OtpCountdownTick { remaining_secs: 55 },
        );
        assert_eq!(session.otp_window_secs_remaining, 55);
        assert!(actions.is_empty());

        let (session, _) = sm.transition(
            session,
            RegistrationEvent::OtpCountdownTick { remaining_secs: 57 },
        );
        assert_eq!(session.otp_window_secs_remaining, 55);
    }

    #[test]
    fn resend_is_locked_while_window_open() {
        let sm = machine();
        let session = at_otp_step(&sm);
        let (next, actions) = sm.transition(session, RegistrationEvent::ResendOtp);
        assert_eq!(next.resend_count, 0);
        assert_eq!(
            next.error,
            Some(RegistrationError::Validation(ValidationError::ResendLocked))
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn resend_clears_code_and_resends() {
        let sm = machine();
        let mut session = drain_window(&sm, at_otp_step(&sm));
        session.otp_code = "111111".into();

        let (next, actions) = sm.transition(session, RegistrationEvent::ResendOtp);
        assert_eq!(next.resend_count, 1);
        assert!(next.otp_code.is_empty());
        assert_eq!(next.pending, Some(PendingRequest::SendOtp));
        assert_eq!(
            actions,
            vec![
                RegistrationAction::StopOtpCountdown,
                RegistrationAction::SendOtp {
                    phone: "9876543210".into()
                }
            ]
        );

        let (next, actions) = sm.transition(next, RegistrationEvent::OtpDelivered);
        assert_eq!(next.otp_window_secs_remaining, 60);
        assert_eq!(
            actions,
            vec![RegistrationAction::StartOtpCountdown { window_secs: 60 }]
        );
    }

    #[test]
    fn fourth_resend_reports_limit_and_changes_nothing_else() {
        let sm = machine();
        let mut session = at_otp_step(&sm);
        for _ in 0..3 {
            session = drain_window(&sm, session);
            session = sm.transition(session, RegistrationEvent::ResendOtp).0;
            session = sm.transition(session, RegistrationEvent::OtpDelivered).0;
        }
        assert_eq!(session.resend_count, 3);
        let session = drain_window(&sm, session);

        let (next, actions) = sm.transition(session.clone(), RegistrationEvent::ResendOtp);
        assert!(actions.is_empty());
        assert_eq!(
            next.error,
            Some(RegistrationError::LimitExceeded(
                LimitExceededError::ResendLimitReached { max: 3 }
            ))
        );
        let mut without_error = next.clone();
        without_error.error = None;
        assert_eq!(without_error, session);
        assert!(!next.can_resend());
    }

    #[test]
    fn go_back_from_otp_resets_otp_state() {
        let sm = machine();
        let mut session = at_otp_step(&sm);
        session.otp_code = "123".into();
        session.otp_window_secs_remaining = 12;

        let (next, actions) = sm.transition(session, RegistrationEvent::GoBack);
        assert_eq!(next.step, RegistrationStep::PhoneEntry);
        assert!(next.otp_code.is_empty());
        assert!(!next.otp_sent);
        assert_eq!(next.otp_window_secs_remaining, 60);
        assert_eq!(actions, vec![RegistrationAction::StopOtpCountdown]);
    }

    #[test]
    fn go_back_from_external_id_keeps_otp_code() {
        let sm = machine();
        let session = at_id_step(&sm);
        let (next, _) = sm.transition(session, RegistrationEvent::GoBack);
        assert_eq!(next.step, RegistrationStep::OtpVerification);
        assert_eq!(next.otp_code, "123456");
    }

    #[test]
    fn go_back_from_phone_entry_is_noop() {
        let sm = machine();
        let session = sm.initial_session();
        let (next, actions) = sm.transition(session.clone(), RegistrationEvent::GoBack);
        assert_eq!(next, session);
        assert!(actions.is_empty());
    }

    #[test]
    fn padded_external_id_is_rejected_without_lookup() {
        let sm = machine();
        let (next, actions) = sm.transition(
            at_id_step(&sm),
            RegistrationEvent::SubmitExternalId {
                external_id: " PMFBY2024000001 ".into(),
            },
        );
        assert_eq!(
            next.error,
            Some(RegistrationError::Validation(
                ValidationError::InvalidExternalId
            ))
        );
        assert!(!next.external_id_validated);
        assert!(actions.is_empty());
    }

    #[test]
    fn external_id_pattern_is_checked_before_lookup() {
        let sm = machine();
        let (next, actions) = sm.transition(
            at_id_step(&sm),
            RegistrationEvent::SubmitExternalId {
                external_id: "PMFBY123".into(),
            },
        );
        assert_eq!(
            next.error,
            Some(RegistrationError::Validation(
                ValidationError::InvalidExternalId
            ))
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn external_id_lookup_is_normalized_and_populates_profile() {
        let sm = machine();
        let (pending, actions) = sm.transition(
            at_id_step(&sm),
            RegistrationEvent::SubmitExternalId {
                external_id: "pmfby2024000001".into(),
            },
        );
        assert_eq!(
            actions,
            vec![RegistrationAction::LookupExternalId {
                external_id: "PMFBY2024000001".into()
            }]
        );
        let (next, _) = sm.transition(
            pending,
            RegistrationEvent::ProfileFound { profile: profile() },
        );
        assert!(next.external_id_validated);
        assert_eq!(next.profile, Some(profile()));

        let (again, actions) = sm.transition(
            next.clone(),
            RegistrationEvent::SubmitExternalId {
                external_id: "PMFBY2024000002".into(),
            },
        );
        assert_eq!(again, next);
        assert!(actions.is_empty());
    }

    #[test]
    fn unknown_external_id_offers_escape_hatch() {
        let sm = machine();
        let (pending, _) = sm.transition(
            at_id_step(&sm),
            RegistrationEvent::SubmitExternalId {
                external_id: "PMFBY9999999999".into(),
            },
        );
        let (next, _) = sm.transition(pending, RegistrationEvent::ProfileNotFound);
        assert_eq!(
            next.error,
            Some(RegistrationError::Remote(RemoteError::ExternalIdNotFound))
        );
        let (_, actions) = sm.transition(next, RegistrationEvent::OpenExternalRegistration);
        assert_eq!(
            actions,
            vec![RegistrationAction::OpenExternalUrl {
                url: sm.policy().external_registration_url.clone()
            }]
        );
    }

    #[test]
    fn complete_requires_validated_external_id() {
        let sm = machine();
        let (next, actions) = sm.transition(at_id_step(&sm), RegistrationEvent::CompleteRegistration);
        assert_eq!(
            next.error,
            Some(RegistrationError::Validation(
                ValidationError::ExternalIdNotValidated
            ))
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn complete_submits_then_schedules_home_navigation() {
        let sm = machine();
        let (session, _) = sm.transition(
            at_id_step(&sm),
            RegistrationEvent::SubmitExternalId {
                external_id: "PMFBY2024000001".into(),
            },
        );
        let (session, _) = sm.transition(
            session,
            RegistrationEvent::ProfileFound { profile: profile() },
        );
        let (session, actions) = sm.transition(session, RegistrationEvent::CompleteRegistration);
        assert_eq!(
            actions,
            vec![RegistrationAction::SubmitRegistration {
                submission: RegistrationSubmission {
                    phone_number: "9876543210".into(),
                    external_id: "PMFBY2024000001".into(),
                    profile: profile(),
                }
            }]
        );

        let (session, actions) = sm.transition(session, RegistrationEvent::RegistrationAccepted);
        assert_eq!(session.step, RegistrationStep::Complete);
        assert_eq!(
            actions,
            vec![RegistrationAction::ScheduleHomeNavigation {
                delay: Duration::from_secs(2)
            }]
        );

        let (_, actions) = sm.transition(session, RegistrationEvent::HomeNavigationDue);
        assert_eq!(
            actions,
            vec![RegistrationAction::NavigateHome { profile: profile() }]
        );
    }
}
