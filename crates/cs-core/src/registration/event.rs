use serde::{Deserialize, Serialize};

use super::FarmerProfile;

/// Events that drive the registration flow.
///
/// User intents come from the screen; result events are fed back by the
/// controller after it runs the corresponding action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationEvent {
    SubmitPhone { phone: String },
    OtpDelivered,
    OtpDeliveryFailed,

    SubmitOtp { code: String },
    OtpAccepted,
    OtpRejected,
    OtpVerificationFailed,
    ResendOtp,
    /// The OTP window ticker fired; `remaining_secs` is read off its deadline.
    OtpCountdownTick { remaining_secs: u32 },

    SubmitExternalId { external_id: String },
    ProfileFound { profile: FarmerProfile },
    ProfileNotFound,
    LookupFailed,
    OpenExternalRegistration,

    CompleteRegistration,
    RegistrationAccepted,
    RegistrationFailed,
    /// The post-completion delay elapsed.
    HomeNavigationDue,

    GoBack,
}

impl RegistrationEvent {
    /// Variant name without payload; phone numbers and codes stay out of logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationEvent::SubmitPhone { .. } => "SubmitPhone",
            RegistrationEvent::OtpDelivered => "OtpDelivered",
            RegistrationEvent::OtpDeliveryFailed => "OtpDeliveryFailed",
            RegistrationEvent::SubmitOtp { .. } => "SubmitOtp",
            RegistrationEvent::OtpAccepted => "OtpAccepted",
            RegistrationEvent::OtpRejected => "OtpRejected",
            RegistrationEvent::OtpVerificationFailed => "OtpVerificationFailed",
            RegistrationEvent::ResendOtp => "ResendOtp",
            RegistrationEvent::OtpCountdownTick { .. } => "OtpCountdownTick",
            RegistrationEvent::SubmitExternalId { .. } => "SubmitExternalId",
            RegistrationEvent::ProfileFound { .. } => "ProfileFound",
            RegistrationEvent::ProfileNotFound => "ProfileNotFound",
            RegistrationEvent::LookupFailed => "LookupFailed",
            RegistrationEvent::OpenExternalRegistration => "OpenExternalRegistration",
            RegistrationEvent::CompleteRegistration => "CompleteRegistration",
            RegistrationEvent::RegistrationAccepted => "RegistrationAccepted",
            RegistrationEvent::RegistrationFailed => "RegistrationFailed",
            RegistrationEvent::HomeNavigationDue => "HomeNavigationDue",
            RegistrationEvent::GoBack => "GoBack",
        }
    }
}
