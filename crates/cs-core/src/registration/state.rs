use serde::{Deserialize, Serialize};

use super::{FarmerProfile, RegistrationError, RegistrationPolicy};

/// Position in the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStep {
    PhoneEntry,
    OtpVerification,
    ExternalIdValidation,
    Complete,
}

impl RegistrationStep {
    /// Step reached by an explicit "go back", if any.
    pub fn previous(self) -> Option<Self> {
        match self {
            RegistrationStep::OtpVerification => Some(RegistrationStep::PhoneEntry),
            RegistrationStep::ExternalIdValidation => Some(RegistrationStep::OtpVerification),
            RegistrationStep::PhoneEntry | RegistrationStep::Complete => None,
        }
    }
}

/// Remote request currently in flight. Results for anything else are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingRequest {
    SendOtp,
    VerifyOtp,
    LookupExternalId,
    SubmitRegistration,
}

/// One in-progress registration attempt, created fresh per screen mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSession {
    pub step: RegistrationStep,
    /// Normalized digits.
    pub phone_number: String,
    pub otp_code: String,
    pub otp_sent: bool,
    pub otp_window_secs_remaining: u32,
    pub resend_count: u8,
    pub max_otp_resends: u8,
    /// Normalized (uppercase) PMFBY id.
    pub external_id: String,
    pub external_id_validated: bool,
    pub profile: Option<FarmerProfile>,
    pub error: Option<RegistrationError>,
    pub pending: Option<PendingRequest>,
}

impl RegistrationSession {
    pub fn new(policy: &RegistrationPolicy) -> Self {
        Self {
            step: RegistrationStep::PhoneEntry,
            phone_number: String::new(),
            otp_code: String::new(),
            otp_sent: false,
            otp_window_secs_remaining: policy.otp_window_secs,
            resend_count: 0,
            max_otp_resends: policy.max_otp_resends,
            external_id: String::new(),
            external_id_validated: false,
            profile: None,
            error: None,
            pending: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Resend is gone for good once the cap is hit.
    pub fn resend_exhausted(&self) -> bool {
        self.resend_count >= self.max_otp_resends
    }

    pub fn can_resend(&self) -> bool {
        self.step == RegistrationStep::OtpVerification
            && self.otp_window_secs_remaining == 0
            && !self.resend_exhausted()
            && !self.is_busy()
    }

    pub fn otp_countdown_running(&self) -> bool {
        self.step == RegistrationStep::OtpVerification
            && self.otp_sent
            && self.otp_window_secs_remaining > 0
    }
}

impl Default for RegistrationSession {
    fn default() -> Self {
        Self::new(&RegistrationPolicy::default())
    }
}
