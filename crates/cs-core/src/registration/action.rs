use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{FarmerProfile, RegistrationSubmission};

/// Side-effects produced by registration transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationAction {
    SendOtp { phone: String },
    VerifyOtp { phone: String, code: String },
    /// (Re)start the OTP window ticker with `window_secs` left on it.
    StartOtpCountdown { window_secs: u32 },
    StopOtpCountdown,
    LookupExternalId { external_id: String },
    OpenExternalUrl { url: String },
    SubmitRegistration { submission: RegistrationSubmission },
    ScheduleHomeNavigation { delay: Duration },
    NavigateHome { profile: FarmerProfile },
}
