//! Registration error taxonomy.
//!
//! Every error here is recoverable by user action on the same screen. The
//! controller never retries on its own.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the presentation layer should render an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSurface {
    /// Next to the offending field.
    Inline,
    /// Screen-level banner.
    Banner,
}

/// Local, synchronous input errors. They block the transition.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("enter a valid 10-digit mobile number")]
    InvalidPhone,
    #[error("enter the 6-digit OTP")]
    InvalidOtp,
    #[error("enter a valid PMFBY ID (PMFBY followed by 10 digits)")]
    InvalidExternalId,
    #[error("validate your PMFBY ID before continuing")]
    ExternalIdNotValidated,
    #[error("resend is available once the timer runs out")]
    ResendLocked,
}

/// Failures reported by the (simulated) remote services.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RemoteError {
    #[error("could not send OTP, please try again")]
    OtpSendFailed,
    #[error("invalid OTP, please try again")]
    OtpRejected,
    #[error("could not verify OTP, please try again")]
    OtpVerifyFailed,
    #[error("PMFBY ID not found")]
    ExternalIdNotFound,
    #[error("could not look up PMFBY ID, please try again")]
    LookupFailed,
    #[error("registration failed, please try again")]
    SubmissionFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LimitExceededError {
    #[error("maximum OTP resend attempts reached")]
    ResendLimitReached { max: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    LimitExceeded(#[from] LimitExceededError),
}

impl RegistrationError {
    pub fn surface(&self) -> ErrorSurface {
        match self {
            RegistrationError::Validation(_) => ErrorSurface::Inline,
            RegistrationError::Remote(_) | RegistrationError::LimitExceeded(_) => {
                ErrorSurface::Banner
            }
        }
    }

    /// Translation key for the user-visible message.
    pub fn message_key(&self) -> &'static str {
        match self {
            RegistrationError::Validation(err) => match err {
                ValidationError::InvalidPhone => "error.invalid_phone",
                ValidationError::InvalidOtp => "error.invalid_otp_format",
                ValidationError::InvalidExternalId => "error.invalid_pmfby_id",
                ValidationError::ExternalIdNotValidated => "error.pmfby_not_validated",
                ValidationError::ResendLocked => "error.resend_locked",
            },
            RegistrationError::Remote(err) => match err {
                RemoteError::OtpRejected => "error.invalid_otp",
                RemoteError::ExternalIdNotFound => "error.pmfby_not_found",
                RemoteError::OtpSendFailed
                | RemoteError::OtpVerifyFailed
                | RemoteError::LookupFailed
                | RemoteError::SubmissionFailed => "error.try_again",
            },
            RegistrationError::LimitExceeded(_) => "error.resend_limit",
        }
    }
}
