//! Input validation for the registration steps.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Indian mobile number: 10 digits, leading 6-9.
    static ref PHONE_REGEX: Regex = Regex::new(r"^[6-9]\d{9}$").unwrap();

    static ref OTP_REGEX: Regex = Regex::new(r"^\d{6}$").unwrap();

    /// PMFBY farmer id, matched case-insensitively.
    static ref EXTERNAL_ID_REGEX: Regex = Regex::new(r"(?i)^PMFBY\d{10}$").unwrap();
}

pub const OTP_LENGTH: usize = 6;

/// Strips everything that is not an ASCII digit.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates an already-normalized phone number.
pub fn is_valid_phone(digits: &str) -> bool {
    PHONE_REGEX.is_match(digits)
}

pub fn is_valid_otp(code: &str) -> bool {
    OTP_REGEX.is_match(code)
}

/// Uppercases only; surrounding whitespace still fails the pattern.
pub fn normalize_external_id(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

pub fn is_valid_external_id(id: &str) -> bool {
    EXTERNAL_ID_REGEX.is_match(id)
}

/// Masks all but the last four digits, for logs.
pub fn mask_phone(digits: &str) -> String {
    let keep = digits.len().saturating_sub(4);
    digits
        .chars()
        .enumerate()
        .map(|(i, c)| if i < keep { '*' } else { c })
        .collect()
}
