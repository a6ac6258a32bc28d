//! Phone OTP service port.

use anyhow::Result;

#[async_trait::async_trait]
pub trait OtpServicePort: Send + Sync {
    /// Deliver a fresh OTP to `phone` (10 normalized digits).
    async fn send(&self, phone: &str) -> Result<()>;

    /// `Ok(false)` means the code was wrong; `Err` means the check itself failed.
    async fn verify(&self, phone: &str, code: &str) -> Result<bool>;
}
