use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePolicy {
    /// First countdown value shown once readiness holds.
    pub countdown_start: u8,
    pub sample_interval: Duration,
    pub countdown_interval: Duration,
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self {
            countdown_start: 3,
            sample_interval: Duration::from_secs(1),
            countdown_interval: Duration::from_secs(1),
        }
    }
}
