//! # cs-infra
//!
//! Adapters behind the `cs-core` ports. The remote services are simulated
//! with fixed latencies; locale tables are bundled data.

pub mod locale;
pub mod navigation;
pub mod simulated;
pub mod time;

pub use locale::StaticLocalization;
pub use navigation::LoggingNavigator;
pub use time::SystemClock;
