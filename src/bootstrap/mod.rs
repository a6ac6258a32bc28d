pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, load_config_or_default};
pub use runtime::AppRuntime;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, AppDeps};
