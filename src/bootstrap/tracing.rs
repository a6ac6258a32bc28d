//! Tracing configuration for Cropsure
//!
//! Installs the global `tracing-subscriber` registry:
//!
//! - **Filter**: `RUST_LOG` when set, otherwise debug in dev builds and info
//!   in release builds.
//! - **stdout**: always on.
//! - **File**: daily-rolling file under the platform log directory when
//!   enabled in `[logging]`. Failure to set it up falls back to stdout only.

use std::path::PathBuf;
use std::{fs, io, sync::OnceLock};

use cs_core::config::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

const LOG_FILE_PREFIX: &str = "cropsure.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("cs_app={level}"),
        format!("cs_infra={level}"),
        "tokio=warn".to_string(),
        "runtime=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber. Call once, before any controller is built.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = if logging.file_logging {
        match build_file_writer(logging) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
                None
            }
        }
    } else {
        None
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Configured directory, else `<platform data dir>/cropsure/logs`.
fn resolve_log_dir(logging: &LoggingConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &logging.directory {
        return Ok(dir.clone());
    }
    dirs::data_local_dir()
        .map(|dir| dir.join("cropsure").join("logs"))
        .ok_or_else(|| anyhow::anyhow!("No platform data directory for log files"))
}

fn build_file_writer(logging: &LoggingConfig) -> anyhow::Result<NonBlocking> {
    let logs_dir = resolve_log_dir(logging)?;
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
