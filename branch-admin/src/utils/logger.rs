//! Logging Infrastructure
//!
//! Structured logging via `tracing`; console by default, daily rolling file
//! when a log directory is configured. `LOG_LEVEL` takes either a bare level
//! (`debug`) or `EnvFilter` directives (`branch_admin=debug,warn`).

use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(level_filter(log_level.unwrap_or(DEFAULT_LEVEL)))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "branch-admin");
            return subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .is_ok();
        }
    }

    subscriber.try_init().is_ok()
}

/// Unparseable directives fall back to `info`
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
