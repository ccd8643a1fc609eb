//! Logging setup
//!
//! Tracing subscriber initialization. In debug mode logs go to daily-rotated
//! files under ~/.crabmail/logs/ so they never bleed into the TUI; otherwise
//! only warnings reach stderr.

use crate::error::CrabmailError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Returns a guard that must be kept alive for the file writer to flush.
pub fn init(debug: bool) -> Result<Option<WorkerGuard>, CrabmailError> {
    let default_filter = if debug { "crabmail=debug" } else { "crabmail=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if debug {
        let log_dir = crate::config::crabmail_home().join("logs");
        std::fs::create_dir_all(&log_dir)?;
        let appender = tracing_appender::rolling::daily(log_dir, "crabmail.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    }
}
