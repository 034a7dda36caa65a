//! File logging setup. Logs go to a rolling file under the platform data
//! directory so they never compete with the terminal UI for the screen.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the appender guard, which must
/// stay alive for buffered log lines to be flushed. Logging is best-effort:
/// a failure here leaves the app running without logs.
pub fn init() -> Option<WorkerGuard> {
    let log_dir = dirs::data_dir()
        .map(|d| d.join("quicktune").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    if std::fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "quicktune.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,quicktune=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return None;
    }
    Some(guard)
}
