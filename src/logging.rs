//! Logging setup for Typeahead
//!
//! The widget draws on the terminal, so log output goes to a file next to the
//! executable (`typeahead.log`), truncated on each run. Use the `tracing`
//! macros everywhere; filter with `RUST_LOG` (default `typeahead=info`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "typeahead=info";

/// Keeps the background log writer alive; dropping it flushes the file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Get the log file path (same directory as executable)
pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("typeahead.log")
}

/// Initialize the global subscriber.
///
/// If the log file can't be opened, logging is disabled rather than sent to
/// the terminal.
pub fn init() -> LoggingGuard {
    let path = log_path();
    let file = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("[typeahead] Logging disabled, cannot open {}: {}", path.display(), e);
            return LoggingGuard { _file_guard: None };
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_target(true)
        .with_thread_names(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    if installed.is_ok() {
        tracing::info!(log_path = %path.display(), version = crate::VERSION, "logging initialized");
    }

    LoggingGuard {
        _file_guard: Some(guard),
    }
}
