//! Diagnostic logging.
//!
//! The UI owns the terminal, so nothing is logged unless [`LOG_ENV`] names a
//! file. `RUST_LOG` selects what gets written (default `info`).

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file path.
pub const LOG_ENV: &str = "PAPER_SUMMARIZER_LOG";

/// Log file for one run: the configured path plus start time and pid, so
/// a headless run and a UI run started together keep separate logs.
pub fn log_file_path(base: &str, started_secs: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{started_secs}.{pid}"))
}

/// Install the global subscriber when [`LOG_ENV`] is set.
///
/// A file that cannot be created is reported on stderr and logging stays
/// off; the app itself still runs.
pub fn init_tracing() {
    let Ok(base) = std::env::var(LOG_ENV) else {
        return;
    };

    let started_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    let path = log_file_path(&base, started_secs, std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot write log to {}: {err}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_timer(UtcTime::rfc_3339()),
        )
        .init();
}
