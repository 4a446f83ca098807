//! Logging bootstrap.
//!
//! Stdout belongs to the TUI, so tracing output goes to a log file under
//! the platform data directory. Level defaults to INFO; override with
//! `RUST_LOG`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::rolling;
use tracing_subscriber::{fmt, EnvFilter};

/// Log filename within the application data directory.
const LOG_FILENAME: &str = "fincalc.log";

/// Application directory name under the platform data dir.
const APP_DIR: &str = "fincalc";

/// Returns the default log directory: `<data_dir>/fincalc`.
pub fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Initialize file logging.
///
/// Failure here is not fatal to the calculator; callers report it and
/// move on without a log file.
pub fn init(log_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(log_dir)?;

    let file_appender = rolling::never(log_dir, LOG_FILENAME);

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // plain text for file output
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(io::Error::other)?;

    tracing::info!("fincalc v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}
