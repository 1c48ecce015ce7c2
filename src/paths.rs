//! Centralized path resolution for the MegaGecko pool fetcher
//!
//! All file and directory paths are resolved through this module.
//!
//! ## Directory Structure
//!
//! ```text
//! ./logs/
//! ├── pools-YYYY-MM-DD.json   one log entry appended per run
//! └── pools-YYYY-MM-DD.txt    human-readable report, appended per run
//! ```

use chrono::NaiveDate;
use std::path::PathBuf;

/// Returns the logs directory path, relative to the working directory
pub fn get_logs_directory() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("logs")
}

/// Creates all required directories if they do not exist
///
/// Must be called before the logger or any log file writer runs.
pub fn ensure_all_directories() -> std::io::Result<()> {
    std::fs::create_dir_all(get_logs_directory())
}

/// Returns the per-day JSON log file path for the given date
pub fn get_json_log_path(date: NaiveDate) -> PathBuf {
    get_logs_directory().join(format!("pools-{}.json", date.format("%Y-%m-%d")))
}

/// Returns the per-day human-readable log file path for the given date
pub fn get_text_log_path(date: NaiveDate) -> PathBuf {
    get_logs_directory().join(format!("pools-{}.txt", date.format("%Y-%m-%d")))
}
