/// Console line printers for the MegaGecko pool fetcher
///
/// Colored, timestamped output helpers. Whether narration is emitted at all
/// is decided by the reporter that owns the run's output policy; these
/// functions just format and print. Errors and request diagnostics go to
/// stderr so stdout stays parseable in JSON-only runs.
use chrono::Utc;
use colored::*;
use std::io::{self, Write};

fn timestamp() -> String {
    Utc::now().format("%H:%M:%S").to_string()
}

fn flush_stdout() {
    let _ = io::stdout().flush();
}

/// Standard informational narration
pub fn info(message: &str) {
    println!(
        "{} {} {}",
        "ℹ".blue().bold(),
        format!("[{}]", timestamp()).dimmed(),
        message
    );
    flush_stdout();
}

/// Important but non-fatal issues
pub fn warn(message: &str) {
    println!(
        "{} {} {}",
        "⚠".yellow().bold(),
        format!("[{}]", timestamp()).dimmed(),
        message.yellow()
    );
    flush_stdout();
}

/// Failures. Always printed, to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {} {}",
        "❌".red().bold(),
        format!("[{}]", timestamp()).dimmed(),
        message.red()
    );
}

/// Completed milestones
pub fn success(message: &str) {
    println!(
        "{} {} {}",
        "✅".green().bold(),
        format!("[{}]", timestamp()).dimmed(),
        message.green()
    );
    flush_stdout();
}

/// Request-level diagnostics, only shown with --debug-api. Written to
/// stderr so they never mix into the stdout config dump.
pub fn debug(message: &str) {
    if !crate::arguments::is_debug_api_enabled() {
        return;
    }
    eprintln!(
        "{} {} {}",
        "🐛".purple().bold(),
        format!("[{}]", timestamp()).dimmed(),
        message.dimmed()
    );
}

/// Raw console line without timestamp or level marker
pub fn plain(message: &str) {
    println!("{}", message);
    flush_stdout();
}
