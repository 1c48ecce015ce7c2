/// Run reporting: console narration, the human-readable text log and the
/// per-day JSON log of run entries
pub mod log_store;
pub mod summary;

pub use log_store::{LogEntry, LogSummary, RawPoolSnapshot};
pub use summary::ConsoleReporter;
