//! Log sinks handed to the harvester instead of a process-wide logger.

use std::sync::Mutex;

use chrono::Local;
pub use log::{Level, LevelFilter};

/// Anything that accepts `(level, message)` pairs.
/// Logging must never fail or change the caller's control flow.
pub trait LogSink {
    fn log(&self, level: Level, message: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

/// Prints `2024-01-01 12:00:00 [INFO ] message` lines to stderr,
/// the layout of a custom `env_logger` format, without installing a global logger.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLog {
    max_level: LevelFilter,
}

impl ConsoleLog {
    pub fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    fn format_line(level: Level, message: &str) -> String {
        format!(
            "{} [{:<5}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        )
    }
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::new(LevelFilter::Info)
    }
}

impl LogSink for ConsoleLog {
    fn log(&self, level: Level, message: &str) {
        if level <= self.max_level {
            eprintln!("{}", Self::format_line(level, message));
        }
    }
}

/// Keeps every entry in memory, in the order it was logged.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages logged at exactly `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg)
            .collect()
    }
}

impl LogSink for MemoryLog {
    fn log(&self, level: Level, message: &str) {
        // A poisoned lock only loses the entry.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
