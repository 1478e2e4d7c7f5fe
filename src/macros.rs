/// Formats a message and hands it to a [`LogSink`](crate::logging::LogSink) at INFO level.
/// ```
/// use hunt::{info_log, logging::MemoryLog};
/// let log = MemoryLog::new();
/// info_log!(log, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_log {
    ($sink:expr, $($arg:tt)+) => {
        $crate::logging::LogSink::log(&$sink, $crate::logging::Level::Info, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($sink:expr, $($arg:tt)+) => {
        $crate::logging::LogSink::log(&$sink, $crate::logging::Level::Warn, &format!($($arg)+))
    };
}

#[macro_export]
macro_rules! error_log {
    ($sink:expr, $($arg:tt)+) => {
        $crate::logging::LogSink::log(&$sink, $crate::logging::Level::Error, &format!($($arg)+))
    };
}

/// Like `info_log!`, but you pass in the starting time and it appends how long it took
/// from starting time to now.
/// ```
/// use chrono::Local;
/// use hunt::{info_time, logging::MemoryLog};
/// let log = MemoryLog::new();
/// let time = Local::now();
/// info_time!(log, time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($sink:expr, $time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let run_time = (::chrono::Local::now() - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        $crate::info_log!($sink, "{} RUNTIME: {} sec", format!($strfm, $($arg),*), run_time)
    }};
}
