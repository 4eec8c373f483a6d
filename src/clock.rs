use std::time::Instant;

use crate::string_table::{self, KEY_DATETIME_FORMAT};

/// Wall-clock strings for trace headers and log filenames, plus the
/// stopwatch used by the scope tracers.

/// Formats the current local time with the configured datetime format
/// (the string table's `datetimeFormat` entry).
pub fn datetime_string() -> String {
    datetime_string_with_format(&string_table::get(KEY_DATETIME_FORMAT))
}

/// Formats the current local time with an explicit format string.
pub fn datetime_string_with_format(format: &str) -> String {
    chrono::Local::now().format(format).to_string()
}

/// Measures elapsed wall-clock time for the scope tracers.
///
/// # Examples
///
/// ```
/// use debug_print::clock::Stopwatch;
///
/// let watch = Stopwatch::start();
/// let elapsed = watch.elapsed_seconds_string();
/// assert!(elapsed.contains('.'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// Starts measuring immediately.
    pub fn start() -> Self {
        Self { started_at: Instant::now() }
    }

    /// Elapsed time as `S.mmm` with zero-padded milliseconds.
    pub fn elapsed_seconds_string(&self) -> String {
        let millis = self.started_at.elapsed().as_millis();
        format!("{}.{:03}", millis / 1000, millis % 1000)
    }
}
