use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::clock;

/// In-memory log accumulation and timestamped file output.
///
/// Entries are plain strings; level tags or timestamps are the caller's
/// business. Writing does not drain the accumulator; entries stay until
/// [`clear`] is called. The library works through a process-wide instance
/// behind the free functions; [`LogWriter`] instances exist so the file
/// behavior can be tested in isolation.

/// Filename format, chosen so the name is valid on filesystems that
/// reject ':'.
const FILE_NAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A log entry accumulator.
///
/// # Examples
///
/// ```
/// use debug_print::log_writer::LogWriter;
///
/// let mut log = LogWriter::new();
/// log.add("[INFO] started");
/// assert_eq!(log.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LogWriter {
    entries: Vec<String>,
}

impl LogWriter {
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends one entry.
    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// The accumulated entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Discards every accumulated entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Writes the accumulated entries, one per line, to a new file in
    /// `directory`.
    ///
    /// The directory is created if absent and the filename is generated
    /// from the current local time as `YYYY-MM-DD_HH-MM-SS.log`. Entries
    /// are retained afterwards. Returns the path of the written file.
    pub fn write_to_file(&self, directory: impl AsRef<Path>) -> io::Result<PathBuf> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory)?;

        let path = directory.join(generate_file_name());
        let mut file = fs::File::create(&path)?;
        for entry in &self.entries {
            writeln!(file, "{}", entry)?;
        }

        Ok(path)
    }
}

fn generate_file_name() -> String {
    format!("{}.log", clock::datetime_string_with_format(FILE_NAME_FORMAT))
}

lazy_static! {
    static ref GLOBAL: Mutex<LogWriter> = Mutex::new(LogWriter::new());
}

/// Appends one entry to the process-wide accumulator.
pub fn add(entry: impl Into<String>) {
    GLOBAL.lock().add(entry);
}

/// Snapshot of the process-wide entries, oldest first.
pub fn entries() -> Vec<String> {
    GLOBAL.lock().entries().to_vec()
}

pub fn count() -> usize {
    GLOBAL.lock().count()
}

/// Discards every entry in the process-wide accumulator.
pub fn clear() {
    GLOBAL.lock().clear();
}

/// Writes the process-wide entries to a new timestamped file in
/// `directory`. The accumulator keeps its entries; the write and any
/// concurrent appends exclude each other.
pub fn write_to_file(directory: impl AsRef<Path>) -> io::Result<PathBuf> {
    GLOBAL.lock().write_to_file(directory)
}
