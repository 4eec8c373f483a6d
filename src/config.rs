use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::color::Color;
use crate::string_table::{self, KEY_DATETIME_FORMAT};

/// Process-scoped configuration for the debug output library.
///
/// The settings live in one explicit [`DebugConfig`] value behind a
/// process-wide lock: set once during startup, read by every print
/// operation afterwards. Language and datetime format are not stored here;
/// they delegate to the string table, which owns all printable text.

/// The tunable settings.
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Directory that `log_writer::write_to_file` defaults to.
    pub log_path: PathBuf,
    /// Whether error-kind messages terminate the process after printing.
    pub exit_on_error: bool,
    /// Display color of plain console messages.
    pub message_color: Color,
    /// Display color of console warning blocks.
    pub warning_color: Color,
    /// Display color of console error blocks.
    pub error_color: Color,
    /// Console color of plain popup messages.
    pub popup_message_color: Color,
    /// Console color of popup warning blocks.
    pub popup_warning_color: Color,
    /// Console color of popup error blocks.
    pub popup_error_color: Color,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./logs/"),
            exit_on_error: false,
            message_color: Color::DEFAULT,
            warning_color: Color::YELLOW,
            error_color: Color::BRIGHT_RED,
            popup_message_color: Color::DEFAULT,
            popup_warning_color: Color::YELLOW,
            popup_error_color: Color::BRIGHT_RED,
        }
    }
}

lazy_static! {
    static ref CONFIG: RwLock<DebugConfig> = RwLock::new(DebugConfig::default());
}

/// Returns a copy of the current configuration.
pub fn snapshot() -> DebugConfig {
    CONFIG.read().clone()
}

/// Applies a closure to the process-wide configuration.
pub fn update(apply: impl FnOnce(&mut DebugConfig)) {
    apply(&mut CONFIG.write());
}

/// Switches the display language. Delegates to the string table.
pub fn set_language(lang: &str, dir: impl AsRef<Path>) {
    string_table::set_language(lang, dir);
}

/// Changes the datetime format used by trace headers.
pub fn set_datetime_format(format: impl Into<String>) {
    string_table::set(KEY_DATETIME_FORMAT, format);
}

/// Sets the default log output directory.
pub fn set_log_path(path: impl Into<PathBuf>) {
    CONFIG.write().log_path = path.into();
}

/// Enables or disables process termination on error-kind messages.
pub fn set_exit_on_error(enabled: bool) {
    CONFIG.write().exit_on_error = enabled;
}

pub fn set_message_color(color: Color) {
    CONFIG.write().message_color = color;
}

pub fn set_warning_color(color: Color) {
    CONFIG.write().warning_color = color;
}

pub fn set_error_color(color: Color) {
    CONFIG.write().error_color = color;
}

pub fn set_popup_message_color(color: Color) {
    CONFIG.write().popup_message_color = color;
}

pub fn set_popup_warning_color(color: Color) {
    CONFIG.write().popup_warning_color = color;
}

pub fn set_popup_error_color(color: Color) {
    CONFIG.write().popup_error_color = color;
}
