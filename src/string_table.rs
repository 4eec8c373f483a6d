use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use thiserror::Error;

/// Locale-keyed table of every user-facing label the library prints.
///
/// The table starts from a built-in set of labels and can be re-populated
/// from a JSON resource at `<dir>/<lang>.json`. A resource only overrides the
/// keys it contains; anything absent keeps its built-in value. Lookup never
/// fails: an unknown key is echoed back verbatim, so a typo degrades the
/// output instead of crashing the caller. The completeness test in
/// `tests/string_table_tests.rs` is what catches such typos.

pub const KEY_SEPARATOR: &str = "separator";
pub const KEY_PAIR_SEPARATOR: &str = "pairSeparator";
pub const KEY_VARIABLE: &str = "variable";
pub const KEY_VALUE: &str = "value";
pub const KEY_FILE: &str = "file";
pub const KEY_LINE_NUMBER: &str = "lineNumber";
pub const KEY_FUNCTION_NAME: &str = "functionName";
pub const KEY_START_FUNCTION: &str = "startFunction";
pub const KEY_END_FUNCTION: &str = "endFunction";
pub const KEY_START_OBJECT: &str = "startObject";
pub const KEY_END_OBJECT: &str = "endObject";
pub const KEY_ELAPSED_TIME: &str = "elapsedTime";
pub const KEY_SECONDS: &str = "seconds";
pub const KEY_OPEN_BRACKET: &str = "openBracket";
pub const KEY_CLOSE_BRACKET: &str = "closeBracket";
pub const KEY_ERROR_DIALOG_TITLE: &str = "errorDialogTitle";
pub const KEY_DATETIME_FORMAT: &str = "datetimeFormat";

/// Every key the library looks up, for completeness checks.
pub const ALL_KEYS: &[&str] = &[
    KEY_SEPARATOR,
    KEY_PAIR_SEPARATOR,
    KEY_VARIABLE,
    KEY_VALUE,
    KEY_FILE,
    KEY_LINE_NUMBER,
    KEY_FUNCTION_NAME,
    KEY_START_FUNCTION,
    KEY_END_FUNCTION,
    KEY_START_OBJECT,
    KEY_END_OBJECT,
    KEY_ELAPSED_TIME,
    KEY_SECONDS,
    KEY_OPEN_BRACKET,
    KEY_CLOSE_BRACKET,
    KEY_ERROR_DIALOG_TITLE,
    KEY_DATETIME_FORMAT,
];

const BUILT_IN_LABELS: &[(&str, &str)] = &[
    (KEY_SEPARATOR, "=================================\n"),
    (KEY_PAIR_SEPARATOR, ": "),
    (KEY_VARIABLE, "variable"),
    (KEY_VALUE, "value"),
    (KEY_FILE, "file"),
    (KEY_LINE_NUMBER, "line"),
    (KEY_FUNCTION_NAME, "function"),
    (KEY_START_FUNCTION, "entering function\n"),
    (KEY_END_FUNCTION, "leaving function\n"),
    (KEY_START_OBJECT, " constructed\n"),
    (KEY_END_OBJECT, " dropped\n"),
    (KEY_ELAPSED_TIME, "elapsed time"),
    (KEY_SECONDS, " s"),
    (KEY_OPEN_BRACKET, "["),
    (KEY_CLOSE_BRACKET, "]"),
    (KEY_ERROR_DIALOG_TITLE, "Debug Message"),
    (KEY_DATETIME_FORMAT, "%Y-%m-%d %H:%M:%S%z"),
];

/// Failure to populate the table from a language resource.
///
/// Callers of [`StringTable::load_language`] see this error; the global
/// [`set_language`] facade swallows it and keeps the built-in labels instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read language resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse language resource: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A label table instance.
///
/// The library itself works through the process-wide instance behind the
/// free functions in this module; separate instances exist so loading and
/// fallback behavior can be tested without touching global state.
///
/// # Examples
///
/// ```
/// use debug_print::string_table::StringTable;
///
/// let table = StringTable::new();
/// assert_eq!(table.get("value"), "value");
/// assert_eq!(table.get("no_such_key"), "no_such_key");
/// ```
#[derive(Debug, Clone)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    /// Creates a table holding the built-in labels.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for (key, value) in BUILT_IN_LABELS {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Self { entries }
    }

    /// Looks up a label. Unknown keys are echoed back unchanged.
    pub fn get(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether the table holds an entry for `key`.
    ///
    /// `get` cannot distinguish a present label that happens to equal its
    /// key from an echoed miss; completeness checks use this instead.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces a single label.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Merges the labels from `<dir>/<lang>.json` over the current entries.
    ///
    /// The resource is a flat JSON object mapping keys to UTF-8 label text.
    /// Keys absent from the resource keep their current values. On error the
    /// table is left untouched.
    pub fn load_language(&mut self, lang: &str, dir: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = dir.as_ref().join(format!("{lang}.json"));
        let text = fs::read_to_string(path)?;
        let overrides: HashMap<String, String> = serde_json::from_str(&text)?;

        for (key, value) in overrides {
            self.entries.insert(key, value);
        }
        Ok(())
    }

    /// Restores every label to its built-in value.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref TABLE: RwLock<StringTable> = RwLock::new(StringTable::new());
}

/// Looks up a label in the process-wide table.
pub fn get(key: &str) -> String {
    TABLE.read().get(key)
}

/// Inserts or replaces a label in the process-wide table.
pub fn set(key: impl Into<String>, value: impl Into<String>) {
    TABLE.write().set(key, value);
}

/// Switches the process-wide table to another language.
///
/// The table is reset to the built-in labels and the resource at
/// `<dir>/<lang>.json` is merged over them. A missing or malformed resource
/// leaves the built-in labels in place; no error reaches the caller.
pub fn set_language(lang: &str, dir: impl AsRef<Path>) {
    let mut table = TABLE.write();
    table.reset();
    let _ = table.load_language(lang, dir);
}
