use std::io::{self, Write};

use crate::color::{self, Color};
use crate::config;
use crate::string_table::{
    self, KEY_FILE, KEY_FUNCTION_NAME, KEY_LINE_NUMBER, KEY_PAIR_SEPARATOR, KEY_SEPARATOR,
};

/// The console sink: colored writes to stdout/stderr and the message
/// operations built on top of them.
///
/// Each write wraps the text in the resolved escape sequence and the reset
/// sequence when color output is available, and emits the raw text
/// otherwise. One call produces one `write_all` followed by one flush, so a
/// multi-line block from a single operation is never interleaved with
/// another thread's output on the same stream.

/// Call-site information passed explicitly into the message operations.
///
/// Built by the [`call_site!`](crate::call_site) macro at the point of use.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

fn write_colored(sink: &mut impl Write, text: &str, color: Color) {
    // The `silent` feature is the compile-time kill switch for all console
    // output; the exit-on-error policy is unaffected.
    if cfg!(feature = "silent") {
        return;
    }

    let escape = color::resolve_color(color);
    if escape.is_empty() {
        let _ = sink.write_all(text.as_bytes());
    } else {
        let _ = write!(sink, "{}{}{}", escape, text, color::RESET_SEQUENCE);
    }
    let _ = sink.flush();
}

/// Writes text to standard output in the requested color.
pub fn write_message(text: &str, color: Color) {
    write_colored(&mut io::stdout().lock(), text, color);
}

/// Writes text to standard error in the requested color.
pub fn write_error_message(text: &str, color: Color) {
    write_colored(&mut io::stderr().lock(), text, color);
}

/// Renders the call-site block used by warning and error messages:
/// separator, file, line number, function, the message itself, separator.
pub fn format_call_site_block(message: &str, site: CallSite) -> String {
    let separator = string_table::get(KEY_SEPARATOR);
    let pair = string_table::get(KEY_PAIR_SEPARATOR);

    let mut out = String::new();
    out.push_str(&separator);
    out.push_str(&format!("{}{}{}\n", string_table::get(KEY_FILE), pair, site.file));
    out.push_str(&format!("{}{}{}\n", string_table::get(KEY_LINE_NUMBER), pair, site.line));
    out.push_str(&format!(
        "{}{}{}\n",
        string_table::get(KEY_FUNCTION_NAME),
        pair,
        site.function
    ));
    out.push_str(message);
    out.push('\n');
    out.push_str(&separator);
    out
}

/// Prints a plain message to stdout in the configured message color.
pub fn print_message(message: impl AsRef<str>) {
    write_message(message.as_ref(), config::snapshot().message_color);
}

/// Prints a plain message to stdout in an explicit color.
pub fn print_message_color(message: impl AsRef<str>, color: Color) {
    write_message(message.as_ref(), color);
}

/// Prints a warning block (call-site info plus message) to stderr in the
/// configured warning color. The application continues.
pub fn print_warning_message(message: impl AsRef<str>, site: CallSite) {
    let block = format_call_site_block(message.as_ref(), site);
    write_error_message(&block, config::snapshot().warning_color);
}

/// Prints an error block to stderr in the configured error color.
///
/// When the exit-on-error toggle is set, the process terminates immediately
/// afterwards with a failure status; nothing is cleaned up.
pub fn print_error_message(message: impl AsRef<str>, site: CallSite) {
    let settings = config::snapshot();
    let block = format_call_site_block(message.as_ref(), site);
    write_error_message(&block, settings.error_color);

    if settings.exit_on_error {
        std::process::exit(1);
    }
}

/// Expands to the enclosing function's path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn marker() {}
        let name = ::std::any::type_name_of_val(&marker);
        &name[..name.len() - "::marker".len()]
    }};
}

/// Builds a [`CallSite`](crate::console::CallSite) for the current location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::console::CallSite {
            file: file!(),
            line: line!(),
            function: $crate::function_name!(),
        }
    };
}

/// Prints a plain console message, optionally in an explicit color.
#[macro_export]
macro_rules! print_message {
    ($message:expr) => {
        $crate::console::print_message($message)
    };
    ($message:expr, $color:expr) => {
        $crate::console::print_message_color($message, $color)
    };
}

/// Prints a warning block with the call site captured automatically.
#[macro_export]
macro_rules! print_warning_message {
    ($message:expr) => {
        $crate::console::print_warning_message($message, $crate::call_site!())
    };
}

/// Prints an error block with the call site captured automatically.
/// Terminates the process when the exit-on-error toggle is set.
#[macro_export]
macro_rules! print_error_message {
    ($message:expr) => {
        $crate::console::print_error_message($message, $crate::call_site!())
    };
}
