use crate::config;
use crate::console::{self, CallSite};
use crate::string_table::{self, KEY_ERROR_DIALOG_TITLE};

/// Popup dialogs layered over the console message operations.
///
/// With the `popup` cargo feature the dialog is a native message box (rfd);
/// without it the popup degrades to a plain console line, the same way the
/// original behaves on targets with no dialog backend.

/// Icon shown by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupIcon {
    None,
    Info,
    Warning,
    Error,
    Question,
}

/// Shows a blocking message dialog.
#[cfg(feature = "popup")]
pub fn show_popup(message: &str, icon: PopupIcon) {
    let level = match icon {
        PopupIcon::Warning => rfd::MessageLevel::Warning,
        PopupIcon::Error => rfd::MessageLevel::Error,
        // rfd has no icon-less or question level.
        PopupIcon::None | PopupIcon::Info | PopupIcon::Question => rfd::MessageLevel::Info,
    };

    rfd::MessageDialog::new()
        .set_title(string_table::get(KEY_ERROR_DIALOG_TITLE).as_str())
        .set_description(message)
        .set_level(level)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Fallback without a dialog backend: one console line, no icon
/// distinction.
#[cfg(not(feature = "popup"))]
pub fn show_popup(message: &str, _icon: PopupIcon) {
    let title = string_table::get(KEY_ERROR_DIALOG_TITLE);
    console::write_message(
        &format!("[{}] {}\n", title, message),
        crate::color::Color::DEFAULT,
    );
}

/// Prints the message to the console in the popup message color, then shows
/// the dialog. The application continues.
pub fn show_popup_message(message: impl AsRef<str>, icon: PopupIcon) {
    let message = message.as_ref();
    console::write_message(message, config::snapshot().popup_message_color);
    show_popup(message, icon);
}

/// Prints a warning block to stderr in the popup warning color, then shows
/// a warning dialog. The application continues.
pub fn show_popup_warning_message(message: impl AsRef<str>, site: CallSite) {
    let message = message.as_ref();
    let block = console::format_call_site_block(message, site);
    console::write_error_message(&block, config::snapshot().popup_warning_color);
    show_popup(message, PopupIcon::Warning);
}

/// Prints an error block to stderr in the popup error color, then shows an
/// error dialog. When the exit-on-error toggle is set, the process
/// terminates after the dialog is dismissed.
pub fn show_popup_error_message(message: impl AsRef<str>, site: CallSite) {
    let settings = config::snapshot();
    let message = message.as_ref();
    let block = console::format_call_site_block(message, site);
    console::write_error_message(&block, settings.popup_error_color);
    show_popup(message, PopupIcon::Error);

    if settings.exit_on_error {
        std::process::exit(1);
    }
}

/// Shows a popup message, optionally with an explicit icon.
#[macro_export]
macro_rules! popup_message {
    ($message:expr) => {
        $crate::popup::show_popup_message($message, $crate::popup::PopupIcon::None)
    };
    ($message:expr, $icon:expr) => {
        $crate::popup::show_popup_message($message, $icon)
    };
}

/// Shows a warning popup with the call site captured automatically.
#[macro_export]
macro_rules! popup_warning_message {
    ($message:expr) => {
        $crate::popup::show_popup_warning_message($message, $crate::call_site!())
    };
}

/// Shows an error popup with the call site captured automatically.
/// Terminates the process when the exit-on-error toggle is set.
#[macro_export]
macro_rules! popup_error_message {
    ($message:expr) => {
        $crate::popup::show_popup_error_message($message, $crate::call_site!())
    };
}
