use is_terminal::IsTerminal;
use lazy_static::lazy_static;

/// Display colors and ANSI escape-code resolution.
///
/// Colors carry an RGB triple plus an alpha channel that acts as a brightness
/// multiplier, not a compositing weight: each channel is scaled by
/// `alpha / 255` (integer truncation) before being encoded as a truecolor
/// escape sequence. An alpha of zero is the "off" sentinel and always resolves
/// to the reset sequence, regardless of the RGB channels.

/// Highest value a single color channel can take.
pub const MAX_CHANNEL_VALUE: u8 = u8::MAX;

/// Brightness applied to the standard palette. Full-intensity primaries are
/// glaring on dark terminals, so the defaults sit slightly below maximum.
pub const DEFAULT_ALPHA: u8 = 200;

/// Brightness of the bright palette variants.
pub const MAX_ALPHA: u8 = MAX_CHANNEL_VALUE;

/// The ANSI reset sequence returned for the alpha-off sentinel.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// An RGBA display color.
///
/// `alpha` is brightness: `0` means "no color requested" (resolves to the
/// reset sequence), `255` means full intensity.
///
/// # Examples
///
/// ```
/// use debug_print::color::{escape_code, Color, RESET_SEQUENCE};
///
/// assert_eq!(escape_code(Color::DEFAULT), RESET_SEQUENCE);
/// assert_eq!(escape_code(Color::BRIGHT_RED), "\x1b[38;2;255;128;128m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Creates a color at the standard (slightly dimmed) brightness.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: DEFAULT_ALPHA }
    }

    /// Creates a color with an explicit brightness value.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// The terminal's own foreground color; resolves to the reset sequence.
    pub const DEFAULT: Color = Color::rgba(0, 0, 0, 0);

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BRIGHT_BLACK: Color = Color::rgba(64, 64, 64, MAX_ALPHA);
    pub const BRIGHT_RED: Color = Color::rgba(255, 128, 128, MAX_ALPHA);
    pub const BRIGHT_GREEN: Color = Color::rgba(128, 255, 128, MAX_ALPHA);
    pub const BRIGHT_YELLOW: Color = Color::rgba(255, 255, 128, MAX_ALPHA);
    pub const BRIGHT_BLUE: Color = Color::rgba(128, 128, 255, MAX_ALPHA);
    pub const BRIGHT_MAGENTA: Color = Color::rgba(255, 128, 255, MAX_ALPHA);
    pub const BRIGHT_CYAN: Color = Color::rgba(128, 255, 255, MAX_ALPHA);
    pub const BRIGHT_WHITE: Color = Color::rgba(255, 255, 255, MAX_ALPHA);
}

/// Resolves a color into its ANSI escape sequence.
///
/// The alpha-off sentinel (`alpha == 0`) unconditionally yields
/// [`RESET_SEQUENCE`]. Every other alpha scales the channels by
/// `alpha / 255` with integer truncation and encodes a `38;2;R;G;B`
/// truecolor sequence. The scaling dims the color; it is not alpha
/// blending against a background.
pub fn escape_code(color: Color) -> String {
    if color.alpha == 0 {
        return RESET_SEQUENCE.to_string();
    }

    let alpha = color.alpha as u16;
    let red = (color.red as u16 * alpha / MAX_ALPHA as u16) as u8;
    let green = (color.green as u16 * alpha / MAX_ALPHA as u16) as u8;
    let blue = (color.blue as u16 * alpha / MAX_ALPHA as u16) as u8;

    format!("\x1b[38;2;{};{};{}m", red, green, blue)
}

/// Resolves a color against the sink's capability.
///
/// Returns the empty string when color output is unavailable, whatever the
/// requested color; otherwise the escape sequence from [`escape_code`].
pub fn resolve_color(color: Color) -> String {
    if !color_output_available() {
        return String::new();
    }
    escape_code(color)
}

lazy_static! {
    // Probed once; the result holds for the process lifetime.
    static ref COLOR_OUTPUT_AVAILABLE: bool = probe_color_support();
}

/// Whether the standard output stream accepts ANSI color sequences.
///
/// Determined once per process: stdout must be a terminal and `TERM` must be
/// set to something other than `dumb`.
pub fn color_output_available() -> bool {
    *COLOR_OUTPUT_AVAILABLE
}

fn probe_color_support() -> bool {
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_off_sentinel_resolves_to_reset() {
        assert_eq!(escape_code(Color::DEFAULT), RESET_SEQUENCE);
        // The sentinel wins no matter what the channels say.
        assert_eq!(escape_code(Color::rgba(10, 20, 30, 0)), RESET_SEQUENCE);
    }

    #[test]
    fn test_bright_palette_is_unscaled() {
        assert_eq!(escape_code(Color::BRIGHT_RED), "\x1b[38;2;255;128;128m");
        assert_eq!(escape_code(Color::BRIGHT_WHITE), "\x1b[38;2;255;255;255m");
    }

    #[test]
    fn test_standard_palette_is_dimmed() {
        // 255 * 200 / 255 = 200, truncated integer math
        assert_eq!(escape_code(Color::RED), "\x1b[38;2;200;0;0m");
        assert_eq!(escape_code(Color::YELLOW), "\x1b[38;2;200;200;0m");
    }

    #[test]
    fn test_scaling_truncates() {
        // 100 * 128 / 255 = 50.19 -> 50
        assert_eq!(escape_code(Color::rgba(100, 0, 0, 128)), "\x1b[38;2;50;0;0m");
    }
}
