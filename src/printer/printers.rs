// src/printer/printers.rs

//! Helper functions for printing colored text to the console.
//!
//! Only the _logsense_ binary prints. Nothing in the parsing, summarizing,
//! or rendering pipeline calls into here.

use crate::common::{
    LEVEL_ERROR,
    LEVEL_INFO,
    LEVEL_WARNING,
};
use crate::debug::printers::de_err;

#[allow(unused_imports)]
use std::io::Write; // for `WriteColor.write_all`

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing plain informative text.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_DEFAULT: Color = Color::White;

/// [`Color`] for printing some user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.1.3/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for printing some user-facing warning messages.
pub const COLOR_WARNING: Color = Color::Yellow;

/// [`Color`] for printing a successful outcome, e.g. a report was written.
pub const COLOR_SUCCESS: Color = Color::Green;

/// [`Color`] for printing `INFO` counts.
pub const COLOR_INFO: Color = Color::Cyan;

/// [`Color`] for a log level word; unknown levels get [`COLOR_DEFAULT`].
pub fn color_level(level: &str) -> Color {
    match level {
        LEVEL_ERROR => COLOR_ERROR,
        LEVEL_WARNING => COLOR_WARNING,
        LEVEL_INFO => COLOR_INFO,
        _ => COLOR_DEFAULT,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Write `value` in `color` to `out`, then reset the color.
pub fn print_colored<W: WriteColor>(
    color: Color,
    value: &[u8],
    out: &mut W,
) -> std::io::Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write_all(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.write_all(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }
    out.flush()?;

    Ok(())
}

/// Print colored output to terminal on stdout.
pub fn print_colored_stdout(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> std::io::Result<()> {
    let choice: ColorChoice = color_choice_opt.unwrap_or(ColorChoice::Auto);
    let mut stdout = ::termcolor::StandardStream::stdout(choice);

    print_colored(color, value, &mut stdout)
}

/// Print colored output to terminal on stderr.
///
/// See an example <https://docs.rs/termcolor/1.1.2/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored_stderr(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> std::io::Result<()> {
    let choice: ColorChoice = color_choice_opt.unwrap_or(ColorChoice::Auto);
    let mut stderr = ::termcolor::StandardStream::stderr(choice);

    print_colored(color, value, &mut stderr)
}
