//! Text formatting policy for the display.
//!
//! Pure helpers with no display access: advisory-marker stripping, the
//! word wrapping used for long effect/palette names, and the percentage
//! shown for quantities.

use core::fmt::Write;

use heapless::{String, Vec};

/// Widest line any supported display can show.
pub const MAX_COLUMNS: usize = 32;

/// Names are laid out on at most this many lines.
pub const MAX_NAME_LINES: usize = 3;

/// Prefix the LED engine puts on entries it does not recommend.
pub const ADVISORY_MARKER: &str = "* ";

/// One line of display text.
pub type TextLine = String<MAX_COLUMNS>;

/// Drop a leading [`ADVISORY_MARKER`], if present.
pub fn strip_advisory_marker(name: &str) -> &str {
    name.strip_prefix(ADVISORY_MARKER).unwrap_or(name)
}

/// Copy at most `width` characters of `text`, without trailing blanks.
pub fn truncated(text: &str, width: usize) -> TextLine {
    let mut line = TextLine::new();
    for c in text.chars().take(width) {
        if line.push(c).is_err() {
            break;
        }
    }
    while line.ends_with(char::is_whitespace) {
        line.pop();
    }
    line
}

/// Lay a name out on lines of `width` characters.
///
/// A name that fits stays on one line. Otherwise it is split on
/// whitespace into at most three tokens (the third keeps the remainder);
/// with exactly three tokens the first two share a line when they fit
/// together. Every line is truncated to `width`.
pub fn split_name(name: &str, width: usize) -> Vec<TextLine, MAX_NAME_LINES> {
    let name = name.trim();
    let mut lines: Vec<TextLine, MAX_NAME_LINES> = Vec::new();

    if name.chars().count() <= width {
        let _ = lines.push(truncated(name, width));
        return lines;
    }

    let tokens = tokens(name);
    match tokens.as_slice() {
        [first, second, third] if first.chars().count() + 1 + second.chars().count() <= width => {
            let mut joined = truncated(first, width);
            let _ = joined.push(' ');
            let _ = joined.push_str(second);
            let _ = lines.push(joined);
            let _ = lines.push(truncated(third, width));
        }
        _ => {
            for token in &tokens {
                let _ = lines.push(truncated(token, width));
            }
        }
    }

    lines
}

/// Split off the first two whitespace-separated words; the rest stays whole.
fn tokens(name: &str) -> Vec<&str, MAX_NAME_LINES> {
    let mut tokens: Vec<&str, MAX_NAME_LINES> = Vec::new();
    let mut rest = name;

    while tokens.len() < MAX_NAME_LINES - 1 {
        match rest.find(char::is_whitespace) {
            Some(end) => {
                let _ = tokens.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        let _ = tokens.push(rest);
    }
    tokens
}

/// Raw `0..=255` value as a whole percentage, rounded down.
pub fn percent(value: u8) -> u8 {
    (value as u16 * 100 / 255) as u8
}

/// Percentage text with a trailing `%`, e.g. `"50%"`.
pub fn format_percent(value: u8) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{}%", percent(value));
    text
}
