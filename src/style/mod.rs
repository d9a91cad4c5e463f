//! ANSI terminal styling
//!
//! Every styled fragment is self-contained:
//! - Starts with a reset
//! - Optional 256-color foreground code
//! - Format codes in fixed order: bold, italic, underline, strikethrough
//! - Ends with a reset, so styling never leaks into later output

use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const COLOR_PREFIX: &str = "\x1b[38;5;";
const FORMAT_BOLD: &str = "\x1b[1m";
const FORMAT_ITALIC: &str = "\x1b[3m";
const FORMAT_UNDERLINE: &str = "\x1b[4m";
const FORMAT_STRIKETHROUGH: &str = "\x1b[9m";

/// Indexed terminal color (256-color palette)
///
/// Negative values mean "terminal default". Anything else is passed
/// through to the terminal as-is, even outside 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub i32);

impl Color {
    pub const DEFAULT: Color = Color(-1);
    pub const BLACK: Color = Color(0);
    pub const RED: Color = Color(1);
    pub const GREEN: Color = Color(2);
    pub const WHITE: Color = Color(7);
    pub const GRAY: Color = Color(244);

    /// Returns true if no color code should be emitted
    pub fn is_default(&self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Color {
    fn from(code: i32) -> Self {
        Color(code)
    }
}

bitflags::bitflags! {
    /// Text format flags, freely combinable
    pub struct StyleFlags: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
    }
}

impl StyleFlags {
    pub const NONE: StyleFlags = StyleFlags::empty();
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::NONE
    }
}

/// Build the styled representation of `text`
pub fn style(text: &str, color: Color, flags: StyleFlags) -> String {
    let mut output = String::with_capacity(text.len() + 32);
    output.push_str(RESET);

    if !color.is_default() {
        output.push_str(COLOR_PREFIX);
        output.push_str(&color.0.to_string());
        output.push('m');
    }

    if flags.contains(StyleFlags::BOLD) {
        output.push_str(FORMAT_BOLD);
    }
    if flags.contains(StyleFlags::ITALIC) {
        output.push_str(FORMAT_ITALIC);
    }
    if flags.contains(StyleFlags::UNDERLINE) {
        output.push_str(FORMAT_UNDERLINE);
    }
    if flags.contains(StyleFlags::STRIKETHROUGH) {
        output.push_str(FORMAT_STRIKETHROUGH);
    }

    output.push_str(text);
    output.push_str(RESET);
    output
}

/// Write an already-styled string and flush immediately
pub fn emit<W: Write>(writer: &mut W, styled: &str) -> io::Result<()> {
    writer.write_all(styled.as_bytes())?;
    writer.flush()
}

/// Style and emit in one step
pub fn print_styled<W: Write>(
    writer: &mut W,
    text: &str,
    color: Color,
    flags: StyleFlags,
) -> io::Result<()> {
    emit(writer, &style(text, color, flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_no_flags_is_reset_wrapped() {
        let out = style("x", Color::DEFAULT, StyleFlags::NONE);
        assert_eq!(out, "\x1b[0mx\x1b[0m");
        assert!(!out.contains(COLOR_PREFIX));
    }

    #[test]
    fn test_color_and_flags_in_stable_order() {
        let out = style("x", Color::GREEN, StyleFlags::BOLD | StyleFlags::UNDERLINE);
        assert_eq!(out, "\x1b[0m\x1b[38;5;2m\x1b[1m\x1b[4mx\x1b[0m");
        assert_eq!(out.matches(COLOR_PREFIX).count(), 1);
        assert!(out.ends_with("x\x1b[0m"));
    }

    #[test]
    fn test_flag_order_independent_of_construction() {
        let a = style("x", Color::RED, StyleFlags::UNDERLINE | StyleFlags::BOLD);
        let b = style("x", Color::RED, StyleFlags::BOLD | StyleFlags::UNDERLINE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_flags() {
        let out = style("y", Color::DEFAULT, StyleFlags::all());
        assert_eq!(out, "\x1b[0m\x1b[1m\x1b[3m\x1b[4m\x1b[9my\x1b[0m");
    }

    #[test]
    fn test_black_emits_color_code() {
        let out = style("x", Color::BLACK, StyleFlags::NONE);
        assert!(out.contains("\x1b[38;5;0m"));
    }

    #[test]
    fn test_out_of_range_color_passthrough() {
        let out = style("x", Color::from(300), StyleFlags::NONE);
        assert!(out.contains("\x1b[38;5;300m"));
    }

    #[test]
    fn test_emit_writes_verbatim() {
        let mut buf = Vec::new();
        emit(&mut buf, "abc").unwrap();
        print_styled(&mut buf, "d", Color::GRAY, StyleFlags::NONE).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "abc\x1b[0m\x1b[38;5;244md\x1b[0m");
    }
}
