//! Number under the cursor (the target of increment/decrement commands)
//!
//! Resolution order for the first candidate at or after the cursor column:
//! hex (`0x` prefix required), octal (leading `0`, more than one digit),
//! single alphabetic character, then signed decimal.

use super::TextRange;
use crate::buffer::TextView;
use bitflags::bitflags;

bitflags! {
    /// Number alphabets recognized in addition to decimal
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NumberFormats: u8 {
        /// Single letters are numbers
        const ALPHA = 0b001;
        /// `0x` prefixed hexadecimal
        const HEX = 0b010;
        /// `0` prefixed octal
        const OCTAL = 0b100;
    }
}

impl NumberFormats {
    /// Names accepted by the `nrformats` option, in flag order
    pub const NAMES: &'static [&'static str] = &["alpha", "hex", "octal"];

    /// Flag for an `nrformats` item name
    #[must_use]
    pub fn from_option_name(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(Self::ALPHA),
            "hex" => Some(Self::HEX),
            "octal" => Some(Self::OCTAL),
            _ => None,
        }
    }
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_candidate(c: char, formats: NumberFormats) -> bool {
    (formats.contains(NumberFormats::ALPHA) && is_alpha(c))
        || (formats.contains(NumberFormats::OCTAL) && is_octal_digit(c))
        || (formats.contains(NumberFormats::HEX) && is_hex_digit(c))
        || is_decimal_digit(c)
}

/// Maximal run around `pos` satisfying `pred`, as `(first, last)` inclusive
fn expand(text: &[char], pos: usize, pred: impl Fn(char) -> bool) -> Option<(usize, usize)> {
    if !text.get(pos).is_some_and(|&c| pred(c)) {
        return None;
    }

    let mut first = pos;
    while first > 0 && pred(text[first - 1]) {
        first -= 1;
    }
    let mut last = pos;
    while last + 1 < text.len() && pred(text[last + 1]) {
        last += 1;
    }

    Some((first, last))
}

/// Number at or after column `col` of a single line of text.
///
/// Returns `[start, end)` in column space, or `None` if the line holds no
/// candidate character from `col` onward.
pub fn number_in_line(line: &[char], col: usize, formats: NumberFormats) -> Option<(usize, usize)> {
    let text: Vec<char> = line.iter().map(|c| c.to_ascii_lowercase()).collect();
    let len = text.len();
    let hex = formats.contains(NumberFormats::HEX);
    let alpha = formats.contains(NumberFormats::ALPHA);
    let mut pos = col;

    loop {
        while pos < len && !is_candidate(text[pos], formats) {
            pos += 1;
        }
        if pos >= len {
            log::debug!("no number char on line");
            return None;
        }

        if !hex {
            break;
        }

        // Step over a `0x` prefix next to the candidate
        let mut digits_at = pos;
        if text[pos] == '0' && text.get(pos + 1) == Some(&'x') {
            digits_at = pos + 2;
        } else if text[pos] == 'x' && pos > 0 && text[pos - 1] == '0' {
            digits_at = pos + 1;
        }

        if let Some((first, last)) = expand(&text, digits_at, is_hex_digit) {
            if first >= 2 && text[first - 2] == '0' && text[first - 1] == 'x' {
                log::debug!("found hex at {}..={}", first - 2, last);
                return Some((first - 2, last + 1));
            }
        }

        // A bare hex letter is ambiguous unless letters are numbers themselves
        let is_hex_letter = matches!(text[pos], 'a'..='f');
        if !is_hex_letter || alpha {
            break;
        }
        pos += 1;
    }

    if formats.contains(NumberFormats::OCTAL) {
        if let Some((first, last)) = expand(&text, pos, is_octal_digit) {
            if text[first] == '0' && last > first {
                log::debug!("found octal at {}..={}", first, last);
                return Some((first, last + 1));
            }
        }
    }

    if alpha && is_alpha(text[pos]) {
        log::debug!("found alpha at {}", pos);
        return Some((pos, pos + 1));
    }

    let (mut first, last) = expand(&text, pos, is_decimal_digit)?;
    if first > 0 && text[first - 1] == '-' {
        first -= 1;
    }

    Some((first, last + 1))
}

/// Number under or after the cursor on the current line.
///
/// Returns `[start, end)` in buffer offsets.
///
/// # Examples
/// ```
/// use rift_nav::buffer::TextBuffer;
/// use rift_nav::movement::number::{number_under_cursor, NumberFormats};
/// use rift_nav::movement::TextRange;
///
/// let buf = TextBuffer::new("val = 0x1F;").with_cursor(8).unwrap();
/// assert_eq!(number_under_cursor(&buf, NumberFormats::HEX), Some(TextRange::new(6, 10)));
/// ```
pub fn number_under_cursor<V: TextView + ?Sized>(
    view: &V,
    formats: NumberFormats,
) -> Option<TextRange> {
    let line = view.current_line();
    let offset = view.line_start(line);
    let col = view.cursor().saturating_sub(offset);
    let text = view.line_chars(line);
    log::trace!("number lookup line={} offset={} col={}", line, offset, col);

    number_in_line(&text, col, formats)
        .map(|(start, end)| TextRange::new(offset + start, offset + end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str, col: usize, formats: NumberFormats) -> Option<(usize, usize)> {
        let chars: Vec<char> = text.chars().collect();
        number_in_line(&chars, col, formats)
    }

    #[test]
    fn test_decimal() {
        assert_eq!(find("x = 42;", 0, NumberFormats::empty()), Some((4, 6)));
        assert_eq!(find("x = 42;", 5, NumberFormats::empty()), Some((4, 6)));
        assert_eq!(find("x = 42", 4, NumberFormats::empty()), Some((4, 6)));
    }

    #[test]
    fn test_negative_decimal() {
        assert_eq!(find("y=-17", 0, NumberFormats::empty()), Some((2, 5)));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(find("no digits here", 0, NumberFormats::empty()), None);
        assert_eq!(find("12 then words", 3, NumberFormats::empty()), None);
        assert_eq!(find("", 0, NumberFormats::all()), None);
    }

    #[test]
    fn test_hex_from_every_column() {
        let text = "val = 0x1F;";
        for col in 6..10 {
            assert_eq!(find(text, col, NumberFormats::HEX), Some((6, 10)), "col {}", col);
        }
    }

    #[test]
    fn test_hex_upper_prefix() {
        assert_eq!(find("0XAB", 0, NumberFormats::HEX), Some((0, 4)));
    }

    #[test]
    fn test_hex_letter_without_prefix_is_skipped() {
        // 'a' in "val" is a hex digit but has no 0x prefix
        assert_eq!(find("val = 0x1F;", 0, NumberFormats::HEX), Some((6, 10)));
        assert_eq!(find("beef 12", 0, NumberFormats::HEX), Some((5, 7)));
    }

    #[test]
    fn test_hex_requires_prefix() {
        assert_eq!(find("1f", 0, NumberFormats::HEX), Some((0, 1)));
    }

    #[test]
    fn test_broken_hex_prefix_falls_back_to_decimal() {
        assert_eq!(find("0xg", 0, NumberFormats::HEX), Some((0, 1)));
    }

    #[test]
    fn test_octal() {
        assert_eq!(find("mode 0755", 5, NumberFormats::OCTAL), Some((5, 9)));
    }

    #[test]
    fn test_lone_zero_is_not_octal() {
        // still found, through the decimal fallback
        assert_eq!(find("-0", 1, NumberFormats::OCTAL), Some((0, 2)));
    }

    #[test]
    fn test_octal_needs_leading_zero() {
        assert_eq!(find("x 755", 0, NumberFormats::OCTAL), Some((2, 5)));
        assert_eq!(find("089", 0, NumberFormats::OCTAL), Some((0, 3)));
    }

    #[test]
    fn test_alpha() {
        assert_eq!(find("  b12", 0, NumberFormats::ALPHA), Some((2, 3)));
        assert_eq!(find("  b12", 3, NumberFormats::ALPHA), Some((3, 5)));
    }

    #[test]
    fn test_alpha_with_hex_takes_letter() {
        assert_eq!(find("cat", 0, NumberFormats::ALPHA | NumberFormats::HEX), Some((0, 1)));
    }

    #[test]
    fn test_from_option_name() {
        assert_eq!(NumberFormats::from_option_name("hex"), Some(NumberFormats::HEX));
        assert_eq!(NumberFormats::from_option_name("octal"), Some(NumberFormats::OCTAL));
        assert_eq!(NumberFormats::from_option_name("bin"), None);
        // option names are lowercase; the flag names belong to bitflags
        assert_eq!(NumberFormats::from_option_name("HEX"), None);
        assert_eq!(NumberFormats::from_name("HEX"), Some(NumberFormats::HEX));
    }
}
