//! camelCase hump motions
//!
//! These scan character by character rather than by class run. A hump
//! starts at an uppercase letter that follows a non-uppercase character or
//! precedes a lowercase one, at a lowercase letter that follows a non-letter,
//! or at a digit that follows a non-digit. Hump ends mirror the same rules
//! looking at the following characters.

use super::{char_at, signed, unsigned, Direction};
use crate::buffer::CharSeq;

fn is_upper(c: Option<char>) -> bool {
    c.is_some_and(char::is_uppercase)
}

fn is_lower(c: Option<char>) -> bool {
    c.is_some_and(char::is_lowercase)
}

fn is_letter(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphabetic)
}

fn is_digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

/// Offset of the `|count|`-th camelCase hump start after (count > 0) or
/// before (count < 0) `pos`.
///
/// `pos` itself never counts. Returns `None` when fewer than `|count|` humps
/// exist before the buffer edge; a `pos` outside `[0, size)` is returned as is.
///
/// # Examples
/// ```
/// use rift_nav::movement::camel::next_camel_start;
///
/// let text: Vec<char> = "fooBarBaz".chars().collect();
/// assert_eq!(next_camel_start(&text, 0, text.len(), 1), Some(3));
/// assert_eq!(next_camel_start(&text, 0, text.len(), 2), Some(6));
/// assert_eq!(next_camel_start(&text, 0, text.len(), 3), None);
/// ```
pub fn next_camel_start<S: CharSeq + ?Sized>(
    seq: &S,
    pos: usize,
    size: usize,
    count: isize,
) -> Option<usize> {
    scan_humps(seq, pos, size, count, |seq, pos, size| {
        let here = char_at(seq, pos);
        let prev = if pos == 0 { None } else { char_at(seq, pos - 1) };
        let next = char_at(seq, pos + 1);
        if is_upper(here) {
            pos == 0 || !is_upper(prev) || pos == size - 1 || is_lower(next)
        } else if is_lower(here) {
            pos == 0 || !is_letter(prev)
        } else if is_digit(here) {
            pos == 0 || !is_digit(prev)
        } else {
            false
        }
    })
}

/// Offset of the `|count|`-th camelCase hump end after (count > 0) or
/// before (count < 0) `pos`. Same counting and failure rules as
/// [`next_camel_start`].
pub fn next_camel_end<S: CharSeq + ?Sized>(
    seq: &S,
    pos: usize,
    size: usize,
    count: isize,
) -> Option<usize> {
    scan_humps(seq, pos, size, count, |seq, pos, size| {
        let here = char_at(seq, pos);
        let next = char_at(seq, pos + 1);
        let after = char_at(seq, pos + 2);
        let last = pos == size - 1;
        if is_upper(here) {
            last || !is_letter(next) || (is_upper(next) && pos <= size - 2 && is_lower(after))
        } else if is_lower(here) {
            last || !is_lower(next)
        } else if is_digit(here) {
            last || !is_digit(next)
        } else {
            false
        }
    })
}

fn scan_humps<S, F>(seq: &S, pos: usize, size: usize, count: isize, is_boundary: F) -> Option<usize>
where
    S: CharSeq + ?Sized,
    F: Fn(&S, isize, isize) -> bool,
{
    if pos >= size {
        return Some(pos);
    }

    let step = Direction::from_count(count).step();
    let wanted = count.unsigned_abs();
    let size = signed(size);

    let mut found = 0;
    let mut res = signed(pos);
    let mut pos = res + step;
    while pos >= 0 && pos < size && found < wanted {
        if is_boundary(seq, pos, size) {
            res = pos;
            found += 1;
        }
        pos += step;
    }

    if found < wanted {
        None
    } else {
        Some(unsigned(res))
    }
}
