//! Quote-aware delimiter matching (`%`, `[(`, `])`, `i(`, `a{`, ...)
//!
//! A linear scan tracks whether it is inside a double-quoted string or a
//! single-quoted character literal and how many same-type pairs it has
//! entered. Delimiters inside quotes are ignored, a backslash escapes the
//! quote after it, and a newline ends any open literal. The quote state at
//! the starting offset is seeded by re-scanning its line up to that offset.

use super::PairTable;
use crate::buffer::{CharSeq, TextView};
use crate::movement::{signed, unsigned, Direction, TextRange};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct QuoteState {
    in_string: bool,
    in_char: bool,
}

impl QuoteState {
    fn quoted(&self) -> bool {
        self.in_string || self.in_char
    }

    /// Apply the quote toggles for `ch` at `pos`
    fn toggle<S: CharSeq + ?Sized>(&mut self, seq: &S, pos: usize, ch: char) {
        match ch {
            '"' if !self.in_char && !is_escaped(seq, pos) => self.in_string = !self.in_string,
            '\'' if !self.in_string && !is_escaped(seq, pos) => self.in_char = !self.in_char,
            _ => {}
        }
    }
}

fn is_escaped<S: CharSeq + ?Sized>(seq: &S, pos: usize) -> bool {
    pos > 0 && seq.char_at(pos - 1) == Some('\\')
}

/// Quote state just before `pos`, derived from the start of its line
fn quote_state_at<S: CharSeq + ?Sized>(seq: &S, pos: usize) -> QuoteState {
    let mut state = QuoteState::default();
    if seq.char_at(pos) == Some('\n') {
        return state;
    }

    let mut line_start = pos.min(seq.len());
    while line_start > 0 && seq.char_at(line_start - 1) != Some('\n') {
        line_start -= 1;
    }

    for i in line_start..pos {
        if let Some(ch) = seq.char_at(i) {
            state.toggle(seq, i, ch);
        }
    }

    state
}

/// Offset of the `count`-th unmatched `target` scanning from just past `pos`
/// in `direction`.
///
/// `nested` is the other side of the pair: each unquoted `nested` met on
/// the way opens a same-type pair whose `target` is skipped. When fewer
/// than `count` targets exist the last one found is returned.
///
/// # Examples
/// ```
/// use rift_nav::movement::Direction;
/// use rift_nav::pairs::find_block_location;
///
/// let text: Vec<char> = "(a(b)c)".chars().collect();
/// assert_eq!(find_block_location(&text, '(', ')', Direction::Forward, 0, 1), Some(6));
/// ```
pub fn find_block_location<S: CharSeq + ?Sized>(
    seq: &S,
    nested: char,
    target: char,
    direction: Direction,
    pos: usize,
    count: usize,
) -> Option<usize> {
    let mut state = quote_state_at(seq, pos);
    let step = direction.step();
    let len = signed(seq.len());

    let mut res = None;
    let mut stack = 0usize;
    let mut remaining = count;
    let mut p = signed(pos) + step;
    while p >= 0 && p < len && remaining > 0 {
        let i = unsigned(p);
        let Some(ch) = seq.char_at(i) else {
            break;
        };

        if ch == target && !state.quoted() {
            if stack == 0 {
                res = Some(i);
                remaining -= 1;
            } else {
                stack -= 1;
            }
        } else if ch == nested && !state.quoted() {
            stack += 1;
        } else if ch == '\n' {
            state = QuoteState::default();
        } else {
            state.toggle(seq, i, ch);
        }

        p += step;
    }

    res
}

/// `[(`-style jump: offset of the `count`-th unmatched `ch` around the cursor.
///
/// An opener is searched backward and a closer forward. Returns `None` when
/// `ch` is not a configured delimiter or no such delimiter exists.
pub fn match_unmatched<V: TextView + ?Sized>(
    view: &V,
    table: &PairTable,
    ch: char,
    count: usize,
) -> Option<usize> {
    let pair = table.lookup(ch)?;
    let direction = if pair.is_open {
        Direction::Backward
    } else {
        Direction::Forward
    };

    find_block_location(view, pair.partner(), ch, direction, view.cursor(), count)
}

/// `%`: find the first delimiter from the cursor to the end of its line and
/// return the offset of its partner, which may lie anywhere in the buffer.
pub fn match_on_current_line<V: TextView + ?Sized>(view: &V, table: &PairTable) -> Option<usize> {
    let end = view.line_end(view.current_line());
    let (pos, ch, pair) = (view.cursor()..end).find_map(|pos| {
        let ch = view.char_at(pos)?;
        table.lookup(ch).map(|pair| (pos, ch, pair))
    })?;

    let direction = if pair.is_open {
        Direction::Forward
    } else {
        Direction::Backward
    };

    find_block_location(view, ch, pair.partner(), direction, pos, 1)
}

/// Span of the `count`-th enclosing `ch` block around the cursor, or around
/// the lower bound of the selection when one is active.
///
/// The outer span covers both delimiters. The inner span drops the
/// delimiters, a newline right after the opener, and, when the closer sits
/// on an otherwise blank line, that whole line. Both ends are **inclusive**;
/// the inner span of an empty block ends before it starts.
pub fn block_range<V: TextView + ?Sized>(
    view: &V,
    table: &PairTable,
    ch: char,
    count: usize,
    outer: bool,
) -> Option<TextRange> {
    let pair = table.lookup(ch)?;
    let pos = match view.selection() {
        Some((start, end)) => start.min(end),
        None => view.cursor(),
    };

    let mut bstart =
        find_block_location(view, pair.close, pair.open, Direction::Backward, pos, count)?;
    let mut bend =
        find_block_location(view, pair.open, pair.close, Direction::Forward, bstart, 1)?;

    if !outer {
        bstart += 1;
        if view.char_at(bstart) == Some('\n') {
            bstart += 1;
        }

        let line_start = view.line_start(view.line_of_offset(bend));
        let all_white =
            (line_start..bend).all(|i| view.char_at(i).is_some_and(char::is_whitespace));
        if all_white {
            bend = line_start.saturating_sub(2);
        } else {
            bend -= 1;
        }
    }

    Some(TextRange::new(bstart, bend))
}
