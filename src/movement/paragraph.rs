//! Paragraph and section boundaries (`{`, `}`, `[[`, `]]`, `ip`, `ap`)
//!
//! Lines are walked with signed indices so that running off either end of
//! the document is an ordinary loop exit. A line index outside the document
//! is never empty.

use super::{signed, unsigned, Direction, TextRange};
use crate::buffer::TextView;

/// Form feed, which always starts a section
const FORM_FEED: char = '\u{000C}';

fn line_empty<V: TextView + ?Sized>(view: &V, line: isize, allow_blanks: bool) -> bool {
    line >= 0 && view.is_line_empty(unsigned(line), allow_blanks)
}

/// Start offset of the `count`-th section boundary from the cursor line.
///
/// A section boundary is a line starting with `marker` or a form feed. The
/// first line of the document is never inspected. When fewer than `count`
/// boundaries exist the result clamps to offset 0 (backward) or the last
/// character (forward).
pub fn section_boundary<V: TextView + ?Sized>(
    view: &V,
    marker: char,
    direction: Direction,
    count: usize,
) -> usize {
    let dir = direction.step();
    let max_line = signed(view.line_count());
    let mut line = signed(view.current_line()) + dir;
    let mut remaining = count;
    let mut res = None;

    while line > 0 && line < max_line && remaining > 0 {
        let offset = view.line_start(unsigned(line));
        if matches!(view.char_at(offset), Some(c) if c == marker || c == FORM_FEED) {
            res = Some(offset);
            remaining -= 1;
        }
        line += dir;
    }

    match res {
        Some(offset) if remaining == 0 => offset,
        _ => match direction {
            Direction::Backward => 0,
            Direction::Forward => view.len().saturating_sub(1),
        },
    }
}

/// First line from `line` (walking by `dir`) that is not empty, or the
/// out-of-range line index the walk stopped at.
fn skip_empty_lines<V: TextView + ?Sized>(
    view: &V,
    mut line: isize,
    dir: isize,
    allow_blanks: bool,
) -> isize {
    let max_line = signed(view.line_count());
    while line >= 0 && line < max_line {
        if !line_empty(view, line, allow_blanks) {
            return line;
        }
        line += dir;
    }

    line
}

fn boundary_line_from<V: TextView + ?Sized>(
    view: &V,
    start_line: usize,
    count: isize,
    allow_blanks: bool,
) -> usize {
    let dir = Direction::from_count(count).step();
    let mut remaining = count.unsigned_abs();
    let max_line = signed(view.line_count());
    let mut res = None;

    let mut line = skip_empty_lines(view, signed(start_line), dir, allow_blanks);
    while line >= 0 && line < max_line && remaining > 0 {
        if line_empty(view, line, allow_blanks) {
            res = Some(line);
            remaining -= 1;
            if remaining > 0 {
                line = skip_empty_lines(view, line, dir, allow_blanks);
            }
        }
        line += dir;
    }

    match res {
        Some(line) if remaining == 0 => unsigned(line),
        _ if dir < 0 => 0,
        _ => unsigned(max_line - 1),
    }
}

/// Line of the `|count|`-th paragraph boundary after (count > 0) or before
/// (count < 0) the cursor line.
///
/// The run of empty lines the walk starts in is skipped first, then each
/// empty line met counts as one boundary. `allow_blanks` makes
/// whitespace-only lines count as empty. Clamps to the first or last line.
pub fn paragraph_boundary_line<V: TextView + ?Sized>(
    view: &V,
    count: isize,
    allow_blanks: bool,
) -> usize {
    boundary_line_from(view, view.current_line(), count, allow_blanks)
}

/// Start offset of the line [`paragraph_boundary_line`] finds.
pub fn next_paragraph<V: TextView + ?Sized>(view: &V, count: isize, allow_blanks: bool) -> usize {
    view.line_start(paragraph_boundary_line(view, count, allow_blanks))
}

/// Span of the `ip` / `ap` text object around the cursor line.
///
/// Returns the start offset of the first line and the start offset of the
/// last line included; callers extend `end` to the line end themselves.
pub fn paragraph_range<V: TextView + ?Sized>(view: &V, count: usize, outer: bool) -> TextRange {
    let line = view.current_line();
    let count = signed(count.max(1));
    let boundary = |count: isize| signed(boundary_line_from(view, line, count, true));
    let mut sline = signed(line);
    let mut eline: isize;

    if line_empty(view, sline, true) {
        log::debug!("paragraph range from empty line {}", line);
        sline = skip_empty_lines(view, sline, -1, true);
        if !line_empty(view, sline, true) {
            sline += 1;
        }

        if outer {
            eline = boundary(count);
            if line_empty(view, eline, true) {
                eline -= 1;
            }
        } else {
            eline = skip_empty_lines(view, sline, 1, false);
            if !line_empty(view, eline, true) {
                eline -= 1;
            }
        }
    } else {
        log::debug!("paragraph range from text line {}", line);
        sline = boundary(-count);
        if line_empty(view, sline, true) {
            sline += 1;
        }

        eline = boundary(count);
        if !line_empty(view, eline, true) {
            if outer {
                sline = skip_empty_lines(view, boundary(-count), -1, true);
                if !line_empty(view, sline, true) {
                    sline += 1;
                }
            }
        } else if outer {
            eline = skip_empty_lines(view, eline, 1, true);
            if !line_empty(view, eline, true) {
                eline -= 1;
            }
        } else {
            eline -= 1;
        }
    }

    let last_line = signed(view.line_count()) - 1;
    let sline = unsigned(sline.clamp(0, last_line));
    let eline = unsigned(eline.clamp(0, last_line));
    log::debug!("paragraph range lines {}..={}", sline, eline);

    TextRange::new(view.line_start(sline), view.line_start(eline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextBuffer;

    fn at(text: &str, pos: usize) -> TextBuffer {
        TextBuffer::new(text).with_cursor(pos).unwrap()
    }

    #[test]
    fn test_section_forward() {
        // lines: 0 "a", 1 "{", 2 "b", 3 "{", 4 "c"
        let buf = at("a\n{\nb\n{\nc", 0);
        assert_eq!(section_boundary(&buf, '{', Direction::Forward, 1), 2);
        assert_eq!(section_boundary(&buf, '{', Direction::Forward, 2), 6);
    }

    #[test]
    fn test_section_clamps_when_exhausted() {
        let buf = at("a\n{\nb\n{\nc", 0);
        assert_eq!(section_boundary(&buf, '{', Direction::Forward, 3), 8);
        let buf = at("a\n{\nb\n{\nc", 8);
        assert_eq!(section_boundary(&buf, '{', Direction::Backward, 1), 6);
        assert_eq!(section_boundary(&buf, '{', Direction::Backward, 5), 0);
    }

    #[test]
    fn test_section_form_feed() {
        let buf = at("a\nb\n\u{000C}c", 0);
        assert_eq!(section_boundary(&buf, '{', Direction::Forward, 1), 4);
    }

    #[test]
    fn test_paragraph_forward() {
        // lines: 0 "a", 1 "b", 2 "", 3 "c", 4 "", 5 "d"
        let buf = at("a\nb\n\nc\n\nd", 0);
        assert_eq!(paragraph_boundary_line(&buf, 1, true), 2);
        assert_eq!(paragraph_boundary_line(&buf, 2, true), 4);
        assert_eq!(paragraph_boundary_line(&buf, 3, true), 5);
        assert_eq!(next_paragraph(&buf, 1, true), 4);
    }

    #[test]
    fn test_paragraph_backward() {
        let buf = at("a\nb\n\nc\n\nd", 9);
        assert_eq!(paragraph_boundary_line(&buf, -1, true), 4);
        assert_eq!(paragraph_boundary_line(&buf, -2, true), 2);
        assert_eq!(paragraph_boundary_line(&buf, -3, true), 0);
    }

    #[test]
    fn test_paragraph_skips_starting_blank_run() {
        // cursor on the blank line 2; the next boundary is line 4
        let buf = at("a\nb\n\nc\n\nd", 4);
        assert_eq!(paragraph_boundary_line(&buf, 1, true), 4);
    }

    #[test]
    fn test_paragraph_whitespace_lines() {
        let buf = at("a\n  \nb", 0);
        assert_eq!(paragraph_boundary_line(&buf, 1, true), 1);
        assert_eq!(paragraph_boundary_line(&buf, 1, false), 2);
    }

    #[test]
    fn test_inner_paragraph() {
        // lines: 0 "a", 1 "b", 2 "", 3 "c", 4 "d", 5 "", 6 "e"
        let text = "a\nb\n\nc\nd\n\ne";
        let buf = at(text, 6);
        assert_eq!(paragraph_range(&buf, 1, false), TextRange::new(5, 7));
    }

    #[test]
    fn test_outer_paragraph_takes_trailing_blank() {
        let text = "a\nb\n\nc\nd\n\ne";
        let buf = at(text, 6);
        assert_eq!(paragraph_range(&buf, 1, true), TextRange::new(5, 9));
    }

    #[test]
    fn test_outer_paragraph_at_end_takes_leading_blank() {
        let text = "a\n\nb";
        let buf = at(text, 3);
        assert_eq!(paragraph_range(&buf, 1, true), TextRange::new(2, 3));
    }

    #[test]
    fn test_paragraph_from_blank_line() {
        let text = "a\n\n\nb";
        let buf = at(text, 2);
        assert_eq!(paragraph_range(&buf, 1, false), TextRange::new(2, 3));
    }
}
