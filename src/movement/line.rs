//! Searches confined to the cursor's line

use super::{signed, unsigned, Direction};
use crate::buffer::TextView;

/// Whether any non-whitespace character lies on `offset`'s line strictly
/// after it (`Forward`) or strictly before it (`Backward`).
pub fn any_non_whitespace<V: TextView + ?Sized>(
    view: &V,
    offset: usize,
    direction: Direction,
) -> bool {
    let line = view.line_of_offset(offset);
    let range = match direction {
        Direction::Forward => offset + 1..view.line_end(line),
        Direction::Backward => view.line_start(line)..offset,
    };

    range
        .filter_map(|i| view.char_at(i))
        .any(|c| !c.is_whitespace())
}

/// Offset of the `|count|`-th `ch` after (count > 0) or before (count < 0)
/// the cursor on its line, as used by `f`, `F`, `t` and `T`.
pub fn find_char_on_line<V: TextView + ?Sized>(view: &V, count: isize, ch: char) -> Option<usize> {
    let line = view.current_line();
    let start = signed(view.line_start(line));
    let end = signed(view.line_end(line));
    let step = Direction::from_count(count).step();
    let wanted = count.unsigned_abs();

    let mut found = 0;
    let mut pos = signed(view.cursor()) + step;
    while pos >= start && pos < end {
        if view.char_at(unsigned(pos)) == Some(ch) {
            found += 1;
            if found == wanted {
                return Some(unsigned(pos));
            }
        }
        pos += step;
    }

    None
}
