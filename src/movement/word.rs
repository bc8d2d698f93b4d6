//! word/WORD start and end motions (`w`, `b`, `e`, `ge` and their WORD forms)
//!
//! Each motion repeats a single-step primitive `|count|` times. A repetition
//! that lands back on the origin or on either buffer edge ends the loop, which
//! is what clamps counted motions at the start and end of the buffer.

use super::{class_at, signed, unsigned, CharClass, Direction};
use crate::buffer::CharSeq;

/// Flags shared by the word motions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordOptions {
    /// WORD motion: punctuation counts as part of the word
    pub big_word: bool,
    /// Whitespace runs are words of their own instead of being skipped
    pub space_words: bool,
    /// Remain on a word end already under the cursor. Forward end motions
    /// always behave this way; the flag is carried for the `e` command's API.
    pub stay_at_end: bool,
}

impl WordOptions {
    /// Options for `w`/`e` (`big_word = false`) or `W`/`E` (`big_word = true`)
    #[must_use]
    pub const fn new(big_word: bool) -> Self {
        Self {
            big_word,
            space_words: false,
            stay_at_end: false,
        }
    }

    #[must_use]
    pub const fn with_space_words(mut self, space_words: bool) -> Self {
        self.space_words = space_words;
        self
    }

    #[must_use]
    pub const fn with_stay_at_end(mut self, stay_at_end: bool) -> Self {
        self.stay_at_end = stay_at_end;
        self
    }
}

/// Skip whitespace starting at `offset`, moving by `step`
///
/// Returns the first non-space offset, or the boundary reached when the scan
/// runs out of the `[0, size)` window: `-1` going backward, `size` going forward.
pub fn skip_space<S: CharSeq + ?Sized>(seq: &S, offset: isize, step: isize, size: usize) -> isize {
    let size = signed(size);
    let mut offset = offset;
    while offset >= 0 && offset < size {
        if class_at(seq, offset, false) != Some(CharClass::Space) {
            break;
        }
        offset += step;
    }

    offset
}

/// Offset of the start of the `|count|`-th next (count > 0) or previous
/// (count < 0) word.
///
/// A forward motion from the last word stays put; a motion that runs off the
/// end returns `size - 1`, and `pos >= size` is returned unchanged.
///
/// # Examples
/// ```
/// use rift_nav::movement::word::{next_word_start, WordOptions};
///
/// let text: Vec<char> = "foo bar baz".chars().collect();
/// assert_eq!(next_word_start(&text, 0, text.len(), 1, WordOptions::new(false)), 4);
/// assert_eq!(next_word_start(&text, 8, text.len(), -2, WordOptions::new(false)), 0);
/// ```
pub fn next_word_start<S: CharSeq + ?Sized>(
    seq: &S,
    pos: usize,
    size: usize,
    count: isize,
    opts: WordOptions,
) -> usize {
    let step = Direction::from_count(count).step();
    let origin = signed(pos);
    let size = signed(size);

    let mut res = origin;
    for _ in 0..count.unsigned_abs() {
        res = word_start_step(seq, res, size, step, opts);
        if res == origin || res == 0 || res == size - 1 {
            break;
        }
    }

    unsigned(res)
}

fn word_start_step<S: CharSeq + ?Sized>(
    seq: &S,
    mut pos: isize,
    size: isize,
    step: isize,
    opts: WordOptions,
) -> isize {
    let big = opts.big_word;

    // Going back, skip the space run before us so we end at a word start
    if step < 0 && pos > 0 {
        if class_at(seq, pos - 1, big) == Some(CharClass::Space) && !opts.space_words {
            pos = skip_space(seq, pos - 1, step, unsigned(size)) + 1;
        }
        if pos > 0 && class_at(seq, pos, big) != class_at(seq, pos - 1, big) {
            pos += step;
        }
    }

    let mut res = pos;
    if pos < 0 || pos >= size {
        return pos;
    }

    let mut ty = class_at(seq, pos, big);
    if ty == Some(CharClass::Space) && step < 0 && pos > 0 && !opts.space_words {
        ty = class_at(seq, pos - 1, big);
    }

    let mut found = false;
    pos += step;
    while pos >= 0 && pos < size && !found {
        let new_ty = class_at(seq, pos, big);
        if new_ty != ty {
            if new_ty == Some(CharClass::Space) && step >= 0 && !opts.space_words {
                pos = skip_space(seq, pos, step, unsigned(size));
                res = pos;
            } else if step < 0 {
                res = pos + 1;
            } else {
                res = pos;
            }
            found = true;
        }
        pos += step;
    }

    if found {
        if res < 0 {
            res = 0;
        } else if res >= size {
            res = size - 1;
        }
    } else if pos <= 0 {
        res = 0;
    }

    res
}

/// Offset of the end of the `|count|`-th next (count > 0) or previous
/// (count < 0) word.
///
/// Forward motions skip a following space run first so repeated `e` lands on
/// successive word ends; backward motions land on the last character of the
/// preceding word. Running off the end returns `size - 1`.
pub fn next_word_end<S: CharSeq + ?Sized>(
    seq: &S,
    pos: usize,
    size: usize,
    count: isize,
    opts: WordOptions,
) -> usize {
    let step = Direction::from_count(count).step();
    let origin = signed(pos);
    let size = signed(size);

    let mut res = origin;
    for _ in 0..count.unsigned_abs() {
        res = word_end_step(seq, res, size, step, opts);
        if res == origin || res == 0 || res == size - 1 {
            break;
        }
    }

    unsigned(res)
}

fn word_end_step<S: CharSeq + ?Sized>(
    seq: &S,
    mut pos: isize,
    size: isize,
    step: isize,
    opts: WordOptions,
) -> isize {
    let big = opts.big_word;

    // Going forward, skip the space run after us so we start inside a word
    if step > 0 && pos < size - 1 {
        if class_at(seq, pos + 1, big) == Some(CharClass::Space) && !opts.space_words {
            pos = skip_space(seq, pos + 1, step, unsigned(size)) - 1;
        }
        if pos < size - 1 && class_at(seq, pos, big) != class_at(seq, pos + 1, big) {
            pos += step;
        }
    }

    let mut res = pos;
    if pos < 0 || pos >= size {
        return pos;
    }

    let mut ty = class_at(seq, pos, big);
    if ty == Some(CharClass::Space) && step >= 0 && pos < size - 1 && !opts.space_words {
        ty = class_at(seq, pos + 1, big);
    }

    let mut found = false;
    pos += step;
    while pos >= 0 && pos < size && !found {
        let new_ty = class_at(seq, pos, big);
        if new_ty != ty {
            if step >= 0 {
                res = pos - 1;
            } else if new_ty == Some(CharClass::Space) && !opts.space_words {
                pos = skip_space(seq, pos, step, unsigned(size));
                res = pos;
            } else {
                res = pos;
            }
            found = true;
        }
        pos += step;
    }

    if found {
        if res < 0 {
            res = 0;
        } else if res >= size {
            res = size - 1;
        }
    } else if pos == size {
        res = size - 1;
    }

    res
}
