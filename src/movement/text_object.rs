//! word/WORD text objects (`iw`, `aw`, `iW`, `aW`) and the word under the cursor
//!
//! The counted object is assembled in three stages: where the cursor sits
//! relative to its class run ([`Anchor`]), which word motions extend the
//! start and end, and which side absorbs adjoining whitespace for outer
//! objects.

use super::word::{next_word_end, next_word_start, WordOptions};
use super::classify::is_space;
use super::{classify, signed, CharClass, Direction, TextRange};
use crate::buffer::TextView;

/// Parameters of a counted word text object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordObject {
    /// Number of words (and interleaved whitespace runs for inner objects)
    pub count: usize,
    pub direction: Direction,
    /// `aw` rather than `iw`
    pub outer: bool,
    /// WORD rather than word
    pub big_word: bool,
    /// A visual selection is active and is being extended
    pub has_selection: bool,
}

impl WordObject {
    #[must_use]
    pub const fn inner(count: usize) -> Self {
        Self {
            count,
            direction: Direction::Forward,
            outer: false,
            big_word: false,
            has_selection: false,
        }
    }

    #[must_use]
    pub const fn outer(count: usize) -> Self {
        Self {
            outer: true,
            ..Self::inner(count)
        }
    }

    #[must_use]
    pub const fn big(mut self) -> Self {
        self.big_word = true;
        self
    }

    #[must_use]
    pub const fn backward(mut self) -> Self {
        self.direction = Direction::Backward;
        self
    }

    #[must_use]
    pub const fn with_selection(mut self, has_selection: bool) -> Self {
        self.has_selection = has_selection;
        self
    }
}

/// Word under the cursor, or the next word to its right on the current line.
///
/// Identifier runs are preferred over punctuation runs. A run whose second
/// character is not a word character is taken as a single character.
/// Returns `[start, end)`, or `None` when nothing qualifies before line end.
pub fn word_under_cursor<V: TextView + ?Sized>(view: &V) -> Option<TextRange> {
    let pos = view.cursor();
    if pos >= view.len() {
        return None;
    }

    let stop = view.line_end(view.current_line());
    let class_of = |i: usize| view.char_at(i).map(|c| classify(c, false));

    let mut start = pos;
    for wanted in [CharClass::Word, CharClass::Punctuation] {
        start = pos;
        if class_of(start) == Some(wanted) {
            while start > 0 && class_of(start - 1) == Some(wanted) {
                start -= 1;
            }
        } else {
            while start < stop && class_of(start) != Some(wanted) {
                start += 1;
            }
        }

        if start != stop {
            break;
        }
    }

    if start == stop {
        return None;
    }

    // next_word_end lands on the last character; single characters need no scan
    let end = if class_of(start + 1) != Some(CharClass::Word) {
        start + 1
    } else {
        next_word_end(view, start, stop, 1, WordOptions::new(false)) + 1
    };

    Some(TextRange::new(start, end))
}

/// Where the cursor sits relative to its class run, plus the object flags
#[derive(Debug, Clone, Copy)]
struct Anchor {
    forward: bool,
    outer: bool,
    multi: bool,
    has_selection: bool,
    start_space: bool,
    on_word_start: bool,
    on_word_end: bool,
}

impl Anchor {
    /// Outer object begun on whitespace
    fn outer_space(&self) -> bool {
        self.start_space && self.outer
    }

    fn extends_start(&self) -> bool {
        (!self.on_word_start && !self.outer_space())
            || self.has_selection
            || (self.multi && !self.forward)
    }

    fn extends_end(&self) -> bool {
        !self.on_word_end
            || self.has_selection
            || (self.multi && self.forward)
            || self.outer_space()
    }

    /// The run under the cursor counts as a full unit only when the cursor
    /// is already on its start
    fn start_credit(&self) -> isize {
        isize::from(self.on_word_start && !self.has_selection)
    }

    fn end_credit(&self) -> isize {
        isize::from(self.on_word_end && !self.has_selection && !self.outer_space())
    }

    fn initial_go_back(&self) -> bool {
        (self.start_space && !self.has_selection)
            || (!self.start_space && self.has_selection && !self.on_word_start)
    }

    fn initial_go_forward(&self) -> bool {
        self.forward
            && self.outer
            && ((!self.start_space && !self.on_word_end)
                || (self.start_space && self.on_word_end && self.has_selection))
    }
}

/// Span of a counted word/WORD text object around the cursor.
///
/// Returns `[start, end]` with an **inclusive** end, or `None` for an empty
/// buffer or a cursor past the last character.
pub fn word_object<V: TextView + ?Sized>(view: &V, obj: WordObject) -> Option<TextRange> {
    let max = view.len();
    let pos = view.cursor();
    if pos >= max {
        return None;
    }

    let big = obj.big_word;
    let count = signed(obj.count.max(1));
    let class_of = |i: usize, big: bool| view.char_at(i).map(|c| classify(c, big));
    let is_space_at = |i: usize| view.char_at(i).is_some_and(is_space);

    let anchor = Anchor {
        forward: obj.direction == Direction::Forward,
        outer: obj.outer,
        multi: count > 1,
        has_selection: obj.has_selection,
        start_space: class_of(pos, big) == Some(CharClass::Space),
        on_word_start: pos == 0 || class_of(pos - 1, big) != class_of(pos, big),
        on_word_end: class_of(pos + 1, big) != class_of(pos, big),
    };
    log::debug!("word object {:?} at {}: {:?}", obj, pos, anchor);

    let opts = WordOptions::new(big).with_space_words(!obj.outer);

    let mut start = pos;
    if anchor.extends_start() {
        let n = if anchor.forward {
            -1
        } else {
            -(count - anchor.start_credit())
        };
        start = next_word_start(view, pos, max, n, opts).min(max - 1);
    }

    let mut end = pos;
    if anchor.extends_end() {
        let n = if anchor.forward {
            count - anchor.end_credit()
        } else {
            1
        };
        end = next_word_end(view, pos, max, n, opts.with_stay_at_end(true));
    }

    // Whether the first word after the cursor is followed by something other than whitespace
    let first_end_abuts = || {
        let first_end = if anchor.multi {
            next_word_end(view, pos, max, 1, WordOptions::new(big).with_stay_at_end(true))
        } else {
            end
        };
        first_end < max && !is_space_at(first_end + 1)
    };

    let mut go_back = anchor.initial_go_back();
    if anchor.forward && anchor.outer && first_end_abuts() {
        go_back = true;
    }
    if !anchor.forward && anchor.outer_space() && pos > 0 && !is_space_at(pos - 1) {
        go_back = true;
    }

    let mut go_forward = anchor.initial_go_forward();
    if !go_forward && anchor.forward && anchor.outer && first_end_abuts() {
        go_forward = true;
    }
    if !go_forward
        && anchor.forward
        && anchor.outer
        && !anchor.start_space
        && !anchor.has_selection
        && end < max
        && class_of(end + 1, !big) != class_of(end, !big)
    {
        go_forward = true;
    }

    log::debug!(
        "word object nominal {}..={} go_back={} go_forward={}",
        start,
        end,
        go_back,
        go_forward
    );

    if go_forward {
        while end < max && is_space_at(end + 1) {
            end += 1;
        }
    }
    if go_back {
        while start > 0 && is_space_at(start - 1) {
            start -= 1;
        }
    }

    Some(TextRange::new(start, end))
}
