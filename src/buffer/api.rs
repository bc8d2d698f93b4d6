//! rift-nav – Buffer abstraction layer
//!
//! This module defines the read-only view the navigation engine consumes,
//! decoupling it from the host editor's storage representation.
//! Implementations may use gap buffers, ropes, piece tables, or a flat
//! `Vec<char>`.
//!
//! ## Indexing model
//!
//! All offsets are **code‑point based** using Unicode scalar values (U+XXXX).
//! Grapheme clusters count as multiple positions.
//!
//! ## Bounds
//!
//! `char_at` returns `None` for any offset at or past `len()`. Every scan in
//! this crate goes through it, so malformed cursors degrade to "not found"
//! instead of panicking.

/// Random access over a sequence of characters.
pub trait CharSeq {
    /// Total number of code‑points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at code‑point `offset`, or `None` past the end.
    fn char_at(&self, offset: usize) -> Option<char>;
}

impl CharSeq for [char] {
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.get(offset).copied()
    }
}

impl CharSeq for Vec<char> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.get(offset).copied()
    }
}

/// Read‑only view of a document plus the caret state a query runs against.
pub trait TextView: CharSeq {
    /// Number of logical lines. Always at least 1.
    fn line_count(&self) -> usize;

    /// Logical line containing `offset`. Offsets past the end map to the last line.
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Code‑point offset of the start of `line` (0‑based).
    /// Lines past the end map to `len()`.
    fn line_start(&self, line: usize) -> usize;

    /// Exclusive end of `line`: the offset of its newline, or `len()` for the last line.
    fn line_end(&self, line: usize) -> usize;

    /// Current cursor offset.
    fn cursor(&self) -> usize;

    /// Active selection as `(start, end)`, or `None` when nothing is selected.
    fn selection(&self) -> Option<(usize, usize)>;

    /// Line holding the cursor.
    fn current_line(&self) -> usize {
        self.line_of_offset(self.cursor())
    }

    /// Contents of `line` without its trailing newline.
    fn line_chars(&self, line: usize) -> Vec<char> {
        let start = self.line_start(line);
        let end = self.line_end(line);
        (start..end).filter_map(|i| self.char_at(i)).collect()
    }

    /// Whether `line` is empty. With `allow_blanks`, whitespace-only lines
    /// count as empty too. Lines past the end are never empty.
    fn is_line_empty(&self, line: usize, allow_blanks: bool) -> bool {
        if line >= self.line_count() {
            return false;
        }
        let start = self.line_start(line);
        let end = self.line_end(line);
        if start >= end {
            return true;
        }
        allow_blanks && (start..end).all(|i| self.char_at(i).is_some_and(char::is_whitespace))
    }
}
