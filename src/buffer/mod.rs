//! Text buffer snapshot used by navigation queries
//!
//! `TextBuffer` holds a document as code points together with a line index,
//! a cursor and an optional selection. Queries never mutate it.

use crate::error::{codes, ErrorType, NavError};
use std::fmt::{self, Display};

pub mod api;
pub mod line_index;

pub use api::{CharSeq, TextView};
use line_index::LineIndex;

/// Immutable text snapshot with caret state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
    /// Line index over `chars`
    pub line_index: LineIndex,
    /// Cursor position (Character index)
    cursor: usize,
    /// Selection bounds, if any
    selection: Option<(usize, usize)>,
}

impl TextBuffer {
    /// Create a buffer holding `text` with the cursor at offset 0
    #[must_use]
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let line_index = LineIndex::from_chars(&chars);
        TextBuffer {
            chars,
            line_index,
            cursor: 0,
            selection: None,
        }
    }

    /// Place the cursor; `pos == len()` is allowed as the one-past-end position
    pub fn with_cursor(mut self, pos: usize) -> Result<Self, NavError> {
        self.set_cursor(pos)?;
        Ok(self)
    }

    /// Select `[start, end]`; the order of the bounds does not matter
    pub fn with_selection(mut self, start: usize, end: usize) -> Result<Self, NavError> {
        let len = self.len();
        if start > len || end > len {
            return Err(NavError::new(
                ErrorType::Buffer,
                codes::INVALID_SELECTION,
                format!("Selection {}..{} out of bounds (len: {})", start, end, len),
            ));
        }
        self.selection = if start == end { None } else { Some((start, end)) };
        Ok(self)
    }

    pub fn set_cursor(&mut self, pos: usize) -> Result<(), NavError> {
        let len = self.len();
        if pos > len {
            return Err(NavError::new(
                ErrorType::Buffer,
                codes::INVALID_CURSOR,
                format!("Cursor position {} out of bounds (len: {})", pos, len),
            ));
        }

        self.cursor = pos;
        Ok(())
    }

    /// All characters of the buffer
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Text of the given range `[start, end)`
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl CharSeq for TextBuffer {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }
}

impl TextView for TextBuffer {
    fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.line_index.get_line_at(offset)
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_index.get_start(line).unwrap_or(self.chars.len())
    }

    fn line_end(&self, line: usize) -> usize {
        self.line_index
            .get_end(line, self.chars.len())
            .unwrap_or(self.chars.len())
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }
}
