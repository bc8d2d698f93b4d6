//! Movement semantics for all navigation operations
//!
//! This module centralizes the logic for determining motion targets and
//! text-object spans (words, camelCase humps, numbers, paragraphs, sections).
//!
//! ## Design
//!
//! Movement is based on character categories:
//! - **Space**: spaces, tabs, newlines
//! - **Word**: letters, numbers, and underscore
//! - **Punctuation**: all other characters (operators, brackets, etc.)
//!
//! In WORD mode (`big_word`) Word and Punctuation collapse into one class:
//! - `hello_world` is ONE word (underscore is a word character)
//! - `foo->bar` is THREE words: `foo`, `->`, `bar`, but ONE WORD
//!
//! Every function here is a pure query over a [`CharSeq`](crate::buffer::CharSeq)
//! or [`TextView`](crate::buffer::TextView). Scans advance one position per step
//! and stop at the buffer edges, so every motion terminates.
//!
//! ## Modules
//!
//! - [`classify`] - Character classification functions
//! - [`word`] - word/WORD start and end motions
//! - [`camel`] - camelCase hump motions
//! - [`text_object`] - word/WORD text-object ranges
//! - [`number`] - number-under-cursor extraction
//! - [`paragraph`] - paragraph and section boundaries
//! - [`line`] - current-line character searches

pub mod camel;
pub mod classify;
pub mod line;
pub mod number;
pub mod paragraph;
pub mod text_object;
pub mod word;

// Re-export commonly used types
pub use classify::{classify, CharClass};
pub use number::NumberFormats;
pub use text_object::WordObject;
pub use word::WordOptions;

/// Direction of a motion; counts carry it in their sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Negative counts move backward, everything else forward
    #[must_use]
    pub fn from_count(count: isize) -> Self {
        if count < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Signed offset delta of one scan step
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A span of offsets.
///
/// Whether `end` is inclusive depends on the query that produced it; each
/// query documents its convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

pub(crate) fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Clamp a signed scan position back into offset space
pub(crate) fn unsigned(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Character at a signed position, `None` outside the sequence
pub(crate) fn char_at<S: crate::buffer::CharSeq + ?Sized>(seq: &S, pos: isize) -> Option<char> {
    usize::try_from(pos).ok().and_then(|p| seq.char_at(p))
}

/// Class of the character at a signed position, `None` outside the sequence
pub(crate) fn class_at<S: crate::buffer::CharSeq + ?Sized>(
    seq: &S,
    pos: isize,
    big_word: bool,
) -> Option<CharClass> {
    char_at(seq, pos).map(|c| classify(c, big_word))
}
