//! Character classification for movement operations

/// Character categories for word movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters, digits and underscore (every non-space char in WORD mode)
    Word,
    /// Symbols and punctuation
    Punctuation,
    /// Whitespace characters (space, tab, newline, etc.)
    Space,
}

/// Classify a character for word boundary detection
///
/// With `big_word` set, punctuation collapses into [`CharClass::Word`] so a
/// WORD is any run of non-space characters.
pub fn classify(c: char, big_word: bool) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if big_word || c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punctuation
    }
}

/// Check if a character is whitespace for range trimming purposes
pub fn is_space(c: char) -> bool {
    classify(c, false) == CharClass::Space
}
