//! Delimiter pairs and structural matching
//!
//! The pair table comes from the `matchpairs` option and is parsed lazily.
//! [`PairCache`] owns the parsed table and rebuilds it when the settings
//! revision moves on, so parsing happens once per configuration change
//! rather than once per `%`.

use crate::settings::NavSettings;
use std::cell::RefCell;
use std::rc::Rc;

pub mod matching;

pub use matching::{block_range, find_block_location, match_on_current_line, match_unmatched};

/// Default pair list: braces, parentheses, brackets, angle brackets
pub const DEFAULT_MATCH_PAIRS: &[&str] = &["{:}", "(:)", "[:]", "<:>"];

/// A delimiter pair together with which side a character was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairMatch {
    pub open: char,
    pub close: char,
    /// The looked-up character was the opening side
    pub is_open: bool,
}

impl PairMatch {
    /// The character on the other side of the pair
    #[must_use]
    pub fn partner(&self) -> char {
        if self.is_open {
            self.close
        } else {
            self.open
        }
    }
}

/// Ordered list of `(open, close)` delimiter pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    pairs: Vec<(char, char)>,
}

impl PairTable {
    /// Parse `<open><sep><close>` tokens. Tokens that are not exactly three
    /// characters long are skipped.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            let chars: Vec<char> = token.chars().collect();
            if let [open, _, close] = chars[..] {
                pairs.push((open, close));
            } else {
                log::debug!("skipping malformed match pair {:?}", token);
            }
        }

        Self { pairs }
    }

    #[must_use]
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// The first pair `ch` belongs to. A character listed as an opener in an
    /// earlier pair wins over a later closer.
    #[must_use]
    pub fn lookup(&self, ch: char) -> Option<PairMatch> {
        self.pairs.iter().find_map(|&(open, close)| {
            if ch == open {
                Some(PairMatch { open, close, is_open: true })
            } else if ch == close {
                Some(PairMatch { open, close, is_open: false })
            } else {
                None
            }
        })
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.lookup(ch).is_some()
    }
}

impl Default for PairTable {
    fn default() -> Self {
        Self::from_tokens(DEFAULT_MATCH_PAIRS)
    }
}

/// Lazily built pair table, stamped with the settings revision it came from
#[derive(Debug, Default)]
pub struct PairCache {
    cached: RefCell<Option<(u64, Rc<PairTable>)>>,
}

impl PairCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current table, rebuilt first if absent or built from older settings
    pub fn table(&self, settings: &NavSettings) -> Rc<PairTable> {
        let revision = settings.revision();
        let mut cached = self.cached.borrow_mut();
        match cached.as_ref() {
            Some((built_at, table)) if *built_at == revision => Rc::clone(table),
            _ => {
                log::debug!("rebuilding match pairs at settings revision {}", revision);
                let table = Rc::new(PairTable::from_tokens(&settings.options().match_pairs));
                *cached = Some((revision, Rc::clone(&table)));
                table
            }
        }
    }

    /// Drop the cached table; the next lookup rebuilds it
    pub fn invalidate(&self) {
        self.cached.borrow_mut().take();
    }

    #[must_use]
    pub fn is_built(&self) -> bool {
        self.cached.borrow().is_some()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
