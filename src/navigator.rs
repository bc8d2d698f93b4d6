//! Navigation facade
//!
//! [`Navigator`] bundles the option state with the lazily built pair table
//! so callers can run any query against a [`TextView`] without threading
//! configuration through by hand. The underlying functions stay public in
//! [`crate::movement`] and [`crate::pairs`] for callers holding raw sequences.

use crate::buffer::TextView;
use crate::error::Result;
use crate::movement::camel::{next_camel_end, next_camel_start};
use crate::movement::line::{any_non_whitespace, find_char_on_line};
use crate::movement::number::number_under_cursor;
use crate::movement::paragraph::{
    next_paragraph, paragraph_boundary_line, paragraph_range, section_boundary,
};
use crate::movement::text_object::{word_object, word_under_cursor};
use crate::movement::word::{next_word_end, next_word_start};
use crate::movement::{Direction, NumberFormats, TextRange, WordObject, WordOptions};
use crate::pairs::{block_range, match_on_current_line, match_unmatched, PairCache, PairTable};
use crate::settings::NavSettings;
use std::rc::Rc;

/// Query engine over a [`TextView`], configured by [`NavSettings`]
#[derive(Debug, Default)]
pub struct Navigator {
    settings: NavSettings,
    pairs: PairCache,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: NavSettings) -> Self {
        Self {
            settings,
            pairs: PairCache::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    /// Mutable settings. Changes made through [`NavSettings::set`] are
    /// picked up by the next pair query.
    pub fn settings_mut(&mut self) -> &mut NavSettings {
        &mut self.settings
    }

    /// Shorthand for `settings_mut().set(name, value)`
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.settings.set(name, value)
    }

    /// The pair table for the current `matchpairs`
    #[must_use]
    pub fn pair_table(&self) -> Rc<PairTable> {
        self.pairs.table(&self.settings)
    }

    /// Force the pair table to be rebuilt on next use
    pub fn invalidate_pairs(&self) {
        self.pairs.invalidate();
    }

    // Words

    /// `w`/`b` (and `W`/`B` with `big_word`) from the cursor
    pub fn word_start<V: TextView + ?Sized>(
        &self,
        view: &V,
        count: isize,
        opts: WordOptions,
    ) -> usize {
        next_word_start(view, view.cursor(), view.len(), count, opts)
    }

    /// `e`/`ge` (and `E`/`gE` with `big_word`) from the cursor
    pub fn word_end<V: TextView + ?Sized>(
        &self,
        view: &V,
        count: isize,
        opts: WordOptions,
    ) -> usize {
        next_word_end(view, view.cursor(), view.len(), count, opts)
    }

    pub fn camel_start<V: TextView + ?Sized>(&self, view: &V, count: isize) -> Option<usize> {
        next_camel_start(view, view.cursor(), view.len(), count)
    }

    pub fn camel_end<V: TextView + ?Sized>(&self, view: &V, count: isize) -> Option<usize> {
        next_camel_end(view, view.cursor(), view.len(), count)
    }

    /// `[start, end)` of the word `*` and `#` would search for
    pub fn word_under_cursor<V: TextView + ?Sized>(&self, view: &V) -> Option<TextRange> {
        word_under_cursor(view)
    }

    /// `[start, end]` of `iw`, `aw`, `iW` or `aW`
    pub fn word_object<V: TextView + ?Sized>(
        &self,
        view: &V,
        obj: WordObject,
    ) -> Option<TextRange> {
        word_object(view, obj)
    }

    // Pairs

    /// `%`
    pub fn match_pair<V: TextView + ?Sized>(&self, view: &V) -> Option<usize> {
        match_on_current_line(view, &self.pair_table())
    }

    /// `[(`, `[{`, `])`, `]}`
    pub fn match_unmatched<V: TextView + ?Sized>(
        &self,
        view: &V,
        ch: char,
        count: usize,
    ) -> Option<usize> {
        match_unmatched(view, &self.pair_table(), ch, count)
    }

    /// `[start, end]` of `i(`, `a(` and friends
    pub fn block_range<V: TextView + ?Sized>(
        &self,
        view: &V,
        ch: char,
        count: usize,
        outer: bool,
    ) -> Option<TextRange> {
        block_range(view, &self.pair_table(), ch, count, outer)
    }

    // Numbers

    /// `[start, end)` of the number `CTRL-A` would change, using `nrformats`
    pub fn number_under_cursor<V: TextView + ?Sized>(&self, view: &V) -> Option<TextRange> {
        number_under_cursor(view, self.settings.options().nrformats)
    }

    /// Same as [`Navigator::number_under_cursor`] with explicit formats
    pub fn number_with_formats<V: TextView + ?Sized>(
        &self,
        view: &V,
        formats: NumberFormats,
    ) -> Option<TextRange> {
        number_under_cursor(view, formats)
    }

    // Paragraphs and sections

    /// `[[`, `]]`, `[]`, `][` with the section `marker` (`{` or `}`)
    pub fn section<V: TextView + ?Sized>(
        &self,
        view: &V,
        marker: char,
        direction: Direction,
        count: usize,
    ) -> usize {
        section_boundary(view, marker, direction, count)
    }

    /// `{` / `}` target line
    pub fn paragraph_line<V: TextView + ?Sized>(
        &self,
        view: &V,
        count: isize,
        allow_blanks: bool,
    ) -> usize {
        paragraph_boundary_line(view, count, allow_blanks)
    }

    /// `{` / `}` target offset
    pub fn paragraph<V: TextView + ?Sized>(
        &self,
        view: &V,
        count: isize,
        allow_blanks: bool,
    ) -> usize {
        next_paragraph(view, count, allow_blanks)
    }

    /// Line starts bounding `ip` / `ap`
    pub fn paragraph_range<V: TextView + ?Sized>(
        &self,
        view: &V,
        count: usize,
        outer: bool,
    ) -> TextRange {
        paragraph_range(view, count, outer)
    }

    // Current line

    /// `f`/`F` target
    pub fn find_char<V: TextView + ?Sized>(
        &self,
        view: &V,
        count: isize,
        ch: char,
    ) -> Option<usize> {
        find_char_on_line(view, count, ch)
    }

    pub fn any_non_whitespace<V: TextView + ?Sized>(
        &self,
        view: &V,
        offset: usize,
        direction: Direction,
    ) -> bool {
        any_non_whitespace(view, offset, direction)
    }
}
