//! rift-nav - structural text navigation
//!
//! Word and WORD motions, camelCase humps, word text objects, quote-aware
//! delimiter matching, number lookup and paragraph/section boundaries for
//! vim-like editors. Every query is a pure function of a character sequence,
//! a cursor offset and a handful of options.

pub mod buffer;
pub mod error;
pub mod movement;
pub mod navigator;
pub mod pairs;
pub mod settings;

pub use buffer::{CharSeq, TextBuffer, TextView};
pub use error::{NavError, Result};
pub use movement::{Direction, TextRange};
pub use navigator::Navigator;
pub use settings::NavSettings;
