use super::*;
use crate::buffer::TextBuffer;
use crate::movement::{Direction, TextRange};
use crate::settings::NavSettings;
use proptest::prelude::*;

fn at(text: &str, pos: usize) -> TextBuffer {
    TextBuffer::new(text).with_cursor(pos).unwrap()
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn test_default_table() {
    let table = PairTable::default();
    assert_eq!(table.pairs(), &[('{', '}'), ('(', ')'), ('[', ']'), ('<', '>')]);
    let m = table.lookup(')').unwrap();
    assert!(!m.is_open);
    assert_eq!(m.partner(), '(');
    assert!(!table.contains('"'));
}

#[test]
fn test_table_skips_malformed_tokens() {
    let table = PairTable::from_tokens(["(:)", "ab", "«:»", "[::]"]);
    assert_eq!(table.pairs(), &[('(', ')'), ('«', '»')]);
}

#[test]
fn test_cache_builds_lazily_and_tracks_revision() {
    let mut settings = NavSettings::new();
    let cache = PairCache::new();
    assert!(!cache.is_built());

    let first = cache.table(&settings);
    assert!(cache.is_built());
    assert!(first.contains('<'));
    assert!(Rc::ptr_eq(&first, &cache.table(&settings)));

    settings.set("matchpairs", "(:),«:»").unwrap();
    let second = cache.table(&settings);
    assert!(!second.contains('<'));
    assert!(second.contains('«'));
}

#[test]
fn test_cache_invalidate() {
    let settings = NavSettings::new();
    let cache = PairCache::new();
    let first = cache.table(&settings);
    cache.invalidate();
    assert!(!cache.is_built());
    let second = cache.table(&settings);
    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn test_match_nested_forward() {
    let buf = at("(a(b)c)", 0);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(6));
}

#[test]
fn test_match_nested_backward() {
    let buf = at("(a(b)c)", 6);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(0));
    let buf = at("(a(b)c)", 4);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(2));
}

#[test]
fn test_match_ignores_quoted_closer() {
    let buf = at("(\"a)b\")", 0);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(6));
}

#[test]
fn test_match_ignores_char_literal() {
    let buf = at("f(')', x)", 1);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(8));
}

#[test]
fn test_escaped_quote_does_not_toggle() {
    // the string is "a\")b", so the first ) is still quoted
    let buf = at(r#"("a\")b")"#, 0);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(8));
}

#[test]
fn test_match_searches_rest_of_line_for_delimiter() {
    let buf = at("if x {\n  y\n}", 0);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), Some(11));
}

#[test]
fn test_match_none_on_line() {
    let buf = at("plain text\n()", 0);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), None);
    let buf = at("(unclosed", 0);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), None);
}

#[test]
fn test_match_started_inside_string() {
    // the quoted ( starts the search; the unquoted ) closes f( instead
    let buf = at("x = \"(\" + f(1)", 5);
    assert_eq!(match_on_current_line(&buf, &PairTable::default()), None);
}

#[test]
fn test_newline_resets_string_state() {
    let text = chars("(\"a\n)");
    assert_eq!(find_block_location(&text, '(', ')', Direction::Forward, 0, 1), Some(4));
}

#[test]
fn test_configured_pairs() {
    let mut settings = NavSettings::new();
    settings.set("mps", "«:»").unwrap();
    let cache = PairCache::new();
    let table = cache.table(&settings);
    let buf = at("«a(»", 0);
    assert_eq!(match_on_current_line(&buf, &table), Some(3));
}

#[test]
fn test_unmatched_open_backward() {
    let buf = at("{ a { b } c }", 10);
    let table = PairTable::default();
    assert_eq!(match_unmatched(&buf, &table, '{', 1), Some(0));
    let buf = at("{ a { b } c }", 6);
    assert_eq!(match_unmatched(&buf, &table, '{', 1), Some(4));
    assert_eq!(match_unmatched(&buf, &table, '{', 2), Some(0));
    assert_eq!(match_unmatched(&buf, &table, '{', 3), Some(0));
}

#[test]
fn test_unmatched_close_forward() {
    let buf = at("( a ( b ) c )", 2);
    let table = PairTable::default();
    assert_eq!(match_unmatched(&buf, &table, ')', 1), Some(12));
}

#[test]
fn test_unmatched_unknown_char() {
    let buf = at("( a )", 2);
    assert_eq!(match_unmatched(&buf, &PairTable::default(), '"', 1), None);
}

#[test]
fn test_block_outer_and_inner() {
    let buf = at("f(a, b)", 3);
    let table = PairTable::default();
    assert_eq!(block_range(&buf, &table, '(', 1, true), Some(TextRange::new(1, 6)));
    assert_eq!(block_range(&buf, &table, '(', 1, false), Some(TextRange::new(2, 5)));
}

#[test]
fn test_block_by_closing_char() {
    let buf = at("f(a, b)", 3);
    assert_eq!(block_range(&buf, &PairTable::default(), ')', 1, true), Some(TextRange::new(1, 6)));
}

#[test]
fn test_block_count_selects_outer_pair() {
    let buf = at("((a))", 2);
    let table = PairTable::default();
    assert_eq!(block_range(&buf, &table, '(', 1, true), Some(TextRange::new(1, 3)));
    assert_eq!(block_range(&buf, &table, '(', 2, true), Some(TextRange::new(0, 4)));
}

#[test]
fn test_block_adjacent_closer() {
    let buf = at("x () y", 3);
    assert_eq!(block_range(&buf, &PairTable::default(), '(', 1, true), Some(TextRange::new(2, 3)));
}

#[test]
fn test_block_inner_multiline_trims_blank_closer_line() {
    // {\n  foo\n}
    let buf = at("{\n  foo\n}", 4);
    assert_eq!(block_range(&buf, &PairTable::default(), '{', 1, false), Some(TextRange::new(2, 6)));
}

#[test]
fn test_block_uses_selection_start() {
    let buf = TextBuffer::new("[a] [b]")
        .with_cursor(5)
        .unwrap()
        .with_selection(5, 1)
        .unwrap();
    assert_eq!(block_range(&buf, &PairTable::default(), '[', 1, true), Some(TextRange::new(0, 2)));
}

#[test]
fn test_block_not_enclosed() {
    let buf = at("a (b) c", 0);
    assert_eq!(block_range(&buf, &PairTable::default(), '(', 1, true), None);
}

/// Balanced, unquoted bracket strings built from nesting
fn balanced() -> impl Strategy<Value = String> {
    let leaf = "[a-z ]{0,3}".prop_map(String::from);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(|parts| format!("({})", parts.concat()))
    })
}

proptest! {
    /// Every opener in a balanced string matches its structural partner
    #[test]
    fn prop_balanced_match(text in balanced()) {
        let chars = chars(&text);
        let mut stack = Vec::new();
        for (i, &c) in chars.iter().enumerate() {
            match c {
                '(' => stack.push(i),
                ')' => {
                    let open = stack.pop().unwrap();
                    prop_assert_eq!(
                        find_block_location(&chars, '(', ')', Direction::Forward, open, 1),
                        Some(i)
                    );
                    prop_assert_eq!(
                        find_block_location(&chars, ')', '(', Direction::Backward, i, 1),
                        Some(open)
                    );
                }
                _ => {}
            }
        }
    }

    /// Brackets inside a double-quoted string never count
    #[test]
    fn prop_quoted_brackets_ignored(inner in "[()a-z]{0,8}") {
        let text = format!("(\"{}\")", inner);
        let chars = chars(&text);
        prop_assert_eq!(
            find_block_location(&chars, '(', ')', Direction::Forward, 0, 1),
            Some(chars.len() - 1)
        );
    }
}
