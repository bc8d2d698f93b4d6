use criterion::{criterion_group, criterion_main, Criterion};
use rift_nav::buffer::TextBuffer;
use rift_nav::movement::Direction;
use rift_nav::pairs::{find_block_location, PairTable};
use rift_nav::Navigator;
use std::hint::black_box;

/// Deeply nested call with string literals full of stray delimiters
fn nested_source(depth: usize) -> String {
    let mut text = String::new();
    for i in 0..depth {
        text.push_str(&format!("f{i}(\"a)\", '(', "));
    }
    text.push('x');
    for _ in 0..depth {
        text.push(')');
    }
    text
}

fn pairs_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs_matching");
    let text = nested_source(500);
    let chars: Vec<char> = text.chars().collect();
    let open = text.find('(').unwrap_or(0);

    group.bench_function("find_block_forward", |b| {
        b.iter(|| black_box(find_block_location(&chars, '(', ')', Direction::Forward, open, 1)))
    });

    let nav = Navigator::new();
    let buf = match TextBuffer::new(&text).with_cursor(0) {
        Ok(buf) => buf,
        Err(e) => panic!("bench setup: {e}"),
    };
    group.bench_function("percent_cached_table", |b| b.iter(|| black_box(nav.match_pair(&buf))));

    group.bench_function("percent_rebuilt_table", |b| {
        b.iter(|| {
            nav.invalidate_pairs();
            black_box(nav.match_pair(&buf))
        })
    });

    let inner = match TextBuffer::new(&text).with_cursor(chars.len() / 2) {
        Ok(buf) => buf,
        Err(e) => panic!("bench setup: {e}"),
    };
    group.bench_function("block_outer", |b| {
        b.iter(|| black_box(nav.block_range(&inner, '(', 3, true)))
    });

    group.bench_function("table_parse", |b| {
        b.iter(|| black_box(PairTable::from_tokens(["{:}", "(:)", "[:]", "<:>", "«:»"])))
    });

    group.finish();
}

criterion_group!(benches, pairs_matching);
criterion_main!(benches);
