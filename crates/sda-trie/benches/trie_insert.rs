use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sda_trie::Trie;
use std::hint::black_box;

/// Deterministic lowercase words of length 3..=10.
fn words(count: usize) -> Vec<String> {
    let mut state: u32 = 0x9e37_79b9;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| char::from(b'a' + ((state >> (i * 3)) % 26) as u8))
                .collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_insert");
    for count in [100usize, 1_000, 10_000] {
        let input = words(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| {
                let mut trie = Trie::new();
                for (i, word) in input.iter().enumerate() {
                    let _ = trie.insert(black_box(word), i);
                }
                trie
            })
        });
    }
    group.finish();
}

fn bench_prefix_query(c: &mut Criterion) {
    let mut trie = Trie::new();
    for (i, word) in words(10_000).iter().enumerate() {
        let _ = trie.insert(word, i);
    }
    c.bench_function("trie_keys_with_prefix", |b| {
        b.iter(|| trie.keys_with_prefix(black_box("ab")))
    });
}

criterion_group!(benches, bench_insert, bench_prefix_query);
criterion_main!(benches);
