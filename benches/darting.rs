use darting::trie::Trie;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{rng, Rng};

fn random_word(size: usize) -> String {
    let len = rng().random_range(1..=size);
    (0..len)
        .map(|_| char::from(b'a' + rng().random_range(0..26u8)))
        .collect()
}

fn get_words(count: usize, size: usize) -> Vec<String> {
    (0..count).map(|_| random_word(size)).collect()
}

fn make_trie(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for w in words {
        trie.insert(w.chars());
    }
    trie
}

fn trie_insert(b: &mut Criterion) {
    let words = get_words(10_000, 12);
    b.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_contains(b: &mut Criterion) {
    let words = get_words(10_000, 12);
    let trie = make_trie(&words);
    b.bench_function("trie contains", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| trie.contains(w.chars()))
                .count()
        })
    });
}

fn trie_insert_remove(b: &mut Criterion) {
    let words = get_words(10_000, 12);

    b.bench_function("trie remove", |b| {
        b.iter_batched(
            || make_trie(&words),
            |mut trie| {
                for w in &words {
                    trie.remove(w.chars());
                }
            },
            BatchSize::LargeInput,
        );
    });
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 4;
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 2 * BASE_SIZE, 4 * BASE_SIZE, 8 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("random find", size), size, |b, &size| {
            let trie = make_trie(&get_words(POPULATION_SIZE, size));
            b.iter_batched(
                || random_word(size),
                |input| trie.contains(input.chars()),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("always find", size), size, |b, &size| {
            let searches = get_words(POPULATION_SIZE, size);
            let trie = make_trie(&searches);
            b.iter_batched(
                || searches[rng().random_range(0..POPULATION_SIZE)].clone(),
                |input| trie.contains(input.chars()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    trie_insert,
    trie_contains,
    trie_insert_remove,
    search
);
criterion_main!(benches);
