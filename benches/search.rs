use badchar::{search, SearchConfig, Searcher, TablePolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn haystack(len: usize) -> String {
    "THE SEARCH ALGORITHM IS AN EFFICIENT ALGORITHM FOR FINDING PATTERNS IN TEXT "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for len in [1_000, 10_000, 100_000] {
        let text = format!("{}NEEDLE", haystack(len));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("match_at_end", len), &text, |b, text| {
            b.iter(|| search(black_box(text), black_box("needle")))
        });
        group.bench_with_input(BenchmarkId::new("absent", len), &text, |b, text| {
            b.iter(|| search(black_box(text), black_box("qqqqqq")))
        });
    }

    group.finish();
}

fn benchmark_table_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_policy");
    let text = format!("{}NEEDLE", haystack(10_000));

    let precomputed = Searcher::default();
    let rebuilt = Searcher::new(SearchConfig::default().with_table_policy(TablePolicy::PerMismatch));

    group.bench_function("precomputed", |b| {
        b.iter(|| precomputed.search(black_box(&text), black_box("needle")))
    });
    group.bench_function("per_mismatch", |b| {
        b.iter(|| rebuilt.search(black_box(&text), black_box("needle")))
    });

    group.finish();
}

fn benchmark_repeated_tail(c: &mut Criterion) {
    let text = "A".repeat(10_000);
    c.bench_function("repeated_tail", |b| b.iter(|| search(black_box(&text), black_box("ABCA"))));
}

criterion_group!(benches, benchmark_search, benchmark_table_policy, benchmark_repeated_tail);
criterion_main!(benches);
