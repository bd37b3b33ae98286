use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_match_ranker::{select_top_k, MatchMetrics, MatchRecord, PrefixMatch};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_records(count: usize) -> Vec<MatchRecord<String>> {
    let mut rng = StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|i| {
            let prefix = match i % 3 {
                0 => PrefixMatch::None,
                1 => PrefixMatch::Partial,
                _ => PrefixMatch::Full,
            };
            let metrics = MatchMetrics::new()
                .with_prefix_match(prefix)
                .with_word_prefix_len(rng.gen_range(0..8))
                .with_part_index_sum(rng.gen_range(0..12))
                .with_path_distance(rng.gen_range(0..6))
                .with_unmatched_len(rng.gen_range(0..20));
            MatchRecord::with_metrics(format!("src/module{}/file{}.rs", i % 50, i), metrics)
        })
        .collect()
}

fn bench_top_k_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_top_k");

    for count in [10_000usize, 50_000] {
        let records = create_test_records(count);

        group.bench_with_input(BenchmarkId::new("full_sort", count), &records, |b, records| {
            b.iter(|| black_box(select_top_k(records.clone(), 0)));
        });

        group.bench_with_input(BenchmarkId::new("bounded_k10", count), &records, |b, records| {
            b.iter(|| black_box(select_top_k(records.clone(), 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_top_k_selection);
criterion_main!(benches);
