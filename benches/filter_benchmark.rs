//! Performance benchmarks for candidate filtering
//!
//! Filtering runs synchronously on every keystroke, so it must stay cheap
//! even for large candidate sets. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mentio::mention::rank_candidates;
use mentio::models::SuggestionItem;

/// Generate a candidate set with a mix of names, descriptions, and tags
fn generate_candidates(count: usize) -> Vec<SuggestionItem> {
    let first_names = ["Alice", "Bob", "Carol", "David", "Erin", "Frank", "Grace"];
    let roles = ["auditor", "analyst", "compliance lead", "reviewer"];
    let categories = ["user", "document", "contract", "report"];

    (0..count)
        .map(|i| {
            SuggestionItem::new(
                format!("id-{i}"),
                format!("{} {}", first_names[i % first_names.len()], i),
            )
            .with_description(roles[i % roles.len()].to_string())
            .with_category(categories[i % categories.len()].to_string())
        })
        .collect()
}

fn bench_rank_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_candidates");

    for size in [10, 100, 1000, 5000].iter() {
        let candidates = generate_candidates(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_candidates", size)),
            &candidates,
            |b, candidates| {
                b.iter(|| {
                    let ranked = rank_candidates(black_box("ali"), black_box(candidates));
                    black_box(ranked)
                });
            },
        );
    }

    group.finish();
}

fn bench_rank_worst_case_all_match(c: &mut Criterion) {
    // Every candidate shares the query substring through its category tag
    let candidates: Vec<SuggestionItem> = (0..1000)
        .map(|i| {
            SuggestionItem::new(format!("id-{i}"), format!("entry {i}"))
                .with_category("usertag".to_string())
        })
        .collect();

    c.bench_function("rank_candidates_all_match", |b| {
        b.iter(|| {
            let ranked = rank_candidates(black_box("user"), black_box(&candidates));
            black_box(ranked)
        });
    });
}

criterion_group!(benches, bench_rank_candidates, bench_rank_worst_case_all_match);
criterion_main!(benches);
