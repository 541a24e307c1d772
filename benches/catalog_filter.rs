//! Benchmarks for catalog filtering and paragraph splitting.

use atelier_tui::state::{journal_catalog, paragraphs, portfolio_catalog, CatalogItem, FilterState};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_filter_portfolio(c: &mut Criterion) {
    let catalog = portfolio_catalog();
    let mut filter = FilterState::default();
    filter.set_filter("red-carpet");
    c.bench_function("filter_portfolio_red_carpet", |b| {
        b.iter(|| filter.filtered_items(black_box(&catalog)).len())
    });
}

fn bench_filter_all(c: &mut Criterion) {
    let catalog = journal_catalog();
    let filter = FilterState::default();
    c.bench_function("filter_journal_all", |b| {
        b.iter(|| filter.filtered_items(black_box(&catalog)).len())
    });
}

fn bench_paragraphs(c: &mut Criterion) {
    let contents: Vec<String> = journal_catalog()
        .into_iter()
        .filter_map(|item| match item {
            CatalogItem::Journal(post) => Some(post.full_content),
            CatalogItem::Portfolio(_) => None,
        })
        .collect();
    c.bench_function("split_journal_paragraphs", |b| {
        b.iter(|| {
            contents
                .iter()
                .map(|content| paragraphs(black_box(content)).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_filter_portfolio, bench_filter_all, bench_paragraphs);
criterion_main!(benches);
